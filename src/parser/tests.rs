//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - Operator precedence and associativity
//! - Let, return, yield and expression statements
//! - Blocks, if statements and if expressions
//! - Function declarations and calls
//! - Error positions

use std::rc::Rc;

use super::{
    lookups::{binding_power, BindingPower},
    parser::{parse, Parser},
};
use crate::{
    ast::{ast::Program, expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::tokenize,
        tokens::{Token, TokenKind},
    },
    Position,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    parse(tokenize("test.monkey", source).unwrap())
}

fn token(kind: TokenKind, literal: &str, line: u32, column: u32) -> Token {
    Token {
        kind,
        literal: String::from(literal),
        position: Position::new(Rc::new(String::from("test.monkey")), line, column),
    }
}

fn literal(literal: &str, column: u32) -> Expr {
    Expr::Literal {
        token: token(TokenKind::Int, literal, 1, column),
    }
}

fn binary(left: Expr, kind: TokenKind, symbol: &str, column: u32, right: Expr) -> Expr {
    Expr::Binary {
        left: Box::new(left),
        operator: token(kind, symbol, 1, column),
        right: Box::new(right),
    }
}

fn only_expression(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1);
    match &program[0] {
        Stmt::Expression { expression } => expression,
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

#[test]
fn test_parse_identifier() {
    let program = parse_source("foobar;").unwrap();

    assert_eq!(
        only_expression(&program),
        &Expr::Identifier {
            token: token(TokenKind::Identifier, "foobar", 1, 1)
        }
    );
}

#[test]
fn test_parse_multiplicative_binds_tighter() {
    let program = parse_source("1 + 2 * 3;").unwrap();

    let expected = binary(
        literal("1", 1),
        TokenKind::Plus,
        "+",
        3,
        binary(literal("2", 5), TokenKind::Star, "*", 7, literal("3", 9)),
    );
    assert_eq!(only_expression(&program), &expected);
}

#[test]
fn test_parse_left_associative() {
    let program = parse_source("1 * 2 + 3;").unwrap();

    let expected = binary(
        binary(literal("1", 1), TokenKind::Star, "*", 3, literal("2", 5)),
        TokenKind::Plus,
        "+",
        7,
        literal("3", 9),
    );
    assert_eq!(only_expression(&program), &expected);
}

#[test]
fn test_parse_equal_precedence_folds_left() {
    let program = parse_source("1 - 2 - 3;").unwrap();

    let expected = binary(
        binary(literal("1", 1), TokenKind::Dash, "-", 3, literal("2", 5)),
        TokenKind::Dash,
        "-",
        7,
        literal("3", 9),
    );
    assert_eq!(only_expression(&program), &expected);
}

#[test]
fn test_parse_parentheses_override_precedence() {
    let program = parse_source("(1 * (2 + 3));").unwrap();

    let expected = binary(
        literal("1", 2),
        TokenKind::Star,
        "*",
        4,
        binary(literal("2", 7), TokenKind::Plus, "+", 9, literal("3", 11)),
    );
    assert_eq!(only_expression(&program), &expected);
}

#[test]
fn test_parse_logical_and_comparison_precedence() {
    let program = parse_source("a < b && c == d || e;").unwrap();

    let Expr::Binary { left, operator, .. } = only_expression(&program) else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::Or);

    let Expr::Binary { left, operator, right } = &**left else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::And);
    assert!(matches!(&**left, Expr::Binary { operator, .. } if operator.kind == TokenKind::Less));
    assert!(matches!(&**right, Expr::Binary { operator, .. } if operator.kind == TokenKind::Equals));
}

#[test]
fn test_parse_bitwise_between_logical_and_equality() {
    let program = parse_source("a & b == c | d;").unwrap();

    let Expr::Binary { left, operator, .. } = only_expression(&program) else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::BitOr);
    let Expr::Binary { right, operator, .. } = &**left else {
        panic!("expected a binary expression");
    };
    assert_eq!(operator.kind, TokenKind::BitAnd);
    assert!(matches!(&**right, Expr::Binary { operator, .. } if operator.kind == TokenKind::Equals));
}

#[test]
fn test_parse_prefix_operand_extends_to_end() {
    let program = parse_source("-1 + 2;").unwrap();

    let expected = Expr::Unary {
        operator: token(TokenKind::Dash, "-", 1, 1),
        operand: Box::new(binary(literal("1", 2), TokenKind::Plus, "+", 4, literal("2", 6))),
    };
    assert_eq!(only_expression(&program), &expected);
}

#[test]
fn test_parse_let_statement() {
    let program = parse_source("let x = 42;").unwrap();

    assert_eq!(
        program,
        vec![Stmt::Let {
            identifier: token(TokenKind::Identifier, "x", 1, 5),
            expression: literal("42", 9),
        }]
    );
}

#[test]
fn test_parse_literals() {
    let program = parse_source("let a = 1.5; let b = \"hi\"; let c = true; let d = false;").unwrap();

    let kinds = program
        .iter()
        .map(|stmt| match stmt {
            Stmt::Let {
                expression: Expr::Literal { token },
                ..
            } => token.kind,
            other => panic!("expected a literal let, got {:?}", other),
        })
        .collect::<Vec<_>>();
    assert_eq!(
        kinds,
        vec![TokenKind::Float, TokenKind::String, TokenKind::True, TokenKind::False]
    );
}

#[test]
fn test_parse_return_and_yield() {
    let program = parse_source("return a + 1; yield b;").unwrap();

    assert!(matches!(&program[0], Stmt::Return { expression: Expr::Binary { .. } }));
    assert!(matches!(&program[1], Stmt::Yield { expression: Expr::Identifier { .. } }));
}

#[test]
fn test_parse_call_expression() {
    let program = parse_source("add(1, 2 * 3, f(x, y));").unwrap();

    let Expr::Call {
        identifier,
        arguments,
    } = only_expression(&program)
    else {
        panic!("expected a call");
    };
    assert_eq!(identifier, &token(TokenKind::Identifier, "add", 1, 1));
    assert_eq!(arguments.len(), 3);
    assert_eq!(arguments[0], literal("1", 5));
    assert!(matches!(&arguments[1], Expr::Binary { .. }));

    let Expr::Call { arguments, .. } = &arguments[2] else {
        panic!("expected a nested call");
    };
    assert_eq!(arguments.len(), 2);
}

#[test]
fn test_parse_call_without_arguments_in_expression() {
    let program = parse_source("now() - start;").unwrap();

    let Expr::Binary { left, .. } = only_expression(&program) else {
        panic!("expected a binary expression");
    };
    assert!(matches!(&**left, Expr::Call { arguments, .. } if arguments.is_empty()));
}

#[test]
fn test_parse_function_declaration() {
    let program = parse_source("fn add(a, b) { return a + b; }").unwrap();

    let Stmt::Function {
        identifier,
        parameters,
        body,
    } = &program[0]
    else {
        panic!("expected a function declaration");
    };
    assert_eq!(identifier.literal, "add");
    assert_eq!(
        parameters,
        &vec![
            Expr::Identifier {
                token: token(TokenKind::Identifier, "a", 1, 8)
            },
            Expr::Identifier {
                token: token(TokenKind::Identifier, "b", 1, 11)
            },
        ]
    );
    assert_eq!(body.len(), 1);
    assert_eq!(body.position.column, 14);
    assert!(matches!(body.statements[0], Stmt::Return { .. }));
}

#[test]
fn test_parse_function_default_parameter() {
    let program = parse_source("fn f(a, b == g(1, 2)) {}").unwrap();

    let Stmt::Function { parameters, body, .. } = &program[0] else {
        panic!("expected a function declaration");
    };
    assert_eq!(parameters.len(), 2);
    assert!(body.is_empty());
}

#[test]
fn test_parse_if_statement() {
    let program = parse_source("if x > 0 { print(x); } else { print(0); }").unwrap();

    let Stmt::If {
        condition,
        consequence,
        alternative,
    } = &program[0]
    else {
        panic!("expected an if statement");
    };
    assert!(matches!(condition, Expr::Binary { .. }));
    assert_eq!(consequence.len(), 1);
    assert_eq!(alternative.as_ref().map(|block| block.len()), Some(1));
}

#[test]
fn test_parse_if_without_else() {
    let program = parse_source("if ok { a; } b;").unwrap();

    assert_eq!(program.len(), 2);
    assert!(matches!(&program[0], Stmt::If { alternative: None, .. }));
    assert!(matches!(&program[1], Stmt::Expression { .. }));
}

#[test]
fn test_parse_if_expression() {
    let program = parse_source("let max = if a > b { a; } else { b; };").unwrap();

    let Stmt::Let { expression, .. } = &program[0] else {
        panic!("expected a let statement");
    };
    let Expr::If {
        consequence,
        alternative,
        ..
    } = expression
    else {
        panic!("expected an if expression");
    };
    assert_eq!(consequence.len(), 1);
    assert!(alternative.is_some());
}

#[test]
fn test_parse_nested_blocks() {
    let program = parse_source("{ let a = 1; { a; { } } }").unwrap();

    let Stmt::Block(outer) = &program[0] else {
        panic!("expected a block");
    };
    assert_eq!(outer.len(), 2);
    let Stmt::Block(inner) = &outer.statements[1] else {
        panic!("expected a nested block");
    };
    assert_eq!(inner.len(), 2);
    assert!(matches!(&inner.statements[1], Stmt::Block(block) if block.is_empty()));

    let is_block = outer
        .iter()
        .map(|stmt| matches!(stmt, Stmt::Block(_)))
        .collect::<Vec<_>>();
    assert_eq!(is_block, vec![false, true]);
}

#[test]
fn test_block_matches_standalone_parse() {
    let inner = "let a = 1 + 2;\nfn f(x) { return x; }\nif a { f(a); }";

    // Both sources place the inner statements on the same lines and columns
    let standalone = parse_source(&format!("\n{}", inner)).unwrap();
    let wrapped = parse_source(&format!("{{\n{}\n}}", inner)).unwrap();

    let Stmt::Block(block) = &wrapped[0] else {
        panic!("expected a block");
    };
    assert_eq!(wrapped.len(), 1);
    assert_eq!(block.statements, standalone);
}

#[test]
fn test_block_extraction_is_reparse_of_inner_tokens() {
    let tokens = tokenize("test.monkey", "{ let a = 1; a * 2; }").unwrap();
    let inner = tokens[1..tokens.len() - 2].to_vec();

    let from_block = parse(tokens).unwrap();
    let from_inner = Parser::new(inner).parse().unwrap();

    let Stmt::Block(block) = &from_block[0] else {
        panic!("expected a block");
    };
    assert_eq!(block.statements, from_inner);
}

#[test]
fn test_parse_let_missing_expression() {
    let error = parse_source("let a = ;").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::ExpectedExpression {
            found: TokenKind::Semicolon
        }
    );
    assert_eq!(error.get_position().column, 9);
    assert_eq!(error.to_string(), "test.monkey:1:9: got \";\", expected expression");
}

#[test]
fn test_parse_let_missing_identifier() {
    let error = parse_source("let = 5;").unwrap_err();

    assert_eq!(
        error.to_string(),
        "test.monkey:1:5: got \"=\", expected \"IDENT\""
    );
}

#[test]
fn test_parse_missing_semicolon() {
    let error = parse_source("x\n+ 1\nlet").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::NoBindingPower {
            found: TokenKind::Let
        }
    );
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 1);
}

#[test]
fn test_parse_unclosed_block() {
    let error = parse_source("let a = 1;\n  { a; { b; }").unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::UnclosedBlock);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 3);
}

#[test]
fn test_parse_unclosed_parameter_list() {
    let error = parse_source("fn f(a, (b) { }").unwrap_err();

    assert_eq!(error.get_error_impl(), &ErrorImpl::UnclosedParameterList);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_parse_error_inside_block_propagates() {
    let error = parse_source("fn f() {\n  if x { let = 1; }\n}").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedToken {
            found: TokenKind::Assignment,
            expected: TokenKind::Identifier
        }
    );
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 14);
}

#[test]
fn test_parse_missing_semicolon_in_block_reports_synthesized_eof() {
    let error = parse_source("{ foo }").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedToken {
            found: TokenKind::EOF,
            expected: TokenKind::Semicolon
        }
    );
    assert_eq!(error.get_position().column, 4);
}

#[test]
fn test_parse_empty_argument() {
    let error = parse_source("f(a, , b);").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::ExpectedExpression {
            found: TokenKind::EOF
        }
    );
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_parse_argument_must_be_single_expression() {
    let error = parse_source("f(a b);").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::NoBindingPower {
            found: TokenKind::Identifier
        }
    );
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_parse_unexpected_statement() {
    let error = parse_source("else { }").unwrap_err();

    assert_eq!(
        error.get_error_impl(),
        &ErrorImpl::UnexpectedStatement {
            found: TokenKind::Else
        }
    );
}

#[test]
fn test_parse_empty_program() {
    assert_eq!(parse_source("").unwrap(), vec![]);
    assert_eq!(parse_source("  \n ").unwrap(), vec![]);
}

#[test]
fn test_parser_synthesizes_missing_eof() {
    let tokens = vec![
        token(TokenKind::Identifier, "a", 1, 1),
        token(TokenKind::Semicolon, ";", 1, 2),
    ];

    let program = Parser::new(tokens).parse().unwrap();
    assert_eq!(program.len(), 1);

    let error = Parser::new(vec![token(TokenKind::Identifier, "a", 1, 1)])
        .parse()
        .unwrap_err();
    assert_eq!(error.get_position().column, 2);
}

#[test]
fn test_binding_power_table() {
    let power = |kind, literal: &str| binding_power(&token(kind, literal, 1, 1)).unwrap();

    assert_eq!(power(TokenKind::EOF, ""), BindingPower::Default);
    assert_eq!(power(TokenKind::Semicolon, ";"), BindingPower::Default);
    assert_eq!(power(TokenKind::CloseParen, ")").level(), 0);
    assert_eq!(power(TokenKind::OpenCurly, "{").level(), 0);
    assert_eq!(power(TokenKind::Or, "||").level(), 1);
    assert_eq!(power(TokenKind::And, "&&").level(), 2);
    assert_eq!(power(TokenKind::BitOr, "|").level(), 3);
    assert_eq!(power(TokenKind::BitAnd, "&").level(), 4);
    assert_eq!(power(TokenKind::NotEquals, "!=").level(), 5);
    assert_eq!(power(TokenKind::GreaterEquals, ">=").level(), 6);
    assert_eq!(power(TokenKind::Dash, "-").level(), 7);
    assert_eq!(power(TokenKind::Slash, "/").level(), 8);
    assert_eq!(power(TokenKind::Not, "!").level(), 9);

    let error = binding_power(&token(TokenKind::Identifier, "x", 3, 7)).unwrap_err();
    assert_eq!(error.to_string(), "test.monkey:3:7: illegal token type \"IDENT\"");
}
