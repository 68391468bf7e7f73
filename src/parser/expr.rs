use std::mem;

use crate::{
    ast::expressions::Expr,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{binding_power, BindingPower, NUD_LOOKUP},
    parser::{with_eof, Parser},
    stmt::parse_if,
};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = NUD_LOOKUP.get(&token_kind) else {
        return Err(Error::new(
            ErrorImpl::ExpectedExpression { found: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud(parser)?;

    // Equal powers stop the loop, so chains fold to the left
    while binding_power(parser.current_token())? > bp {
        left = parse_binary_expr(parser, left)?;
    }

    Ok(left)
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr) -> Result<Expr, Error> {
    let operator = parser.advance();
    let bp = binding_power(&operator)?;

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        left: Box::new(left),
        operator,
        right: Box::new(right),
    })
}

pub fn parse_literal_expr(parser: &mut Parser) -> Result<Expr, Error> {
    Ok(Expr::Literal {
        token: parser.advance(),
    })
}

pub fn parse_identifier_expr(parser: &mut Parser) -> Result<Expr, Error> {
    if parser.peek().kind != TokenKind::OpenParen {
        return Ok(Expr::Identifier {
            token: parser.advance(),
        });
    }

    let identifier = parser.advance();
    let arguments = parse_expr_list(parser)?;

    Ok(Expr::Call {
        identifier,
        arguments,
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator = parser.advance();
    let operand = parse_expr(parser, BindingPower::Default)?;

    Ok(Expr::Unary {
        operator,
        operand: Box::new(operand),
    })
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.expect(TokenKind::OpenParen)?;
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_if_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let (condition, consequence, alternative) = parse_if(parser)?;

    Ok(Expr::If {
        condition: Box::new(condition),
        consequence,
        alternative,
    })
}

/// Parses a parenthesized, comma separated list such as call arguments or
/// function parameters.
///
/// The list is carved out at the matching `)` and split on commas that are
/// not nested inside parentheses or braces. Every segment is then parsed by
/// its own parser as exactly one expression.
pub fn parse_expr_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let (opening, inner) = parser.carve(
        TokenKind::OpenParen,
        TokenKind::CloseParen,
        ErrorImpl::UnclosedParameterList,
    )?;

    if inner.is_empty() {
        return Ok(vec![]);
    }

    let mut segments: Vec<(Token, Vec<Token>)> = vec![];
    let mut leader = opening;
    let mut current = vec![];
    let mut depth = 0usize;

    for token in inner {
        match token.kind {
            TokenKind::OpenParen | TokenKind::OpenCurly => depth += 1,
            TokenKind::CloseParen | TokenKind::CloseCurly => depth = depth.saturating_sub(1),
            TokenKind::Comma if depth == 0 => {
                segments.push((mem::replace(&mut leader, token), mem::take(&mut current)));
                continue;
            }
            _ => {}
        }
        current.push(token);
    }
    segments.push((leader, current));

    segments
        .into_iter()
        .map(|(leader, tokens)| Parser::new(with_eof(tokens, &leader)).parse_single_expression())
        .collect()
}
