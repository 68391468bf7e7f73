use crate::{
    ast::{ast::Block, expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    expr::{parse_expr, parse_expr_list},
    lookups::{BindingPower, NUD_LOOKUP, STMT_LOOKUP},
    parser::{with_eof, Parser},
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let kind = parser.current_token_kind();
    trace!("statement at {} starting with {}", parser.get_position(), kind);

    if let Some(handler) = STMT_LOOKUP.get(&kind) {
        return handler(parser);
    }

    if !NUD_LOOKUP.contains_key(&kind) {
        return Err(Error::new(
            ErrorImpl::UnexpectedStatement { found: kind },
            parser.get_position(),
        ));
    }

    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Expression { expression })
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Let)?;
    let identifier = parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assignment)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;

    Ok(Stmt::Let {
        identifier,
        expression,
    })
}

/// `<keyword> <expression> ;`
fn parse_keyword_expr(parser: &mut Parser, keyword: TokenKind) -> Result<Expr, Error> {
    parser.expect(keyword)?;
    let expression = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(expression)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_keyword_expr(parser, TokenKind::Return)?;
    Ok(Stmt::Return { expression })
}

pub fn parse_yield_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let expression = parse_keyword_expr(parser, TokenKind::Yield)?;
    Ok(Stmt::Yield { expression })
}

/// Parses `if <condition> { ... } [else { ... }]`. Shared by the statement
/// and the expression form.
pub fn parse_if(parser: &mut Parser) -> Result<(Expr, Block, Option<Block>), Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_expr(parser, BindingPower::Default)?;
    let consequence = parse_block(parser)?;

    let alternative = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok((condition, consequence, alternative))
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let (condition, consequence, alternative) = parse_if(parser)?;

    Ok(Stmt::If {
        condition,
        consequence,
        alternative,
    })
}

/// Parses a `{ ... }` block by handing its inner tokens to a fresh parser.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let (opening, inner) = parser.carve(
        TokenKind::OpenCurly,
        TokenKind::CloseCurly,
        ErrorImpl::UnclosedBlock,
    )?;

    debug!("parsing block at {}", opening.position);
    let statements = Parser::new(with_eof(inner, &opening)).parse()?;

    Ok(Block {
        statements,
        position: opening.position,
    })
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    Ok(Stmt::Block(parse_block(parser)?))
}

pub fn parse_fn_decl_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::Fn)?;

    let identifier = parser.expect(TokenKind::Identifier)?;
    let parameters = parse_expr_list(parser)?;
    let body = parse_block(parser)?;

    Ok(Stmt::Function {
        identifier,
        parameters,
        body,
    })
}
