use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::{expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, weakest first. `Default` is what terminates an
/// expression.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default = 0,
    LogicalOr = 1,
    LogicalAnd = 2,
    BitwiseOr = 3,
    BitwiseAnd = 4,
    Equality = 5,
    Relational = 6,
    Additive = 7,
    Multiplicative = 8,
    Unary = 9,
}

impl BindingPower {
    pub fn level(&self) -> u8 {
        *self as u8
    }
}

/// Looks up how tightly `token` binds when it follows a complete operand.
pub fn binding_power(token: &Token) -> Result<BindingPower, Error> {
    match token.kind {
        TokenKind::EOF | TokenKind::Semicolon | TokenKind::CloseParen | TokenKind::OpenCurly => {
            Ok(BindingPower::Default)
        }
        TokenKind::Or => Ok(BindingPower::LogicalOr),
        TokenKind::And => Ok(BindingPower::LogicalAnd),
        TokenKind::BitOr => Ok(BindingPower::BitwiseOr),
        TokenKind::BitAnd => Ok(BindingPower::BitwiseAnd),
        TokenKind::Equals | TokenKind::NotEquals => Ok(BindingPower::Equality),
        TokenKind::Less
        | TokenKind::Greater
        | TokenKind::LessEquals
        | TokenKind::GreaterEquals => Ok(BindingPower::Relational),
        TokenKind::Plus | TokenKind::Dash => Ok(BindingPower::Additive),
        TokenKind::Star | TokenKind::Slash => Ok(BindingPower::Multiplicative),
        TokenKind::Not => Ok(BindingPower::Unary),
        kind => Err(Error::new(
            ErrorImpl::NoBindingPower { found: kind },
            token.position.clone(),
        )),
    }
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;

lazy_static! {
    /// Statements that are recognised by their leading keyword or symbol.
    pub static ref STMT_LOOKUP: StmtLookup = {
        let mut map: StmtLookup = HashMap::new();
        map.insert(TokenKind::OpenCurly, parse_block_stmt);
        map.insert(TokenKind::Let, parse_let_stmt);
        map.insert(TokenKind::Return, parse_return_stmt);
        map.insert(TokenKind::Yield, parse_yield_stmt);
        map.insert(TokenKind::If, parse_if_stmt);
        map.insert(TokenKind::Fn, parse_fn_decl_stmt);
        map
    };

    /// Tokens that can start an expression.
    pub static ref NUD_LOOKUP: NUDLookup = {
        let mut map: NUDLookup = HashMap::new();
        map.insert(TokenKind::Identifier, parse_identifier_expr);
        map.insert(TokenKind::Int, parse_literal_expr);
        map.insert(TokenKind::Float, parse_literal_expr);
        map.insert(TokenKind::String, parse_literal_expr);
        map.insert(TokenKind::True, parse_literal_expr);
        map.insert(TokenKind::False, parse_literal_expr);
        map.insert(TokenKind::Dash, parse_prefix_expr);
        map.insert(TokenKind::Not, parse_prefix_expr);
        map.insert(TokenKind::OpenParen, parse_grouping_expr);
        map.insert(TokenKind::If, parse_if_expr);
        map
    };
}
