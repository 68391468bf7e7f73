use crate::{lexer::tokens::Token, Position};

use super::ast::Block;

/// Expression nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A reference to a name.
    Identifier { token: Token },
    /// Integer, float, string or boolean literal, kept as its source token.
    Literal { token: Token },
    Unary {
        operator: Token,
        operand: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `name(arg, ...)`. Only plain identifiers can be called.
    Call {
        identifier: Token,
        arguments: Vec<Expr>,
    },
    /// `if` in expression position.
    If {
        condition: Box<Expr>,
        consequence: Block,
        alternative: Option<Block>,
    },
}

impl Expr {
    /// Position of the first token of the expression.
    pub fn position(&self) -> &Position {
        match self {
            Expr::Identifier { token } | Expr::Literal { token } => &token.position,
            Expr::Unary { operator, .. } => &operator.position,
            Expr::Binary { left, .. } => left.position(),
            Expr::Call { identifier, .. } => &identifier.position,
            Expr::If { condition, .. } => condition.position(),
        }
    }
}
