use crate::lexer::tokens::Token;

use super::{ast::Block, expressions::Expr};

/// Statement nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let { identifier: Token, expression: Expr },
    Return { expression: Expr },
    Yield { expression: Expr },
    Expression { expression: Expr },
    If {
        condition: Expr,
        consequence: Block,
        alternative: Option<Block>,
    },
    Function {
        identifier: Token,
        parameters: Vec<Expr>,
        body: Block,
    },
    Block(Block),
}
