use std::slice::Iter;

use crate::Position;

use super::statements::Stmt;

/// The ordered top-level statements produced by one complete parse.
pub type Program = Vec<Stmt>;

/// A brace-delimited statement sequence, parsed independently of the
/// surrounding tokens.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub statements: Vec<Stmt>,
    /// Position of the opening `{`.
    pub position: Position,
}

impl Block {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}
