//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with a binding power table for operator precedence and handles:
//!
//! - Statement parsing (`let`, `return`, `yield`, `if`, `fn`, blocks)
//! - Expression parsing (unary and binary operators, calls, literals)
//! - Blocks and parameter lists, re-parsed by nested parsers
//!
//! The parser uses NUD (null denotation) handlers to start expressions and
//! the binding power lookup to decide how far to extend them.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
