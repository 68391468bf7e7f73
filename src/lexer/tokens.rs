use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Position;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("let", TokenKind::Let);
        map.insert("fn", TokenKind::Fn);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("return", TokenKind::Return);
        map.insert("yield", TokenKind::Yield);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Illegal,

    Identifier,
    Int,
    Float,
    String,

    Assignment, // =
    Plus,
    Dash,
    Equals,    // ==
    NotEquals, // !=
    Not,       // !
    Slash,
    Star,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    BitAnd, // &
    And,    // &&
    BitOr,  // |
    Or,     // ||

    Comma,
    Semicolon,
    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,

    // Reserved
    Let,
    Fn,
    If,
    Else,
    True,
    False,
    Return,
    Yield,
}

impl TokenKind {
    /// The name used for this kind in diagnostics. Punctuation is shown as
    /// the symbol itself.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::EOF => "EOF",
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Identifier => "IDENT",
            TokenKind::Int => "INT",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Assignment => "=",
            TokenKind::Plus => "+",
            TokenKind::Dash => "-",
            TokenKind::Equals => "==",
            TokenKind::NotEquals => "!=",
            TokenKind::Not => "!",
            TokenKind::Slash => "/",
            TokenKind::Star => "*",
            TokenKind::Less => "<",
            TokenKind::Greater => ">",
            TokenKind::LessEquals => "<=",
            TokenKind::GreaterEquals => ">=",
            TokenKind::BitAnd => "&",
            TokenKind::And => "&&",
            TokenKind::BitOr => "|",
            TokenKind::Or => "||",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::OpenParen => "(",
            TokenKind::CloseParen => ")",
            TokenKind::OpenCurly => "{",
            TokenKind::CloseCurly => "}",
            TokenKind::Let => "LET",
            TokenKind::Fn => "FUNCTION",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::Return => "RETURN",
            TokenKind::Yield => "YIELD",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub position: Position,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<6} {:<10} {:?}",
            format!("{}:{}", self.position.line, self.position.column),
            self.kind,
            self.literal
        )
    }
}
