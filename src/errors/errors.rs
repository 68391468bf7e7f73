use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_error_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => "IllegalToken",
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::InvalidNumber { .. } => "InvalidNumber",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::ExpectedExpression { .. } => "ExpectedExpression",
            ErrorImpl::NoBindingPower { .. } => "NoBindingPower",
            ErrorImpl::UnexpectedStatement { .. } => "UnexpectedStatement",
            ErrorImpl::UnclosedBlock => "UnclosedBlock",
            ErrorImpl::UnclosedParameterList => "UnclosedParameterList",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalToken { .. } => ErrorTip::None,
            ErrorImpl::UnterminatedString => {
                ErrorTip::Suggestion(String::from("String literal is missing its closing `\"`"))
            }
            ErrorImpl::InvalidNumber { literal } => ErrorTip::Suggestion(format!(
                "`{}` is neither an integer nor a decimal number",
                literal
            )),
            ErrorImpl::UnexpectedToken { found, expected } => {
                if *expected == TokenKind::Semicolon {
                    ErrorTip::Suggestion(format!(
                        "Unexpected token: `{}`, did you miss a semicolon?",
                        found
                    ))
                } else {
                    ErrorTip::Suggestion(format!("Expected `{}`, found `{}`", expected, found))
                }
            }
            ErrorImpl::ExpectedExpression { found } => {
                ErrorTip::Suggestion(format!("`{}` cannot start an expression", found))
            }
            ErrorImpl::NoBindingPower { found } => {
                ErrorTip::Suggestion(format!("`{}` cannot be used as an operator", found))
            }
            ErrorImpl::UnexpectedStatement { found } => {
                ErrorTip::Suggestion(format!("`{}` cannot start a statement", found))
            }
            ErrorImpl::UnclosedBlock => {
                ErrorTip::Suggestion(String::from("This `{` has no matching `}`"))
            }
            ErrorImpl::UnclosedParameterList => {
                ErrorTip::Suggestion(String::from("This `(` has no matching `)`"))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.position, self.internal_error)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("illegal token {literal:?}")]
    IllegalToken { literal: String },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("invalid number literal {literal:?}")]
    InvalidNumber { literal: String },
    #[error("got {:?}, expected {:?}", .found.as_str(), .expected.as_str())]
    UnexpectedToken { found: TokenKind, expected: TokenKind },
    #[error("got {:?}, expected expression", .found.as_str())]
    ExpectedExpression { found: TokenKind },
    #[error("illegal token type {:?}", .found.as_str())]
    NoBindingPower { found: TokenKind },
    #[error("illegal token type {:?} at start of statement", .found.as_str())]
    UnexpectedStatement { found: TokenKind },
    #[error("unclosed block")]
    UnclosedBlock,
    #[error("unclosed parameter list")]
    UnclosedParameterList,
}
