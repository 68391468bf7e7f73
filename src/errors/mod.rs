//! Error types and error handling for the front end.
//!
//! This module defines the error types shared by the lexer and the parser:
//!
//! - Error structures with source position information
//! - Specific error variants for lexical and syntactic failures
//! - Error formatting (`unit:line:column: message`) and suggestions

pub mod errors;
