//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! A parser owns its token buffer outright. Blocks and parameter lists are
//! carved out of that buffer and handed to fresh parsers, so a nested parse
//! never shares a cursor with its parent.

use std::rc::Rc;

use crate::{
    ast::{ast::Program, expressions::Expr},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position, MK_TOKEN,
};

use super::{expr::parse_expr, lookups::BindingPower, stmt::parse_stmt};

/// The main parser structure that maintains parsing state.
///
/// It holds the token stream and a single forward cursor. The stream always
/// ends in exactly one EOF token, and the cursor never moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// If `tokens` does not already end in EOF, one is synthesized one
    /// column past the last token.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = match tokens.last() {
                Some(last) => last.position.next_column(),
                None => Position::new(Rc::new(String::new()), 1, 1),
            };
            tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
        }

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one, or EOF at the end.
    pub fn peek(&self) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + 1).min(last)]
    }

    /// Advances to the next token and returns the previous token.
    pub fn advance(&mut self) -> Token {
        let token = self.current_token().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Expects a token of the specified kind and consumes it.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error at the current token.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        let token = self.current_token();
        if token.kind != expected_kind {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    found: token.kind,
                    expected: expected_kind,
                },
                token.position.clone(),
            ))
        } else {
            Ok(self.advance())
        }
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().position.clone()
    }

    /// Consumes a bracketed region starting at the cursor and returns the
    /// opening token together with the tokens strictly inside it.
    ///
    /// Only `open`/`close` affect the depth count. Reaching EOF before the
    /// matching `close` reports `unclosed` at the opening token.
    pub fn carve(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        unclosed: ErrorImpl,
    ) -> Result<(Token, Vec<Token>), Error> {
        let opening = self.expect(open)?;

        let mut depth = 1usize;
        let mut inner = vec![];
        loop {
            let kind = self.current_token_kind();
            if kind == TokenKind::EOF {
                return Err(Error::new(unclosed, opening.position));
            } else if kind == open {
                depth += 1;
            } else if kind == close {
                depth -= 1;
                if depth == 0 {
                    self.advance();
                    break;
                }
            }
            inner.push(self.advance());
        }

        trace!(
            "carved {} tokens after {} at {}",
            inner.len(),
            open,
            opening.position
        );
        Ok((opening, inner))
    }

    /// Parses the whole token stream as a sequence of statements.
    pub fn parse(&mut self) -> Result<Program, Error> {
        let mut body = vec![];

        while self.has_tokens() {
            body.push(parse_stmt(self)?);
        }

        Ok(body)
    }

    /// Parses the whole token stream as exactly one expression.
    pub fn parse_single_expression(&mut self) -> Result<Expr, Error> {
        let expr = parse_expr(self, BindingPower::Default)?;
        self.expect(TokenKind::EOF)?;
        Ok(expr)
    }
}

/// Terminates a carved-out slice with its own EOF, one column past its last
/// token, or past `leader` when the slice is empty.
pub fn with_eof(mut tokens: Vec<Token>, leader: &Token) -> Vec<Token> {
    let position = tokens.last().unwrap_or(leader).position.next_column();
    tokens.push(MK_TOKEN!(TokenKind::EOF, String::new(), position));
    tokens
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. `tokens` should be the output
/// of the lexer, ending in a single EOF token.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    debug!("parsing {} tokens", tokens.len());
    Parser::new(tokens).parse()
}
