use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

lazy_static! {
    /// A word runs until whitespace, a symbol or punctuation. `_` and `.`
    /// continue a word.
    static ref WORD: Regex = Regex::new(r"^(?:[_.]|[^\s\p{S}\p{P}])+").unwrap();
}

pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    /// Byte offset of the next unread character.
    pos: usize,
    line: u32,
    column: u32,
    unit: Rc<String>,
    error: Option<Error>,
}

impl Lexer {
    pub fn new(unit: &str, source: &str) -> Lexer {
        Lexer {
            tokens: vec![],
            source: String::from(source),
            pos: 0,
            line: 1,
            column: 1,
            unit: Rc::new(String::from(unit)),
            error: None,
        }
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        Position::new(Rc::clone(&self.unit), self.line, self.column)
    }

    /// Consumes one character, keeping line and column in step with it.
    fn bump(&mut self) -> Option<char> {
        let ch = self.at()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn bump_n(&mut self, n: usize) {
        for _ in 0..n {
            self.bump();
        }
    }

    pub fn push(&mut self, token: Token) {
        trace!("{}", token);
        self.tokens.push(token);
    }

    /// Records a lexical problem. Only the first one is kept.
    fn report(&mut self, error_impl: ErrorImpl, position: Position) {
        if self.error.is_none() {
            self.error = Some(Error::new(error_impl, position));
        }
    }

    fn illegal(&mut self, literal: String, error_impl: ErrorImpl, position: Position) {
        self.report(error_impl, position.clone());
        self.push(MK_TOKEN!(TokenKind::Illegal, literal, position));
    }

    /// Emits `single`, or `double` if the next character is `second`.
    fn lex_operator(&mut self, first: char, single: TokenKind, second: char, double: TokenKind) {
        let start = self.position();
        self.bump();

        if self.at() == Some(second) {
            self.bump();
            self.push(MK_TOKEN!(double, format!("{}{}", first, second), start));
        } else {
            self.push(MK_TOKEN!(single, first.to_string(), start));
        }
    }

    fn lex_single(&mut self, ch: char, kind: TokenKind) {
        let start = self.position();
        self.bump();
        self.push(MK_TOKEN!(kind, ch.to_string(), start));
    }

    fn lex_string(&mut self) {
        let start = self.position();
        let begin = self.pos;
        self.bump();

        loop {
            match self.bump() {
                Some('\\') => {
                    self.bump();
                }
                Some('"') => break,
                Some(_) => {}
                None => {
                    let literal = String::from(&self.source[begin..]);
                    self.illegal(literal, ErrorImpl::UnterminatedString, start);
                    return;
                }
            }
        }

        let literal = String::from(&self.source[begin..self.pos]);
        self.push(MK_TOKEN!(TokenKind::String, literal, start));
    }

    fn word(&self) -> Option<String> {
        WORD.find(self.remainder()).map(|m| String::from(m.as_str()))
    }

    fn lex_word(&mut self) {
        let start = self.position();
        let Some(word) = self.word() else {
            return self.lex_illegal_char();
        };
        self.bump_n(word.chars().count());

        let kind = RESERVED_LOOKUP
            .get(word.as_str())
            .copied()
            .unwrap_or(TokenKind::Identifier);
        self.push(MK_TOKEN!(kind, word, start));
    }

    fn lex_number(&mut self) {
        let start = self.position();
        let Some(word) = self.word() else {
            return self.lex_illegal_char();
        };
        self.bump_n(word.chars().count());

        if word.parse::<i64>().is_ok() {
            self.push(MK_TOKEN!(TokenKind::Int, word, start));
        } else if word.parse::<f64>().is_ok() {
            self.push(MK_TOKEN!(TokenKind::Float, word, start));
        } else {
            let error_impl = ErrorImpl::InvalidNumber {
                literal: word.clone(),
            };
            self.illegal(word, error_impl, start);
        }
    }

    fn lex_illegal_char(&mut self) {
        let start = self.position();
        if let Some(ch) = self.bump() {
            let literal = ch.to_string();
            let error_impl = ErrorImpl::IllegalToken {
                literal: literal.clone(),
            };
            self.illegal(literal, error_impl, start);
        }
    }

    fn next_token(&mut self) {
        let Some(ch) = self.at() else {
            return;
        };

        match ch {
            ch if ch.is_whitespace() => {
                self.bump();
            }
            '=' => self.lex_operator('=', TokenKind::Assignment, '=', TokenKind::Equals),
            '!' => self.lex_operator('!', TokenKind::Not, '=', TokenKind::NotEquals),
            '&' => self.lex_operator('&', TokenKind::BitAnd, '&', TokenKind::And),
            '|' => self.lex_operator('|', TokenKind::BitOr, '|', TokenKind::Or),
            '<' => self.lex_operator('<', TokenKind::Less, '=', TokenKind::LessEquals),
            '>' => self.lex_operator('>', TokenKind::Greater, '=', TokenKind::GreaterEquals),
            '+' => self.lex_single(ch, TokenKind::Plus),
            '-' => self.lex_single(ch, TokenKind::Dash),
            '/' => self.lex_single(ch, TokenKind::Slash),
            '*' => self.lex_single(ch, TokenKind::Star),
            ',' => self.lex_single(ch, TokenKind::Comma),
            ';' => self.lex_single(ch, TokenKind::Semicolon),
            '(' => self.lex_single(ch, TokenKind::OpenParen),
            ')' => self.lex_single(ch, TokenKind::CloseParen),
            '{' => self.lex_single(ch, TokenKind::OpenCurly),
            '}' => self.lex_single(ch, TokenKind::CloseCurly),
            '"' => self.lex_string(),
            ch if ch.is_alphabetic() => self.lex_word(),
            ch if ch.is_ascii_digit() => self.lex_number(),
            _ => self.lex_illegal_char(),
        }
    }
}

/// Scans `source` into tokens, always ending in a single EOF token.
///
/// Scanning does not stop at a lexical error: the whole token sequence is
/// returned together with the first error found, so callers can still show
/// what was recognised.
pub fn analyze(unit: &str, source: &str) -> (Vec<Token>, Option<Error>) {
    let mut lex = Lexer::new(unit, source);

    while !lex.at_eof() {
        lex.next_token();
    }

    let end = lex.position();
    lex.push(MK_TOKEN!(TokenKind::EOF, String::new(), end));

    debug!("{}: scanned {} tokens", lex.unit, lex.tokens.len());
    (lex.tokens, lex.error)
}

pub fn tokenize(unit: &str, source: &str) -> Result<Vec<Token>, Error> {
    match analyze(unit, source) {
        (tokens, None) => Ok(tokens),
        (_, Some(error)) => Err(error),
    }
}
