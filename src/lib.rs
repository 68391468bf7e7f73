#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::errors::errors::{Error, ErrorTip};

#[macro_use]
extern crate log;

extern crate regex;

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A location in a source unit. Lines and columns start at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub unit: Rc<String>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(unit: Rc<String>, line: u32, column: u32) -> Self {
        Position { unit, line, column }
    }

    /// The position immediately to the right of this one on the same line.
    pub fn next_column(&self) -> Self {
        Position {
            unit: Rc::clone(&self.unit),
            line: self.line,
            column: self.column + 1,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.unit, self.line, self.column)
    }
}

/// Returns the text of the given 1-based line, without its line terminator.
pub fn get_line(source: &str, line: u32) -> Option<&str> {
    source
        .split('\n')
        .nth(line.checked_sub(1)? as usize)
        .map(|text| text.trim_end_matches('\r'))
}


/// Renders an error as a caret diagnostic against the source it came from.
///
/// ```text
/// Error: UnexpectedToken (got ";", expected "IDENT")
/// -> final.lang:20:9
///    |
/// 20 | let a = #;
///    | --------^
/// ```
pub fn render_error(error: &Error, source: &str) -> String {
    let position = error.get_position();
    let line_string = position.line.to_string();
    let padding = line_string.len() + 2;

    let mut out = String::new();
    if let ErrorTip::None = error.get_tip() {
        out.push_str(&format!("Error: {}\n", error.get_error_name()));
    } else {
        out.push_str(&format!(
            "Error: {} ({})\n",
            error.get_error_name(),
            error.get_tip()
        ));
    }
    out.push_str(&format!("-> {}\n", position));

    let Some(line_text) = get_line(source, position.line) else {
        return out;
    };

    out.push_str(&format!("{:>padding$}\n", "|"));

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(line_text);
    out.push_str(&format!("{} | {}\n", line_string, line_text_removed.trim_end()));

    let arrows = (position.column as usize)
        .saturating_sub(removed_whitespace)
        .max(1);
    out.push_str(&format!("{:>padding$} {:->arrows$}\n", "|", "^"));

    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
