#![allow(clippy::module_inception)]

use std::{fmt::Display, rc::Rc};

use crate::{ast::ast::Program, errors::errors::Error};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod printer;

extern crate regex;

/// Name used for sources that were not read from a named file.
pub const DEFAULT_SOURCE_NAME: &str = "<input>";

/// A location inside a source unit.
///
/// `offset` is a byte offset, `line` and `column` are 1-based with columns
/// counted in chars.
#[derive(Debug, Clone)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn start(file: Rc<String>) -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

#[derive(Debug, Clone)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Span covering `self` through `other`.
    pub fn to(&self, other: &Span) -> Span {
        Span {
            start: self.start.clone(),
            end: other.end.clone(),
        }
    }
}

/// Tokenizes and parses a full unit of source.
///
/// The first lexical or syntactic error aborts the whole call; no partial
/// tree is ever returned.
pub fn parse_source(source: &str, file: Option<String>) -> Result<Program, Error> {
    let file = Rc::new(file.unwrap_or_else(|| String::from(DEFAULT_SOURCE_NAME)));
    let tokens = lexer::lexer::tokenize(source.to_string(), Some(file.as_ref().clone()))?;
    parser::parser::parse(tokens, file)
}

#[cfg(test)]
mod tests {
    use super::parse_source;

    #[test]
    fn test_parse_source_names_positions() {
        let error = parse_source("let x =", Some(String::from("main.palu"))).unwrap_err();
        assert_eq!(error.get_position().to_string(), "main.palu:1:8");
    }

    #[test]
    fn test_parse_source_default_name() {
        let error = parse_source("\n  )", None).unwrap_err();
        assert_eq!(error.get_position().to_string(), "<input>:2:3");
    }
}
