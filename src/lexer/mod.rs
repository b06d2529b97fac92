//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using anchored regex patterns
//! - Recognition of keywords, identifiers, literals, and operators
//! - String literals with escape sequences, scanned per quote style
//! - Token position tracking for error reporting
//! - Comments and whitespace handling

pub mod lexer;
pub mod tokens;
