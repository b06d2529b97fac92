//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into an Abstract Syntax Tree. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Statement parsing (declarations, functions, control flow, blocks)
//! - Expression parsing (assignment, conditionals, binary and prefix ops, calls)
//! - Identifier paths, type annotations and parameter lists
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling. The
//! first error aborts the parse; there is no recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
