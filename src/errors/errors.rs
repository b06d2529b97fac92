use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Error, Debug, Clone)]
#[error("{position}: {internal_error}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lex,
    Parse,
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

    pub fn get_impl(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnterminatedString
            | ErrorImpl::UnterminatedComment
            | ErrorImpl::IllegalEscape { .. } => ErrorKind::Lex,
            ErrorImpl::UnexpectedToken { .. }
            | ErrorImpl::MalformedParameters { .. }
            | ErrorImpl::InvalidAssignmentTarget { .. }
            | ErrorImpl::NestingTooDeep { .. } => ErrorKind::Parse,
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::IllegalEscape { .. } => "IllegalEscape",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::MalformedParameters { .. } => "MalformedParameters",
            ErrorImpl::InvalidAssignmentTarget { .. } => "InvalidAssignmentTarget",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedString => ErrorTip::Suggestion(String::from(
                "String literals must close on the line they start",
            )),
            ErrorImpl::UnterminatedComment => {
                ErrorTip::Suggestion(String::from("Block comment is missing its closing `*/`"))
            }
            ErrorImpl::IllegalEscape { sequence } => ErrorTip::Suggestion(format!(
                "Invalid escape `{}`, `\\u` takes 4 hex digits, `\\U` takes 8 and `\\x` at least 2",
                sequence
            )),
            ErrorImpl::UnexpectedToken { expected, found } => {
                ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found))
            }
            ErrorImpl::MalformedParameters { .. } => ErrorTip::Suggestion(String::from(
                "A `...` marker may only appear once, as the last parameter",
            )),
            ErrorImpl::InvalidAssignmentTarget { .. } => ErrorTip::None,
            ErrorImpl::NestingTooDeep { .. } => ErrorTip::Suggestion(String::from(
                "Split the expression or block into smaller named pieces",
            )),
        }
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

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("illegal escape sequence {sequence:?}")]
    IllegalEscape { sequence: String },
    #[error("expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },
    #[error("malformed parameter list at {found}")]
    MalformedParameters { found: String },
    #[error("cannot assign to {found}, only identifier paths are assignable")]
    InvalidAssignmentTarget { found: String },
    #[error("nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },
}
