//! Unit tests for error handling.
//!
//! This module contains tests for error classification and reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::Position;
use std::rc::Rc;

fn position(offset: u32, line: u32, column: u32) -> Position {
    Position {
        offset,
        line,
        column,
        file: Rc::new("test.palu".to_string()),
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(ErrorImpl::UnterminatedString, position(10, 1, 11));

    assert_eq!(error.get_error_name(), "UnterminatedString");
    assert_eq!(error.kind(), ErrorKind::Lex);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "identifier".to_string(),
            found: "`;`".to_string(),
        },
        position(42, 3, 7),
    );

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_parse_error_kinds() {
    let unexpected = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`end`".to_string(),
            found: "end of input".to_string(),
        },
        position(0, 1, 1),
    );
    let params = Error::new(
        ErrorImpl::MalformedParameters {
            found: "`,`".to_string(),
        },
        position(0, 1, 1),
    );
    let target = Error::new(
        ErrorImpl::InvalidAssignmentTarget {
            found: "number literal".to_string(),
        },
        position(0, 1, 1),
    );

    assert_eq!(unexpected.kind(), ErrorKind::Parse);
    assert_eq!(params.kind(), ErrorKind::Parse);
    assert_eq!(target.kind(), ErrorKind::Parse);
    assert_eq!(params.get_error_name(), "MalformedParameters");
    assert_eq!(target.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_nesting_error() {
    let error = Error::new(ErrorImpl::NestingTooDeep { limit: 128 }, position(300, 1, 301));

    assert_eq!(error.kind(), ErrorKind::Parse);
    assert_eq!(error.get_error_name(), "NestingTooDeep");
    assert_eq!(error.to_string(), "test.palu:1:301: nesting exceeds 128 levels");
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_lex_error_kinds() {
    let comment = Error::new(ErrorImpl::UnterminatedComment, position(0, 1, 1));
    let escape = Error::new(
        ErrorImpl::IllegalEscape {
            sequence: "\\u12".to_string(),
        },
        position(0, 1, 1),
    );

    assert_eq!(comment.kind(), ErrorKind::Lex);
    assert_eq!(escape.kind(), ErrorKind::Lex);
    assert_eq!(escape.get_error_name(), "IllegalEscape");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "expression".to_string(),
            found: "end of input".to_string(),
        },
        position(8, 1, 9),
    );

    assert_eq!(
        error.to_string(),
        "test.palu:1:9: expected expression, found end of input"
    );
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InvalidAssignmentTarget {
            found: "call expression".to_string(),
        },
        position(0, 1, 1),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: "`->`".to_string(),
            found: "`do`".to_string(),
        },
        position(0, 1, 1),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(tip) => assert_eq!(tip, "Expected `->`, found `do`"),
        _ => panic!("Expected suggestion tip"),
    }
}

#[test]
fn test_error_tip_display() {
    let tip = ErrorTip::Suggestion("Try this instead".to_string());
    assert_eq!(tip.to_string(), "Try this instead");

    let tip = ErrorTip::None;
    assert_eq!(tip.to_string(), "");
}
