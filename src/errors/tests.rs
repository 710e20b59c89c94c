//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;
use std::rc::Rc;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::VariableAlreadyDeclared {
            variable: "x".to_string(),
        },
        Position(10, Rc::new("test.tl".to_string())),
    );

    assert_eq!(error.get_error_name(), "VariableAlreadyDeclared");
}

#[test]
fn test_error_position() {
    let pos = Position(42, Rc::new("test.tl".to_string()));
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "counter".to_string(),
        },
        pos.clone(),
    );

    assert_eq!(error.get_position().0, 42);
}

#[test]
fn test_type_mismatch_error() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "Integer".to_string(),
            received: "Float".to_string(),
        },
        Position(0, Rc::new("test.tl".to_string())),
    );

    assert_eq!(error.get_error_name(), "TypeMatchError");
}

#[test]
fn test_variable_not_declared_error() {
    let error = Error::new(
        ErrorImpl::VariableNotDeclared {
            variable: "foo".to_string(),
        },
        Position(0, Rc::new("test.tl".to_string())),
    );

    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_malformed_input_error() {
    let error = Error::new(
        ErrorImpl::MalformedInput {
            token: "abc".to_string(),
            expected: "Integer".to_string(),
        },
        Position::null(),
    );

    assert_eq!(error.get_error_name(), "MalformedInput");
}

#[test]
fn test_end_of_input_error() {
    let error = Error::new(ErrorImpl::UnexpectedEndOfInput, Position::null());

    assert_eq!(error.get_error_name(), "UnexpectedEndOfInput");
}

#[test]
fn test_error_tip_none() {
    let error = Error::new(
        ErrorImpl::InputFailure {
            message: "broken pipe".to_string(),
        },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
}

#[test]
fn test_error_tip_suggestion() {
    let error = Error::new(
        ErrorImpl::TypeMatchError {
            expected: "Float".to_string(),
            received: "Integer".to_string(),
        },
        Position(0, Rc::new("test.tl".to_string())),
    );

    match error.get_tip() {
        ErrorTip::Suggestion(_) => (),
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
