use std::fmt::Display;

use thiserror::Error;

use crate::Position;

/// A fatal error, tagged with the source position the external parser
/// attributed to the offending node. Runtime I/O errors carry
/// `Position::null()` since no source location exists for them.
#[derive(Debug, Clone)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
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

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { .. } => "VariableAlreadyDeclared",
            ErrorImpl::VariableNotDeclared { .. } => "VariableNotDeclared",
            ErrorImpl::TypeMatchError { .. } => "TypeMatchError",
            ErrorImpl::MalformedInput { .. } => "MalformedInput",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
            ErrorImpl::InputFailure { .. } => "InputFailure",
            ErrorImpl::OutputFailure { .. } => "OutputFailure",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::VariableAlreadyDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` already declared", variable))
            }
            ErrorImpl::VariableNotDeclared { variable } => {
                ErrorTip::Suggestion(format!("Variable `{}` not declared", variable))
            }
            ErrorImpl::TypeMatchError { expected, received } => ErrorTip::Suggestion(format!(
                "Expected type `{}`, received `{}`",
                expected, received
            )),
            ErrorImpl::MalformedInput { token, expected } => ErrorTip::Suggestion(format!(
                "`{}` cannot be read as {}, is the input well formed?",
                token, expected
            )),
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::Suggestion(String::from(
                "The input stream ended while a read statement was waiting for a value",
            )),
            ErrorImpl::InputFailure { .. } => ErrorTip::None,
            ErrorImpl::OutputFailure { .. } => ErrorTip::None,
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

#[derive(Error, Debug, Clone)]
pub enum ErrorImpl {
    #[error("variable {variable:?} already declared")]
    VariableAlreadyDeclared { variable: String },
    #[error("variable {variable:?} not declared")]
    VariableNotDeclared { variable: String },
    #[error("types do not match: expected {expected:?}, received {received:?}")]
    TypeMatchError { expected: String, received: String },
    #[error("malformed input: {token:?} is not a valid {expected}")]
    MalformedInput { token: String, expected: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
    #[error("failed to read input: {message}")]
    InputFailure { message: String },
    #[error("failed to write output: {message}")]
    OutputFailure { message: String },
}
