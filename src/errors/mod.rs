//! Error types and error handling for the interpreter core.
//!
//! This module defines the error types used throughout tree
//! construction and execution. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for construction-time type errors and
//!   runtime I/O failures
//! - Helpful error messages and suggestions
//!
//! Construction-time type errors are fatal for a run: the core
//! propagates them to the caller as values and the external driver
//! decides how to abort.

pub mod errors;

#[cfg(test)]
mod tests;
