//! Execution module for the interpreter core.
//!
//! This module walks a well-typed tree and performs its effects. It
//! handles:
//!
//! - Recursive integer and float expression evaluation
//! - Condition evaluation for branch and loop tests
//! - The statement executor: sequencing, assignment, if, while, for
//! - Read and print statements over caller-supplied I/O handles
//!
//! Execution is single-threaded and synchronous; read and print block
//! until the operation completes.

pub mod expr;
pub mod interpreter;
