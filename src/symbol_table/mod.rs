//! Symbol table module for the interpreter core.
//!
//! This module contains the storage for variable bindings. It handles:
//!
//! - Typed, mutable storage cells keyed by identifier
//! - Duplicate-rejecting insertion and exact-match lookup
//! - In-place value updates that preserve the declared type
//!
//! The table is populated by the external driver as declarations are
//! processed, consulted by the tree constructors to resolve identifier
//! types, and mutated by the statement executor.

pub mod symbol_table;
