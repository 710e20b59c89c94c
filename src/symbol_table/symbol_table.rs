use std::{collections::HashMap, fmt::Display};

use thiserror::Error;

/// The two scalar types of the language.
///
/// A symbol's type is fixed at declaration and every expression node
/// resolves to exactly one of these at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolType {
    Integer,
    Float,
}

impl Display for SymbolType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SymbolType::Integer => write!(f, "Integer"),
            SymbolType::Float => write!(f, "Float"),
        }
    }
}

/// A tagged scalar, discriminated by [`SymbolType`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Integer(i64),
    Float(f64),
}

impl Value {
    pub fn symbol_type(&self) -> SymbolType {
        match self {
            Value::Integer(_) => SymbolType::Integer,
            Value::Float(_) => SymbolType::Float,
        }
    }

    /// Returns the integer scalar.
    ///
    /// Panics on a float value: the tree layer validates types before
    /// any value reaches storage, so a mismatch here is a broken
    /// invariant rather than a user error.
    pub fn as_integer(&self) -> i64 {
        match self {
            Value::Integer(value) => *value,
            Value::Float(_) => panic!("Attempted to read a float value as an integer"),
        }
    }

    /// Returns the float scalar. Panics on an integer value.
    pub fn as_float(&self) -> f64 {
        match self {
            Value::Float(value) => *value,
            Value::Integer(_) => panic!("Attempted to read an integer value as a float"),
        }
    }
}

/// One variable binding: a named, typed, mutable storage cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub identifier: String,
    pub declared_type: SymbolType,
    pub value: Value,
}

/// Result codes for the table operations.
///
/// These are deliberately a separate, non-fatal error type: the tree
/// construction layer must distinguish "identifier already declared"
/// from "identifier missing" as caller-actionable outcomes before
/// deciding whether the run is over.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SymbolTableError {
    #[error("a symbol named {identifier:?} already exists")]
    DuplicateIdentifier { identifier: String },
    #[error("no symbol named {identifier:?} exists")]
    NotFound { identifier: String },
}

/// The collection of all symbols visible during one program run.
///
/// Identifiers are unique; insertion of a duplicate is rejected, never
/// overwritten. There is no deletion: the table lives as long as the
/// run does.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            symbols: HashMap::new(),
        }
    }

    /// Declares a new symbol with its type and initial value.
    pub fn insert(
        &mut self,
        identifier: &str,
        declared_type: SymbolType,
        value: Value,
    ) -> Result<(), SymbolTableError> {
        debug_assert_eq!(value.symbol_type(), declared_type);

        if self.symbols.contains_key(identifier) {
            return Err(SymbolTableError::DuplicateIdentifier {
                identifier: identifier.to_string(),
            });
        }

        self.symbols.insert(
            identifier.to_string(),
            Symbol {
                identifier: identifier.to_string(),
                declared_type,
                value,
            },
        );

        Ok(())
    }

    /// Exact-match lookup. Pure, no side effects.
    pub fn find(&self, identifier: &str) -> Option<&Symbol> {
        self.symbols.get(identifier)
    }

    /// Overwrites the stored scalar, preserving the declared type.
    ///
    /// The caller is responsible for the value's type matching the
    /// declared type; type validation happens in the tree layer, not
    /// here.
    pub fn update(&mut self, identifier: &str, value: Value) -> Result<(), SymbolTableError> {
        match self.symbols.get_mut(identifier) {
            Some(symbol) => {
                symbol.value = value;
                Ok(())
            }
            None => Err(SymbolTableError::NotFound {
                identifier: identifier.to_string(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
