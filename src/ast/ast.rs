use crate::{
    errors::errors::{Error, ErrorImpl},
    symbol_table::symbol_table::{SymbolTable, SymbolType},
    Position,
};

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Sum,
    Sub,
    Mult,
    Div,
}

/// Binary relational operators. A condition always produces a boolean,
/// regardless of its operand type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelationKind {
    GreaterThan,
    LessThan,
    EqualTo,
}

/// The type-assertion step shared by every binary-operand constructor.
///
/// If both sides resolved to the same type, that type becomes the new
/// node's type; otherwise construction fails with a fatal
/// `TypeMatchError`. The language has no recovery construct for type
/// errors, so the caller is expected to abort the run.
pub fn assert_matching_types(
    left: SymbolType,
    right: SymbolType,
    position: &Position,
) -> Result<SymbolType, Error> {
    if left == right {
        Ok(left)
    } else {
        Err(Error::new(
            ErrorImpl::TypeMatchError {
                expected: left.to_string(),
                received: right.to_string(),
            },
            position.clone(),
        ))
    }
}

/// Resolves an identifier's declared type against the table, failing
/// with `VariableNotDeclared` for an unknown identifier.
pub fn resolve_declared_type(
    identifier: &str,
    table: &SymbolTable,
    position: &Position,
) -> Result<SymbolType, Error> {
    match table.find(identifier) {
        Some(symbol) => Ok(symbol.declared_type),
        None => Err(Error::new(
            ErrorImpl::VariableNotDeclared {
                variable: identifier.to_string(),
            },
            position.clone(),
        )),
    }
}
