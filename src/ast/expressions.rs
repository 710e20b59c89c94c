use crate::{
    errors::errors::Error,
    symbol_table::symbol_table::{SymbolTable, SymbolType},
    Position,
};

use super::ast::{assert_matching_types, resolve_declared_type, OperationKind, RelationKind};

/// An expression subtree.
///
/// Every variant carries enough type information for the executor to
/// pick the integer or float evaluation path without consulting the
/// table again: literals know their own kind, references adopt the
/// symbol's declared type at construction time, and operations record
/// the common operand type established by the type assertion.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(i64),
    FloatLiteral(f64),
    Reference {
        identifier: String,
        resolved_type: SymbolType,
    },
    Operation {
        operator: OperationKind,
        resolved_type: SymbolType,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn integer(value: i64) -> Expr {
        Expr::IntegerLiteral(value)
    }

    pub fn float(value: f64) -> Expr {
        Expr::FloatLiteral(value)
    }

    /// Builds a reference to a declared symbol, adopting its declared
    /// type. The lookup happens now, not at evaluation time; a
    /// reference to an undeclared identifier is a construction error.
    pub fn reference(
        identifier: &str,
        table: &SymbolTable,
        position: Position,
    ) -> Result<Expr, Error> {
        let resolved_type = resolve_declared_type(identifier, table, &position)?;

        Ok(Expr::Reference {
            identifier: identifier.to_string(),
            resolved_type,
        })
    }

    /// Builds a binary arithmetic node over two operand subtrees.
    /// Both operands must have resolved to the same type.
    pub fn operation(
        operator: OperationKind,
        left: Expr,
        right: Expr,
        position: Position,
    ) -> Result<Expr, Error> {
        let resolved_type =
            assert_matching_types(left.resolved_type(), right.resolved_type(), &position)?;

        Ok(Expr::Operation {
            operator,
            resolved_type,
            left: Box::new(left),
            right: Box::new(right),
        })
    }

    /// The Integer/Float tag attached at construction time.
    pub fn resolved_type(&self) -> SymbolType {
        match self {
            Expr::IntegerLiteral(_) => SymbolType::Integer,
            Expr::FloatLiteral(_) => SymbolType::Float,
            Expr::Reference { resolved_type, .. } => *resolved_type,
            Expr::Operation { resolved_type, .. } => *resolved_type,
        }
    }
}

/// A relational test over two operand subtrees of a common type.
///
/// The operand type is recorded so the executor knows which scalar
/// evaluator to dispatch to; the comparison itself yields a boolean.
#[derive(Debug, Clone, PartialEq)]
pub struct Condition {
    pub relation: RelationKind,
    pub operand_type: SymbolType,
    pub left: Box<Expr>,
    pub right: Box<Expr>,
}

impl Condition {
    pub fn new(
        relation: RelationKind,
        left: Expr,
        right: Expr,
        position: Position,
    ) -> Result<Condition, Error> {
        let operand_type =
            assert_matching_types(left.resolved_type(), right.resolved_type(), &position)?;

        Ok(Condition {
            relation,
            operand_type,
            left: Box::new(left),
            right: Box::new(right),
        })
    }
}
