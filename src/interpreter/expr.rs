use crate::{
    ast::{
        ast::{OperationKind, RelationKind},
        expressions::{Condition, Expr},
    },
    symbol_table::symbol_table::{SymbolTable, SymbolType},
};

/// Recursively evaluates an integer-typed subtree.
///
/// The tree is well-typed by construction, so every literal and
/// reference reached from an integer-typed root is itself integer
/// typed; hitting a float node here is a broken invariant. Division by
/// zero is deliberately unguarded and panics with Rust's native
/// integer-division fault.
pub fn evaluate_integer(expr: &Expr, table: &SymbolTable) -> i64 {
    match expr {
        Expr::IntegerLiteral(value) => *value,
        Expr::Reference { identifier, .. } => table
            .find(identifier)
            .expect("reference resolved at construction")
            .value
            .as_integer(),
        Expr::Operation {
            operator,
            left,
            right,
            ..
        } => {
            let left = evaluate_integer(left, table);
            let right = evaluate_integer(right, table);
            match operator {
                OperationKind::Sum => left + right,
                OperationKind::Sub => left - right,
                OperationKind::Mult => left * right,
                OperationKind::Div => left / right,
            }
        }
        Expr::FloatLiteral(_) => panic!("Float literal in an integer-typed subtree"),
    }
}

/// Recursively evaluates a float-typed subtree.
///
/// Structurally identical to [`evaluate_integer`]; division by zero
/// follows IEEE-754 and yields an infinity or NaN.
pub fn evaluate_float(expr: &Expr, table: &SymbolTable) -> f64 {
    match expr {
        Expr::FloatLiteral(value) => *value,
        Expr::Reference { identifier, .. } => table
            .find(identifier)
            .expect("reference resolved at construction")
            .value
            .as_float(),
        Expr::Operation {
            operator,
            left,
            right,
            ..
        } => {
            let left = evaluate_float(left, table);
            let right = evaluate_float(right, table);
            match operator {
                OperationKind::Sum => left + right,
                OperationKind::Sub => left - right,
                OperationKind::Mult => left * right,
                OperationKind::Div => left / right,
            }
        }
        Expr::IntegerLiteral(_) => panic!("Integer literal in a float-typed subtree"),
    }
}

/// Evaluates a relational test: dispatches on the relation, then on
/// the operand type recorded at construction, and applies the native
/// comparison.
pub fn evaluate_condition(condition: &Condition, table: &SymbolTable) -> bool {
    match condition.relation {
        RelationKind::GreaterThan => match condition.operand_type {
            SymbolType::Integer => {
                evaluate_integer(&condition.left, table) > evaluate_integer(&condition.right, table)
            }
            SymbolType::Float => {
                evaluate_float(&condition.left, table) > evaluate_float(&condition.right, table)
            }
        },
        RelationKind::LessThan => match condition.operand_type {
            SymbolType::Integer => {
                evaluate_integer(&condition.left, table) < evaluate_integer(&condition.right, table)
            }
            SymbolType::Float => {
                evaluate_float(&condition.left, table) < evaluate_float(&condition.right, table)
            }
        },
        RelationKind::EqualTo => match condition.operand_type {
            SymbolType::Integer => {
                evaluate_integer(&condition.left, table)
                    == evaluate_integer(&condition.right, table)
            }
            SymbolType::Float => {
                evaluate_float(&condition.left, table) == evaluate_float(&condition.right, table)
            }
        },
    }
}
