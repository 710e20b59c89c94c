use crate::{
    errors::errors::Error,
    symbol_table::symbol_table::{SymbolTable, SymbolType},
    Position,
};

use super::{
    ast::{assert_matching_types, resolve_declared_type},
    expressions::{Condition, Expr},
};

/// A statement subtree.
///
/// A program is one root statement: statement lists are expressed as a
/// right-leaning chain of `Sequence` nodes, terminated wherever the
/// parser has nothing more to attach by the `Empty` sentinel. `Empty`
/// also stands in for an absent loop or branch body.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Empty,
    Sequence {
        first: Box<Stmt>,
        second: Box<Stmt>,
    },
    Assignment {
        identifier: String,
        resolved_type: SymbolType,
        expression: Expr,
    },
    If {
        condition: Condition,
        body: Box<Stmt>,
    },
    While {
        condition: Condition,
        body: Box<Stmt>,
    },
    For {
        identifier: String,
        loop_type: SymbolType,
        start: Expr,
        step: Expr,
        stop: Expr,
        body: Box<Stmt>,
    },
    Read {
        identifier: String,
        target_type: SymbolType,
    },
    Print {
        expression: Expr,
    },
}

impl Stmt {
    /// Chains two statements, executed left then right.
    pub fn sequence(first: Stmt, second: Stmt) -> Stmt {
        Stmt::Sequence {
            first: Box::new(first),
            second: Box::new(second),
        }
    }

    /// Builds an assignment to a declared symbol. The expression's
    /// resolved type must equal the target's declared type.
    pub fn assignment(
        identifier: &str,
        expression: Expr,
        table: &SymbolTable,
        position: Position,
    ) -> Result<Stmt, Error> {
        let declared_type = resolve_declared_type(identifier, table, &position)?;
        let resolved_type =
            assert_matching_types(declared_type, expression.resolved_type(), &position)?;

        Ok(Stmt::Assignment {
            identifier: identifier.to_string(),
            resolved_type,
            expression,
        })
    }

    pub fn if_statement(condition: Condition, body: Stmt) -> Stmt {
        Stmt::If {
            condition,
            body: Box::new(body),
        }
    }

    pub fn while_statement(condition: Condition, body: Stmt) -> Stmt {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    /// Builds a counted loop. The loop variable's declared type and
    /// the start, step and stop expression types must all agree.
    pub fn for_statement(
        identifier: &str,
        start: Expr,
        step: Expr,
        stop: Expr,
        body: Stmt,
        table: &SymbolTable,
        position: Position,
    ) -> Result<Stmt, Error> {
        let loop_type = resolve_declared_type(identifier, table, &position)?;
        assert_matching_types(loop_type, start.resolved_type(), &position)?;
        assert_matching_types(loop_type, step.resolved_type(), &position)?;
        assert_matching_types(loop_type, stop.resolved_type(), &position)?;

        Ok(Stmt::For {
            identifier: identifier.to_string(),
            loop_type,
            start,
            step,
            stop,
            body: Box::new(body),
        })
    }

    /// Builds a read statement. Input will be parsed as the target's
    /// declared type, resolved now.
    pub fn read(identifier: &str, table: &SymbolTable, position: Position) -> Result<Stmt, Error> {
        let target_type = resolve_declared_type(identifier, table, &position)?;

        Ok(Stmt::Read {
            identifier: identifier.to_string(),
            target_type,
        })
    }

    pub fn print(expression: Expr) -> Stmt {
        Stmt::Print { expression }
    }
}
