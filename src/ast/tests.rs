//! Unit tests for tree construction and static type resolution.
//!
//! This module contains tests for the construction-time type checks:
//! - Literal and reference type resolution
//! - Type fusion for operations, conditions and assignments, for
//!   every Integer/Float operand combination
//! - Undeclared identifier errors
//! - The pairwise type agreement required by for statements

use crate::ast::ast::{OperationKind, RelationKind};
use crate::ast::expressions::{Condition, Expr};
use crate::ast::statements::Stmt;
use crate::symbol_table::symbol_table::{SymbolTable, SymbolType, Value};
use crate::Position;

fn declared_table() -> SymbolTable {
    let mut table = SymbolTable::new();
    table
        .insert("x", SymbolType::Integer, Value::Integer(5))
        .unwrap();
    table
        .insert("y", SymbolType::Integer, Value::Integer(0))
        .unwrap();
    table
        .insert("f", SymbolType::Float, Value::Float(1.5))
        .unwrap();
    table
}

#[test]
fn test_literal_types() {
    assert_eq!(Expr::integer(3).resolved_type(), SymbolType::Integer);
    assert_eq!(Expr::float(3.0).resolved_type(), SymbolType::Float);
}

#[test]
fn test_reference_adopts_declared_type() {
    let table = declared_table();

    let x = Expr::reference("x", &table, Position::null()).unwrap();
    assert_eq!(x.resolved_type(), SymbolType::Integer);

    let f = Expr::reference("f", &table, Position::null()).unwrap();
    assert_eq!(f.resolved_type(), SymbolType::Float);
}

#[test]
fn test_reference_to_undeclared_identifier() {
    let table = declared_table();

    let error = Expr::reference("missing", &table, Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_operation_type_fusion() {
    // Equal operand types succeed and fuse to the operand type.
    let int_op = Expr::operation(
        OperationKind::Sum,
        Expr::integer(1),
        Expr::integer(2),
        Position::null(),
    )
    .unwrap();
    assert_eq!(int_op.resolved_type(), SymbolType::Integer);

    let float_op = Expr::operation(
        OperationKind::Div,
        Expr::float(1.0),
        Expr::float(2.0),
        Position::null(),
    )
    .unwrap();
    assert_eq!(float_op.resolved_type(), SymbolType::Float);

    // Mixed operand types fail, in both orders.
    let error = Expr::operation(
        OperationKind::Sum,
        Expr::integer(1),
        Expr::float(1.0),
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error = Expr::operation(
        OperationKind::Mult,
        Expr::float(1.0),
        Expr::integer(1),
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");
}

#[test]
fn test_condition_type_fusion() {
    let table = declared_table();

    let condition = Condition::new(
        RelationKind::GreaterThan,
        Expr::reference("x", &table, Position::null()).unwrap(),
        Expr::integer(3),
        Position::null(),
    )
    .unwrap();
    assert_eq!(condition.operand_type, SymbolType::Integer);

    let condition = Condition::new(
        RelationKind::EqualTo,
        Expr::float(2.5),
        Expr::reference("f", &table, Position::null()).unwrap(),
        Position::null(),
    )
    .unwrap();
    assert_eq!(condition.operand_type, SymbolType::Float);

    let error = Condition::new(
        RelationKind::LessThan,
        Expr::integer(1),
        Expr::float(1.0),
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");
}

#[test]
fn test_assignment_type_check() {
    let table = declared_table();

    let assignment = Stmt::assignment("x", Expr::integer(7), &table, Position::null()).unwrap();
    match assignment {
        Stmt::Assignment { resolved_type, .. } => {
            assert_eq!(resolved_type, SymbolType::Integer);
        }
        other => panic!("Expected an assignment, got {:?}", other),
    }

    let error = Stmt::assignment("x", Expr::float(7.0), &table, Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error = Stmt::assignment("f", Expr::integer(7), &table, Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error =
        Stmt::assignment("missing", Expr::integer(7), &table, Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_operation_over_reference() {
    let table = declared_table();

    let sum = Expr::operation(
        OperationKind::Sum,
        Expr::integer(2),
        Expr::reference("x", &table, Position::null()).unwrap(),
        Position::null(),
    )
    .unwrap();
    assert_eq!(sum.resolved_type(), SymbolType::Integer);

    // Using the integer reference against a float literal fails.
    let error = Expr::operation(
        OperationKind::Sum,
        Expr::reference("x", &table, Position::null()).unwrap(),
        Expr::float(2.0),
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");
}

#[test]
fn test_for_statement_requires_agreeing_types() {
    let table = declared_table();

    let for_stmt = Stmt::for_statement(
        "x",
        Expr::integer(0),
        Expr::integer(1),
        Expr::integer(10),
        Stmt::Empty,
        &table,
        Position::null(),
    )
    .unwrap();
    match for_stmt {
        Stmt::For { loop_type, .. } => assert_eq!(loop_type, SymbolType::Integer),
        other => panic!("Expected a for statement, got {:?}", other),
    }

    // Each of start, step and stop is checked against the loop
    // variable's declared type.
    let error = Stmt::for_statement(
        "x",
        Expr::float(0.0),
        Expr::integer(1),
        Expr::integer(10),
        Stmt::Empty,
        &table,
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error = Stmt::for_statement(
        "x",
        Expr::integer(0),
        Expr::float(1.0),
        Expr::integer(10),
        Stmt::Empty,
        &table,
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error = Stmt::for_statement(
        "x",
        Expr::integer(0),
        Expr::integer(1),
        Expr::float(10.0),
        Stmt::Empty,
        &table,
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "TypeMatchError");

    let error = Stmt::for_statement(
        "missing",
        Expr::integer(0),
        Expr::integer(1),
        Expr::integer(10),
        Stmt::Empty,
        &table,
        Position::null(),
    )
    .unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}

#[test]
fn test_read_resolves_target_type() {
    let table = declared_table();

    let read = Stmt::read("f", &table, Position::null()).unwrap();
    match read {
        Stmt::Read { target_type, .. } => assert_eq!(target_type, SymbolType::Float),
        other => panic!("Expected a read statement, got {:?}", other),
    }

    let error = Stmt::read("missing", &table, Position::null()).unwrap_err();
    assert_eq!(error.get_error_name(), "VariableNotDeclared");
}
