use std::io::{self, BufRead, Write};

use crate::{
    ast::statements::Stmt,
    errors::errors::{Error, ErrorImpl},
    symbol_table::symbol_table::{SymbolTable, SymbolType, Value},
    Position,
};

use super::expr::{evaluate_condition, evaluate_float, evaluate_integer};

/// The statement executor.
///
/// Walks one well-typed statement tree, mutating the borrowed table
/// and performing reads and prints against the supplied handles. The
/// handles are generic so tests and embedders can substitute buffers
/// for the console.
pub struct Interpreter<'a, R: BufRead, W: Write> {
    table: &'a mut SymbolTable,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Interpreter<'a, R, W> {
    pub fn new(table: &'a mut SymbolTable, input: R, output: W) -> Self {
        Interpreter {
            table,
            input,
            output,
        }
    }

    /// Executes one statement tree to completion.
    ///
    /// Runtime numeric faults keep their native semantics and are not
    /// intercepted here; read and print failures abort the run as
    /// fatal errors.
    pub fn run(&mut self, statement: &Stmt) -> Result<(), Error> {
        match statement {
            Stmt::Empty => Ok(()),
            Stmt::Sequence { first, second } => {
                self.run(first)?;
                self.run(second)
            }
            Stmt::Assignment {
                identifier,
                resolved_type,
                expression,
            } => {
                let value = match resolved_type {
                    SymbolType::Integer => Value::Integer(evaluate_integer(expression, self.table)),
                    SymbolType::Float => Value::Float(evaluate_float(expression, self.table)),
                };
                self.table
                    .update(identifier, value)
                    .expect("assignment target resolved at construction");
                Ok(())
            }
            Stmt::If { condition, body } => {
                if evaluate_condition(condition, self.table) {
                    self.run(body)?;
                }
                Ok(())
            }
            Stmt::While { condition, body } => {
                while evaluate_condition(condition, self.table) {
                    self.run(body)?;
                }
                Ok(())
            }
            Stmt::For {
                identifier,
                loop_type,
                start,
                step,
                stop,
                body,
            } => match loop_type {
                SymbolType::Integer => {
                    let mut iterator = evaluate_integer(start, self.table);
                    // Step and stop are fixed for the whole loop.
                    let step_value = evaluate_integer(step, self.table);
                    let stop_value = evaluate_integer(stop, self.table);

                    self.table
                        .update(identifier, Value::Integer(iterator))
                        .expect("loop variable resolved at construction");

                    // Ascending only: the body always runs once, then
                    // the loop continues while iterator <= stop.
                    loop {
                        self.run(body)?;
                        iterator += step_value;
                        self.table
                            .update(identifier, Value::Integer(iterator))
                            .expect("loop variable resolved at construction");
                        if iterator > stop_value {
                            break;
                        }
                    }
                    Ok(())
                }
                SymbolType::Float => {
                    let mut iterator = evaluate_float(start, self.table);
                    let step_value = evaluate_float(step, self.table);
                    let stop_value = evaluate_float(stop, self.table);

                    self.table
                        .update(identifier, Value::Float(iterator))
                        .expect("loop variable resolved at construction");

                    loop {
                        self.run(body)?;
                        iterator += step_value;
                        self.table
                            .update(identifier, Value::Float(iterator))
                            .expect("loop variable resolved at construction");
                        if iterator > stop_value {
                            break;
                        }
                    }
                    Ok(())
                }
            },
            Stmt::Read {
                identifier,
                target_type,
            } => {
                let token = self.next_token()?;
                let value = match target_type {
                    SymbolType::Integer => Value::Integer(token.parse().map_err(|_| {
                        Error::new(
                            ErrorImpl::MalformedInput {
                                token: token.clone(),
                                expected: SymbolType::Integer.to_string(),
                            },
                            Position::null(),
                        )
                    })?),
                    SymbolType::Float => Value::Float(token.parse().map_err(|_| {
                        Error::new(
                            ErrorImpl::MalformedInput {
                                token: token.clone(),
                                expected: SymbolType::Float.to_string(),
                            },
                            Position::null(),
                        )
                    })?),
                };
                self.table
                    .update(identifier, value)
                    .expect("read target resolved at construction");
                Ok(())
            }
            Stmt::Print { expression } => {
                let result = match expression.resolved_type() {
                    SymbolType::Integer => {
                        writeln!(self.output, "{}", evaluate_integer(expression, self.table))
                    }
                    // Fixed notation with six fractional digits.
                    SymbolType::Float => {
                        writeln!(self.output, "{:.6}", evaluate_float(expression, self.table))
                    }
                };
                result.map_err(|error| {
                    Error::new(
                        ErrorImpl::OutputFailure {
                            message: error.to_string(),
                        },
                        Position::null(),
                    )
                })
            }
        }
    }

    /// Reads one whitespace-delimited token from the input stream,
    /// skipping leading whitespace. End of stream before any token
    /// byte is a fatal error.
    fn next_token(&mut self) -> Result<String, Error> {
        let mut token = String::new();

        loop {
            let (used, finished) = {
                let buffer = self.input.fill_buf().map_err(|error| {
                    Error::new(
                        ErrorImpl::InputFailure {
                            message: error.to_string(),
                        },
                        Position::null(),
                    )
                })?;

                if buffer.is_empty() {
                    if token.is_empty() {
                        return Err(Error::new(ErrorImpl::UnexpectedEndOfInput, Position::null()));
                    }
                    return Ok(token);
                }

                let mut used = 0;
                let mut finished = false;
                for &byte in buffer {
                    used += 1;
                    if byte.is_ascii_whitespace() {
                        if token.is_empty() {
                            continue;
                        }
                        finished = true;
                        break;
                    }
                    token.push(byte as char);
                }
                (used, finished)
            };

            self.input.consume(used);
            if finished {
                return Ok(token);
            }
        }
    }
}

/// Executes a statement tree against the console, for the external
/// driver: the parser hands over the root node and the table it
/// populated, and execution runs once to completion.
pub fn execute(statement: &Stmt, table: &mut SymbolTable) -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut interpreter = Interpreter::new(table, stdin.lock(), stdout.lock());
    interpreter.run(statement)
}
