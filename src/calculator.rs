//! The calculator: pick one of four operations, enter two numbers, get the result.
use std::fmt;
use std::io::{BufRead, Write};

use tracing::debug;

use crate::console::{Console, ConsoleError};
use crate::ops::{Operation, OperationError};
use crate::parser;

pub const WELCOME: &str = "Welcome to the calculator app!";
pub const SELECT_PROMPT: &str = "Select an operation: 1. Add 2. Subtract 3. Multiply 4. Divide: ";
pub const FIRST_PROMPT: &str = "Enter number 1: ";
pub const SECOND_PROMPT: &str = "Enter number 2: ";

/// What the calculator ends up printing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Result(f32),
    InvalidOperation,
    DivisionByZero,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Result(value) => write!(f, "Result: {value:.6}"),
            Outcome::InvalidOperation => write!(f, "Invalid operation!"),
            Outcome::DivisionByZero => write!(f, "Cannot divide by zero!"),
        }
    }
}

/// Applies the selected operation, if there is one.
pub fn calculate(operation: Option<Operation>, a: f32, b: f32) -> Outcome {
    let Some(operation) = operation else {
        return Outcome::InvalidOperation;
    };
    match operation.apply(a, b) {
        Ok(value) => Outcome::Result(value),
        Err(OperationError::DivisionByZero) => Outcome::DivisionByZero,
    }
}

/// Runs the whole dialogue. Both numbers are asked for even when the
/// selector is out of range.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Outcome, ConsoleError> {
    console.prompt(WELCOME)?;
    console.prompt(SELECT_PROMPT)?;
    let operation = parser::parse_selector(&console.next_token("an operation")?)?;
    debug!(operation = operation.map(Operation::name), "selected operation");

    console.prompt(FIRST_PROMPT)?;
    let a = parser::parse_operand(&console.next_token("number 1")?)?;
    console.prompt(SECOND_PROMPT)?;
    let b = parser::parse_operand(&console.next_token("number 2")?)?;
    debug!(a, b, "read operands");

    let outcome = calculate(operation, a, b);
    debug!(?outcome, "calculated");
    console.write(&outcome.to_string())?;
    console.write("\n")?;
    console.flush()?;
    Ok(outcome)
}
