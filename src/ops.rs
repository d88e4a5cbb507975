use thiserror::Error;

/// An arithmetic operation the calculator can perform.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OperationError {
    #[error("Division by zero")]
    DivisionByZero,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn from_selector(selector: i64) -> Option<Operation> {
        match selector {
            1 => Some(Operation::Add),
            2 => Some(Operation::Subtract),
            3 => Some(Operation::Multiply),
            4 => Some(Operation::Divide),
            _ => None,
        }
    }

    pub fn selector(self) -> i64 {
        match self {
            Operation::Add => 1,
            Operation::Subtract => 2,
            Operation::Multiply => 3,
            Operation::Divide => 4,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Subtract => "Subtract",
            Operation::Multiply => "Multiply",
            Operation::Divide => "Divide",
        }
    }

    /// Applies the operation. Overflow follows IEEE 754 and yields an infinity,
    /// only a zero divisor (of either sign) is an error.
    pub fn apply(self, a: f32, b: f32) -> Result<f32, OperationError> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    return Err(OperationError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}
