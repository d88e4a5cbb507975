use std::num::IntErrorKind;

use thiserror::Error;

use crate::ops::Operation;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("Expected an integer, got `{0}`.")]
    NotAnInteger(String),
    #[error("Expected a number, got `{0}`.")]
    NotANumber(String),
    #[error("The count must not be negative, got {0}.")]
    NegativeCount(i64),
    #[error("The word is {len} characters long, at most {max} fit.")]
    WordTooLong { len: usize, max: usize },
}

/// Parses an operation selector. Returns `None` for integers outside `1..=4`,
/// those take the "invalid operation" branch rather than failing. Integers too
/// large for `i64` are out of range too.
pub fn parse_selector(token: &str) -> Result<Option<Operation>, ParserError> {
    match token.parse::<i64>() {
        Ok(selector) => Ok(Operation::from_selector(selector)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => Ok(None),
        Err(_) => Err(ParserError::NotAnInteger(token.to_string())),
    }
}

/// Parses a finite number. `inf` and `nan` are rejected.
pub fn parse_operand(token: &str) -> Result<f32, ParserError> {
    match token.parse::<f32>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ParserError::NotANumber(token.to_string())),
    }
}

pub fn parse_count(token: &str) -> Result<u64, ParserError> {
    let count = parse_integer(token)?;
    u64::try_from(count).map_err(|_| ParserError::NegativeCount(count))
}

/// Checks a word against the maximum length, counted in characters.
pub fn parse_word(token: &str, max_len: usize) -> Result<String, ParserError> {
    let len = token.chars().count();
    if len > max_len {
        return Err(ParserError::WordTooLong { len, max: max_len });
    }
    Ok(token.to_string())
}

fn parse_integer(token: &str) -> Result<i64, ParserError> {
    // `+3` is accepted just like `3`.
    token
        .parse::<i64>()
        .map_err(|_| ParserError::NotAnInteger(token.to_string()))
}
