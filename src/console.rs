//! Line and token reading over any buffered input, with prompts written to any output.
//!
//! Tokens are read the way `scanf` reads them: leading whitespace (newlines
//! and vertical tabs included) is skipped and the whitespace ending a token is
//! left unread. Lines are read the way `fgets` reads them: up to a character
//! limit, stopping after the first newline, which is kept.
use std::io::{self, BufRead, Write};

use thiserror::Error;
use tracing::trace;

use crate::parser::ParserError;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Input ended before {expected} was entered")]
    UnexpectedEof { expected: &'static str },
    #[error(transparent)]
    Parse(#[from] ParserError),
}

/// The bytes C's `isspace` accepts in the default locale.
fn is_space(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b'\x0B'
}

pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    /// Writes `text` without a newline and flushes, so it shows up before we block on input.
    pub fn prompt(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }

    pub fn write(&mut self, text: &str) -> Result<(), ConsoleError> {
        self.output.write_all(text.as_bytes())?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), ConsoleError> {
        self.output.flush()?;
        Ok(())
    }

    /// Reads the next whitespace-delimited token.
    /// `expected` names the value in the error if the input ends first.
    pub fn next_token(&mut self, expected: &'static str) -> Result<String, ConsoleError> {
        let mut token = Vec::new();
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                if is_space(byte) {
                    if token.is_empty() {
                        used += 1;
                        continue;
                    }
                    complete = true;
                    break;
                }
                token.push(byte);
                used += 1;
            }
            self.input.consume(used);
            if complete {
                break;
            }
        }

        if token.is_empty() {
            return Err(ConsoleError::UnexpectedEof { expected });
        }
        let token = String::from_utf8(token).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        trace!(expected, token = token.as_str(), "read token");
        Ok(token)
    }

    /// Reads at most `max_chars` characters, stopping after the first `\n`.
    /// Characters beyond the limit stay in the input. Returns `None` only when
    /// the input is already exhausted. Invalid UTF-8 is replaced with U+FFFD,
    /// each stray byte counting as one character.
    pub fn read_line(&mut self, max_chars: usize) -> Result<Option<String>, ConsoleError> {
        let mut line = Vec::new();
        let mut chars = 0;
        let mut any_read = false;
        loop {
            let buf = self.input.fill_buf()?;
            if buf.is_empty() {
                break;
            }
            any_read = true;
            let mut used = 0;
            let mut complete = false;
            for &byte in buf {
                // UTF-8 continuation bytes belong to the character before them
                let starts_char = byte & 0xC0 != 0x80;
                if starts_char {
                    if chars == max_chars {
                        complete = true;
                        break;
                    }
                    chars += 1;
                }
                line.push(byte);
                used += 1;
                if byte == b'\n' {
                    complete = true;
                    break;
                }
            }
            self.input.consume(used);
            if complete {
                break;
            }
        }

        if !any_read {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&line).into_owned();
        trace!(chars, "read line");
        Ok(Some(line))
    }

    pub fn writer(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
