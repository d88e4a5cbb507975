//! Asks for a name and greets it.
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Limits;
use crate::console::{Console, ConsoleError};

pub const NAME_PROMPT: &str = "Please enter your name: ";

/// The greeting for `name`, taken verbatim. A name read with its trailing
/// newline puts the `!` on a line of its own.
pub fn greeting(name: &str) -> String {
    format!("Hello, {name}!\n")
}

/// Runs the dialogue and returns the name as it was read. An empty input
/// reads as an empty name.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, limits: &Limits) -> Result<String, ConsoleError> {
    console.prompt(NAME_PROMPT)?;
    let name = console.read_line(limits.max_name_len())?.unwrap_or_default();
    debug!(len = name.chars().count(), "read name");

    console.write(&greeting(&name))?;
    console.flush()?;
    Ok(name)
}
