//! Asks for a word and a count, then prints the word that many times.
use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Limits;
use crate::console::{Console, ConsoleError};
use crate::parser;

pub const WORD_PROMPT: &str = "Enter a word: ";
pub const COUNT_PROMPT: &str = "Enter a number:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub word: String,
    pub count: u64,
}

/// Reads the word and the count. Both are handed back to the caller.
pub fn ask_user<R: BufRead, W: Write>(console: &mut Console<R, W>, limits: &Limits) -> Result<Request, ConsoleError> {
    console.prompt(WORD_PROMPT)?;
    let word = parser::parse_word(&console.next_token("a word")?, limits.max_word_len())?;

    console.prompt(COUNT_PROMPT)?;
    let count = parser::parse_count(&console.next_token("a number")?)?;

    debug!(word = word.as_str(), count, "read request");
    Ok(Request { word, count })
}

/// Prints `word` `count` times, without separators and without a trailing newline.
pub fn repeat<W: Write>(out: &mut W, word: &str, count: u64) -> std::io::Result<()> {
    for _ in 0..count {
        out.write_all(word.as_bytes())?;
    }
    out.flush()
}

pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, limits: &Limits) -> Result<Request, ConsoleError> {
    let request = ask_user(console, limits)?;
    repeat(console.writer(), &request.word, request.count)?;
    Ok(request)
}
