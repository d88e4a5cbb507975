//! Shared setup for the lecture 1 executables.
use std::io::{self, StdinLock, StdoutLock};

use lecture1::console::Console;
use tracing_subscriber::EnvFilter;

/// Sends logs to stderr so stdout carries only the program dialogue.
/// `RUST_LOG` picks the level, nothing below `warn` is shown by default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

pub fn stdio_console() -> Console<StdinLock<'static>, StdoutLock<'static>> {
    Console::new(io::stdin().lock(), io::stdout().lock())
}
