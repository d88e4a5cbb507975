use clap::Parser;
use lecture1::config::Limits;
use lecture1::repeater;
use lecture1_cli::{init_tracing, stdio_console};
use tracing::info;

/// Print a word as many times as asked.
///
/// Asks for a word of at most 9 characters and a non-negative count on standard input.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    init_tracing();

    let limits = Limits::default();
    let mut console = stdio_console();
    let request = repeater::run(&mut console, &limits)?;
    info!(count = request.count, "repeat finished");
    Ok(())
}
