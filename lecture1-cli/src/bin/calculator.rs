use clap::Parser;
use lecture1::calculator;
use lecture1_cli::{init_tracing, stdio_console};
use tracing::info;

/// Add, subtract, multiply or divide two numbers.
///
/// Asks for an operation (1-4) and two numbers on standard input.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    init_tracing();

    let mut console = stdio_console();
    let outcome = calculator::run(&mut console)?;
    info!(?outcome, "calculator finished");
    Ok(())
}
