use clap::Parser;
use lecture1::config::Limits;
use lecture1::greeter;
use lecture1_cli::{init_tracing, stdio_console};

/// Greet whoever types their name.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    init_tracing();

    let mut console = stdio_console();
    greeter::run(&mut console, &Limits::default())?;
    Ok(())
}
