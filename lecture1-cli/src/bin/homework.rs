use std::io::Write;

use clap::Parser;
use lecture1::rectangle::Rectangle;
use lecture1_cli::init_tracing;

/// Draw the 5x10 homework rectangle. Reads no input.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {}

fn main() -> anyhow::Result<()> {
    let _args = Args::parse();
    init_tracing();

    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}", Rectangle::HOMEWORK)?;
    stdout.flush()?;
    Ok(())
}
