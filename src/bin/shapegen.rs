use anyhow::Result;
use clap::Parser;
use std::io::IsTerminal;

use shapegen::cli::args::CliArgs;
use shapegen::cli::driver;

fn main() -> Result<()> {
    let args = CliArgs::parse();
    // Initialize tracing if SHAPEGEN_LOG or RUST_LOG is set.
    shapegen::tracing_config::init_tracing(!args.no_color && std::io::stderr().is_terminal());

    let color = !args.no_color && std::io::stdout().is_terminal();
    let output = driver::run(&args, color)?;
    print!("{output}");
    Ok(())
}
