//! mlscaffold CLI
//!
//! Usage: mlscaffold [OPTIONS] <NAME>

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let code = commands::new::cmd_new(&cli)?;
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
