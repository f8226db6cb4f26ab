//! AutoML benchmark harness CLI
//!
//! Resolves the run configuration and prints framework and benchmark
//! definitions as the harness sees them.

mod cli;
mod commands;
mod error;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose).map_err(|e| CliError::user(format!("Failed to set up logging: {e}")))?;
    tracing::debug!(command = ?cli.command, "Running command");

    commands::run(&cli)
}
