//! resource-sync CLI
//!
//! Mirrors the Khiin resources into the Windows debug build output.

mod cli;
mod commands;
mod error;
mod logging;

use std::error::Error as _;

use clap::Parser;
use colored::Colorize;

use cli::Cli;
use commands::SyncOptions;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), describe(&e));
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;
    tracing::debug!(?cli, "Parsed arguments");

    let options = SyncOptions::from(&cli);
    if cli.dry_run {
        commands::run_dry_run(&options)
    } else {
        commands::run_sync(&options)
    }
}

/// One-line diagnostic: the failing step, the error and its causes.
fn describe(err: &CliError) -> String {
    let mut message = match err {
        CliError::Core(core) => format!("[{}] {}", core.step(), core),
        other => other.to_string(),
    };
    let mut source = match err {
        CliError::Core(core) => core.source(),
        other => other.source(),
    };
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
