//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Replace the Khiin debug build's resources with a fresh copy.
///
/// With no arguments, mirrors `resources/` next to this executable into
/// `KhiinWin/x64/Debug/resources/`, deleting whatever was there before.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "resync")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Directory both default paths are resolved against
    /// [default: directory of this executable]
    #[arg(long, value_name = "DIR")]
    pub base_dir: Option<PathBuf>,

    /// Source tree to copy from [default: <base>/resources]
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Destination tree to replace [default: <base>/KhiinWin/x64/Debug/resources]
    #[arg(long, value_name = "DIR")]
    pub destination: Option<PathBuf>,

    /// Show what would be removed and copied without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Output the report as JSON
    #[arg(long)]
    pub json: bool,
}
