//! Sync and dry-run command implementations

use std::path::{Component, Path, PathBuf};

use colored::Colorize;

use resync_core::{ResourceSync, SyncPaths, SyncPlan, SyncReport, executable_dir};
use resync_fs::NormalizedPath;

use crate::cli::Cli;
use crate::error::{CliError, Result};

/// Path overrides and output options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct SyncOptions {
    pub base_dir: Option<PathBuf>,
    pub source: Option<PathBuf>,
    pub destination: Option<PathBuf>,
    pub json: bool,
}

impl From<&Cli> for SyncOptions {
    fn from(cli: &Cli) -> Self {
        Self {
            base_dir: cli.base_dir.clone(),
            source: cli.source.clone(),
            destination: cli.destination.clone(),
            json: cli.json,
        }
    }
}

/// Work out the source and destination for this invocation.
///
/// Explicit `--source`/`--destination` win; anything left unset is derived
/// from `--base-dir`, or from the executable's directory when that is unset
/// too. The executable is only located if a default is actually needed.
pub fn resolve_paths(options: &SyncOptions) -> Result<SyncPaths> {
    let paths = match (&options.source, &options.destination) {
        (Some(source), Some(destination)) => {
            SyncPaths::new(absolute(source)?, absolute(destination)?)
        }
        _ => {
            let base = match &options.base_dir {
                Some(base) => absolute(base)?,
                None => executable_dir()?,
            };
            let mut paths = SyncPaths::from_base_dir(base);
            if let Some(source) = &options.source {
                paths.source = absolute(source)?;
            }
            if let Some(destination) = &options.destination {
                paths.destination = absolute(destination)?;
            }
            paths
        }
    };

    check_disjoint(&paths)?;
    tracing::debug!(
        source = %NormalizedPath::new(&paths.source),
        destination = %NormalizedPath::new(&paths.destination),
        "Using paths"
    );
    Ok(paths)
}

/// Run the sync
///
/// Replaces the destination with a copy of the source and prints the report.
pub fn run_sync(options: &SyncOptions) -> Result<()> {
    let paths = resolve_paths(options)?;

    if !options.json {
        println!(
            "{} Syncing {} -> {}",
            "=>".blue().bold(),
            NormalizedPath::new(&paths.source).as_str().cyan(),
            NormalizedPath::new(&paths.destination).as_str().cyan()
        );
    }

    let report = ResourceSync::new(paths).run()?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

/// Run the dry-run
///
/// Reports what `run_sync` would do without touching the filesystem.
pub fn run_dry_run(options: &SyncOptions) -> Result<()> {
    let paths = resolve_paths(options)?;
    let plan = ResourceSync::new(paths).plan()?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_report(report: &SyncReport) {
    if report.removed_existing {
        println!(
            "   {} removed {}",
            "-".yellow(),
            report.destination.dimmed()
        );
    }
    println!(
        "{} Synced {} files in {} directories ({} bytes)",
        "OK".green().bold(),
        report.files_copied,
        report.directories_copied,
        report.bytes_copied
    );
}

fn print_plan(plan: &SyncPlan) {
    println!("{} Dry run, nothing will be changed", "=>".blue().bold());
    if plan.will_remove {
        println!("   [dry-run] Would remove {}", plan.destination.cyan());
    }
    if plan.will_fail() {
        println!(
            "   {} Source {} does not exist; a real run would fail after removal",
            "!".red(),
            plan.source.cyan()
        );
    } else {
        println!(
            "   [dry-run] Would copy {} files in {} directories ({} bytes) from {} to {}",
            plan.files,
            plan.directories,
            plan.bytes,
            plan.source.cyan(),
            plan.destination.cyan()
        );
    }
}

fn absolute(path: &Path) -> Result<PathBuf> {
    Ok(std::path::absolute(path)?)
}

/// Resolve `..` and symlinks as the filesystem would.
///
/// A path that does not exist yet is resolved through its nearest existing
/// ancestor, with the remaining components applied lexically on top.
fn resolve_real(path: &Path) -> Result<PathBuf> {
    let mut pending = Vec::new();
    let mut current = path;
    let mut resolved = loop {
        match dunce::canonicalize(current) {
            Ok(resolved) => break resolved,
            Err(e) => match (current.components().next_back(), current.parent()) {
                (Some(last), Some(parent)) => {
                    pending.push(last);
                    current = parent;
                }
                _ => return Err(e.into()),
            },
        }
    };

    for component in pending.into_iter().rev() {
        match component {
            Component::ParentDir => {
                resolved.pop();
            }
            Component::CurDir => {}
            other => resolved.push(other),
        }
    }
    Ok(resolved)
}

/// Reject paths where removing the destination would delete the source.
fn check_disjoint(paths: &SyncPaths) -> Result<()> {
    let source = resolve_real(&paths.source)?;
    let destination = resolve_real(&paths.destination)?;
    if source.starts_with(&destination) || destination.starts_with(&source) {
        return Err(CliError::user(format!(
            "Source {} and destination {} must not contain one another",
            NormalizedPath::new(&paths.source),
            NormalizedPath::new(&paths.destination)
        )));
    }
    Ok(())
}
