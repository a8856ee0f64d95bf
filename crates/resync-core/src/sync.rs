//! The remove-then-copy sync itself

use std::fmt;
use std::path::Path;

use resync_fs::{NormalizedPath, io};

use crate::report::{SyncPlan, SyncReport};
use crate::{Error, Result, SyncPaths};

/// Lifecycle of a [`ResourceSync`]. Both `Done` and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncState {
    Idle,
    Done,
    Failed,
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Done => "done",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// A single replacement of the destination tree with a copy of the source.
#[derive(Debug)]
pub struct ResourceSync {
    paths: SyncPaths,
    state: SyncState,
}

impl ResourceSync {
    pub fn new(paths: SyncPaths) -> Self {
        Self {
            paths,
            state: SyncState::Idle,
        }
    }

    pub fn paths(&self) -> &SyncPaths {
        &self.paths
    }

    pub fn state(&self) -> SyncState {
        self.state
    }

    /// Inspect both trees and describe what [`run`](Self::run) would do.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Copy`] if the source exists but cannot be walked.
    pub fn plan(&self) -> Result<SyncPlan> {
        let SyncPaths {
            source,
            destination,
        } = &self.paths;

        let stats = if source.is_dir() {
            Some(io::tree_stats(source).map_err(|e| Error::Copy {
                path: destination.clone(),
                source: e,
            })?)
        } else {
            None
        };
        let stats_or_default = stats.unwrap_or_default();

        Ok(SyncPlan {
            source: NormalizedPath::new(source).into(),
            destination: NormalizedPath::new(destination).into(),
            source_exists: stats.is_some(),
            will_remove: io::is_present(destination),
            files: stats_or_default.files,
            directories: stats_or_default.directories,
            bytes: stats_or_default.bytes,
        })
    }

    /// Remove the destination if present, then copy the source into its place.
    ///
    /// A sync runs at most once: afterwards its state is `Done` or `Failed`
    /// and further calls return [`Error::AlreadyRun`].
    ///
    /// # Errors
    ///
    /// - [`Error::Removal`] if the old destination cannot be deleted; no copy is attempted
    /// - [`Error::SourceMissing`] if the source is not a directory; the
    ///   destination stays deleted
    /// - [`Error::Copy`] if the copy fails part way; the destination stays partial
    pub fn run(&mut self) -> Result<SyncReport> {
        if self.state != SyncState::Idle {
            return Err(Error::AlreadyRun { state: self.state });
        }

        let result = execute(&self.paths);
        self.state = if result.is_ok() {
            SyncState::Done
        } else {
            SyncState::Failed
        };
        result
    }
}

/// Run a one-off sync over `paths`.
pub fn sync_resources(paths: &SyncPaths) -> Result<SyncReport> {
    ResourceSync::new(paths.clone()).run()
}

fn execute(paths: &SyncPaths) -> Result<SyncReport> {
    let SyncPaths {
        source,
        destination,
    } = paths;

    let removed_existing = clear_destination(destination)?;

    if !source.is_dir() {
        if removed_existing {
            tracing::warn!(
                destination = %NormalizedPath::new(destination),
                "Destination was removed but cannot be repopulated"
            );
        }
        return Err(Error::SourceMissing {
            path: source.clone(),
            source: None,
        });
    }

    let stats = io::copy_tree(source, destination).map_err(|e| {
        if e.is_not_found() {
            // Source vanished between the check and the copy
            Error::SourceMissing {
                path: source.clone(),
                source: Some(e),
            }
        } else {
            Error::Copy {
                path: destination.clone(),
                source: e,
            }
        }
    })?;

    tracing::info!(
        source = %NormalizedPath::new(source),
        destination = %NormalizedPath::new(destination),
        files = stats.files,
        bytes = stats.bytes,
        "Resources synced"
    );

    Ok(SyncReport {
        source: NormalizedPath::new(source).into(),
        destination: NormalizedPath::new(destination).into(),
        removed_existing,
        files_copied: stats.files,
        directories_copied: stats.directories,
        bytes_copied: stats.bytes,
    })
}

fn clear_destination(destination: &Path) -> Result<bool> {
    let removed = io::remove_if_present(destination).map_err(|e| Error::Removal {
        path: destination.to_path_buf(),
        source: e,
    })?;
    if removed {
        tracing::info!(
            destination = %NormalizedPath::new(destination),
            "Removed stale destination"
        );
    }
    Ok(removed)
}
