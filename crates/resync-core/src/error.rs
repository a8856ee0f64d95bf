//! Error types for resync-core

use std::path::PathBuf;

use crate::sync::SyncState;

/// Result type for resync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a resource sync.
///
/// Every variant is fatal. None of them undo filesystem changes already made
/// by earlier steps.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The directory of the running executable could not be determined
    #[error("Could not resolve the executable's directory: {message}")]
    PathResolution { message: String },

    /// The stale destination exists but could not be removed
    #[error("Failed to remove destination {path}")]
    Removal {
        path: PathBuf,
        #[source]
        source: resync_fs::Error,
    },

    /// The source is missing or not a directory; the destination has already
    /// been removed at this point and is left absent
    #[error("Source directory {path} is missing or not a directory")]
    SourceMissing {
        path: PathBuf,
        #[source]
        source: Option<resync_fs::Error>,
    },

    /// Copying the tree failed part way; the destination may be partial
    #[error("Failed to copy resources into {path}")]
    Copy {
        path: PathBuf,
        #[source]
        source: resync_fs::Error,
    },

    /// `run` was called on a sync that already finished
    #[error("Sync already ran (state: {state})")]
    AlreadyRun { state: SyncState },
}

impl Error {
    /// Name of the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            Self::PathResolution { .. } => "resolve",
            Self::Removal { .. } => "remove",
            Self::SourceMissing { .. } | Self::Copy { .. } => "copy",
            Self::AlreadyRun { .. } => "run",
        }
    }
}
