//! Outcome types for sync runs and dry runs

use serde::{Deserialize, Serialize};

/// Result of a completed sync.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncReport {
    pub source: String,
    pub destination: String,
    /// Whether a previous destination was found and removed
    pub removed_existing: bool,
    pub files_copied: usize,
    /// Subdirectories created beneath the destination root
    pub directories_copied: usize,
    pub bytes_copied: u64,
}

/// What a sync would do, computed without touching the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncPlan {
    pub source: String,
    pub destination: String,
    pub source_exists: bool,
    /// Whether the removal step would delete something
    pub will_remove: bool,
    pub files: usize,
    pub directories: usize,
    pub bytes: u64,
}

impl SyncPlan {
    /// A run following this plan would fail at the copy step.
    pub fn will_fail(&self) -> bool {
        !self.source_exists
    }
}
