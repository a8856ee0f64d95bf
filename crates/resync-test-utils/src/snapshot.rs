//! Whole-tree snapshots.
//!
//! A snapshot maps every entry's relative path to either `"dir"` or the
//! file's `sha256:` checksum, so two trees are mirrors exactly when their
//! snapshots are equal. Symlinks are followed, matching how the sync copies.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use resync_fs::checksum::compute_file_checksum;
use walkdir::WalkDir;

/// Relative path -> `"dir"` or `sha256:<hex>`.
pub type TreeSnapshot = BTreeMap<PathBuf, String>;

/// Snapshot everything beneath `root`, excluding `root` itself.
///
/// Panics if `root` is not a readable directory.
pub fn snapshot_tree(root: &Path) -> TreeSnapshot {
    let mut snapshot = TreeSnapshot::new();
    for entry in WalkDir::new(root).min_depth(1).follow_links(true) {
        let entry = entry
            .unwrap_or_else(|e| panic!("snapshot_tree: cannot walk {}: {e}", root.display()));
        let rel = entry
            .path()
            .strip_prefix(root)
            .unwrap_or_else(|e| panic!("snapshot_tree: {e}"))
            .to_path_buf();

        let value = if entry.file_type().is_dir() {
            "dir".to_string()
        } else {
            compute_file_checksum(entry.path()).unwrap_or_else(|e| panic!("snapshot_tree: {e}"))
        };
        snapshot.insert(rel, value);
    }
    snapshot
}
