//! [`TestTree`] fixture for sync scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use resync_fs::ResourcePath;
use tempfile::TempDir;

use crate::snapshot::{TreeSnapshot, snapshot_tree};

/// A temporary base directory holding `resources/` and, optionally, a stale
/// `KhiinWin/x64/Debug/resources/`.
///
/// # Example
///
/// ```rust,no_run
/// use resync_test_utils::TestTree;
///
/// let tree = TestTree::new()
///     .with_source_file("a.txt", "hello")
///     .with_destination_file("old.dat", "stale");
/// tree.assert_destination_missing("a.txt");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// An empty base directory: neither tree exists yet.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("TestTree::new: failed to create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn source_dir(&self) -> PathBuf {
        self.root().join(ResourcePath::Resources)
    }

    pub fn destination_dir(&self) -> PathBuf {
        self.root().join(ResourcePath::BuildResources)
    }

    /// Create the source root, even if it stays empty.
    pub fn with_source_dir(self) -> Self {
        fs::create_dir_all(self.source_dir()).expect("TestTree: create source dir");
        self
    }

    pub fn with_source_file(self, rel: &str, content: impl AsRef<[u8]>) -> Self {
        write_file(&self.source_dir().join(rel), content.as_ref());
        self
    }

    pub fn with_destination_file(self, rel: &str, content: impl AsRef<[u8]>) -> Self {
        write_file(&self.destination_dir().join(rel), content.as_ref());
        self
    }

    pub fn source_snapshot(&self) -> TreeSnapshot {
        snapshot_tree(&self.source_dir())
    }

    pub fn destination_snapshot(&self) -> TreeSnapshot {
        snapshot_tree(&self.destination_dir())
    }

    /// Panics unless `rel` exists under the destination with exactly `expected`.
    pub fn assert_destination_file(&self, rel: &str, expected: &str) {
        let path = self.destination_dir().join(rel);
        let actual = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("expected {} to be readable: {e}", path.display()));
        assert_eq!(actual, expected, "content mismatch in {}", path.display());
    }

    pub fn assert_destination_missing(&self, rel: &str) {
        let path = self.destination_dir().join(rel);
        assert!(
            fs::symlink_metadata(&path).is_err(),
            "expected {} to be absent",
            path.display()
        );
    }
}

fn write_file(path: &Path, content: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("TestTree: create parent dirs");
    }
    fs::write(path, content).expect("TestTree: write file");
}
