//! Display form for filesystem paths
//!
//! I/O always goes through the original `Path`; this type only exists so
//! reports and log lines show the same separators on every platform.

use std::path::{Path, PathBuf};

/// A path rendered with forward slashes.
///
/// Backslashes are only rewritten on Windows, where they are separators; on
/// Unix they are ordinary filename characters and are kept. Names that are
/// not valid UTF-8 are rendered lossily, which is why this type is never
/// converted back into a path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let lossy = path.as_ref().to_string_lossy();
        let inner = if cfg!(windows) {
            lossy.replace('\\', "/")
        } else {
            lossy.into_owned()
        };
        Self { inner }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<NormalizedPath> for String {
    fn from(p: NormalizedPath) -> Self {
        p.inner
    }
}
