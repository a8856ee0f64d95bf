//! Fixed relative locations of the resource trees.

use std::path::Path;

/// Well-known resource locations, relative to the base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourcePath {
    /// The canonical, version-controlled `resources` directory
    Resources,
    /// The copy the Windows debug build loads at runtime
    BuildResources,
}

impl ResourcePath {
    /// Get the relative path, always with forward slashes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resources => "resources",
            Self::BuildResources => "KhiinWin/x64/Debug/resources",
        }
    }
}

impl AsRef<Path> for ResourcePath {
    fn as_ref(&self) -> &Path {
        Path::new(self.as_str())
    }
}

impl AsRef<str> for ResourcePath {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
