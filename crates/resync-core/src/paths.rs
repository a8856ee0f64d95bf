//! Source and destination path resolution

use std::path::{Path, PathBuf};

use resync_fs::{NormalizedPath, ResourcePath};

use crate::{Error, Result};

/// The two directories a sync works on.
///
/// Held as native paths so any name the filesystem accepts works, including
/// backslashes on Unix and names that are not valid UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    /// Canonical resources, read only
    pub source: PathBuf,
    /// Build-output copy, replaced on every run
    pub destination: PathBuf,
}

impl SyncPaths {
    pub fn new(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
        }
    }

    /// Derive `<base>/resources` and `<base>/KhiinWin/x64/Debug/resources`.
    pub fn from_base_dir(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            source: join_relative(base, ResourcePath::Resources),
            destination: join_relative(base, ResourcePath::BuildResources),
        }
    }

    /// Paths relative to the directory holding the running executable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathResolution`] if the executable cannot be located.
    pub fn resolve_default() -> Result<Self> {
        let base = executable_dir()?;
        let paths = Self::from_base_dir(&base);
        tracing::debug!(
            base = %NormalizedPath::new(&base),
            source = %NormalizedPath::new(&paths.source),
            destination = %NormalizedPath::new(&paths.destination),
            "Resolved default paths"
        );
        Ok(paths)
    }
}

/// Join a `/`-separated relative location one component at a time, so the
/// result uses native separators.
fn join_relative(base: &Path, rel: ResourcePath) -> PathBuf {
    rel.as_str()
        .split('/')
        .fold(base.to_path_buf(), |path, part| path.join(part))
}

/// Directory containing the running executable, with symlinks resolved.
///
/// Canonicalized through `dunce` so Windows paths keep their plain drive
/// letter form instead of the `\\?\` verbatim prefix.
pub fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().map_err(|e| Error::PathResolution {
        message: e.to_string(),
    })?;
    let exe = dunce::canonicalize(&exe).map_err(|e| Error::PathResolution {
        message: format!("{}: {}", exe.display(), e),
    })?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| Error::PathResolution {
            message: format!("{} has no parent directory", exe.display()),
        })
}
