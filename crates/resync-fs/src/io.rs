//! Tree removal and copy primitives
//!
//! Neither operation is transactional: a failure part way through leaves
//! whatever was already removed or written in place. Both work on `Path`
//! directly, so names that are not valid UTF-8 are handled like any other.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// Shape of a directory tree, as counted before a copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Regular files, at any depth
    pub files: usize,
    /// Subdirectories, not counting the root itself
    pub directories: usize,
    /// Sum of file sizes in bytes
    pub bytes: u64,
}

/// Walk beneath `root`, following symlinks, parents before children.
fn walk(root: &Path) -> WalkDir {
    WalkDir::new(root).min_depth(1).follow_links(true)
}

fn ensure_dir(path: &Path) -> Result<()> {
    let metadata = fs::metadata(path).map_err(|e| Error::io(path, e))?;
    if !metadata.is_dir() {
        return Err(Error::NotADirectory {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Count files, subdirectories and bytes beneath `path`.
///
/// # Errors
///
/// Returns [`Error::NotADirectory`] if `path` is not a directory, an I/O
/// error if it is missing, or [`Error::Walk`] if an entry cannot be read.
pub fn tree_stats(path: &Path) -> Result<TreeStats> {
    ensure_dir(path)?;

    let mut stats = TreeStats::default();
    for entry in walk(path) {
        let entry = entry.map_err(|e| Error::Walk {
            path: path.to_path_buf(),
            source: e,
        })?;
        if entry.file_type().is_dir() {
            stats.directories += 1;
        } else {
            let metadata = entry.metadata().map_err(|e| Error::Walk {
                path: path.to_path_buf(),
                source: e,
            })?;
            stats.files += 1;
            stats.bytes += metadata.len();
        }
    }
    Ok(stats)
}

/// Whether anything (file, directory or dangling symlink) is at `path`.
pub fn is_present(path: &Path) -> bool {
    fs::symlink_metadata(path).is_ok()
}

/// Remove whatever is at `path`, recursively.
///
/// Directories are removed with their contents; files and symlinks are
/// unlinked. Returns `true` if something was removed and `false` if the path
/// did not exist.
///
/// # Errors
///
/// Returns an I/O error if the path exists but cannot be removed, e.g. when a
/// file beneath it is locked or permissions forbid it. Entries removed before
/// the failure stay removed.
pub fn remove_if_present(path: &Path) -> Result<bool> {
    let shown = NormalizedPath::new(path);
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %shown, "Nothing to remove");
            return Ok(false);
        }
        Err(e) => return Err(Error::io(path, e)),
    };

    if metadata.is_dir() {
        fs::remove_dir_all(path).map_err(|e| Error::io(path, e))?;
    } else {
        fs::remove_file(path).map_err(|e| Error::io(path, e))?;
    }

    tracing::debug!(path = %shown, dir = metadata.is_dir(), "Removed");
    Ok(true)
}

/// Recursively copy the directory `from` to the new path `to`.
///
/// `to` is created by the copy, together with any missing parents, and must
/// not exist beforehand: an existing destination is an error, never merged
/// into. Symlinks inside `from` are followed, so the copy holds regular files
/// and directories with the targets' contents.
///
/// # Errors
///
/// - [`Error::Io`] / [`Error::NotADirectory`] if `from` is missing or not a directory
/// - [`Error::DestinationExists`] if something is already at `to`
/// - [`Error::Copy`] if any entry fails to copy; `to` is then left partially written
pub fn copy_tree(from: &Path, to: &Path) -> Result<TreeStats> {
    let stats = tree_stats(from)?;

    if is_present(to) {
        return Err(Error::DestinationExists {
            path: to.to_path_buf(),
        });
    }

    let copy_err = |src: &Path, dst: &Path, source: std::io::Error| Error::Copy {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        source,
    };

    fs::create_dir_all(to).map_err(|e| copy_err(from, to, e))?;

    let mut bytes = 0;
    for entry in walk(from) {
        let entry = entry.map_err(|e| copy_err(from, to, e.into()))?;
        let rel = entry
            .path()
            .strip_prefix(from)
            .map_err(|e| copy_err(entry.path(), to, std::io::Error::other(e)))?;
        let target = to.join(rel);

        if entry.file_type().is_dir() {
            fs::create_dir(&target).map_err(|e| copy_err(entry.path(), &target, e))?;
        } else {
            bytes += fs::copy(entry.path(), &target)
                .map_err(|e| copy_err(entry.path(), &target, e))?;
        }
    }

    tracing::debug!(
        from = %NormalizedPath::new(from),
        to = %NormalizedPath::new(to),
        files = stats.files,
        bytes,
        "Copied tree"
    );

    Ok(TreeStats { bytes, ..stats })
}
