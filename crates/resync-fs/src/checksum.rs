//! SHA-256 checksums in the `sha256:<hex>` form
//!
//! Used to fingerprint resource trees when comparing a destination against
//! its source.

use std::fs::File;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::{Error, Result};

const PREFIX: &str = "sha256:";

/// Checksum of an in-memory buffer.
pub fn compute_bytes_checksum(bytes: &[u8]) -> String {
    format!("{}{:x}", PREFIX, Sha256::digest(bytes))
}

/// Checksum of a file's contents, streamed rather than read whole.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
pub fn compute_file_checksum(path: &Path) -> Result<String> {
    let mut file = File::open(path).map_err(|e| Error::io(path, e))?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher).map_err(|e| Error::io(path, e))?;
    Ok(format!("{}{:x}", PREFIX, hasher.finalize()))
}
