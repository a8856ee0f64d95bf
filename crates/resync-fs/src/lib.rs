//! Filesystem primitives for resource-sync
//!
//! Provides the two tree operations a sync is built from, removing a stale
//! tree and copying a fresh one into place, plus display and checksum helpers.

pub mod checksum;
pub mod constants;
pub mod error;
pub mod io;
pub mod path;

pub use constants::ResourcePath;
pub use error::{Error, Result};
pub use io::TreeStats;
pub use path::NormalizedPath;
