//! Resource mirroring for the Khiin Windows build output
//!
//! Replaces `<base>/KhiinWin/x64/Debug/resources` with a fresh copy of
//! `<base>/resources`:
//!
//! ```text
//!   resolve paths ──> remove destination (if present) ──> copy source tree
//! ```
//!
//! Nothing here touches the filesystem until [`ResourceSync::run`] is called;
//! the `resync` binary is the only caller that does so by default.
//!
//! # Example
//!
//! ```no_run
//! use resync_core::{ResourceSync, SyncPaths};
//!
//! fn example() -> resync_core::Result<()> {
//!     let paths = SyncPaths::from_base_dir("/path/to/khiin");
//!     let report = ResourceSync::new(paths).run()?;
//!     println!("{} files copied", report.files_copied);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod paths;
pub mod report;
pub mod sync;

pub use error::{Error, Result};
pub use paths::{SyncPaths, executable_dir};
pub use report::{SyncPlan, SyncReport};
pub use sync::{ResourceSync, SyncState, sync_resources};
