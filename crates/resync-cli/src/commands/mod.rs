//! Command implementations

pub mod sync;

pub use sync::{SyncOptions, run_dry_run, run_sync};
