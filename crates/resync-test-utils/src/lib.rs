//! Shared test fixtures for the resource-sync workspace.
//!
//! Dev-dependency only, never published.
//!
//! # Modules
//!
//! - [`tree`] — [`TestTree`](tree::TestTree), a temporary base directory laid
//!   out like a Khiin checkout
//! - [`snapshot`] — checksum snapshots for comparing whole trees

pub mod snapshot;
pub mod tree;

pub use snapshot::{TreeSnapshot, snapshot_tree};
pub use tree::TestTree;
