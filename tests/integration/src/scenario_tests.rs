//! End-to-end scenarios for a Khiin checkout
//!
//! Each test lays out a base directory the way the Windows build expects and
//! drives the full resolve -> remove -> copy flow through the public API.

use pretty_assertions::assert_eq;
use resync_core::{Error, ResourceSync, SyncPaths, SyncState, sync_resources};
use resync_fs::ResourcePath;
use resync_test_utils::{TestTree, snapshot_tree};

#[test]
fn stale_build_resources_are_replaced() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_source_file("sub/b.txt", "world")
        .with_destination_file("old.dat", "unrelated");

    let mut sync = ResourceSync::new(SyncPaths::from_base_dir(tree.root()));
    let report = sync.run().unwrap();

    assert_eq!(sync.state(), SyncState::Done);
    assert!(report.removed_existing);
    tree.assert_destination_file("a.txt", "hello");
    tree.assert_destination_file("sub/b.txt", "world");
    tree.assert_destination_missing("old.dat");
    assert_eq!(tree.source_snapshot(), tree.destination_snapshot());
}

#[test]
fn fresh_checkout_gets_build_resources() {
    let tree = TestTree::new()
        .with_source_file("khiin.db", "data")
        .with_source_file("emoji/emoji.csv", "1F600,grin");
    assert!(!tree.root().join("KhiinWin").exists());

    let report = sync_resources(&SyncPaths::from_base_dir(tree.root())).unwrap();

    assert!(!report.removed_existing);
    assert_eq!(
        snapshot_tree(&tree.root().join(ResourcePath::BuildResources)),
        tree.source_snapshot()
    );
}

#[test]
fn sibling_build_output_is_untouched() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_destination_file("old.dat", "stale");
    let debug_dir = tree.root().join("KhiinWin/x64/Debug");
    std::fs::write(debug_dir.join("KhiinWin.exe"), "binary").unwrap();

    sync_resources(&SyncPaths::from_base_dir(tree.root())).unwrap();

    assert_eq!(
        std::fs::read_to_string(debug_dir.join("KhiinWin.exe")).unwrap(),
        "binary"
    );
}

#[test]
fn repeated_runs_converge() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_source_file("sub/b.txt", "world");
    let paths = SyncPaths::from_base_dir(tree.root());

    let first = sync_resources(&paths).unwrap();
    let after_first = tree.destination_snapshot();
    let second = sync_resources(&paths).unwrap();

    assert_eq!(after_first, tree.destination_snapshot());
    assert_eq!(first.files_copied, second.files_copied);
    assert!(second.removed_existing);
}

#[test]
fn source_edits_propagate_on_next_run() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_source_file("gone.txt", "bye");
    let paths = SyncPaths::from_base_dir(tree.root());
    sync_resources(&paths).unwrap();

    std::fs::remove_file(tree.source_dir().join("gone.txt")).unwrap();
    std::fs::write(tree.source_dir().join("a.txt"), "hello again").unwrap();
    sync_resources(&paths).unwrap();

    tree.assert_destination_file("a.txt", "hello again");
    tree.assert_destination_missing("gone.txt");
}

#[test]
fn missing_resources_leave_build_without_resources() {
    let tree = TestTree::new().with_destination_file("old.dat", "stale");

    let err = sync_resources(&SyncPaths::from_base_dir(tree.root())).unwrap_err();

    assert!(matches!(err, Error::SourceMissing { .. }));
    assert!(!tree.destination_dir().exists());
    assert!(tree.root().join("KhiinWin/x64/Debug").is_dir());
}
