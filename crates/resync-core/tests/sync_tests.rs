use pretty_assertions::assert_eq;
use resync_core::{Error, ResourceSync, SyncPaths, SyncState, sync_resources};
use resync_fs::NormalizedPath;
use resync_test_utils::TestTree;
use rstest::rstest;

fn paths(tree: &TestTree) -> SyncPaths {
    SyncPaths::from_base_dir(tree.root())
}

#[test]
fn replaces_stale_destination() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_source_file("sub/b.txt", "world")
        .with_destination_file("old.dat", "stale");

    let report = sync_resources(&paths(&tree)).unwrap();

    assert!(report.removed_existing);
    tree.assert_destination_file("a.txt", "hello");
    tree.assert_destination_file("sub/b.txt", "world");
    tree.assert_destination_missing("old.dat");
}

#[rstest]
#[case::single_file(&[("a.txt", "hello")])]
#[case::nested(&[("a.txt", "hello"), ("sub/b.txt", "world")])]
#[case::dictionary_layout(&[
    ("khiin.db", "sqlite"),
    ("fonts/khiin.ttf", "glyphs"),
    ("config/default.toml", "[engine]\n"),
])]
fn destination_mirrors_source(#[case] files: &[(&str, &str)]) {
    let tree = files
        .iter()
        .fold(TestTree::new(), |tree, (rel, content)| {
            tree.with_source_file(rel, content)
        });

    sync_resources(&paths(&tree)).unwrap();

    assert_eq!(tree.source_snapshot(), tree.destination_snapshot());
}

#[test]
fn empty_source_gives_empty_destination() {
    let tree = TestTree::new()
        .with_source_dir()
        .with_destination_file("leftover.txt", "x");

    let report = sync_resources(&paths(&tree)).unwrap();

    assert_eq!(report.files_copied, 0);
    assert!(tree.destination_dir().is_dir());
    assert!(tree.destination_snapshot().is_empty());
}

#[test]
fn second_run_gives_same_state() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_source_file("sub/b.txt", "world");

    sync_resources(&paths(&tree)).unwrap();
    let once = tree.destination_snapshot();

    let report = sync_resources(&paths(&tree)).unwrap();
    let twice = tree.destination_snapshot();

    assert!(report.removed_existing);
    assert_eq!(once, twice);
}

#[test]
fn absent_destination_skips_removal() {
    let tree = TestTree::new().with_source_file("a.txt", "hello");
    assert!(!tree.destination_dir().exists());

    let report = sync_resources(&paths(&tree)).unwrap();

    assert!(!report.removed_existing);
    tree.assert_destination_file("a.txt", "hello");
}

#[test]
fn missing_source_leaves_destination_removed() {
    let tree = TestTree::new().with_destination_file("old.dat", "stale");

    let mut sync = ResourceSync::new(paths(&tree));
    let err = sync.run().unwrap_err();

    assert!(matches!(err, Error::SourceMissing { .. }));
    assert_eq!(err.step(), "copy");
    assert_eq!(sync.state(), SyncState::Failed);
    assert!(!tree.destination_dir().exists());
}

#[test]
fn report_counts_copied_entries() {
    let tree = TestTree::new()
        .with_source_file("a.txt", "hello")
        .with_source_file("sub/b.txt", "world")
        .with_source_file("sub/deeper/c.bin", [0u8, 1, 2]);

    let report = sync_resources(&paths(&tree)).unwrap();

    assert_eq!(report.files_copied, 3);
    assert_eq!(report.directories_copied, 2);
    assert_eq!(report.bytes_copied, 13);
    assert_eq!(report.source, NormalizedPath::new(&paths(&tree).source).as_str());
}

#[test]
fn explicit_paths_need_not_share_a_base() {
    let source = TestTree::new().with_source_file("a.txt", "hello");
    let target = tempfile::tempdir().unwrap();
    let destination = target.path().join("out/resources");

    let report = sync_resources(&SyncPaths::new(source.source_dir(), &destination)).unwrap();

    assert_eq!(report.files_copied, 1);
    assert_eq!(std::fs::read_to_string(destination.join("a.txt")).unwrap(), "hello");
}

#[test]
fn report_serializes_to_json() {
    let tree = TestTree::new().with_source_file("a.txt", "hello");

    let report = sync_resources(&paths(&tree)).unwrap();
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();

    assert_eq!(json["files_copied"], 1);
    assert_eq!(json["removed_existing"], false);
}

#[cfg(unix)]
#[test]
fn removal_failure_skips_copy() {
    use std::fs::{self, Permissions};
    use std::os::unix::fs::PermissionsExt;

    let is_root = std::process::Command::new("id")
        .arg("-u")
        .output()
        .map(|o| String::from_utf8_lossy(&o.stdout).trim() == "0")
        .unwrap_or(false);
    if is_root {
        eprintln!("Skipping test: running as root bypasses permission checks");
        return;
    }

    let tree = TestTree::new()
        .with_source_file("a.txt", "new")
        .with_destination_file("old.dat", "stale");
    let debug_dir = tree.root().join("KhiinWin/x64/Debug");
    fs::set_permissions(&debug_dir, Permissions::from_mode(0o555)).unwrap();

    let result = sync_resources(&paths(&tree));

    fs::set_permissions(&debug_dir, Permissions::from_mode(0o755)).unwrap();
    let err = result.unwrap_err();
    assert!(matches!(err, Error::Removal { .. }));
    assert_eq!(err.step(), "remove");
    tree.assert_destination_missing("a.txt");
}

#[cfg(target_os = "linux")]
#[test]
fn non_utf8_names_are_mirrored() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tree = TestTree::new().with_source_file("a.txt", "hello");
    std::fs::write(
        tree.source_dir().join(OsStr::from_bytes(b"caf\xe9.txt")),
        "coffee",
    )
    .unwrap();

    let report = sync_resources(&paths(&tree)).unwrap();

    assert_eq!(report.files_copied, 2);
    assert_eq!(tree.source_snapshot(), tree.destination_snapshot());
}
