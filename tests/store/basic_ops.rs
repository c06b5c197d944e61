//! Basic put/get/delete behavior.

use crate::common::*;

// ============================================================================
// Round trip
// ============================================================================

#[test]
fn get_after_put_returns_value() {
    let t = TestStore::new();
    t.store.put("k", "v").unwrap();
    assert_eq!(t.store.get("k").unwrap(), "v");
}

#[test]
fn put_overwrites_value() {
    let t = TestStore::new();
    t.store.put("k", "first value, fairly long").unwrap();
    t.store.put("k", "v2").unwrap();

    assert_eq!(t.store.get("k").unwrap(), "v2");
    assert_eq!(std::fs::read_to_string(t.root().join("k")).unwrap(), "v2");
}

#[test]
fn value_is_stored_verbatim() {
    let t = TestStore::new();
    let value = "line one\nline two\r\n\ttabbed: ünïcödé ✓\n";
    t.store.put("doc", value).unwrap();
    assert_eq!(t.store.get("doc").unwrap(), value);
}

#[test]
fn leading_separator_addresses_same_entry() {
    let t = TestStore::new();
    t.store.put("/k", "v").unwrap();
    assert_eq!(t.store.get("k").unwrap(), "v");

    t.store.put("k", "w").unwrap();
    assert_eq!(t.store.get("/k").unwrap(), "w");
    assert_eq!(t.listing("").len(), 1);
}

#[test]
fn entries_are_plain_files_under_root() {
    let t = TestStore::new();
    t.store.put("a/b/c.txt", "x").unwrap();
    assert!(t.root().join("a").join("b").join("c.txt").is_file());
}

// ============================================================================
// Missing keys
// ============================================================================

#[test]
fn get_missing_is_not_found() {
    let t = TestStore::new();
    let err = t.store.get("never-written").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_is_idempotent() {
    let t = TestStore::new();
    t.store.put("k", "v").unwrap();

    assert!(t.store.delete("k").unwrap());
    for _ in 0..3 {
        assert!(!t.store.delete("k").unwrap());
    }
    assert!(!t.store.delete("never").unwrap());
}

#[test]
fn deleted_key_is_gone() {
    let t = TestStore::new();
    t.store.put("k", "v").unwrap();
    t.store.delete("/k").unwrap();
    assert_eq!(t.store.get("k").unwrap_err().kind(), ErrorKind::NotFound);
    assert!(!t.root().join("k").exists());
}

// ============================================================================
// Persistence
// ============================================================================

#[test]
fn values_survive_reopen() {
    let t = TestStore::new();
    t.store.put("a/x", "1").unwrap();

    let reopened = FsKvStore::open_at(t.root()).unwrap();
    assert_eq!(reopened.get("a/x").unwrap(), "1");
}

#[test]
fn config_file_drives_root() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("configured");
    let file = dir.path().join("store.toml");
    std::fs::write(
        &file,
        format!("storage_root_path = {:?}\n", root.to_str().unwrap()),
    )
    .unwrap();

    let store = FsKvStore::open(&StoreConfig::load(&file).unwrap()).unwrap();
    store.put("k", "v").unwrap();
    assert!(root.join("k").is_file());
}
