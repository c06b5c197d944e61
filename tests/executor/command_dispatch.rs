//! Command Dispatch Tests
//!
//! Tests that the Executor correctly dispatches all Command variants
//! and returns the appropriate Output types.

use crate::common::*;

// ============================================================================
// Put / Get
// ============================================================================

#[test]
fn put_returns_stored() {
    let t = TestStore::new();
    let executor = t.executor();

    let output = executor
        .execute(Command::Put {
            key: "test_key".into(),
            value: "test_value".into(),
        })
        .unwrap();

    assert_eq!(output.to_string(), "SUCCESS");
    assert!(matches!(output, Output::Stored { .. }));
}

#[test]
fn get_returns_value() {
    let t = TestStore::new();
    let executor = t.executor();

    executor
        .execute(Command::Put {
            key: "k".into(),
            value: "42".into(),
        })
        .unwrap();

    let output = executor
        .execute(Command::Get {
            key: "k".into(),
            reload: true,
        })
        .unwrap();

    match output {
        Output::Value(v) => assert_eq!(v, "42"),
        other => panic!("Expected Value output, got {other:?}"),
    }
}

#[test]
fn get_missing_returns_not_found() {
    let t = TestStore::new();
    let err = t
        .executor()
        .execute(Command::Get {
            key: "nonexistent".into(),
            reload: true,
        })
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn get_without_reload_uses_cache() {
    let t = TestStore::with_config(StoreConfig::new().cache_capacity(4));
    let executor = t.executor();

    executor
        .execute(Command::Put {
            key: "k".into(),
            value: "cached".into(),
        })
        .unwrap();
    std::fs::write(t.root().join("k"), "on disk").unwrap();

    let cached = executor
        .execute(Command::Get {
            key: "k".into(),
            reload: false,
        })
        .unwrap();
    assert_eq!(cached, Output::Value("cached".into()));

    let fresh = executor
        .execute(Command::Get {
            key: "k".into(),
            reload: true,
        })
        .unwrap();
    assert_eq!(fresh, Output::Value("on disk".into()));
}

// ============================================================================
// Delete
// ============================================================================

#[test]
fn delete_existing_names_the_key() {
    let t = TestStore::new();
    let executor = t.executor();

    executor
        .execute(Command::Put {
            key: "k".into(),
            value: "v".into(),
        })
        .unwrap();

    let output = executor.execute(Command::Delete { key: "k".into() }).unwrap();
    assert!(output.is_success());
    assert!(output.to_string().contains("'k'"));
}

#[test]
fn delete_missing_is_a_status_not_an_error() {
    let t = TestStore::new();
    let executor = t.executor();

    for _ in 0..2 {
        let output = executor.execute(Command::Delete { key: "gone".into() }).unwrap();
        assert!(!output.is_success());
        assert!(output.to_string().contains("'gone'"));
    }
}

#[test]
fn delete_names_the_normalized_key() {
    let t = TestStore::new();
    let executor = t.executor();

    executor
        .execute(Command::Put {
            key: "/notes//today".into(),
            value: "v".into(),
        })
        .unwrap();

    let output = executor
        .execute(Command::Delete {
            key: "/notes//today".into(),
        })
        .unwrap();
    assert_eq!(output.to_string(), "Successfully deleted 'notes/today'");

    let output = executor.execute(Command::Delete { key: "/gone".into() }).unwrap();
    assert_eq!(output.to_string(), "Failed to delete 'gone': key does not exist");
}

// ============================================================================
// Scan
// ============================================================================

#[test]
fn scan_returns_listing() {
    let t = TestStore::new();
    let executor = t.executor();

    for (key, value) in [("a/x", "1"), ("a/y", "2")] {
        executor
            .execute(Command::Put {
                key: key.into(),
                value: value.into(),
            })
            .unwrap();
    }

    let output = executor.execute(Command::Scan { key: "a".into() }).unwrap();
    assert_eq!(lines(&output.to_string()), vec!["/x: 1", "/y: 2"]);
}

#[test]
fn scan_empty_root_returns_empty_string() {
    let t = TestStore::new();
    let output = t
        .executor()
        .execute(Command::Scan { key: String::new() })
        .unwrap();
    assert_eq!(output.to_string(), "");
}

#[test]
fn scan_failures_are_descriptive_strings() {
    let t = TestStore::new();
    let executor = t.executor();
    executor
        .execute(Command::Put {
            key: "z".into(),
            value: "v".into(),
        })
        .unwrap();

    let not_dir = executor.execute(Command::Scan { key: "z".into() }).unwrap();
    assert!(!not_dir.is_success());
    assert!(not_dir.to_string().contains("'z'"));

    let missing = executor.execute(Command::Scan { key: "q".into() }).unwrap();
    assert!(!missing.is_success());
    assert!(missing.to_string().contains("'q'"));
}
