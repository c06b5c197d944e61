//! Scan behavior.

use crate::common::*;

#[test]
fn empty_store_scans_to_empty_string() {
    let t = TestStore::new();
    let scan = t.listing("");
    assert!(scan.is_empty());
    assert_eq!(scan.to_string(), "");
}

#[test]
fn hierarchical_scan_lists_exactly_the_subtree() {
    let t = TestStore::new();
    t.store.put("a/x", "1").unwrap();
    t.store.put("a/y", "2").unwrap();
    t.store.put("b/z", "3").unwrap();

    let rendered = t.listing("a").to_string();
    assert_eq!(lines(&rendered), vec!["/x: 1", "/y: 2"]);
}

#[test]
fn root_scan_lists_everything() {
    let t = TestStore::new();
    t.store.put("a/x", "1").unwrap();
    t.store.put("top", "t").unwrap();

    let rendered = t.listing("/").to_string();
    assert_eq!(lines(&rendered), vec!["/a/x: 1", "/top: t"]);
}

#[test]
fn nested_directories_keep_relative_paths() {
    let t = TestStore::new();
    t.store.put("a/b/c/d", "deep").unwrap();
    assert_eq!(t.listing("a/b").to_string(), "/c/d: deep");
}

#[test]
fn scan_of_value_is_not_a_directory() {
    let t = TestStore::new();
    t.store.put("z", "v").unwrap();
    assert!(matches!(
        t.store.scan("z").unwrap(),
        ScanOutcome::NotADirectory(_)
    ));
}

#[test]
fn scan_of_missing_key() {
    let t = TestStore::new();
    assert!(matches!(t.store.scan("nothing").unwrap(), ScanOutcome::Missing(_)));
}

#[test]
fn scan_rereads_disk() {
    let t = TestStore::new();
    t.store.put("a/x", "1").unwrap();
    std::fs::write(t.root().join("a/ext"), "external").unwrap();

    let rendered = t.listing("a").to_string();
    assert_eq!(lines(&rendered), vec!["/ext: external", "/x: 1"]);
}

#[test]
fn deleted_entries_leave_empty_directories_scannable() {
    let t = TestStore::new();
    t.store.put("a/x", "1").unwrap();
    t.store.delete("a/x").unwrap();
    assert_eq!(t.listing("a").to_string(), "");
}

#[test]
fn strict_scan_fails_on_unreadable_file() {
    let t = TestStore::new();
    t.store.put("a/x", "1").unwrap();
    std::fs::write(t.root().join("a/blob"), [0xc3, 0x28]).unwrap();

    let err = t.store.scan("a").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn lenient_scan_skips_unreadable_file() {
    let t = TestStore::with_config(StoreConfig::new().scan_policy(ScanPolicy::Skip));
    t.store.put("a/x", "1").unwrap();
    std::fs::write(t.root().join("a/blob"), [0xc3, 0x28]).unwrap();

    assert_eq!(t.listing("a").to_string(), "/x: 1");
}

#[test]
fn scan_racing_writers_never_fails() {
    let t = TestStore::new();
    for i in 0..50 {
        t.store.put(&format!("a/k{i}"), "v").unwrap();
    }

    let done = std::sync::atomic::AtomicBool::new(false);
    std::thread::scope(|s| {
        s.spawn(|| {
            while !done.load(std::sync::atomic::Ordering::Relaxed) {
                for i in 0..50 {
                    let key = format!("a/k{i}");
                    t.store.delete(&key).unwrap();
                    t.store.put(&key, "v").unwrap();
                }
            }
        });

        let results: Vec<_> = (0..500).map(|_| t.store.scan("a")).collect();
        done.store(true, std::sync::atomic::Ordering::Relaxed);

        for result in results {
            match result.unwrap() {
                ScanOutcome::Listing(scan) => {
                    assert!(scan.len() <= 50);
                    assert!(scan.entries().iter().all(|e| e.value == "v"));
                }
                other => panic!("expected listing, got {other:?}"),
            }
        }
    });
}
