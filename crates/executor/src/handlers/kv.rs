//! KV command handlers.
//!
//! Each handler calls straight into [`FsKvStore`] and maps the typed result
//! onto an [`Output`]. Outputs name the normalized key, so `/k` and `k`
//! render the same.

use stratafs_core::Key;
use stratafs_storage::{FsKvStore, ScanOutcome};

use crate::{Output, Result};

/// Handle Put command.
pub fn put(store: &FsKvStore, key: String, value: String) -> Result<Output> {
    let key = Key::parse_entry(&key)?;
    store.put(key.as_str(), &value)?;
    Ok(Output::Stored {
        key: key.to_string(),
    })
}

/// Handle Get command.
pub fn get(store: &FsKvStore, key: String, reload: bool) -> Result<Output> {
    let value = if reload {
        store.get(&key)?
    } else {
        store.get_cached(&key)?
    };
    Ok(Output::Value(value))
}

/// Handle Delete command.
pub fn delete(store: &FsKvStore, key: String) -> Result<Output> {
    let key = Key::parse_entry(&key)?.to_string();
    if store.delete(&key)? {
        Ok(Output::Deleted { key })
    } else {
        Ok(Output::DeleteMissing { key })
    }
}

/// Handle Scan command.
pub fn scan(store: &FsKvStore, key: String) -> Result<Output> {
    Ok(match store.scan(&key)? {
        ScanOutcome::Listing(scan) => Output::Listing(scan),
        ScanOutcome::Missing(key) => Output::ScanMissing {
            key: key.to_string(),
        },
        ScanOutcome::NotADirectory(key) => Output::ScanNotDirectory {
            key: key.to_string(),
        },
    })
}
