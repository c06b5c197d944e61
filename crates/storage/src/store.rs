//! Filesystem-backed key-value store
//!
//! ## Design
//!
//! FsKvStore maps each key directly to a file below its root directory.
//! The filesystem is the index: there are no manifests or metadata files.
//! - put: create parent directories, write through a temp file, rename
//! - get: always re-read from disk, so external edits are visible
//! - delete: remove the file; a missing key is an expected outcome
//! - scan: walk a directory-valued key and list every file under it
//!
//! Calls are synchronous and take no filesystem locks. Concurrent writers
//! to the same key race at the filesystem level; last rename wins.
//!
//! ## Read cache
//!
//! With `cache_capacity > 0` the store remembers values it wrote or read.
//! Only [`FsKvStore::get_cached`] answers from the cache; [`FsKvStore::get`]
//! always goes to disk and refreshes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use stratafs_core::{Error, Key, Result, ScanPolicy, StoreConfig};
use tracing::{debug, info};

use crate::atomic::write_atomic;
use crate::cache::ReadCache;
use crate::scan::{walk, ScanOutcome};

/// Key-value store rooted at a directory.
#[derive(Debug)]
pub struct FsKvStore {
    root: PathBuf,
    scan_policy: ScanPolicy,
    cache: ReadCache,
}

impl FsKvStore {
    /// Open a store, creating the root directory if needed.
    pub fn open(config: &StoreConfig) -> Result<Self> {
        let root = config.storage_root_path.clone();
        if !root.is_dir() {
            fs::create_dir_all(&root).map_err(|e| Error::io(&root, e))?;
            info!(root = %root.display(), "created storage root");
        }
        Ok(Self {
            root,
            scan_policy: config.scan_policy,
            cache: ReadCache::new(config.cache_capacity),
        })
    }

    /// Open a store at `root` with otherwise default settings.
    pub fn open_at(root: impl Into<PathBuf>) -> Result<Self> {
        Self::open(&StoreConfig::new().storage_root_path(root))
    }

    /// The root directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The read cache.
    pub fn cache(&self) -> &ReadCache {
        &self.cache
    }

    /// Path a key resolves to.
    pub fn resolve(&self, key: &Key) -> PathBuf {
        key.resolve(&self.root)
    }

    /// Store `value` under `key`, replacing any previous value.
    pub fn put(&self, key: &str, value: &str) -> Result<()> {
        let key = Key::parse_entry(key)?;
        let path = self.resolve(&key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }
        write_atomic(&path, value)?;

        debug!(key = %key, bytes = value.len(), "put");
        self.cache.insert(key, value.to_string());
        Ok(())
    }

    /// Read the value stored under `key` from disk.
    pub fn get(&self, key: &str) -> Result<String> {
        let key = Key::parse_entry(key)?;
        let value = self.read(&key)?;
        self.cache.insert(key, value.clone());
        Ok(value)
    }

    /// Read `key`, answering from the cache when it holds the key.
    pub fn get_cached(&self, key: &str) -> Result<String> {
        let parsed = Key::parse_entry(key)?;
        if let Some(value) = self.cache.get(&parsed) {
            debug!(key = %parsed, "get served from cache");
            return Ok(value);
        }
        self.get(key)
    }

    /// Remove the value under `key`.
    ///
    /// Returns `true` if the key existed. A missing key is not an error.
    pub fn delete(&self, key: &str) -> Result<bool> {
        let key = Key::parse_entry(key)?;
        let path = self.resolve(&key);
        self.cache.remove(&key);

        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key = %key, "deleted");
                Ok(true)
            }
            Err(e) if self.is_absent(&e, &path) => {
                debug!(key = %key, "delete of missing key");
                Ok(false)
            }
            Err(e) => Err(Error::io(&path, e)),
        }
    }

    /// List everything below `key`. The empty key scans the whole store.
    pub fn scan(&self, key: &str) -> Result<ScanOutcome> {
        let key = Key::parse(key)?;
        let path = self.resolve(&key);

        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                let scan = walk(&path, self.scan_policy)?;
                debug!(key = %key, entries = scan.len(), "scan");
                Ok(ScanOutcome::Listing(scan))
            }
            Ok(_) => Ok(ScanOutcome::NotADirectory(key)),
            Err(e) if self.is_absent(&e, &path) => Ok(ScanOutcome::Missing(key)),
            Err(e) => Err(Error::io(&path, e)),
        }
    }

    /// Drop any cached value for `key`.
    pub fn invalidate(&self, key: &str) -> Result<()> {
        let key = Key::parse_entry(key)?;
        self.cache.remove(&key);
        Ok(())
    }

    /// Drop every cached value.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn read(&self, key: &Key) -> Result<String> {
        let path = self.resolve(key);
        fs::read_to_string(&path).map_err(|e| {
            if self.is_absent(&e, &path) {
                Error::KeyNotFound {
                    key: key.to_string(),
                }
            } else {
                Error::io(&path, e)
            }
        })
    }

    /// Whether `err` means nothing exists at `path`, including the case
    /// where a file occupies one of its parent directories.
    fn is_absent(&self, err: &io::Error, path: &Path) -> bool {
        err.kind() == io::ErrorKind::NotFound
            || path
                .ancestors()
                .skip(1)
                .take_while(|p| *p != self.root.as_path())
                .any(|p| p.is_file())
    }
}
