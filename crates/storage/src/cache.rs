//! Bounded read cache
//!
//! Holds the last value seen for a key, either written or read through the
//! store. Entries are evicted oldest-first once the capacity is reached.
//! A capacity of zero disables the cache entirely.

use std::collections::VecDeque;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use stratafs_core::Key;

#[derive(Debug, Default)]
struct Inner {
    values: FxHashMap<Key, String>,
    order: VecDeque<Key>,
}

/// Bounded FIFO cache of key → last-seen value.
#[derive(Debug)]
pub struct ReadCache {
    capacity: usize,
    inner: Mutex<Inner>,
}

impl ReadCache {
    /// Create a cache holding at most `capacity` values.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(Inner {
                values: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
                order: VecDeque::with_capacity(capacity),
            }),
        }
    }

    /// Whether the cache stores anything at all.
    pub fn is_enabled(&self) -> bool {
        self.capacity > 0
    }

    /// Number of cached values.
    pub fn len(&self) -> usize {
        self.inner.lock().values.len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Cached value for `key`, if any.
    pub fn get(&self, key: &Key) -> Option<String> {
        self.inner.lock().values.get(key).cloned()
    }

    /// Record `value` as the latest value of `key`.
    pub fn insert(&self, key: Key, value: String) {
        if !self.is_enabled() {
            return;
        }
        let mut inner = self.inner.lock();
        if let Some(slot) = inner.values.get_mut(&key) {
            *slot = value;
            return;
        }
        while inner.values.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.values.remove(&oldest);
                }
                None => break,
            }
        }
        inner.order.push_back(key.clone());
        inner.values.insert(key, value);
    }

    /// Drop the cached value for `key`.
    pub fn remove(&self, key: &Key) {
        let mut inner = self.inner.lock();
        if inner.values.remove(key).is_some() {
            inner.order.retain(|k| k != key);
        }
    }

    /// Drop every cached value.
    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.values.clear();
        inner.order.clear();
    }
}
