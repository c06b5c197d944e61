//! Storage layer for stratafs
//!
//! This crate implements the filesystem-backed key-value store:
//! - FsKvStore: put/get/delete/scan over a root directory
//! - ReadCache: optional bounded cache of last-read values
//! - Scan: recursive directory listings rendered as `key: value` lines
//! - write_atomic: temp-file-then-rename writes

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod atomic;
pub mod cache;
pub mod scan;
pub mod store;

pub use atomic::write_atomic;
pub use cache::ReadCache;
pub use scan::{Scan, ScanEntry, ScanOutcome};
pub use store::FsKvStore;
