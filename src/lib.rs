//! # stratafs
//!
//! Filesystem-backed key-value storage for AI agents.
//!
//! Each key maps to a file below a root directory; values are text. Keys may
//! contain `/` to group entries into directories, and a scan lists everything
//! under a directory-valued key.
//!
//! ## Quick Start
//!
//! ```ignore
//! use stratafs::prelude::*;
//!
//! let store = FsKvStore::open(&StoreConfig::new().storage_root_path("./data"))?;
//!
//! store.put("notes/today", "buy milk")?;
//! assert_eq!(store.get("/notes/today")?, "buy milk");
//!
//! if let ScanOutcome::Listing(scan) = store.scan("notes")? {
//!     println!("{}", scan); // "/today: buy milk"
//! }
//! ```
//!
//! ## Tool access
//!
//! Agents talk to the store through the `local_cache` tool, registered on an
//! explicit [`ToolRegistry`]:
//!
//! ```ignore
//! let mut registry = ToolRegistry::new();
//! registry.register(Arc::new(LocalCacheTool::new(Executor::new(Arc::new(store)))));
//! let out = registry.call("local_cache", r#"{"operate":"scan"}"#)?;
//! ```

#![warn(missing_docs)]

pub mod prelude;

pub use stratafs_core::{Error, ErrorKind, Key, Result, ScanPolicy, StoreConfig};
pub use stratafs_executor::{
    Command, Executor, LocalCacheTool, Output, Tool, ToolParameter, ToolRegistry,
};
pub use stratafs_storage::{FsKvStore, ReadCache, Scan, ScanEntry, ScanOutcome};
