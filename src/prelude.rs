//! Convenient imports for stratafs.
//!
//! ```ignore
//! use stratafs::prelude::*;
//!
//! let store = FsKvStore::open_at("./data")?;
//! store.put("key", "value")?;
//! ```

// Store
pub use stratafs_storage::{FsKvStore, Scan, ScanOutcome};

// Configuration
pub use stratafs_core::{ScanPolicy, StoreConfig};

// Error handling
pub use stratafs_core::{Error, ErrorKind, Result};

// Tool surface
pub use stratafs_executor::{Command, Executor, LocalCacheTool, Output, Tool, ToolRegistry};
