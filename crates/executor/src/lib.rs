//! Command execution layer for stratafs
//!
//! This crate sits between tool callers and the store:
//! - [`Command`] / [`Output`]: typed requests and their string renderings
//! - [`Executor`]: routes commands to [`FsKvStore`](stratafs_storage::FsKvStore)
//! - [`Tool`] / [`ToolRegistry`]: explicit, name-addressed tool dispatch
//! - [`LocalCacheTool`]: the store exposed as the `local_cache` tool
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use stratafs_executor::{Executor, LocalCacheTool, ToolRegistry};
//! use stratafs_storage::FsKvStore;
//!
//! let store = Arc::new(FsKvStore::open_at("./data")?);
//! let mut registry = ToolRegistry::new();
//! registry.register(Arc::new(LocalCacheTool::new(Executor::new(store))));
//!
//! registry.call("local_cache", r#"{"operate":"put","key":"k","value":"v"}"#)?;
//! ```

#![warn(missing_docs)]

mod command;
mod executor;
mod local_cache;
mod output;
mod registry;
mod tool;

pub mod handlers;

pub use command::Command;
pub use executor::Executor;
pub use local_cache::{LocalCacheTool, LOCAL_CACHE_TOOL};
pub use output::{Output, PUT_SUCCESS};
pub use registry::ToolRegistry;
pub use tool::{strip_code_fence, Tool, ToolParameter};

pub use stratafs_core::{Error, ErrorKind, Result};
