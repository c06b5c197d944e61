//! Core types for stratafs
//!
//! This crate defines the types every other stratafs crate builds on:
//! - [`Key`]: a normalized, root-relative storage key
//! - [`StoreConfig`]: configuration for opening a store
//! - [`Error`] / [`ErrorKind`]: the canonical error type

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod key;

pub use config::{ScanPolicy, StoreConfig, DEFAULT_STORAGE_ROOT};
pub use error::{Error, ErrorKind, Result};
pub use key::{Key, TEMP_FILE_PREFIX};
