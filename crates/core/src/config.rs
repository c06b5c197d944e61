//! Store configuration
//!
//! [`StoreConfig`] can be built in code or loaded from a TOML file:
//!
//! ```toml
//! storage_root_path = "workspace/default_data_path"
//! cache_capacity = 0
//! scan_policy = "strict"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root used when no `storage_root_path` is configured.
pub const DEFAULT_STORAGE_ROOT: &str = "workspace/default_data_path";

/// What a scan does when a file under the scanned directory cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanPolicy {
    /// Abort the scan with the read error (default).
    #[default]
    Strict,
    /// Log a warning and leave the file out of the listing.
    Skip,
}

/// Configuration for opening a store.
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory all keys resolve under. Created if missing.
    #[serde(alias = "path")]
    pub storage_root_path: PathBuf,
    /// Maximum entries held by the read cache. `0` disables it.
    pub cache_capacity: usize,
    /// Behavior on unreadable files during a scan.
    pub scan_policy: ScanPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            storage_root_path: PathBuf::from(DEFAULT_STORAGE_ROOT),
            cache_capacity: 0,
            scan_policy: ScanPolicy::Strict,
        }
    }
}

impl StoreConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage root.
    pub fn storage_root_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.storage_root_path = path.into();
        self
    }

    /// Set the read cache capacity.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Set the scan policy.
    pub fn scan_policy(mut self, policy: ScanPolicy) -> Self {
        self.scan_policy = policy;
        self
    }

    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&text)
    }
}
