//! Commands accepted by the executor.
//!
//! Commands deserialize from the JSON shape tool callers send:
//!
//! ```json
//! {"operate": "put", "key": "notes/today", "value": "buy milk"}
//! ```
//!
//! `key` defaults to the empty (root) key. `value` is required for `put`;
//! non-string JSON values are stored as their JSON text.

use serde::{Deserialize, Deserializer, Serialize};

/// A single store operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "operate", rename_all = "snake_case")]
pub enum Command {
    /// Store a value.
    Put {
        /// Target key
        #[serde(default)]
        key: String,
        /// Value to store
        #[serde(deserialize_with = "value_as_text")]
        value: String,
    },
    /// Read a value.
    Get {
        /// Key to read
        #[serde(default)]
        key: String,
        /// Re-read from disk even when cached (default `true`)
        #[serde(default = "default_reload")]
        reload: bool,
    },
    /// Remove a value.
    Delete {
        /// Key to remove
        #[serde(default)]
        key: String,
    },
    /// List everything under a directory-valued key.
    Scan {
        /// Directory key; empty scans the whole store
        #[serde(default)]
        key: String,
    },
}

impl Command {
    /// Operation name as it appears in the `operate` field.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put { .. } => "put",
            Command::Get { .. } => "get",
            Command::Delete { .. } => "delete",
            Command::Scan { .. } => "scan",
        }
    }

    /// The key the command addresses.
    pub fn key(&self) -> &str {
        match self {
            Command::Put { key, .. }
            | Command::Get { key, .. }
            | Command::Delete { key }
            | Command::Scan { key } => key,
        }
    }
}

fn default_reload() -> bool {
    true
}

fn value_as_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        other => Ok(other.to_string()),
    }
}
