//! Command outputs.
//!
//! Every [`Output`] renders through `Display` as the plain string handed
//! back to a tool caller. Missing keys on delete and scan are outputs, not
//! errors: callers check keys speculatively and expect a readable answer.

use std::fmt;

use stratafs_storage::Scan;

/// Status string returned by a successful put.
pub const PUT_SUCCESS: &str = "SUCCESS";

/// Result of executing a [`Command`](crate::Command).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    /// Value written.
    Stored {
        /// Key written
        key: String,
    },
    /// Value read.
    Value(String),
    /// Key removed.
    Deleted {
        /// Key removed
        key: String,
    },
    /// Delete of a key that does not exist.
    DeleteMissing {
        /// Key requested
        key: String,
    },
    /// Directory listing.
    Listing(Scan),
    /// Scan of a key that does not exist.
    ScanMissing {
        /// Key requested
        key: String,
    },
    /// Scan of a key that holds a value.
    ScanNotDirectory {
        /// Key requested
        key: String,
    },
}

impl Output {
    /// Whether the operation did what was asked.
    pub fn is_success(&self) -> bool {
        !matches!(
            self,
            Output::DeleteMissing { .. } | Output::ScanMissing { .. } | Output::ScanNotDirectory { .. }
        )
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Stored { .. } => f.write_str(PUT_SUCCESS),
            Output::Value(value) => f.write_str(value),
            Output::Deleted { key } => write!(f, "Successfully deleted '{}'", key),
            Output::DeleteMissing { key } => {
                write!(f, "Failed to delete '{}': key does not exist", key)
            }
            Output::Listing(scan) => write!(f, "{}", scan),
            Output::ScanMissing { key } => {
                write!(f, "Failed to scan '{}': key does not exist", key)
            }
            Output::ScanNotDirectory { key } => write!(
                f,
                "Failed to scan '{}': key holds a value, scan requires a directory",
                key
            ),
        }
    }
}
