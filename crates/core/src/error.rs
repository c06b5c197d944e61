//! Error types for stratafs.
//!
//! Every fallible operation in the workspace returns [`Result`]. Callers that
//! only care about the broad category of a failure should match on
//! [`Error::kind`] rather than on individual variants.
//!
//! ## Kinds
//!
//! | Kind | Raised by |
//! |------|-----------|
//! | NotFound | `get` on a key that was never written |
//! | Io | store construction, reads, writes |
//! | Validation | bad keys, malformed tool requests |

use std::path::PathBuf;

use thiserror::Error;

/// Broad category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested key has no value.
    NotFound,
    /// The filesystem refused the operation.
    Io,
    /// The request or key was malformed.
    Validation,
}

/// All stratafs errors.
#[derive(Debug, Error)]
pub enum Error {
    /// No file exists for the key
    #[error("key not found: {key}")]
    KeyNotFound {
        /// The normalized key
        key: String,
    },

    /// Key cannot be mapped to a path under the root
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// The key as supplied by the caller
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// Request is missing fields or carries the wrong shape
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Description of the problem
        reason: String,
    },

    /// No tool registered under the requested name
    #[error("unknown tool: {name}")]
    ToolNotFound {
        /// Requested tool name
        name: String,
    },

    /// Filesystem failure
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path the operation was acting on
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be loaded
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of the problem
        reason: String,
    },
}

/// Result type for stratafs operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an I/O error with the path it occurred at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Shorthand for [`Error::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Error::InvalidInput {
            reason: reason.into(),
        }
    }

    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::KeyNotFound { .. } => ErrorKind::NotFound,
            Error::InvalidKey { .. } | Error::InvalidInput { .. } | Error::ToolNotFound { .. } => {
                ErrorKind::Validation
            }
            Error::Io { .. } | Error::Config { .. } => ErrorKind::Io,
        }
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Check if this is a validation error.
    pub fn is_validation(&self) -> bool {
        self.kind() == ErrorKind::Validation
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::invalid_input(e.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Error::Config {
            reason: e.to_string(),
        }
    }
}
