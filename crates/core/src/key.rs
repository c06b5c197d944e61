//! Storage keys
//!
//! A [`Key`] is the root-relative form of a caller-supplied key string.
//! Parsing strips leading separators, collapses empty and `.` segments, and
//! rejects anything that could resolve outside the store root.
//!
//! ```
//! use stratafs_core::Key;
//!
//! let key = Key::parse("/notes//today").unwrap();
//! assert_eq!(key.as_str(), "notes/today");
//! assert!(Key::parse("../etc/passwd").is_err());
//! ```

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// File name prefix used for in-flight writes. Keys may not use it.
pub const TEMP_FILE_PREFIX: &str = ".stratafs-tmp-";

/// A normalized key. The empty key denotes the store root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Key(String);

fn is_separator(c: char) -> bool {
    c == '/' || c == std::path::MAIN_SEPARATOR
}

impl Key {
    /// The key addressing the root directory itself.
    pub fn root() -> Self {
        Key(String::new())
    }

    /// Parse a raw key. The result may be the root key.
    pub fn parse(raw: &str) -> Result<Self> {
        let invalid = |reason: &str| Error::InvalidKey {
            key: raw.to_string(),
            reason: reason.to_string(),
        };

        if raw.contains('\0') {
            return Err(invalid("contains a NUL byte"));
        }

        let mut segments = Vec::new();
        for segment in raw.split(is_separator) {
            match segment {
                "" | "." => continue,
                ".." => return Err(invalid("parent directory references are not allowed")),
                _ => {}
            }
            let mut components = Path::new(segment).components();
            match (components.next(), components.next()) {
                (Some(Component::Normal(_)), None) => {}
                _ => return Err(invalid("segment is not a plain file name")),
            }
            if segment.starts_with(TEMP_FILE_PREFIX) {
                return Err(invalid("name is reserved for temporary files"));
            }
            segments.push(segment);
        }

        Ok(Key(segments.join("/")))
    }

    /// Parse a raw key that must name an entry (not the root).
    pub fn parse_entry(raw: &str) -> Result<Self> {
        let key = Self::parse(raw)?;
        if key.is_root() {
            return Err(Error::InvalidKey {
                key: raw.to_string(),
                reason: "key is empty".to_string(),
            });
        }
        Ok(key)
    }

    /// Normalized key text, `/`-separated, without a leading separator.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key denotes the root directory.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Path segments of the key.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/').filter(|s| !s.is_empty())
    }

    /// Resolve the key to a path beneath `root`.
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut path = root.to_path_buf();
        path.extend(self.segments());
        path
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("/")
        } else {
            f.write_str(&self.0)
        }
    }
}
