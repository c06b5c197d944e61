//! Recursive directory listings
//!
//! A scan walks every regular file below a directory and pairs its contents
//! with a display key: the file's path relative to the scanned directory,
//! `/`-separated, with a leading `/`. Entries are sorted by display key so
//! the rendered listing is stable for a given tree.
//!
//! Symlinks and in-flight temporary files are not listed. Files and
//! directories removed while the walk is running are left out rather than
//! reported as errors, so a scan racing writers sees a mix of old and new
//! entries.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use stratafs_core::{Error, Key, Result, ScanPolicy, TEMP_FILE_PREFIX};
use tracing::{debug, warn};

/// One file found by a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanEntry {
    /// Path relative to the scanned directory, with a leading `/`
    pub key: String,
    /// File contents
    pub value: String,
}

/// A completed scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Scan {
    entries: Vec<ScanEntry>,
}

impl Scan {
    /// Entries sorted by display key.
    pub fn entries(&self) -> &[ScanEntry] {
        &self.entries
    }

    /// Number of entries found.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the scanned directory held no files.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Renders `"{key}: {value}"` lines joined by `\n`.
impl fmt::Display for Scan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{}: {}", entry.key, entry.value)?;
        }
        Ok(())
    }
}

/// Result of scanning a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The key is a directory; here is everything under it.
    Listing(Scan),
    /// Nothing exists at the key.
    Missing(Key),
    /// The key holds a value, not a directory.
    NotADirectory(Key),
}

/// Walk `dir` recursively.
pub(crate) fn walk(dir: &Path, policy: ScanPolicy) -> Result<Scan> {
    let mut entries = Vec::new();
    let mut prefix = Vec::new();
    visit(dir, &mut prefix, policy, &mut entries)?;
    entries.sort_by(|a, b| a.key.cmp(&b.key));
    Ok(Scan { entries })
}

fn visit(
    dir: &Path,
    prefix: &mut Vec<String>,
    policy: ScanPolicy,
    out: &mut Vec<ScanEntry>,
) -> Result<()> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(e) if vanished(&e) => {
            debug!(path = %dir.display(), "scan: directory removed during walk");
            return Ok(());
        }
        Err(e) => return Err(Error::io(dir, e)),
    };

    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tolerate(policy, Error::io(dir, e))?;
                continue;
            }
        };
        let path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        let file_type = match entry.file_type() {
            Ok(ft) => ft,
            Err(e) if vanished(&e) => {
                debug!(path = %path.display(), "scan: entry removed during walk");
                continue;
            }
            Err(e) => {
                tolerate(policy, Error::io(&path, e))?;
                continue;
            }
        };

        if file_type.is_dir() {
            prefix.push(name);
            let result = visit(&path, prefix, policy, out);
            prefix.pop();
            if let Err(e) = result {
                tolerate(policy, e)?;
            }
        } else if file_type.is_file() {
            if name.starts_with(TEMP_FILE_PREFIX) {
                continue;
            }
            match fs::read_to_string(&path) {
                Ok(value) => {
                    let mut key = String::new();
                    for segment in prefix.iter().chain(std::iter::once(&name)) {
                        key.push('/');
                        key.push_str(segment);
                    }
                    out.push(ScanEntry { key, value });
                }
                Err(e) if vanished(&e) => {
                    debug!(path = %path.display(), "scan: file removed during walk");
                }
                Err(e) => tolerate(policy, Error::io(&path, e))?,
            }
        } else {
            debug!(path = %path.display(), "scan skipping non-regular file");
        }
    }
    Ok(())
}

/// A concurrent delete removed the entry between listing and reading it.
fn vanished(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotFound
}

/// Apply the scan policy to a failure inside the walk.
fn tolerate(policy: ScanPolicy, err: Error) -> Result<()> {
    match policy {
        ScanPolicy::Strict => Err(err),
        ScanPolicy::Skip => {
            warn!(error = %err, "scan skipping unreadable entry");
            Ok(())
        }
    }
}
