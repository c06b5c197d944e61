//! Atomic file replacement
//!
//! Values are written to a temporary file in the destination directory and
//! renamed over the target, so readers see either the old contents or the
//! new contents and never a partial write. A failed write removes its
//! temporary file when the handle drops.
//!
//! Replacing a file keeps its permissions. New files get the same mode a
//! plain `fs::write` would give them (`0o666` less the umask).

use std::fs;
use std::io::Write;
use std::path::Path;

use stratafs_core::{Error, Result, TEMP_FILE_PREFIX};
use tempfile::Builder;

/// Replace the contents of `path` with `contents`.
///
/// The parent directory must already exist.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    builder.prefix(TEMP_FILE_PREFIX);
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }
    let mut tmp = builder.tempfile_in(dir).map_err(|e| Error::io(dir, e))?;

    tmp.write_all(contents.as_bytes())
        .map_err(|e| Error::io(tmp.path(), e))?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io(tmp.path(), e))?;

    if let Ok(existing) = fs::metadata(path) {
        if existing.is_file() {
            tmp.as_file()
                .set_permissions(existing.permissions())
                .map_err(|e| Error::io(tmp.path(), e))?;
        }
    }

    tmp.persist(path).map_err(|e| Error::io(path, e.error))?;
    Ok(())
}
