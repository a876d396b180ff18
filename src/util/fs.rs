//! Filesystem utilities.

use std::fs;
use std::io;
use std::path::Path;

/// Ensure a directory exists, creating it and any missing ancestors.
///
/// Returns `true` when the directory had to be created. Fails if `path`
/// (or an ancestor) exists but is not a directory.
pub fn ensure_dir(path: &Path) -> io::Result<bool> {
    if path.is_dir() {
        return Ok(false);
    }
    if path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            "path exists and is not a directory",
        ));
    }
    fs::create_dir_all(path)?;
    Ok(true)
}
