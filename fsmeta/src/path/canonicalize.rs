//! Path canonicalization.
//!
//! Follows every symlink along an absolute path to its physical target and
//! confirms the target exists.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Canonicalize a path by following symlinks.
///
/// This uses the standard library's `canonicalize` to resolve all symlinks
/// in the path. The path must exist for canonicalization to succeed.
///
/// # Errors
///
/// Returns an error if:
/// - The path or one of its components does not exist (`NotFound`)
/// - Permission is denied (`PermissionDenied`)
/// - An I/O error occurs
///
/// # Examples
///
/// ```no_run
/// use fsmeta::path::canonicalize::canonicalize;
/// use std::path::Path;
///
/// let canonical = canonicalize(Path::new("/tmp")).unwrap();
/// assert!(canonical.is_absolute());
/// ```
pub fn canonicalize(path: &Path) -> Result<PathBuf> {
    fs::canonicalize(path).map_err(|e| Error::from_io(path, e))
}

/// Confirm that `path` exists, returning it unchanged.
///
/// # Errors
///
/// Propagates the stat failure, classified with [`Error::from_io`].
pub fn ensure_exists(path: PathBuf) -> Result<PathBuf> {
    match fs::metadata(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(Error::from_io(&path, e)),
    }
}
