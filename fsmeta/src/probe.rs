//! Quick existence and emptiness checks.
//!
//! These answer yes/no questions about a path and never fail: any error
//! while statting counts as "no".

use std::fs;
use std::path::Path;

use crate::metadata::RawStat;

/// True if `path` exists and is not directory-like.
///
/// Symlinks are followed, so a link to a regular file is a file.
///
/// # Examples
///
/// ```
/// assert!(fsmeta::is_file("Cargo.toml"));
/// assert!(!fsmeta::is_file("src"));
/// assert!(!fsmeta::is_file(""));
/// ```
#[must_use]
pub fn is_file(path: impl AsRef<Path>) -> bool {
    RawStat::stat(path).is_ok_and(|raw| !raw.is_dir_like())
}

/// True if `path` exists and is a directory (after following symlinks).
///
/// # Examples
///
/// ```
/// assert!(fsmeta::is_dir("src"));
/// assert!(!fsmeta::is_dir("testdata/nonexistent"));
/// ```
#[must_use]
pub fn is_dir(path: impl AsRef<Path>) -> bool {
    RawStat::stat(path).is_ok_and(|raw| raw.is_dir_like())
}

/// True if `path` is an empty file or a directory without entries.
///
/// Missing or unreadable paths are not empty.
#[must_use]
pub fn is_empty(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    let Ok(raw) = RawStat::stat(path) else {
        return false;
    };
    if raw.is_dir_like() {
        fs::read_dir(path).is_ok_and(|mut entries| entries.next().is_none())
    } else {
        raw.raw_size() == 0
    }
}
