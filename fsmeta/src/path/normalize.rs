//! Path normalization functions.
//!
//! This module provides the purely lexical half of path resolution:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Cleaning redundant separators, `.` and `..` components
//!
//! Nothing here follows symlinks or checks that a path exists.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// A leading `~` is replaced by the home directory and whatever follows it
/// is joined on, with leading separators dropped. `~`, `~/path` and
/// `~path` all expand, so `~foo` becomes `<home>/foo`.
///
/// # Errors
///
/// Returns `HomeDirUnavailable` if the path starts with `~` and the home
/// directory cannot be determined.
///
/// # Examples
///
/// ```
/// use fsmeta::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// // Expands ~/path to home/path
/// let expanded = expand_tilde(Path::new("~/project")).unwrap();
/// assert!(expanded.ends_with("project"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("relative/file.txt")).unwrap();
/// assert_eq!(expanded, Path::new("relative/file.txt"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    expand_tilde_with(path, home::home_dir)
}

/// Expand tilde (~) using `home_dir` to look up the home directory.
///
/// `home_dir` is only called when the path actually starts with `~`. A
/// first component that is not valid UTF-8 is never expanded.
///
/// # Errors
///
/// Same as [`expand_tilde`].
pub fn expand_tilde_with<F>(path: &Path, home_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let mut components = path.components();
    let Some(Component::Normal(first)) = components.next() else {
        return Ok(path.to_path_buf());
    };
    let Some(suffix) = first.to_str().and_then(|first| first.strip_prefix('~')) else {
        return Ok(path.to_path_buf());
    };

    let mut expanded = home_dir().ok_or_else(|| Error::HomeDirUnavailable {
        path: path.to_path_buf(),
    })?;
    let suffix = suffix.trim_start_matches(|c: char| c == '/' || c == '\\');
    if !suffix.is_empty() {
        expanded.push(suffix);
    }
    let rest = components.as_path();
    if !rest.as_os_str().is_empty() {
        expanded.push(rest);
    }
    Ok(expanded)
}

/// Lexically clean a path.
///
/// - Repeated separators and `.` components are removed
/// - `..` cancels the preceding normal component
/// - `..` directly after the root is dropped
/// - Leading `..` components of a relative path are kept
/// - An empty result becomes `.`
///
/// # Examples
///
/// ```
/// use fsmeta::path::normalize::clean;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(clean(Path::new("a//b/./c/")), PathBuf::from("a/b/c"));
/// assert_eq!(clean(Path::new("/a/b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(clean(Path::new("")), PathBuf::from("."));
/// ```
#[must_use]
pub fn clean(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => parts.push(component),
            },
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                parts.push(component);
            }
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Make `path` absolute without touching the filesystem.
///
/// Expands a leading tilde with `home_dir`, joins relative paths onto the
/// current working directory and cleans the result.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the current directory
/// cannot be determined.
pub fn absolutize_with<F>(path: &Path, home_dir: F) -> Result<PathBuf>
where
    F: FnOnce() -> Option<PathBuf>,
{
    let expanded = expand_tilde_with(path, home_dir)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|source| Error::CurrentDir { source })?;
        cwd.join(expanded)
    };

    Ok(clean(&absolute))
}

/// Make `path` absolute using the real home directory.
///
/// # Errors
///
/// See [`absolutize_with`].
///
/// # Examples
///
/// ```
/// use fsmeta::path::normalize::absolutize;
/// use std::path::Path;
///
/// let absolute = absolutize(Path::new("./src/../Cargo.toml")).unwrap();
/// assert!(absolute.is_absolute());
/// assert!(absolute.ends_with("Cargo.toml"));
/// ```
pub fn absolutize(path: &Path) -> Result<PathBuf> {
    absolutize_with(path, home::home_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_home() -> Option<PathBuf> {
        Some(PathBuf::from("/home/tester"))
    }

    #[test]
    fn test_expand_tilde_home() {
        let home = home::home_dir().unwrap();
        assert_eq!(expand_tilde(Path::new("~")).unwrap(), home);
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let home = home::home_dir().unwrap();
        let expanded = expand_tilde(Path::new("~/test")).unwrap();
        assert_eq!(expanded, home.join("test"));
    }

    #[test]
    fn test_expand_tilde_with_override() {
        let expanded = expand_tilde_with(Path::new("~/a/b"), fixed_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester/a/b"));
    }

    #[test]
    fn test_expand_tilde_absolute_unchanged() {
        let path = Path::new("/absolute/path");
        assert_eq!(expand_tilde(path).unwrap(), path);
    }

    #[test]
    fn test_expand_tilde_inner_tilde_unchanged() {
        let path = Path::new("a/~/b");
        assert_eq!(expand_tilde_with(path, fixed_home).unwrap(), path);
    }

    #[test]
    fn test_expand_tilde_joins_name_after_tilde() {
        let expanded = expand_tilde_with(Path::new("~foo"), fixed_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester/foo"));

        let expanded = expand_tilde_with(Path::new("~user/path"), fixed_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester/user/path"));
    }

    #[test]
    fn test_expand_tilde_backslash_separator() {
        let expanded = expand_tilde_with(Path::new("~\\docs"), fixed_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester/docs"));
    }

    #[test]
    fn test_expand_tilde_alone_has_no_trailing_separator() {
        let expanded = expand_tilde_with(Path::new("~/"), fixed_home).unwrap();
        assert_eq!(expanded, PathBuf::from("/home/tester"));
        assert_eq!(expanded.as_os_str(), "/home/tester");
    }

    #[test]
    fn test_expand_tilde_missing_home() {
        let result = expand_tilde_with(Path::new("~/x"), || None);
        assert!(matches!(result, Err(Error::HomeDirUnavailable { .. })));
    }

    #[test]
    fn test_expand_tilde_skips_lookup_without_tilde() {
        let result = expand_tilde_with(Path::new("plain"), || panic!("home looked up"));
        assert_eq!(result.unwrap(), PathBuf::from("plain"));
    }

    #[test]
    fn test_clean_redundant_separators() {
        assert_eq!(clean(Path::new("a//b///c")), PathBuf::from("a/b/c"));
    }

    #[test]
    fn test_clean_current_dir() {
        assert_eq!(clean(Path::new("./a/./b/.")), PathBuf::from("a/b"));
        assert_eq!(clean(Path::new(".")), PathBuf::from("."));
        assert_eq!(clean(Path::new("./")), PathBuf::from("."));
    }

    #[test]
    fn test_clean_parent_dir() {
        assert_eq!(clean(Path::new("a/b/../c")), PathBuf::from("a/c"));
        assert_eq!(clean(Path::new("a/..")), PathBuf::from("."));
        assert_eq!(clean(Path::new("a/../..")), PathBuf::from(".."));
        assert_eq!(clean(Path::new("../../a")), PathBuf::from("../../a"));
    }

    #[cfg(unix)]
    #[test]
    fn test_clean_parent_at_root() {
        assert_eq!(clean(Path::new("/..")), PathBuf::from("/"));
        assert_eq!(clean(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(clean(Path::new("/")), PathBuf::from("/"));
    }

    #[test]
    fn test_clean_is_idempotent() {
        for input in ["a//b/../c/.", "../x/./y", "", "/a/b/c/../../d"] {
            let once = clean(Path::new(input));
            assert_eq!(clean(&once), once, "input: {input:?}");
        }
    }

    #[test]
    fn test_absolutize_relative() {
        let cwd = env::current_dir().unwrap();
        let absolute = absolutize(Path::new("./some/../file.txt")).unwrap();
        assert_eq!(absolute, clean(&cwd.join("file.txt")));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_tilde_with_override() {
        let absolute = absolutize_with(Path::new("~/docs/../notes"), fixed_home).unwrap();
        assert_eq!(absolute, PathBuf::from("/home/tester/notes"));
    }

    #[cfg(unix)]
    #[test]
    fn test_absolutize_absolute_is_cleaned() {
        let absolute = absolutize(Path::new("/a/./b//c/..")).unwrap();
        assert_eq!(absolute, PathBuf::from("/a/b"));
    }
}
