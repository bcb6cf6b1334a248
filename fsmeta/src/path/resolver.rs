//! Path resolution.
//!
//! This module provides the `PathResolver` type, which turns a
//! user-supplied path into the absolute, symlink-free path of an existing
//! filesystem entry.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::path::{canonicalize, normalize};

/// Resolves user-supplied paths to physical absolute paths.
///
/// Resolution runs in a single pass:
/// 1. Empty input is rejected as not found
/// 2. A leading `~` is expanded to the home directory
/// 3. Relative paths are joined onto the current directory
/// 4. Symlinks are followed to their final target
/// 5. The target must exist
///
/// # Examples
///
/// ```no_run
/// use fsmeta::path::PathResolver;
///
/// let resolver = PathResolver::new();
/// let resolved = resolver.resolve("~/project").unwrap();
/// assert!(resolved.is_absolute());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResolver {
    /// Replacement for the user's home directory during tilde expansion.
    home_dir: Option<PathBuf>,
}

impl PathResolver {
    /// Create a new path resolver with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::path::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `home` instead of the current user's home directory when
    /// expanding `~`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::path::PathResolver;
    ///
    /// let resolver = PathResolver::new().with_home_dir("/srv/home");
    /// assert_eq!(resolver.home_dir().unwrap().to_str(), Some("/srv/home"));
    /// ```
    #[must_use]
    pub fn with_home_dir(mut self, home: impl Into<PathBuf>) -> Self {
        self.home_dir = Some(home.into());
        self
    }

    /// The home directory used for tilde expansion.
    ///
    /// Returns the configured override, or the current user's home
    /// directory, or `None` if neither is known.
    #[must_use]
    pub fn home_dir(&self) -> Option<PathBuf> {
        self.home_dir.clone().or_else(home::home_dir)
    }

    /// Make `path` absolute without following symlinks or checking that
    /// it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if `path` is empty, tilde expansion fails, or the
    /// current directory cannot be read.
    pub fn absolutize(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::empty_path());
        }
        normalize::absolutize_with(path, || self.home_dir())
    }

    /// Resolve `path` to the absolute physical path of an existing entry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `path` is empty (`NotFound`)
    /// - The home directory is needed but unknown (`HomeDirUnavailable`)
    /// - The current directory cannot be read (`CurrentDir`)
    /// - The path, or a symlink target along it, does not exist
    ///   (`NotFound`, carrying the underlying I/O error)
    /// - Access is denied (`PermissionDenied`)
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::path::PathResolver;
    ///
    /// let resolver = PathResolver::new();
    /// assert!(resolver.resolve("").unwrap_err().is_not_found());
    /// assert!(resolver.resolve("testdata/nonexistent.txt").unwrap_err().is_not_found());
    /// ```
    pub fn resolve(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let absolute = self.absolutize(path)?;
        let resolved = canonicalize::canonicalize(&absolute)?;
        log::debug!(
            "resolved {} -> {}",
            path.display(),
            resolved.display()
        );
        canonicalize::ensure_exists(resolved)
    }

    /// Resolve `path`, falling back to the best value available.
    ///
    /// Never fails. On resolution failure the lexically absolutized path is
    /// returned, and if even that is unavailable the input is returned as
    /// given. Callers must not assume the result exists or is free of
    /// symlinks.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::path::PathResolver;
    ///
    /// let best_effort = PathResolver::new().resolve_lenient("no/such/dir");
    /// assert!(best_effort.is_absolute());
    /// assert!(best_effort.ends_with("no/such/dir"));
    /// ```
    #[must_use]
    pub fn resolve_lenient(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        match self.resolve(path) {
            Ok(resolved) => resolved,
            Err(err) => {
                log::debug!(
                    "best-effort resolution of {}: {err}",
                    path.display()
                );
                self.absolutize(path)
                    .unwrap_or_else(|_| path.to_path_buf())
            }
        }
    }
}

/// Resolve `path` with a default [`PathResolver`].
///
/// # Errors
///
/// See [`PathResolver::resolve`].
///
/// # Examples
///
/// ```
/// let err = fsmeta::resolve("").unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn resolve(path: impl AsRef<Path>) -> Result<PathBuf> {
    PathResolver::new().resolve(path)
}
