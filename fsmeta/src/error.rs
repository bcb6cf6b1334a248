//! Error types for the fsmeta library.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! [`Error`] enum defined here. Filesystem failures keep the originating
//! `io::Error` as their source so callers can still inspect it.

use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with an fsmeta error.
///
/// # Examples
///
/// ```
/// use fsmeta::{Error, Result};
///
/// fn example_operation() -> Result<u64> {
///     Ok(24)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the fsmeta library.
#[derive(Debug, Error)]
pub enum Error {
    /// The path is empty, does not exist, or a component could not be
    /// resolved.
    #[error("path not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
        /// The underlying I/O failure, if any.
        #[source]
        source: Option<io::Error>,
    },

    /// Permission denied accessing a path.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The current user's home directory could not be determined while
    /// expanding a leading `~`.
    #[error("cannot determine home directory while expanding {}", path.display())]
    HomeDirUnavailable {
        /// The path that required tilde expansion.
        path: PathBuf,
    },

    /// The current working directory could not be read.
    #[error("cannot read current directory: {source}")]
    CurrentDir {
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Builds a [`Error::NotFound`] for an empty path argument.
    #[must_use]
    pub fn empty_path() -> Self {
        Self::NotFound {
            path: PathBuf::new(),
            source: None,
        }
    }

    /// Classifies an I/O failure raised while accessing `path`.
    ///
    /// Not-found and permission failures get their own variants; anything
    /// else is wrapped as [`Error::Io`]. The original error is kept as the
    /// source in every case.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::Error;
    /// use std::io;
    /// use std::path::Path;
    ///
    /// let err = Error::from_io(Path::new("/missing"), io::Error::from(io::ErrorKind::NotFound));
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound {
                path: path.to_path_buf(),
                source: Some(err),
            },
            ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
                source: err,
            },
            _ => Self::Io(err),
        }
    }

    /// Check if error indicates a path does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::Error;
    ///
    /// assert!(Error::empty_path().is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Io(err) => err.kind() == ErrorKind::NotFound,
            _ => false,
        }
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        matches!(self, Self::PermissionDenied { .. })
    }
}
