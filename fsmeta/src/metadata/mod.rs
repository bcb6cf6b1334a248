//! Normalized file metadata.
//!
//! [`FileMetadata`] is built in one step from a [`RawStat`] and the
//! directory containing the entry. Timestamps and directory sizes come
//! from the build's [`NativeStat`] strategy.

pub mod raw;
pub mod size;
pub mod strategy;

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::options::MetadataOptions;
use crate::path::normalize::clean;

pub use raw::{EntryKind, RawStat};
pub use strategy::{NativeStat, PlatformStatStrategy};

/// Normalized metadata for a single filesystem entry.
///
/// Records are immutable: every field is computed at construction and only
/// exposed through accessors.
///
/// # Examples
///
/// ```
/// use fsmeta::FileMetadata;
///
/// let meta = FileMetadata::from_path("Cargo.toml").unwrap();
/// assert_eq!(meta.name(), "Cargo.toml");
/// assert_eq!(meta.title(), "Cargo");
/// assert_eq!(meta.extension(), ".toml");
/// assert!(!meta.is_dir());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    name: String,
    path: PathBuf,
    location: PathBuf,
    absolute_path: PathBuf,
    title: String,
    extension: String,
    size: u64,
    is_dir: bool,
    kind: EntryKind,
    creation_time: DateTime<Utc>,
    last_access_time: DateTime<Utc>,
    last_write_time: DateTime<Utc>,
}

impl FileMetadata {
    /// Stat `path` (following symlinks) and build its record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if `path` is empty or does not exist, and the
    /// classified I/O failure for any other stat error.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with(path, &MetadataOptions::default())
    }

    /// Like [`FileMetadata::from_path`] with explicit options.
    ///
    /// # Errors
    ///
    /// See [`FileMetadata::from_path`].
    pub fn from_path_with(path: impl AsRef<Path>, options: &MetadataOptions) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::empty_path());
        }
        let raw = RawStat::stat(path)?;
        Ok(Self::from_raw_with(&raw, containing_dir(path), options))
    }

    /// Build a record from a stat result obtained elsewhere.
    ///
    /// `dir` is the directory containing the entry. Use this when a raw
    /// record is already at hand, for example while listing a directory,
    /// to avoid a second stat call.
    ///
    /// # Examples
    ///
    /// ```
    /// use fsmeta::{FileMetadata, RawStat};
    ///
    /// let raw = RawStat::stat("src/lib.rs").unwrap();
    /// let meta = FileMetadata::from_raw(&raw, "src");
    /// assert_eq!(meta.path(), std::path::Path::new("src"));
    /// assert_eq!(meta.extension(), ".rs");
    /// ```
    #[must_use]
    pub fn from_raw(raw: &RawStat, dir: impl AsRef<Path>) -> Self {
        Self::from_raw_with(raw, dir, &MetadataOptions::default())
    }

    /// Like [`FileMetadata::from_raw`] with explicit options.
    #[must_use]
    pub fn from_raw_with(raw: &RawStat, dir: impl AsRef<Path>, options: &MetadataOptions) -> Self {
        Self::from_raw_using::<NativeStat>(raw, dir, options)
    }

    /// Build a record reading timestamps and sizes through strategy `S`.
    ///
    /// Only strategies compiled for the running platform are available, so
    /// `S` always matches the native layout of `raw`.
    #[must_use]
    pub fn from_raw_using<S: PlatformStatStrategy>(
        raw: &RawStat,
        dir: impl AsRef<Path>,
        options: &MetadataOptions,
    ) -> Self {
        let name = raw.name().to_string_lossy().into_owned();
        let path = clean(dir.as_ref());
        let absolute_path = options.resolver().resolve_lenient(&path);
        let (title, extension) = split_name(&name);
        let title = title.to_string();
        let extension = extension.to_string();

        // Joined from the OS name, which may not survive the lossy `name`
        let location = path.join(raw.name());
        let recursive = options.directory_size().is_recursive_for::<S>();
        let size = if recursive && raw.metadata().is_dir() {
            size::accumulate_dir_size(&location)
        } else {
            raw.raw_size()
        };

        Self {
            path,
            location,
            absolute_path,
            title,
            extension,
            size,
            is_dir: raw.is_dir_like(),
            kind: raw.kind(),
            creation_time: S::creation_time(raw),
            last_access_time: S::last_access_time(raw),
            last_write_time: S::last_write_time(raw),
            name,
        }
    }

    /// Base name of the entry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cleaned path of the containing directory.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Containing directory resolved to an absolute path.
    ///
    /// Best effort: if resolution failed this is the lexically absolute
    /// form of [`path`](Self::path), which may still contain symlinks or
    /// not exist.
    #[must_use]
    pub fn absolute_path(&self) -> &Path {
        &self.absolute_path
    }

    /// The name without its extension.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The extension including its leading dot, or `""`.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Size in bytes. For directories this depends on the size policy.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// True for directories and symbolic links.
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    /// The entry kind from the raw mode bits.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Creation time, or [`time::UNAVAILABLE`](crate::time::UNAVAILABLE).
    ///
    /// On Linux and Android this is the status change time.
    #[must_use]
    pub fn creation_time(&self) -> DateTime<Utc> {
        self.creation_time
    }

    /// Last access time.
    #[must_use]
    pub fn last_access_time(&self) -> DateTime<Utc> {
        self.last_access_time
    }

    /// Last write time.
    #[must_use]
    pub fn last_write_time(&self) -> DateTime<Utc> {
        self.last_write_time
    }

    /// The entry's path: containing directory joined with the name.
    #[must_use]
    pub fn location(&self) -> &Path {
        &self.location
    }
}

impl fmt::Display for FileMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.location().display())
    }
}

/// Split a file name into title and extension at its last dot.
///
/// The extension keeps the dot; a name without a dot has an empty
/// extension.
///
/// # Examples
///
/// ```
/// use fsmeta::metadata::split_name;
///
/// assert_eq!(split_name("text.txt"), ("text", ".txt"));
/// assert_eq!(split_name("archive.tar.gz"), ("archive.tar", ".gz"));
/// assert_eq!(split_name("README"), ("README", ""));
/// assert_eq!(split_name(".bashrc"), ("", ".bashrc"));
/// ```
#[must_use]
pub fn split_name(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) => name.split_at(dot),
        None => (name, ""),
    }
}

/// The directory a stat of `path` reports the entry under.
fn containing_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
        Some(parent) => parent,
        None => path,
    }
}
