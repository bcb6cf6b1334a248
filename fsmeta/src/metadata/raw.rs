//! The raw stat record handed to the extractor.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What kind of filesystem entry a raw stat record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// A symbolic link that was not followed.
    Symlink,
    /// Anything else (sockets, fifos, devices).
    Other,
}

impl EntryKind {
    fn of(file_type: fs::FileType) -> Self {
        if file_type.is_symlink() {
            Self::Symlink
        } else if file_type.is_dir() {
            Self::Directory
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// A native file-status record paired with the entry's base name.
///
/// The wrapped [`fs::Metadata`] exposes the operating system's stat
/// structure through the platform `MetadataExt` traits, which is what the
/// [`PlatformStatStrategy`](crate::metadata::PlatformStatStrategy)
/// implementations read.
///
/// # Examples
///
/// ```
/// use fsmeta::RawStat;
///
/// let raw = RawStat::stat("Cargo.toml").unwrap();
/// assert_eq!(raw.name(), "Cargo.toml");
/// assert!(!raw.is_dir_like());
/// ```
#[derive(Debug, Clone)]
pub struct RawStat {
    name: OsString,
    metadata: fs::Metadata,
}

impl RawStat {
    /// Stat `path`, following symlinks.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for an empty or missing path, otherwise the
    /// classified I/O failure.
    pub fn stat(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::empty_path());
        }
        let metadata = fs::metadata(path).map_err(|e| Error::from_io(path, e))?;
        Ok(Self::from_parts(base_name(path), metadata))
    }

    /// Stat `path` without following a final symlink.
    ///
    /// # Errors
    ///
    /// Same as [`RawStat::stat`].
    pub fn lstat(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(Error::empty_path());
        }
        let metadata = fs::symlink_metadata(path).map_err(|e| Error::from_io(path, e))?;
        Ok(Self::from_parts(base_name(path), metadata))
    }

    /// Build a record from a directory listing entry.
    ///
    /// Like the entry's own metadata, symlinks are not followed.
    ///
    /// # Errors
    ///
    /// Returns the classified I/O failure if the entry cannot be statted.
    pub fn from_dir_entry(entry: &fs::DirEntry) -> Result<Self> {
        let metadata = entry
            .metadata()
            .map_err(|e| Error::from_io(&entry.path(), e))?;
        Ok(Self::from_parts(entry.file_name(), metadata))
    }

    /// Pair an already obtained `metadata` with the entry's base `name`.
    #[must_use]
    pub fn from_parts(name: impl Into<OsString>, metadata: fs::Metadata) -> Self {
        Self {
            name: name.into(),
            metadata,
        }
    }

    /// The entry's base name.
    #[must_use]
    pub fn name(&self) -> &OsStr {
        &self.name
    }

    /// The native metadata.
    #[must_use]
    pub fn metadata(&self) -> &fs::Metadata {
        &self.metadata
    }

    /// The kind of entry described by the mode bits.
    #[must_use]
    pub fn kind(&self) -> EntryKind {
        EntryKind::of(self.metadata.file_type())
    }

    /// True for directories and for symbolic links.
    ///
    /// Symlinks count as directory-like whatever they point at.
    #[must_use]
    pub fn is_dir_like(&self) -> bool {
        matches!(self.kind(), EntryKind::Directory | EntryKind::Symlink)
    }

    /// The size field of the native record.
    #[must_use]
    pub fn raw_size(&self) -> u64 {
        self.metadata.len()
    }
}

/// The last component of `path`, as a stat call would name it.
///
/// `/` names itself and an empty path is named `.`.
pub(crate) fn base_name(path: &Path) -> OsString {
    if let Some(name) = path.file_name() {
        return name.to_os_string();
    }
    path.components()
        .next_back()
        .map_or_else(|| OsString::from("."), |c| c.as_os_str().to_os_string())
}
