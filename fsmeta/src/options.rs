//! Extraction options.
//!
//! Defaults reproduce the native behaviour of the build target; callers
//! override individual settings with the `with_*` builder methods.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::metadata::PlatformStatStrategy;
use crate::path::PathResolver;

/// How a directory's size is computed.
///
/// Regular files always report their byte length; this only affects
/// directories.
///
/// # Examples
///
/// ```
/// use fsmeta::DirectorySize;
///
/// assert_eq!(DirectorySize::parse("RECURSIVE").unwrap(), DirectorySize::Recursive);
/// assert_eq!(DirectorySize::default(), DirectorySize::Native);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DirectorySize {
    /// Whatever the platform strategy does.
    #[default]
    Native,
    /// The size field of the native stat record.
    Raw,
    /// The sum of all accessible regular files beneath the directory.
    Recursive,
}

impl DirectorySize {
    /// Parses a directory size policy from a string.
    ///
    /// Recognizes: "native", "raw", "recursive" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "native" => Ok(Self::Native),
            "raw" => Ok(Self::Raw),
            "recursive" => Ok(Self::Recursive),
            _ => Err(format!("invalid directory size policy: {s}")),
        }
    }

    /// Whether directories are summed recursively under strategy `S`.
    #[must_use]
    pub fn is_recursive_for<S: PlatformStatStrategy>(self) -> bool {
        match self {
            Self::Native => S::DIRECTORY_SIZE_RECURSIVE,
            Self::Raw => false,
            Self::Recursive => true,
        }
    }
}

impl FromStr for DirectorySize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DirectorySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Native => write!(f, "native"),
            Self::Raw => write!(f, "raw"),
            Self::Recursive => write!(f, "recursive"),
        }
    }
}

/// Settings for building [`FileMetadata`](crate::FileMetadata) records.
///
/// # Examples
///
/// ```
/// use fsmeta::{DirectorySize, MetadataOptions, PathResolver};
///
/// let options = MetadataOptions::new()
///     .with_directory_size(DirectorySize::Recursive)
///     .with_resolver(PathResolver::new().with_home_dir("/home/build"));
/// assert_eq!(options.directory_size(), DirectorySize::Recursive);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataOptions {
    directory_size: DirectorySize,
    resolver: PathResolver,
}

impl MetadataOptions {
    /// Options reproducing the native behaviour of this build.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the directory size policy.
    #[must_use]
    pub fn with_directory_size(mut self, policy: DirectorySize) -> Self {
        self.directory_size = policy;
        self
    }

    /// Set the resolver used for the absolute path of each record.
    #[must_use]
    pub fn with_resolver(mut self, resolver: PathResolver) -> Self {
        self.resolver = resolver;
        self
    }

    /// The directory size policy.
    #[must_use]
    pub fn directory_size(&self) -> DirectorySize {
        self.directory_size
    }

    /// The resolver used for absolute paths.
    #[must_use]
    pub fn resolver(&self) -> &PathResolver {
        &self.resolver
    }
}
