#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # fsmeta
//!
//! Cross-platform, normalized file metadata.
//!
//! Operating systems disagree on what a file-status record contains: macOS
//! and FreeBSD record a birth time, Linux only a status change time,
//! Windows stores FILETIME ticks and reports zero for directory sizes. This
//! library maps each platform's native stat structure onto one uniform
//! record, [`FileMetadata`], and provides the path resolution it relies on.
//!
//! ## Core Types
//!
//! - [`FileMetadata`]: the normalized record
//! - [`RawStat`]: a native stat result paired with the entry name
//! - [`PlatformStatStrategy`] and [`NativeStat`]: per-platform extraction
//! - [`PathResolver`] and [`resolve`]: tilde, relative and symlink resolution
//! - [`MetadataOptions`] and [`DirectorySize`]: configuration
//! - [`Error`] and [`Result`]: error handling types
//!
//! ## Examples
//!
//! ```
//! use fsmeta::FileMetadata;
//!
//! let meta = FileMetadata::from_path("src/lib.rs").unwrap();
//! assert_eq!(meta.name(), "lib.rs");
//! assert_eq!(meta.title(), "lib");
//! assert_eq!(meta.extension(), ".rs");
//! assert!(meta.size() > 0);
//!
//! let missing = fsmeta::resolve("testdata/nonexistent.txt");
//! assert!(missing.unwrap_err().is_not_found());
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade at debug
//! and trace level. Install any `log` implementation to see them.

pub mod error;
pub mod metadata;
pub mod options;
pub mod path;
pub mod probe;
pub mod time;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use metadata::{EntryKind, FileMetadata, NativeStat, PlatformStatStrategy, RawStat};
pub use options::{DirectorySize, MetadataOptions};
pub use path::{resolve, PathResolver};
pub use probe::{is_dir, is_empty, is_file};
