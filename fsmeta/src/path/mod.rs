//! Path resolution.
//!
//! This module turns user-supplied paths into absolute physical paths.
//!
//! # Key Concepts
//!
//! ## Normalization
//!
//! Normalization is lexical and never touches the filesystem:
//! - Expanding tilde (~) to the home directory
//! - Converting relative paths to absolute paths
//! - Cleaning redundant separators, `.` and `..` components
//!
//! ## Canonicalization
//!
//! Canonicalization follows symlinks to get the "real" path on the
//! filesystem and requires the path to exist.
//!
//! ## Strict and lenient resolution
//!
//! [`PathResolver::resolve`] fails hard: a missing path is an
//! [`Error::NotFound`](crate::Error::NotFound). [`PathResolver::resolve_lenient`]
//! never fails and hands back the best path it could compute; metadata
//! extraction uses it so that an unresolvable containing directory does
//! not prevent building a record.
//!
//! # Examples
//!
//! ```no_run
//! use fsmeta::path::PathResolver;
//!
//! let resolver = PathResolver::new();
//!
//! // Tilde, relative segments and symlinks are all resolved
//! let resolved = resolver.resolve("~/projects/../notes").unwrap();
//! assert!(resolved.is_absolute());
//! ```

pub mod canonicalize;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use resolver::{resolve, PathResolver};
