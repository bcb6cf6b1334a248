//! Common test utilities for integration tests.
//!
//! This module builds the on-disk fixture tree the integration tests run
//! against:
//!
//! ```text
//! <root>/
//!   directory/
//!     text.txt        24 bytes
//!   empty_dir/
//!   empty_file.txt    0 bytes
//!   linked -> directory   (when symlinks can be created)
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Contents of `directory/text.txt`.
pub const TEXT_CONTENTS: &[u8; 24] = b"fixture text, 24 bytes.\n";

/// A temporary fixture tree, removed when dropped.
pub struct FixtureTree {
    root: TempDir,
    symlink_created: bool,
}

#[allow(dead_code)]
impl FixtureTree {
    /// Creates the fixture tree in a fresh temporary directory.
    ///
    /// # Panics
    ///
    /// Panics if the files cannot be written. This is acceptable in test
    /// code where we want to fail fast on broken fixtures.
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("create temp dir");
        let directory = root.path().join("directory");
        fs::create_dir(&directory).expect("create directory");
        fs::write(directory.join("text.txt"), TEXT_CONTENTS).expect("write text.txt");
        fs::create_dir(root.path().join("empty_dir")).expect("create empty_dir");
        fs::write(root.path().join("empty_file.txt"), b"").expect("write empty_file.txt");

        let symlink_created = link_dir(&directory, &root.path().join("linked"));
        Self {
            root,
            symlink_created,
        }
    }

    /// The fixture root.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// A path inside the fixture root.
    pub fn join(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Whether `linked` exists. Creating symlinks needs extra privileges
    /// on Windows.
    pub fn has_symlink(&self) -> bool {
        self.symlink_created
    }
}

#[cfg(unix)]
fn link_dir(target: &Path, link: &Path) -> bool {
    std::os::unix::fs::symlink(target, link).is_ok()
}

#[cfg(windows)]
fn link_dir(target: &Path, link: &Path) -> bool {
    std::os::windows::fs::symlink_dir(target, link).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_layout() {
        let tree = FixtureTree::new();
        assert!(tree.join("directory/text.txt").is_file());
        assert!(tree.join("empty_dir").is_dir());
        assert_eq!(fs::metadata(tree.join("empty_file.txt")).unwrap().len(), 0);
        assert_eq!(TEXT_CONTENTS.len(), 24);
    }
}
