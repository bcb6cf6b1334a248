//! Recursive directory size accumulation.

use std::path::Path;

use walkdir::WalkDir;

/// Sum the sizes of all regular files beneath `root`.
///
/// Symlinks below the root are not followed. Entries that cannot be read
/// or statted contribute nothing and do not stop the walk. A regular file
/// passed as `root` yields its own size.
///
/// # Examples
///
/// ```no_run
/// use fsmeta::metadata::size::accumulate_dir_size;
///
/// let total = accumulate_dir_size(std::path::Path::new("src"));
/// assert!(total > 0);
/// ```
#[must_use]
pub fn accumulate_dir_size(root: &Path) -> u64 {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                log::trace!("skipping unreadable entry under {}: {err}", root.display());
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| match entry.metadata() {
            Ok(metadata) => Some(metadata.len()),
            Err(err) => {
                log::trace!("skipping {}: {err}", entry.path().display());
                None
            }
        })
        .fold(0u64, u64::saturating_add)
}
