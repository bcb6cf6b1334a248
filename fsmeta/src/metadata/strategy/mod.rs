//! Platform stat strategies.
//!
//! Each strategy knows how to read timestamps and sizes out of one
//! operating system family's native stat structure. Exactly one of them is
//! the [`NativeStat`] of a build; the choice is made by `cfg` so dispatch
//! costs nothing at runtime.
//!
//! | Timestamp   | `BirthTimeStat` | `LinuxStat`        | `WindowsStat`   | `UnixStat`  |
//! |-------------|-----------------|--------------------|-----------------|-------------|
//! | creation    | birth time      | status change time | creation time   | unavailable |
//! | last access | access time     | access time        | access time     | access time |
//! | last write  | modify time     | modify time        | last write time | modify time |
//!
//! Only `WindowsStat` sums directory contents for a directory's size;
//! the others report the native size field.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::metadata::raw::RawStat;
use crate::metadata::size::accumulate_dir_size;

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
mod birthtime;
#[cfg(any(target_os = "linux", target_os = "android"))]
mod linux;
#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
pub use birthtime::BirthTimeStat;
#[cfg(any(target_os = "linux", target_os = "android"))]
pub use linux::LinuxStat;
#[cfg(unix)]
pub use unix::UnixStat;
#[cfg(windows)]
pub use windows::WindowsStat;

#[cfg(not(any(unix, windows)))]
compile_error!("fsmeta has no stat strategy for this target; only Unix and Windows targets are supported");

/// The strategy matching the native stat structure of this build.
#[cfg(any(target_os = "macos", target_os = "ios", target_os = "freebsd"))]
pub type NativeStat = BirthTimeStat;

/// The strategy matching the native stat structure of this build.
#[cfg(any(target_os = "linux", target_os = "android"))]
pub type NativeStat = LinuxStat;

/// The strategy matching the native stat structure of this build.
#[cfg(all(
    unix,
    not(any(
        target_os = "macos",
        target_os = "ios",
        target_os = "freebsd",
        target_os = "linux",
        target_os = "android"
    ))
))]
pub type NativeStat = UnixStat;

/// The strategy matching the native stat structure of this build.
#[cfg(windows)]
pub type NativeStat = WindowsStat;

/// Extraction of timestamps and sizes from a raw stat record.
///
/// Implementations are zero-sized and stateless.
pub trait PlatformStatStrategy {
    /// Whether a directory's size is the sum of the files beneath it
    /// rather than the native size field.
    const DIRECTORY_SIZE_RECURSIVE: bool;

    /// When the entry was created, or the unavailable sentinel.
    fn creation_time(raw: &RawStat) -> DateTime<Utc>;

    /// When the entry was last read.
    fn last_access_time(raw: &RawStat) -> DateTime<Utc>;

    /// When the entry's contents were last modified.
    fn last_write_time(raw: &RawStat) -> DateTime<Utc>;

    /// Size in bytes of the entry found at `location`.
    ///
    /// Regular files always report the native size field.
    fn size(raw: &RawStat, location: &Path) -> u64 {
        if Self::DIRECTORY_SIZE_RECURSIVE && raw.metadata().is_dir() {
            accumulate_dir_size(location)
        } else {
            raw.raw_size()
        }
    }
}
