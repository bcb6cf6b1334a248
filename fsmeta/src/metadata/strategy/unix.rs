//! Generic Unix fallback strategy.

use std::os::unix::fs::MetadataExt;

use chrono::{DateTime, Utc};

use super::PlatformStatStrategy;
use crate::metadata::raw::RawStat;
use crate::time::{from_unix_parts, UNAVAILABLE};

/// Strategy for Unix systems without a more specific family.
///
/// POSIX `stat` has no creation time, so [`creation_time`] always returns
/// the unavailable sentinel instead of guessing.
///
/// [`creation_time`]: PlatformStatStrategy::creation_time
#[derive(Debug, Clone, Copy, Default)]
pub struct UnixStat;

impl PlatformStatStrategy for UnixStat {
    const DIRECTORY_SIZE_RECURSIVE: bool = false;

    fn creation_time(_raw: &RawStat) -> DateTime<Utc> {
        UNAVAILABLE
    }

    fn last_access_time(raw: &RawStat) -> DateTime<Utc> {
        let m = raw.metadata();
        from_unix_parts(m.atime(), m.atime_nsec())
    }

    fn last_write_time(raw: &RawStat) -> DateTime<Utc> {
        let m = raw.metadata();
        from_unix_parts(m.mtime(), m.mtime_nsec())
    }
}
