//! BSD-family strategy (macOS, iOS, FreeBSD).

#[cfg(target_os = "freebsd")]
use std::os::freebsd::fs::MetadataExt;
#[cfg(target_os = "ios")]
use std::os::ios::fs::MetadataExt;
#[cfg(target_os = "macos")]
use std::os::macos::fs::MetadataExt;

use chrono::{DateTime, Utc};

use super::PlatformStatStrategy;
use crate::metadata::raw::RawStat;
use crate::time::from_unix_parts;

/// Strategy for `stat` structures that carry a birth time.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthTimeStat;

impl PlatformStatStrategy for BirthTimeStat {
    const DIRECTORY_SIZE_RECURSIVE: bool = false;

    fn creation_time(raw: &RawStat) -> DateTime<Utc> {
        let m = raw.metadata();
        from_unix_parts(m.st_birthtime(), m.st_birthtime_nsec())
    }

    fn last_access_time(raw: &RawStat) -> DateTime<Utc> {
        let m = raw.metadata();
        from_unix_parts(m.st_atime(), m.st_atime_nsec())
    }

    fn last_write_time(raw: &RawStat) -> DateTime<Utc> {
        let m = raw.metadata();
        from_unix_parts(m.st_mtime(), m.st_mtime_nsec())
    }
}
