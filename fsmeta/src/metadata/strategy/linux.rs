//! Linux and Android strategy.

#[cfg(target_os = "android")]
use std::os::android::fs::MetadataExt;
#[cfg(target_os = "linux")]
use std::os::linux::fs::MetadataExt;

use chrono::{DateTime, Utc};

use super::PlatformStatStrategy;
use crate::metadata::raw::RawStat;
use crate::time::from_unix_parts;

/// Strategy for Linux-family `stat` structures.
///
/// The classic `stat` structure carries no birth time. The status change
/// time (`st_ctime`) is reported as the creation time; it moves whenever
/// the inode changes (permissions, ownership, link count, content), so it
/// is an upper bound on the real creation time rather than the real value.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxStat;

impl PlatformStatStrategy for LinuxStat {
    const DIRECTORY_SIZE_RECURSIVE: bool = false;

    fn creation_time(raw: &RawStat) -> DateTime<Utc> {
        let m = raw.metadata();
        from_unix_parts(m.st_ctime(), m.st_ctime_nsec())
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
