//! Windows strategy.

use std::os::windows::fs::MetadataExt;

use chrono::{DateTime, Utc};

use super::PlatformStatStrategy;
use crate::metadata::raw::RawStat;
use crate::time::from_filetime;

/// Strategy for Win32 file attribute data.
///
/// Windows reports a directory's size as zero, so directories are sized by
/// summing the regular files beneath them.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowsStat;

impl PlatformStatStrategy for WindowsStat {
    const DIRECTORY_SIZE_RECURSIVE: bool = true;

    fn creation_time(raw: &RawStat) -> DateTime<Utc> {
        from_filetime(raw.metadata().creation_time())
    }

    fn last_access_time(raw: &RawStat) -> DateTime<Utc> {
        from_filetime(raw.metadata().last_access_time())
    }

    fn last_write_time(raw: &RawStat) -> DateTime<Utc> {
        from_filetime(raw.metadata().last_write_time())
    }
}
