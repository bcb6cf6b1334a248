//! Timestamp reconstruction from native stat fields.
//!
//! Unix stat structures carry (seconds, nanoseconds) pairs; Windows carries
//! FILETIME tick counts. Both end up as `DateTime<Utc>`. A timestamp that
//! the platform does not provide, or that cannot be represented, becomes
//! [`UNAVAILABLE`].

use chrono::{DateTime, Utc};

/// Sentinel for a timestamp the platform cannot supply: the Unix epoch.
pub const UNAVAILABLE: DateTime<Utc> = DateTime::<Utc>::UNIX_EPOCH;

const NANOS_PER_SEC: i64 = 1_000_000_000;

/// FILETIME ticks are 100ns intervals.
const FILETIME_TICKS_PER_SEC: i128 = 10_000_000;

/// Ticks between 1601-01-01 and 1970-01-01.
const FILETIME_UNIX_EPOCH: i128 = 116_444_736_000_000_000;

/// Builds a UTC timestamp from a native (seconds, nanoseconds) pair.
///
/// Nanoseconds outside `0..1_000_000_000` are carried into the seconds
/// field. Values chrono cannot represent yield [`UNAVAILABLE`].
///
/// # Examples
///
/// ```
/// use fsmeta::time::{from_unix_parts, UNAVAILABLE};
///
/// let ts = from_unix_parts(1_700_000_000, 500);
/// assert_eq!(ts.timestamp(), 1_700_000_000);
/// assert_eq!(ts.timestamp_subsec_nanos(), 500);
///
/// assert_eq!(from_unix_parts(0, 0), UNAVAILABLE);
/// ```
#[must_use]
pub fn from_unix_parts(secs: i64, nanos: i64) -> DateTime<Utc> {
    let Some(secs) = secs.checked_add(nanos.div_euclid(NANOS_PER_SEC)) else {
        log::debug!("timestamp seconds overflow: {secs}s + {nanos}ns");
        return UNAVAILABLE;
    };
    let Ok(nanos) = u32::try_from(nanos.rem_euclid(NANOS_PER_SEC)) else {
        return UNAVAILABLE;
    };

    DateTime::from_timestamp(secs, nanos).unwrap_or_else(|| {
        log::debug!("timestamp out of range: {secs}s {nanos}ns");
        UNAVAILABLE
    })
}

/// Splits a Windows FILETIME tick count into Unix (seconds, nanoseconds).
///
/// A zero tick count means the field was not populated and returns `None`.
///
/// # Examples
///
/// ```
/// use fsmeta::time::filetime_to_unix_parts;
///
/// assert_eq!(filetime_to_unix_parts(116_444_736_000_000_000), Some((0, 0)));
/// assert_eq!(filetime_to_unix_parts(116_444_736_000_000_001), Some((0, 100)));
/// assert_eq!(filetime_to_unix_parts(0), None);
/// ```
#[must_use]
pub fn filetime_to_unix_parts(ticks: u64) -> Option<(i64, i64)> {
    if ticks == 0 {
        return None;
    }
    let since_epoch = i128::from(ticks) - FILETIME_UNIX_EPOCH;
    let secs = i64::try_from(since_epoch.div_euclid(FILETIME_TICKS_PER_SEC)).ok()?;
    let nanos = i64::try_from(since_epoch.rem_euclid(FILETIME_TICKS_PER_SEC) * 100).ok()?;
    Some((secs, nanos))
}

/// Builds a UTC timestamp from a Windows FILETIME tick count.
#[must_use]
pub fn from_filetime(ticks: u64) -> DateTime<Utc> {
    filetime_to_unix_parts(ticks)
        .map_or(UNAVAILABLE, |(secs, nanos)| from_unix_parts(secs, nanos))
}

/// Returns true if `ts` is the [`UNAVAILABLE`] sentinel.
#[must_use]
pub fn is_unavailable(ts: &DateTime<Utc>) -> bool {
    *ts == UNAVAILABLE
}
