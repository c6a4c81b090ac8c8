/*!
 * Modification-time histogram over the immediate children of a directory
 */

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, TimeZone, Timelike};
use tracing::{debug, trace};

use crate::error::Result;
use crate::types::{FilesystemEntry, HourBucketTable};
use crate::utils::list_children;

/// Buckets a directory's children by the local hour they were last modified
#[derive(Debug, Clone, Copy, Default)]
pub struct ModTimeHistogrammer;

impl ModTimeHistogrammer {
    pub fn new() -> Self {
        Self
    }

    /// Count the children of `path` per local modification hour.
    ///
    /// Only immediate children are looked at. Symbolic links are resolved, and
    /// a child that cannot be inspected (a dangling link, a file removed
    /// mid-listing) is left out without error. Failing to list `path` itself
    /// is fatal.
    pub fn compute_hour_histogram(&self, path: &Path) -> Result<HourBucketTable> {
        let children = list_children(path)?;
        debug!("histogram of {} ({} entries)", path.display(), children.len());

        let mut table = HourBucketTable::new();
        for child in &children {
            match FilesystemEntry::inspect_following(child) {
                Ok(FilesystemEntry {
                    modified: Some(modified),
                    ..
                }) => match local_hour(modified) {
                    Some(hour) => table.record(hour),
                    None => trace!("no local hour for {}", child.display()),
                },
                Ok(_) => trace!("no modification time for {}", child.display()),
                Err(e) => trace!("skipping {}: {}", child.display(), e),
            }
        }

        Ok(table)
    }
}

/// Length of the 400-year Gregorian cycle, after which dates repeat exactly
const GREGORIAN_CYCLE_SECS: i64 = 146_097 * 86_400;

/// 1000-01-01T00:00:00Z
const EARLIEST_PLAIN_SECS: i64 = -30_610_224_000;

/// 2400-01-01T00:00:00Z
const LATEST_PLAIN_SECS: i64 = 13_569_465_600;

/// Hour-of-day (0-23) of `time` in the local timezone.
///
/// Any timestamp the OS can hand back yields an hour. Times far outside the
/// plain window are moved by whole Gregorian cycles, which keeps the UTC
/// hour, and land where the zone applies the same offset: before its first
/// transition, or under its recurring rule after the last one.
pub fn local_hour(time: SystemTime) -> Option<u32> {
    let (secs, nanos) = unix_parts(time)?;
    Local
        .timestamp_opt(fold_into_window(secs), nanos)
        .earliest()
        .map(|local| local.hour())
}

/// Whole seconds (floored) and nanoseconds since the Unix epoch
fn unix_parts(time: SystemTime) -> Option<(i64, u32)> {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => Some((i64::try_from(after.as_secs()).ok()?, after.subsec_nanos())),
        Err(e) => {
            let before = e.duration();
            let secs = i64::try_from(before.as_secs()).ok()?;
            Some(match before.subsec_nanos() {
                0 => (-secs, 0),
                nanos => (-secs - 1, 1_000_000_000 - nanos),
            })
        }
    }
}

fn fold_into_window(secs: i64) -> i64 {
    if secs > LATEST_PLAIN_SECS {
        let cycles = (secs - LATEST_PLAIN_SECS + GREGORIAN_CYCLE_SECS - 1) / GREGORIAN_CYCLE_SECS;
        secs - cycles * GREGORIAN_CYCLE_SECS
    } else if secs < EARLIEST_PLAIN_SECS {
        let cycles =
            (EARLIEST_PLAIN_SECS - secs + GREGORIAN_CYCLE_SECS - 1) / GREGORIAN_CYCLE_SECS;
        secs + cycles * GREGORIAN_CYCLE_SECS
    } else {
        secs
    }
}
