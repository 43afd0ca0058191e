use chrono::{Duration, NaiveDateTime};
use std::collections::HashSet;
use tracing::debug;

use super::errors::SeriesError;
use crate::shared::datetime::time_bucketing::CalendarTimeBucketer;
use crate::shared::time::TimePoint;

/// One point on the generated time axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBucket {
    pub label: String,
    /// Wall-clock start of the bucket
    pub start: NaiveDateTime,
}

/// Every bucket from the one containing `first` through the one containing
/// `last`, inclusive. Empty when `last` falls in an earlier bucket.
///
/// The bucket count is checked against `max_buckets` before anything is
/// allocated.
pub fn enumerate_buckets(
    bucketer: &CalendarTimeBucketer,
    first: TimePoint,
    last: TimePoint,
    max_buckets: usize,
) -> Result<Vec<TimeBucket>, SeriesError> {
    let buckets = match bucketer.instant_step() {
        Some(step) => enumerate_instants(bucketer, first, last, step, max_buckets)?,
        None => enumerate_wall_clock(bucketer, first.local, last.local, max_buckets)?,
    };

    debug!(
        target: "series_bucketizer::enumerate",
        granularity = %bucketer.granularity(),
        buckets = buckets.len(),
        "Enumerated time buckets"
    );
    Ok(buckets)
}

fn check_limit(count: u64, max_buckets: usize) -> Result<(), SeriesError> {
    if count > max_buckets as u64 {
        return Err(SeriesError::RangeTooLarge {
            buckets: count,
            limit: max_buckets,
        });
    }
    Ok(())
}

/// Calendar stepping on the wall clock; used wherever the wall clock cannot
/// skip or repeat a bucket.
fn enumerate_wall_clock(
    bucketer: &CalendarTimeBucketer,
    first: NaiveDateTime,
    last: NaiveDateTime,
    max_buckets: usize,
) -> Result<Vec<TimeBucket>, SeriesError> {
    let steps = bucketer.steps_between(first, last);
    if steps < 0 {
        return Ok(Vec::new());
    }
    let count = steps as u64 + 1;
    check_limit(count, max_buckets)?;

    let end = bucketer.bucket_of(last);
    let mut current = bucketer.bucket_of(first);
    let mut buckets = Vec::with_capacity(count as usize);
    while current <= end {
        buckets.push(TimeBucket {
            label: bucketer.label(current),
            start: current,
        });
        match bucketer.next_bucket(current) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(buckets)
}

/// Fixed-width stepping on instants, labelled on the local wall clock.
/// A DST gap yields no bucket for the missing wall-clock span; the repeated
/// span after a fall-back collapses into its first bucket.
fn enumerate_instants(
    bucketer: &CalendarTimeBucketer,
    first: TimePoint,
    last: TimePoint,
    step: Duration,
    max_buckets: usize,
) -> Result<Vec<TimeBucket>, SeriesError> {
    let start = bucketer.bucket_start_instant(first);
    let end = bucketer.bucket_start_instant(last);
    if end < start {
        return Ok(Vec::new());
    }
    let count = ((end - start).num_seconds() / step.num_seconds()) as u64 + 1;
    check_limit(count, max_buckets)?;

    let mut seen = HashSet::with_capacity(count as usize);
    let mut buckets = Vec::with_capacity(count as usize);
    let mut current = start;
    while current <= end {
        let local = bucketer.local_of(current);
        let label = bucketer.label(local);
        if seen.insert(label.clone()) {
            buckets.push(TimeBucket {
                label,
                start: bucketer.bucket_of(local),
            });
        }
        match current.checked_add_signed(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(buckets)
}
