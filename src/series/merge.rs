use std::collections::HashMap;

use super::chart::MergedPoint;
use super::enumerate::TimeBucket;
use crate::shared::datetime::time_bucketing::CalendarTimeBucketer;
use chrono::NaiveDateTime;

/// Row contribution to the lookup: the parsed instant and its value, if any.
pub type TimedValue = (NaiveDateTime, Option<f64>);

/// Label → value, scanning rows in input order so later rows overwrite
/// earlier ones. Rows without a value leave the entry untouched.
pub fn build_lookup<I>(bucketer: &CalendarTimeBucketer, rows: I) -> HashMap<String, f64>
where
    I: IntoIterator<Item = TimedValue>,
{
    let mut lookup = HashMap::new();
    for (time, value) in rows {
        if let Some(value) = value {
            lookup.insert(bucketer.label(time), value);
        }
    }
    lookup
}

/// One point per bucket, gap-filled with `fill` where the lookup has no entry.
pub fn merge_into_buckets(
    buckets: &[TimeBucket],
    lookup: &HashMap<String, f64>,
    fill: f64,
) -> Vec<MergedPoint> {
    buckets
        .iter()
        .map(|bucket| MergedPoint {
            label: bucket.label.clone(),
            value: lookup.get(&bucket.label).copied().unwrap_or(fill),
        })
        .collect()
}
