use tracing::{debug, info, warn};

use super::chart::{ChartData, MergedPoint};
use super::enumerate::enumerate_buckets;
use super::errors::SeriesError;
use super::merge::{build_lookup, merge_into_buckets};
use super::options::{MalformedPolicy, RangeMode, SeriesOptions};
use super::request::SeriesRequest;
use super::table::{RowSchema, TabularResult};
use crate::shared::datetime::granularity::Granularity;
use crate::shared::datetime::time_bucketing::CalendarTimeBucketer;
use crate::shared::time::TimePoint;

/// Row index, parsed instant and value of a row that survived resolution.
type TimedRow = (usize, TimePoint, Option<f64>);

/// Turns a sparse result set into a dense, gap-filled series.
///
/// Stateless apart from its options; one instance can serve any number of
/// concurrent calls.
#[derive(Debug, Clone, Default)]
pub struct TimeBucketizer {
    options: SeriesOptions,
}

impl TimeBucketizer {
    pub fn new(options: SeriesOptions) -> Self {
        Self { options }
    }

    /// Create from application configuration
    pub fn from_app_config() -> Self {
        Self::new(SeriesOptions::from_app_config())
    }

    pub fn compute_series(
        &self,
        result: &TabularResult,
        time_column: &str,
        value_column: &str,
        granularity: Granularity,
    ) -> Result<Vec<MergedPoint>, SeriesError> {
        if result.is_empty() {
            info!(
                target: "series_bucketizer::bucketizer",
                "No rows to chart, returning an empty series"
            );
            return Ok(Vec::new());
        }

        let schema = RowSchema::new(time_column, value_column, self.options.timezone);
        let rows = self.timed_rows(result, &schema)?;
        let Some((first, last)) = self.range_of(&rows)? else {
            info!(
                target: "series_bucketizer::bucketizer",
                "No row carries a usable timestamp, returning an empty series"
            );
            return Ok(Vec::new());
        };

        let bucketer = CalendarTimeBucketer::new(granularity).with_timezone(self.options.timezone);
        let buckets = enumerate_buckets(&bucketer, first, last, self.options.max_buckets)?;
        let lookup = build_lookup(
            &bucketer,
            rows.iter().map(|(_, point, value)| (point.local, *value)),
        );
        let points = merge_into_buckets(&buckets, &lookup, self.options.fill_value);

        debug!(
            target: "series_bucketizer::bucketizer",
            rows = result.len(),
            buckets = points.len(),
            observed = lookup.len(),
            "Computed series"
        );
        Ok(points)
    }

    /// Same as [`Self::compute_series`], split into parallel label/value sequences.
    pub fn compute_chart(
        &self,
        result: &TabularResult,
        time_column: &str,
        value_column: &str,
        granularity: Granularity,
    ) -> Result<ChartData, SeriesError> {
        self.compute_series(result, time_column, value_column, granularity)
            .map(ChartData::from_points)
    }

    pub fn compute_request(
        &self,
        result: &TabularResult,
        request: &SeriesRequest,
    ) -> Result<ChartData, SeriesError> {
        self.compute_chart(
            result,
            &request.time_column,
            &request.value_column,
            request.granularity,
        )
    }

    /// Resolve every row once, applying the malformed-timestamp policy.
    fn timed_rows(
        &self,
        result: &TabularResult,
        schema: &RowSchema,
    ) -> Result<Vec<TimedRow>, SeriesError> {
        let mut rows = Vec::with_capacity(result.len());
        for resolved in schema.resolve_all(result) {
            match (resolved.time, self.options.malformed) {
                (Some(point), _) => rows.push((resolved.index, point, resolved.value)),
                (None, MalformedPolicy::Skip) => {
                    warn!(
                        target: "series_bucketizer::bucketizer",
                        row = resolved.index,
                        column = schema.time_column(),
                        value = %resolved.raw_time,
                        "Skipping row with unparseable timestamp"
                    );
                }
                (None, MalformedPolicy::Abort) => {
                    return Err(SeriesError::MalformedTimestamp {
                        row: resolved.index,
                        value: resolved.raw_time,
                    });
                }
            }
        }
        Ok(rows)
    }

    /// Lower and upper instant bounding the axis, or None when no row survived.
    /// Rows compare by absolute instant, so a repeated wall-clock hour after a
    /// DST fall-back is still in order.
    fn range_of(&self, rows: &[TimedRow]) -> Result<Option<(TimePoint, TimePoint)>, SeriesError> {
        let points = rows.iter().map(|(_, point, _)| *point);
        match self.options.range {
            RangeMode::MinMax => Ok(points.clone().min().zip(points.max())),
            RangeMode::Ascending => {
                for pair in rows.windows(2) {
                    let ((_, prev, _), (index, next, _)) = (&pair[0], &pair[1]);
                    if next.utc < prev.utc {
                        return Err(SeriesError::UnsortedRows { row: *index });
                    }
                }
                Ok(rows.first().zip(rows.last()).map(|(f, l)| (f.1, l.1)))
            }
        }
    }
}

/// Compute a series with options taken from the application configuration.
pub fn compute_series(
    result: &TabularResult,
    time_column: &str,
    value_column: &str,
    granularity: Granularity,
) -> Result<Vec<MergedPoint>, SeriesError> {
    TimeBucketizer::from_app_config().compute_series(result, time_column, value_column, granularity)
}
