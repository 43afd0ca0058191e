use thiserror::Error;
use tracing::{debug, error};

/// Failures surfaced by series computation.
///
/// Empty input and unknown granularity names are not errors: the former
/// yields an empty series, the latter falls back to hourly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeriesError {
    #[error("Malformed timestamp in row {row}: {value}")]
    MalformedTimestamp { row: usize, value: String },

    #[error("Rows are not in ascending time order at row {row}")]
    UnsortedRows { row: usize },

    #[error("Time range spans {buckets} buckets, limit is {limit}")]
    RangeTooLarge { buckets: u64, limit: usize },
}

impl SeriesError {
    pub fn log_error(&self) {
        match self {
            SeriesError::MalformedTimestamp { row, value } => {
                error!("Malformed timestamp in row {}", row);
                debug!("Unparseable time cell: {:?}", value);
            }
            SeriesError::UnsortedRows { row } => {
                error!("Rows out of time order at row {}", row);
                debug!("Ascending range mode requires non-decreasing timestamps");
            }
            SeriesError::RangeTooLarge { buckets, limit } => {
                error!("Time range too large: {} buckets (limit {})", buckets, limit);
                debug!("Use a coarser granularity or raise series.max_buckets");
            }
        }
    }
}
