pub mod bucketizer;
pub mod chart;
pub mod enumerate;
pub mod errors;
pub mod merge;
pub mod options;
pub mod request;
pub mod table;

pub use bucketizer::{TimeBucketizer, compute_series};
pub use chart::{ChartData, MergedPoint};
pub use errors::SeriesError;
pub use options::{MalformedPolicy, RangeMode, SeriesOptions};
pub use request::SeriesRequest;
pub use table::{Row, RowSchema, ScalarValue, TabularResult};
