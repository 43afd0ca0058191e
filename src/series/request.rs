use serde::{Deserialize, Serialize};

use crate::shared::datetime::granularity::Granularity;

/// Column and granularity selection made in the chart controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesRequest {
    pub time_column: String,
    pub value_column: String,
    #[serde(default)]
    pub granularity: Granularity,
}

impl SeriesRequest {
    pub fn new(time_column: &str, value_column: &str, granularity: Granularity) -> Self {
        Self {
            time_column: time_column.to_string(),
            value_column: value_column.to_string(),
            granularity,
        }
    }
}
