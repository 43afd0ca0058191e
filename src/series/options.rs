use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::shared::config::{CONFIG, Settings};
use crate::shared::datetime::time::TimeConfig;

/// Handling of rows whose time cell cannot be parsed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Reject the whole computation.
    #[default]
    Abort,
    /// Drop the row from both the range and the label index.
    Skip,
}

/// How the ends of the axis are chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeMode {
    /// Earliest and latest timestamp over all rows.
    #[default]
    MinMax,
    /// First and last row; rows must be in non-decreasing time order.
    Ascending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesOptions {
    pub malformed: MalformedPolicy,
    pub range: RangeMode,
    pub max_buckets: usize,
    pub fill_value: f64,
    pub timezone: Option<Tz>,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            malformed: MalformedPolicy::default(),
            range: RangeMode::default(),
            max_buckets: 100_000,
            fill_value: 0.0,
            timezone: None,
        }
    }
}

impl SeriesOptions {
    /// Create from application configuration
    pub fn from_app_config() -> Self {
        Self::from_settings(&CONFIG)
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let series = &settings.series;
        Self {
            malformed: series.malformed_timestamps,
            range: series.range_mode,
            max_buckets: series.max_buckets,
            fill_value: series.fill_value,
            timezone: settings
                .time
                .as_ref()
                .and_then(TimeConfig::parse_timezone),
        }
    }

    pub fn with_malformed(mut self, malformed: MalformedPolicy) -> Self {
        self.malformed = malformed;
        self
    }

    pub fn with_range(mut self, range: RangeMode) -> Self {
        self.range = range;
        self
    }

    pub fn with_max_buckets(mut self, max_buckets: usize) -> Self {
        self.max_buckets = max_buckets;
        self
    }

    pub fn with_fill_value(mut self, fill_value: f64) -> Self {
        self.fill_value = fill_value;
        self
    }

    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }
}
