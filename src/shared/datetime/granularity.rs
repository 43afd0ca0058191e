use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

/// Calendar unit of a chart axis.
///
/// Deserializes from any string: names outside the six known units fall back
/// to [`Granularity::Hourly`] instead of failing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Granularity {
    Yearly,
    Monthly,
    Daily,
    #[default]
    Hourly,
    Minutely,
    Secondly,
}

impl Granularity {
    pub const ALL: [Granularity; 6] = [
        Granularity::Yearly,
        Granularity::Monthly,
        Granularity::Daily,
        Granularity::Hourly,
        Granularity::Minutely,
        Granularity::Secondly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Granularity::Yearly => "yearly",
            Granularity::Monthly => "monthly",
            Granularity::Daily => "daily",
            Granularity::Hourly => "hourly",
            Granularity::Minutely => "minutely",
            Granularity::Secondly => "secondly",
        }
    }

    /// Exact, case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.as_str().eq_ignore_ascii_case(name))
    }

    /// Lookup by name, falling back to hourly for anything unrecognized.
    pub fn parse_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            warn!(
                target: "series_bucketizer::granularity",
                granularity = %name,
                "Unrecognized granularity, falling back to hourly"
            );
            Granularity::default()
        })
    }

    /// chrono format string for bucket labels.
    pub fn label_format(&self) -> &'static str {
        match self {
            Granularity::Yearly => "%Y",
            Granularity::Monthly => "%Y-%m",
            Granularity::Daily => "%Y-%m-%d",
            Granularity::Hourly => "%Y-%m-%d %H:00",
            Granularity::Minutely => "%Y-%m-%d %H:%M",
            Granularity::Secondly => "%Y-%m-%d %H:%M:%S",
        }
    }
}

impl From<String> for Granularity {
    fn from(name: String) -> Self {
        Self::parse_or_default(&name)
    }
}

impl From<&str> for Granularity {
    fn from(name: &str) -> Self {
        Self::parse_or_default(name)
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
