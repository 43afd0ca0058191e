use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

/// Global time configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Timezone that offset-bearing and epoch timestamps are converted into (None = UTC)
    #[serde(default)]
    pub timezone: Option<String>,
}

impl TimeConfig {
    /// Parse timezone string to chrono_tz::Tz
    pub fn parse_timezone(&self) -> Option<Tz> {
        self.timezone
            .as_ref()
            .and_then(|tz_str| tz_str.parse().ok())
    }
}
