use crate::shared::time::TimePoint;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Factory for creating test instants with known wall-clock values
pub struct TimestampFactory;

impl TimestampFactory {
    /// Create an instant for a specific date/time
    pub fn naive(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(hour, min, sec)
            .unwrap()
    }

    /// Create an instant for start of day
    pub fn date(year: i32, month: u32, day: u32) -> NaiveDateTime {
        Self::naive(year, month, day, 0, 0, 0)
    }

    /// Create an instant for a specific hour of a day
    pub fn hour(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        Self::naive(year, month, day, hour, 0, 0)
    }

    /// Point whose wall clock reads as UTC
    pub fn point(dt: NaiveDateTime) -> TimePoint {
        TimePoint {
            utc: dt.and_utc(),
            local: dt,
        }
    }

    /// Point for an RFC3339 instant seen from `tz`
    pub fn point_in(rfc3339: &str, tz: chrono_tz::Tz) -> TimePoint {
        let utc = DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc);
        TimePoint {
            utc,
            local: utc.with_timezone(&tz).naive_local(),
        }
    }

    /// Text form used in query results, e.g. `2024-01-01 03:00:00`
    pub fn text(dt: NaiveDateTime) -> String {
        dt.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// `count` hourly instants starting at `start`, as result-row text
    pub fn hourly_texts(start: NaiveDateTime, count: usize) -> Vec<String> {
        (0..count)
            .map(|i| Self::text(start + Duration::hours(i as i64)))
            .collect()
    }
}
