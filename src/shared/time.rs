use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Wall-clock layouts accepted without an offset, tried in order.
const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// A parsed time cell: the absolute instant and its wall-clock reading in the
/// configured timezone. Ordering follows the instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimePoint {
    pub utc: DateTime<Utc>,
    pub local: NaiveDateTime,
}

/// Utility for parsing time cells into [`TimePoint`]s.
///
/// Inputs carrying an offset (RFC3339, epoch numbers) are converted into the
/// configured timezone, UTC when none is set. Naive inputs are read as wall
/// clock in that timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeParser {
    timezone: Option<Tz>,
}

impl TimeParser {
    pub fn new(timezone: Option<Tz>) -> Self {
        Self { timezone }
    }

    /// Parse a string representing a time instant.
    /// Supports RFC3339, `YYYY-MM-DD[ T]HH:MM[:SS[.f]]`, `YYYY-MM-DD`,
    /// `YYYY-MM`, `YYYY` and numeric epoch strings.
    pub fn parse_str(&self, input: &str) -> Option<TimePoint> {
        let s = input.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(self.point_from_utc(dt.with_timezone(&Utc)));
        }
        for fmt in NAIVE_DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return Some(self.point_from_wall_clock(dt));
            }
        }
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Some(self.point_from_wall_clock(date.and_time(NaiveTime::MIN)));
        }
        // Four digits read as a calendar year, not as epoch seconds
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            let year = s.parse::<i32>().ok()?;
            return NaiveDate::from_ymd_opt(year, 1, 1)
                .map(|d| self.point_from_wall_clock(d.and_time(NaiveTime::MIN)));
        }
        if let Ok(date) = NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d") {
            return Some(self.point_from_wall_clock(date.and_time(NaiveTime::MIN)));
        }
        // Fallback: numeric string
        if let Ok(num) = s.parse::<i128>() {
            return self.at_epoch_seconds(Self::normalize_integer_epoch(num)?);
        }
        None
    }

    /// Interpret a number as an epoch value, normalizing its magnitude to seconds.
    /// The fractional part never influences which unit is picked.
    pub fn parse_number(&self, n: f64) -> Option<TimePoint> {
        if !n.is_finite() {
            return None;
        }
        let whole = n.trunc();
        if whole.abs() >= 1e20 {
            return None;
        }
        self.at_epoch_seconds(Self::normalize_integer_epoch(whole as i128)?)
    }

    pub fn at_epoch_seconds(&self, secs: i64) -> Option<TimePoint> {
        DateTime::from_timestamp(secs, 0).map(|dt| self.point_from_utc(dt))
    }

    fn point_from_utc(&self, utc: DateTime<Utc>) -> TimePoint {
        let local = match self.timezone {
            Some(tz) => utc.with_timezone(&tz).naive_local(),
            None => utc.naive_utc(),
        };
        TimePoint { utc, local }
    }

    /// Wall clock that falls into a DST gap is shifted an hour forward, so it
    /// reads as the hour the clocks jumped to. A repeated wall clock takes its
    /// earlier instant.
    fn point_from_wall_clock(&self, local: NaiveDateTime) -> TimePoint {
        let Some(tz) = self.timezone else {
            return TimePoint {
                utc: local.and_utc(),
                local,
            };
        };
        if let Some(dt) = tz.from_local_datetime(&local).earliest() {
            return TimePoint {
                utc: dt.with_timezone(&Utc),
                local,
            };
        }
        match tz.from_local_datetime(&(local + Duration::hours(1))).earliest() {
            Some(dt) => self.point_from_utc(dt.with_timezone(&Utc)),
            None => TimePoint {
                utc: local.and_utc(),
                local,
            },
        }
    }

    /// Heuristic normalization of integer magnitudes to seconds.
    /// - up to 11 digits: seconds
    /// - 12..=14: milliseconds
    /// - 15..=16: microseconds
    /// - 17..=19: nanoseconds
    fn normalize_integer_epoch(n: i128) -> Option<i64> {
        let abs = n.unsigned_abs();
        let digits = num_digits_u128(abs);
        let secs = match digits {
            0..=11 => n,                  // seconds (and small negatives)
            12..=14 => n / 1_000,         // ms -> s
            15..=16 => n / 1_000_000,     // µs -> s
            17..=19 => n / 1_000_000_000, // ns -> s
            _ => return None,
        };
        i64::try_from(secs).ok()
    }
}

fn num_digits_u128(mut x: u128) -> u32 {
    if x == 0 {
        return 1;
    }
    let mut c = 0;
    while x > 0 {
        x /= 10;
        c += 1;
    }
    c
}
