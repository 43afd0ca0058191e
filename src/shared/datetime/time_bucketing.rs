use super::granularity::Granularity;
use crate::shared::time::TimePoint;
use chrono::{
    DateTime, Datelike, Days, Duration, Months, NaiveDateTime, NaiveTime, Timelike, Utc,
};
use chrono_tz::Tz;

/// Calendar-aware bucketing at one granularity
///
/// Buckets are defined on the wall clock of the timezone (UTC when None).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarTimeBucketer {
    granularity: Granularity,
    timezone: Option<Tz>,
}

impl CalendarTimeBucketer {
    pub fn new(granularity: Granularity) -> Self {
        Self {
            granularity,
            timezone: None,
        }
    }

    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn granularity(&self) -> Granularity {
        self.granularity
    }

    /// Real-time width of a bucket when sub-day buckets have to be walked on
    /// instants, i.e. a timezone whose offset may shift is in play.
    /// Day and longer buckets stay on calendar arithmetic.
    pub fn instant_step(&self) -> Option<Duration> {
        if self.timezone.is_none() {
            return None;
        }
        match self.granularity {
            Granularity::Hourly => Some(Duration::hours(1)),
            Granularity::Minutely => Some(Duration::minutes(1)),
            Granularity::Secondly => Some(Duration::seconds(1)),
            Granularity::Yearly | Granularity::Monthly | Granularity::Daily => None,
        }
    }

    /// Instant at which the bucket containing `point` begins
    pub fn bucket_start_instant(&self, point: TimePoint) -> DateTime<Utc> {
        point.utc - (point.local - self.bucket_of(point.local))
    }

    /// Wall-clock reading of an instant in this bucketer's timezone
    pub fn local_of(&self, utc: DateTime<Utc>) -> NaiveDateTime {
        match self.timezone {
            Some(tz) => utc.with_timezone(&tz).naive_local(),
            None => utc.naive_utc(),
        }
    }

    /// Start of the bucket containing `dt`
    pub fn bucket_of(&self, dt: NaiveDateTime) -> NaiveDateTime {
        let date = dt.date();
        let start = match self.granularity {
            Granularity::Yearly => date.with_ordinal(1).map(|d| d.and_time(NaiveTime::MIN)),
            Granularity::Monthly => date.with_day(1).map(|d| d.and_time(NaiveTime::MIN)),
            Granularity::Daily => Some(date.and_time(NaiveTime::MIN)),
            Granularity::Hourly => {
                NaiveTime::from_hms_opt(dt.hour(), 0, 0).map(|t| date.and_time(t))
            }
            Granularity::Minutely => {
                NaiveTime::from_hms_opt(dt.hour(), dt.minute(), 0).map(|t| date.and_time(t))
            }
            Granularity::Secondly => dt.with_nanosecond(0),
        };
        // Every truncation above is valid for a valid input
        start.unwrap_or(dt)
    }

    /// Advance by one calendar step. None once chrono's range is exhausted.
    pub fn next_bucket(&self, dt: NaiveDateTime) -> Option<NaiveDateTime> {
        match self.granularity {
            Granularity::Yearly => dt.checked_add_months(Months::new(12)),
            Granularity::Monthly => dt.checked_add_months(Months::new(1)),
            Granularity::Daily => dt.checked_add_days(Days::new(1)),
            Granularity::Hourly => dt.checked_add_signed(Duration::hours(1)),
            Granularity::Minutely => dt.checked_add_signed(Duration::minutes(1)),
            Granularity::Secondly => dt.checked_add_signed(Duration::seconds(1)),
        }
    }

    /// Number of calendar steps from the bucket of `from` to the bucket of `to`.
    /// Negative when `to` lies in an earlier bucket.
    pub fn steps_between(&self, from: NaiveDateTime, to: NaiveDateTime) -> i64 {
        let start = self.bucket_of(from);
        let end = self.bucket_of(to);
        match self.granularity {
            Granularity::Yearly => i64::from(end.year() - start.year()),
            Granularity::Monthly => {
                let months = |dt: NaiveDateTime| i64::from(dt.year()) * 12 + i64::from(dt.month0());
                months(end) - months(start)
            }
            Granularity::Daily => (end.date() - start.date()).num_days(),
            Granularity::Hourly => (end - start).num_hours(),
            Granularity::Minutely => (end - start).num_minutes(),
            Granularity::Secondly => (end - start).num_seconds(),
        }
    }

    /// Axis label for the bucket containing `dt`
    pub fn label(&self, dt: NaiveDateTime) -> String {
        dt.format(self.granularity.label_format()).to_string()
    }
}
