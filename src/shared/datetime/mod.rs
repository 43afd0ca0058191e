pub mod granularity;
pub mod time;
pub mod time_bucketing;

pub use granularity::Granularity;
pub use time::TimeConfig;
pub use time_bucketing::CalendarTimeBucketer;
