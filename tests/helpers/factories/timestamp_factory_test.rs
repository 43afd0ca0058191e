use super::timestamp_factory::TimestampFactory;
use chrono::{Datelike, Timelike};

#[test]
fn test_naive() {
    let dt = TimestampFactory::naive(2024, 1, 15, 12, 30, 45);
    assert_eq!(dt.year(), 2024);
    assert_eq!(dt.month(), 1);
    assert_eq!(dt.day(), 15);
    assert_eq!(dt.hour(), 12);
    assert_eq!(dt.minute(), 30);
    assert_eq!(dt.second(), 45);
}

#[test]
fn test_date_and_hour() {
    assert_eq!(
        TimestampFactory::date(2024, 1, 15),
        TimestampFactory::naive(2024, 1, 15, 0, 0, 0)
    );
    assert_eq!(
        TimestampFactory::hour(2024, 1, 15, 7),
        TimestampFactory::naive(2024, 1, 15, 7, 0, 0)
    );
}

#[test]
fn test_hourly_texts_cross_midnight() {
    let texts = TimestampFactory::hourly_texts(TimestampFactory::hour(2023, 12, 31, 22), 3);
    assert_eq!(
        texts,
        vec![
            "2023-12-31 22:00:00",
            "2023-12-31 23:00:00",
            "2024-01-01 00:00:00"
        ]
    );
}

#[test]
fn test_point_in_reads_local_wall_clock() {
    let tz: chrono_tz::Tz = "Europe/Amsterdam".parse().unwrap();
    let point = TimestampFactory::point_in("2024-07-01T10:00:00Z", tz);
    assert_eq!(point.local, TimestampFactory::hour(2024, 7, 1, 12));
    assert_eq!(point.utc, TimestampFactory::hour(2024, 7, 1, 10).and_utc());
    assert_eq!(
        TimestampFactory::point(point.local).utc,
        TimestampFactory::hour(2024, 7, 1, 12).and_utc()
    );
}
