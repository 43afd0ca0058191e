use series_bucketizer::series::{
    ChartData, MalformedPolicy, SeriesError, SeriesOptions, SeriesRequest, TabularResult,
    TimeBucketizer,
};
use series_bucketizer::shared::datetime::Granularity;

fn payload(json: &str) -> TabularResult {
    serde_json::from_str(json).expect("valid result payload")
}

#[test]
fn favorites_per_day_payload_renders_dense_axis() {
    let result = payload(
        r#"{"rows": [
            {"day": "2024-02-27", "artist": "a", "favorites": 12},
            {"day": "2024-03-01", "artist": "a", "favorites": "4"}
        ]}"#,
    );
    let request = SeriesRequest::new("day", "favorites", Granularity::Daily);
    let chart = TimeBucketizer::default()
        .compute_request(&result, &request)
        .unwrap();

    assert_eq!(
        chart,
        ChartData {
            labels: vec![
                "2024-02-27".into(),
                "2024-02-28".into(),
                "2024-02-29".into(),
                "2024-03-01".into()
            ],
            data: vec![12.0, 0.0, 0.0, 4.0],
        }
    );
}

#[test]
fn request_payload_with_unknown_granularity_charts_hourly() {
    let result = payload(
        r#"{"rows": [
            {"posted": "2024-01-01T00:15:00Z", "count": 1},
            {"posted": "2024-01-01T01:45:00Z", "count": 2}
        ]}"#,
    );
    let request: SeriesRequest = serde_json::from_str(
        r#"{"time_column": "posted", "value_column": "count", "granularity": "weekly"}"#,
    )
    .unwrap();
    assert_eq!(request.granularity, Granularity::Hourly);

    let chart = TimeBucketizer::default()
        .compute_request(&result, &request)
        .unwrap();
    assert_eq!(chart.labels, vec!["2024-01-01 00:00", "2024-01-01 01:00"]);
    assert_eq!(chart.data, vec![1.0, 2.0]);
}

#[test]
fn empty_payload_round_trips_to_empty_chart() {
    let result = payload(r#"{"rows": []}"#);
    let chart = TimeBucketizer::default()
        .compute_chart(&result, "t", "v", Granularity::Monthly)
        .unwrap();
    assert_eq!(
        serde_json::to_string(&chart).unwrap(),
        r#"{"labels":[],"data":[]}"#
    );
}

#[test]
fn malformed_rows_follow_policy() {
    let result = payload(
        r#"{"rows": [
            {"t": "2024-01", "v": 1},
            {"t": null, "v": 2},
            {"t": "2024-03", "v": 3}
        ]}"#,
    );

    let err = TimeBucketizer::default()
        .compute_chart(&result, "t", "v", Granularity::Monthly)
        .unwrap_err();
    assert_eq!(
        err,
        SeriesError::MalformedTimestamp {
            row: 1,
            value: "null".into()
        }
    );
    assert_eq!(err.to_string(), "Malformed timestamp in row 1: null");

    let chart = TimeBucketizer::new(SeriesOptions::default().with_malformed(MalformedPolicy::Skip))
        .compute_chart(&result, "t", "v", Granularity::Monthly)
        .unwrap();
    assert_eq!(chart.labels, vec!["2024-01", "2024-02", "2024-03"]);
    assert_eq!(chart.data, vec![1.0, 0.0, 3.0]);
}
