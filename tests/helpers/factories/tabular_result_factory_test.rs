use super::tabular_result_factory::TabularResultFactory;
use crate::series::table::ScalarValue;

#[test]
fn builds_rows_in_order_with_default_columns() {
    let result = TabularResultFactory::new()
        .row("2024-01-01 00:00", 5)
        .row("2024-01-01 02:00", 9.5)
        .create();
    assert_eq!(result.len(), 2);
    assert_eq!(result.rows[0]["t"], ScalarValue::from("2024-01-01 00:00"));
    assert_eq!(result.rows[1]["v"], ScalarValue::Number(9.5));
}

#[test]
fn partial_rows_omit_columns() {
    let result = TabularResultFactory::new()
        .with_columns("created", "count")
        .row_without_value("2024-01-01")
        .row_without_time(3)
        .create();
    assert!(result.rows[0].contains_key("created"));
    assert!(!result.rows[0].contains_key("count"));
    assert!(!result.rows[1].contains_key("created"));
    assert_eq!(result.rows[1]["count"], ScalarValue::Number(3.0));
}
