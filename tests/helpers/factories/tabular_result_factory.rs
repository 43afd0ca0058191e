use crate::series::table::{Row, ScalarValue, TabularResult};

/// Builds query results with a time column and a value column.
pub struct TabularResultFactory {
    time_column: String,
    value_column: String,
    rows: Vec<Row>,
}

impl TabularResultFactory {
    pub fn new() -> Self {
        Self {
            time_column: "t".to_string(),
            value_column: "v".to_string(),
            rows: Vec::new(),
        }
    }

    pub fn with_columns(mut self, time_column: &str, value_column: &str) -> Self {
        self.time_column = time_column.to_string();
        self.value_column = value_column.to_string();
        self
    }

    /// Append a row with both columns set
    pub fn row(mut self, time: impl Into<ScalarValue>, value: impl Into<ScalarValue>) -> Self {
        let mut row = Row::new();
        row.insert(self.time_column.clone(), time.into());
        row.insert(self.value_column.clone(), value.into());
        self.rows.push(row);
        self
    }

    /// Append a row holding only the time column
    pub fn row_without_value(mut self, time: impl Into<ScalarValue>) -> Self {
        let mut row = Row::new();
        row.insert(self.time_column.clone(), time.into());
        self.rows.push(row);
        self
    }

    /// Append a row holding only the value column
    pub fn row_without_time(mut self, value: impl Into<ScalarValue>) -> Self {
        let mut row = Row::new();
        row.insert(self.value_column.clone(), value.into());
        self.rows.push(row);
        self
    }

    pub fn create(self) -> TabularResult {
        TabularResult::new(self.rows)
    }
}
