use chrono_tz::Tz;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::shared::time::{TimeParser, TimePoint};

/// A single cell of a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ScalarValue {
    /// Numeric reading of the cell, used for the value column.
    /// Numeric strings count, booleans map to 1 and 0.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ScalarValue::Number(n) if n.is_finite() => Some(*n),
            ScalarValue::Text(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
            ScalarValue::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ScalarValue::Null)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => f.write_str("null"),
            ScalarValue::Bool(b) => write!(f, "{b}"),
            ScalarValue::Number(n) => write!(f, "{n}"),
            ScalarValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for ScalarValue {
    fn from(s: &str) -> Self {
        ScalarValue::Text(s.to_string())
    }
}

impl From<String> for ScalarValue {
    fn from(s: String) -> Self {
        ScalarValue::Text(s)
    }
}

impl From<f64> for ScalarValue {
    fn from(n: f64) -> Self {
        ScalarValue::Number(n)
    }
}

impl From<i32> for ScalarValue {
    fn from(n: i32) -> Self {
        ScalarValue::Number(f64::from(n))
    }
}

impl From<i64> for ScalarValue {
    fn from(n: i64) -> Self {
        ScalarValue::Number(n as f64)
    }
}

impl From<bool> for ScalarValue {
    fn from(b: bool) -> Self {
        ScalarValue::Bool(b)
    }
}

/// One record, keyed by column name in upstream column order.
pub type Row = IndexMap<String, ScalarValue>;

/// A query result as handed over by the query runner.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TabularResult {
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl TabularResult {
    pub fn new(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A row reduced to the two columns a series needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    /// Position in the input
    pub index: usize,
    /// None when the time cell is missing or unparseable
    pub time: Option<TimePoint>,
    /// None when the value cell is missing, null or non-numeric
    pub value: Option<f64>,
    /// Display form of the raw time cell, kept for error reporting
    pub raw_time: String,
}

/// Declares which columns carry time and value, and resolves rows against them.
#[derive(Debug, Clone)]
pub struct RowSchema {
    time_column: String,
    value_column: String,
    parser: TimeParser,
}

impl RowSchema {
    pub fn new(time_column: &str, value_column: &str, timezone: Option<Tz>) -> Self {
        Self {
            time_column: time_column.to_string(),
            value_column: value_column.to_string(),
            parser: TimeParser::new(timezone),
        }
    }

    pub fn time_column(&self) -> &str {
        &self.time_column
    }

    pub fn resolve(&self, index: usize, row: &Row) -> ResolvedRow {
        let time_cell = row.get(&self.time_column);
        let time = time_cell.and_then(|cell| self.parse_time(cell));
        let raw_time = match time_cell {
            Some(cell) => cell.to_string(),
            None => format!("<missing column '{}'>", self.time_column),
        };
        let value = row.get(&self.value_column).and_then(ScalarValue::as_number);
        ResolvedRow {
            index,
            time,
            value,
            raw_time,
        }
    }

    pub fn resolve_all(&self, result: &TabularResult) -> Vec<ResolvedRow> {
        result
            .rows
            .iter()
            .enumerate()
            .map(|(index, row)| self.resolve(index, row))
            .collect()
    }

    fn parse_time(&self, cell: &ScalarValue) -> Option<TimePoint> {
        match cell {
            ScalarValue::Text(s) => self.parser.parse_str(s),
            ScalarValue::Number(n) => self.parser.parse_number(*n),
            ScalarValue::Null | ScalarValue::Bool(_) => None,
        }
    }
}
