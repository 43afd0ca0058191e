use serde::{Deserialize, Serialize};

/// One element of a regularized series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedPoint {
    pub label: String,
    pub value: f64,
}

/// Index-aligned axis labels and values, the shape a chart widget consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub data: Vec<f64>,
}

impl ChartData {
    pub fn from_points(points: Vec<MergedPoint>) -> Self {
        let (labels, data) = points.into_iter().map(|p| (p.label, p.value)).unzip();
        Self { labels, data }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (&str, f64)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.data.iter().copied())
    }
}
