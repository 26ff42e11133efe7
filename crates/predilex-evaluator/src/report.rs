//! The nine-metric evaluation report

use crate::metrics::Scores;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Metric names, in report order
pub const METRIC_NAMES: [&str; 9] = [
    "gender_precision",
    "gender_recall",
    "gender_f1_score",
    "accident_date_precision",
    "accident_date_recall",
    "accident_date_f1_score",
    "consolidation_date_precision",
    "consolidation_date_recall",
    "consolidation_date_f1_score",
];

/// Metric name to score, in [`METRIC_NAMES`] order
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    values: [f64; 9],
}

impl MetricsReport {
    /// Assemble a report from the scores of the three fields
    pub fn new(gender: Scores, accident_date: Scores, consolidation_date: Scores) -> Self {
        let mut values = [0.0; 9];
        for (chunk, scores) in values
            .chunks_mut(3)
            .zip([gender, accident_date, consolidation_date])
        {
            chunk.copy_from_slice(&[scores.precision, scores.recall, scores.f1]);
        }
        Self { values }
    }

    /// Look up a metric by name
    pub fn get(&self, name: &str) -> Option<f64> {
        METRIC_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|idx| self.values[idx])
    }

    /// `(name, value)` pairs in report order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        METRIC_NAMES.iter().copied().zip(self.values.iter().copied())
    }

    /// Pretty-printed JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Serialize for MetricsReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(METRIC_NAMES.len()))?;
        for (name, value) in self.iter() {
            map.serialize_entry(name, &value)?;
        }
        map.end()
    }
}
