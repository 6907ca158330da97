use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricScore {
    #[serde(default)]
    pub score: f64,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectedError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub description: String,
}

/// One judge's verdict on one generated artifact. The triple
/// (evaluated_model, evaluator_model, input_file) is neither unique nor
/// exhaustive; repeat runs and missing combinations are both normal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationRecord {
    pub evaluated_model: String,
    pub evaluator_model: String,
    pub input_file: String,
    #[serde(default)]
    pub generated_file: String,
    #[serde(default)]
    pub scores: BTreeMap<String, MetricScore>,
    #[serde(default)]
    pub total_score: Option<f64>,
    #[serde(default)]
    pub verdict: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub detected_errors: Vec<DetectedError>,
}

impl EvaluationRecord {
    /// Missing metric entries score 0. Null-ness for empty groups is the
    /// aggregation caller's decision, not the record's.
    pub fn metric_score(&self, key: &str) -> f64 {
        self.scores.get(key).map(|m| m.score).unwrap_or(0.0)
    }

    pub fn metric_notes(&self, key: &str) -> Option<&str> {
        self.scores.get(key).map(|m| m.notes.as_str())
    }

    pub fn total(&self) -> f64 {
        self.total_score.unwrap_or(0.0)
    }
}
