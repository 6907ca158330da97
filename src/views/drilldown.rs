use serde::Serialize;

use crate::aggregate::{mean_metric, mean_total};
use crate::color::{CellStyle, badge_style};
use crate::keys::DimensionSets;
use crate::record::{DetectedError, EvaluationRecord};
use crate::rubric::{Rubric, RubricMetric};

#[derive(Debug, Clone, Serialize)]
pub struct MetricScoreCell {
    pub key: String,
    pub score: f64,
    pub max_weight: f64,
    pub badge: CellStyle,
    pub notes: Option<String>,
}

/// One judge's full verdict for a prompt, surfaced in the drill-down.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluatorDetail {
    pub evaluator: String,
    pub total: f64,
    pub total_badge: CellStyle,
    pub verdict: Option<String>,
    pub summary: Option<String>,
    pub scores: Vec<MetricScoreCell>,
    pub errors: Vec<DetectedError>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MetricMeanCell {
    pub key: String,
    pub label: String,
    pub max_weight: f64,
    pub mean: f64,
    pub badge: CellStyle,
    /// Headline notes from the primary record.
    pub primary_notes: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrilldownRow {
    pub prompt: String,
    pub generated_file: String,
    pub count: usize,
    pub total_mean: f64,
    /// Mean of the focused metric when a metric filter is active.
    pub focus_mean: Option<f64>,
    pub badge: CellStyle,
    pub metrics: Vec<MetricMeanCell>,
    pub primary: EvaluatorDetail,
    pub secondary: Vec<EvaluatorDetail>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DrilldownView {
    pub model: String,
    pub evaluator: Option<String>,
    pub metric: Option<String>,
    pub rows: Vec<DrilldownRow>,
}

/// Per-prompt performance of one model, optionally narrowed to a single
/// evaluator or a single rubric metric. Prompts with no contributing
/// records are omitted rather than rendered empty.
pub fn build_drilldown(
    records: &[EvaluationRecord],
    dims: &DimensionSets,
    rubric: &Rubric,
    model: &str,
    evaluator: Option<&str>,
    metric: Option<&str>,
) -> DrilldownView {
    let focus = metric.and_then(|key| rubric.metric(key));

    let model_records: Vec<&EvaluationRecord> = records
        .iter()
        .filter(|r| r.evaluated_model == model)
        .filter(|r| evaluator.is_none_or(|ev| r.evaluator_model == ev))
        .collect();

    let mut rows: Vec<DrilldownRow> = dims
        .prompts
        .iter()
        .filter_map(|prompt| {
            let subset: Vec<&EvaluationRecord> = model_records
                .iter()
                .copied()
                .filter(|r| r.input_file == *prompt)
                .collect();
            if subset.is_empty() {
                return None;
            }
            Some(build_row(prompt, &subset, rubric, focus))
        })
        .collect();

    // Descending by the focused metric's mean, otherwise by overall mean.
    rows.sort_by(|a, b| {
        let key = |row: &DrilldownRow| row.focus_mean.unwrap_or(row.total_mean);
        key(b)
            .partial_cmp(&key(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    DrilldownView {
        model: model.to_string(),
        evaluator: evaluator.map(str::to_string),
        metric: focus.map(|m| m.key.clone()),
        rows,
    }
}

fn build_row(
    prompt: &str,
    subset: &[&EvaluationRecord],
    rubric: &Rubric,
    focus: Option<&RubricMetric>,
) -> DrilldownRow {
    let primary_record = subset[0];
    let total_mean = mean_total(subset);

    let metrics: Vec<MetricMeanCell> = rubric
        .metrics
        .iter()
        .map(|m| {
            let mean = mean_metric(subset, &m.key);
            MetricMeanCell {
                key: m.key.clone(),
                label: m.label.clone(),
                max_weight: m.max_weight,
                mean,
                badge: badge_style(mean, m.max_weight),
                primary_notes: primary_record.metric_notes(&m.key).map(str::to_string),
            }
        })
        .collect();

    let (focus_mean, badge) = match focus {
        Some(m) => {
            let mean = mean_metric(subset, &m.key);
            (Some(mean), badge_style(mean, m.max_weight))
        }
        None => (None, badge_style(total_mean, rubric.total_weight)),
    };

    DrilldownRow {
        prompt: prompt.to_string(),
        generated_file: primary_record.generated_file.clone(),
        count: subset.len(),
        total_mean,
        focus_mean,
        badge,
        metrics,
        primary: build_detail(primary_record, rubric),
        secondary: subset[1..]
            .iter()
            .map(|r| build_detail(r, rubric))
            .collect(),
    }
}

fn build_detail(record: &EvaluationRecord, rubric: &Rubric) -> EvaluatorDetail {
    EvaluatorDetail {
        evaluator: record.evaluator_model.clone(),
        total: record.total(),
        total_badge: badge_style(record.total(), rubric.total_weight),
        verdict: record.verdict.clone(),
        summary: record.summary.clone(),
        scores: rubric
            .metrics
            .iter()
            .map(|m| {
                let score = record.metric_score(&m.key);
                MetricScoreCell {
                    key: m.key.clone(),
                    score,
                    max_weight: m.max_weight,
                    badge: badge_style(score, m.max_weight),
                    notes: record.metric_notes(&m.key).map(str::to_string),
                }
            })
            .collect(),
        errors: record.detected_errors.clone(),
    }
}
