use serde::Serialize;

use crate::aggregate::{mean_metric, mean_total, records_for_model, round1};
use crate::color::{CellStyle, ColorScale};
use crate::keys::DimensionSets;
use crate::record::EvaluationRecord;
use crate::rubric::Rubric;
use crate::sort::{FieldKind, SortKey, SortSpec, SortValue, sort_rows};

#[derive(Debug, Clone, Serialize)]
pub struct MetricCell {
    pub key: String,
    pub mean: f64,
    pub style: CellStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub model: String,
    pub metrics: Vec<MetricCell>,
    pub total: f64,
    pub total_style: CellStyle,
    pub count: usize,
    /// 1-3 under the canonical total-descending sort, absent otherwise.
    pub rank: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryView {
    pub rows: Vec<SummaryRow>,
    pub sort: SortSpec,
}

struct RawRow {
    model: String,
    metric_means: Vec<f64>,
    total: f64,
    count: usize,
}

struct KeyedRow<'a> {
    rubric: &'a Rubric,
    row: RawRow,
}

impl SortKey for KeyedRow<'_> {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        if field == "model" {
            return Some(SortValue::Text(self.row.model.clone()));
        }
        if field == "total" {
            return Some(SortValue::Number(self.row.total));
        }
        let idx = self.rubric.metrics.iter().position(|m| m.key == field)?;
        Some(SortValue::Number(self.row.metric_means[idx]))
    }
}

pub fn field_kind(field: &str) -> FieldKind {
    if field == "model" {
        FieldKind::Identity
    } else {
        FieldKind::Score
    }
}

/// One row per model over all evaluators and prompts. Means are rounded
/// to one decimal at aggregation time; sorting and coloring both see
/// the rounded values.
pub fn build_summary(
    records: &[EvaluationRecord],
    dims: &DimensionSets,
    rubric: &Rubric,
    sort: &SortSpec,
) -> SummaryView {
    let mut keyed: Vec<KeyedRow<'_>> = dims
        .models
        .iter()
        .map(|model| {
            let subset = records_for_model(records, model);
            let metric_means = rubric
                .metrics
                .iter()
                .map(|m| round1(mean_metric(&subset, &m.key)))
                .collect();
            KeyedRow {
                rubric,
                row: RawRow {
                    model: model.clone(),
                    metric_means,
                    total: round1(mean_total(&subset)),
                    count: subset.len(),
                },
            }
        })
        .collect();

    sort_rows(&mut keyed, sort);

    let rows: Vec<RawRow> = keyed.into_iter().map(|k| k.row).collect();

    let metric_scales: Vec<ColorScale> = (0..rubric.metrics.len())
        .map(|i| {
            let values: Vec<f64> = rows.iter().map(|r| r.metric_means[i]).collect();
            ColorScale::from_values(&values)
        })
        .collect();
    let totals: Vec<f64> = rows.iter().map(|r| r.total).collect();
    let total_scale = ColorScale::from_values(&totals);

    let badges = sort.shows_rank_badges();
    let rows = rows
        .into_iter()
        .enumerate()
        .map(|(i, row)| SummaryRow {
            metrics: rubric
                .metrics
                .iter()
                .zip(&row.metric_means)
                .zip(&metric_scales)
                .map(|((metric, &mean), scale)| MetricCell {
                    key: metric.key.clone(),
                    mean,
                    style: CellStyle {
                        background: scale.color_of(mean),
                        foreground: scale.foreground_of(mean),
                    },
                })
                .collect(),
            total_style: CellStyle {
                background: total_scale.color_of(row.total),
                foreground: total_scale.foreground_of(row.total),
            },
            rank: if badges && i < 3 {
                Some(i as u8 + 1)
            } else {
                None
            },
            model: row.model,
            total: row.total,
            count: row.count,
        })
        .collect();

    SummaryView {
        rows,
        sort: sort.clone(),
    }
}
