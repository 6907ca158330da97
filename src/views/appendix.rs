use serde::Serialize;

use crate::color::{CellStyle, badge_style};
use crate::record::EvaluationRecord;
use crate::rubric::Rubric;
use crate::sort::{FieldKind, SortKey, SortSpec, SortValue, sort_rows};

#[derive(Debug, Clone, Serialize)]
pub struct BadgeCell {
    pub key: String,
    pub score: f64,
    pub badge: CellStyle,
}

/// One raw record, badge-annotated. Unlike the aggregate views this is
/// a flat listing: one row per evaluation, no grouping.
#[derive(Debug, Clone, Serialize)]
pub struct AppendixRow {
    pub prompt: String,
    pub model: String,
    pub evaluator: String,
    pub metrics: Vec<BadgeCell>,
    pub total: f64,
    pub total_badge: CellStyle,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppendixView {
    pub rows: Vec<AppendixRow>,
    pub sort: SortSpec,
}

impl SortKey for AppendixRow {
    fn sort_value(&self, field: &str) -> Option<SortValue> {
        match field {
            "prompt" => Some(SortValue::Text(self.prompt.clone())),
            "model" => Some(SortValue::Text(self.model.clone())),
            "evaluator" => Some(SortValue::Text(self.evaluator.clone())),
            "total" => Some(SortValue::Number(self.total)),
            _ => self
                .metrics
                .iter()
                .find(|m| m.key == field)
                .map(|m| SortValue::Number(m.score)),
        }
    }
}

pub fn field_kind(field: &str) -> FieldKind {
    match field {
        "prompt" | "model" | "evaluator" => FieldKind::Identity,
        _ => FieldKind::Score,
    }
}

pub fn build_appendix(
    records: &[EvaluationRecord],
    rubric: &Rubric,
    sort: &SortSpec,
) -> AppendixView {
    let mut rows: Vec<AppendixRow> = records
        .iter()
        .map(|rec| AppendixRow {
            prompt: rec.input_file.clone(),
            model: rec.evaluated_model.clone(),
            evaluator: rec.evaluator_model.clone(),
            metrics: rubric
                .metrics
                .iter()
                .map(|m| {
                    let score = rec.metric_score(&m.key);
                    BadgeCell {
                        key: m.key.clone(),
                        score,
                        badge: badge_style(score, m.max_weight),
                    }
                })
                .collect(),
            total: rec.total(),
            total_badge: badge_style(rec.total(), rubric.total_weight),
        })
        .collect();

    sort_rows(&mut rows, sort);

    AppendixView {
        rows,
        sort: sort.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{BADGE_GREEN, BADGE_RED, BADGE_YELLOW};
    use crate::record::MetricScore;

    fn rec(model: &str, prompt: &str, total: f64, clarity: f64) -> EvaluationRecord {
        let mut scores = std::collections::BTreeMap::new();
        scores.insert(
            "visual_clarity".to_string(),
            MetricScore {
                score: clarity,
                notes: String::new(),
            },
        );
        EvaluationRecord {
            evaluated_model: model.to_string(),
            evaluator_model: "judge".to_string(),
            input_file: prompt.to_string(),
            generated_file: String::new(),
            scores,
            total_score: Some(total),
            verdict: None,
            summary: None,
            detected_errors: Vec::new(),
        }
    }

    #[test]
    fn test_default_order_is_total_descending() {
        let records = vec![
            rec("A", "p1", 40.0, 8.0),
            rec("B", "p2", 90.0, 16.0),
            rec("C", "p3", 65.0, 11.0),
        ];
        let view = build_appendix(&records, &Rubric::floor_plan_v1(), &SortSpec::total_desc());
        let models: Vec<&str> = view.rows.iter().map(|r| r.model.as_str()).collect();
        assert_eq!(models, vec!["B", "C", "A"]);
    }

    #[test]
    fn test_badges_follow_thresholds() {
        let records = vec![rec("A", "p1", 40.0, 16.0)];
        let view = build_appendix(&records, &Rubric::floor_plan_v1(), &SortSpec::total_desc());
        let row = &view.rows[0];
        // 16/20 = 80% green; total 40/100 red.
        let clarity = row.metrics.iter().find(|m| m.key == "visual_clarity").unwrap();
        assert_eq!(clarity.badge.background, BADGE_GREEN);
        assert_eq!(row.total_badge.background, BADGE_RED);
        // Metric absent from the record: score 0, red badge.
        let interior = row.metrics.iter().find(|m| m.key == "interior_elements").unwrap();
        assert_eq!(interior.score, 0.0);
        assert_eq!(interior.badge.background, BADGE_RED);
    }

    #[test]
    fn test_identity_sort_ascending() {
        let records = vec![
            rec("B", "p2", 90.0, 10.0),
            rec("A", "p1", 40.0, 10.0),
        ];
        let spec = SortSpec::total_desc().select("model", field_kind("model"));
        assert!(spec.ascending);
        let view = build_appendix(&records, &Rubric::floor_plan_v1(), &spec);
        assert_eq!(view.rows[0].model, "A");
    }

    #[test]
    fn test_metric_column_sort() {
        let records = vec![
            rec("A", "p1", 0.0, 11.0),
            rec("B", "p2", 0.0, 16.0),
        ];
        let spec = SortSpec {
            field: "visual_clarity".to_string(),
            ascending: false,
        };
        let view = build_appendix(&records, &Rubric::floor_plan_v1(), &spec);
        assert_eq!(view.rows[0].model, "B");
        assert_eq!(view.rows[0].metrics[3].badge.background, BADGE_GREEN);
        assert_eq!(view.rows[1].metrics[3].badge.background, BADGE_YELLOW);
    }
}
