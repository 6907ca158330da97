use crate::aggregate::{mean_total_opt, records_for_model_evaluator};
use crate::keys::DimensionSets;
use crate::record::EvaluationRecord;
use crate::sort::{FieldKind, SortSpec};
use crate::views::matrix::{MatrixView, build_matrix};

/// Model rows against evaluator columns; shows how each judge scores
/// each system, same sparse-cell rules as the breakdown matrix.
pub fn build_evaluator_matrix(
    records: &[EvaluationRecord],
    dims: &DimensionSets,
    sort: Option<&SortSpec>,
) -> MatrixView {
    build_matrix(
        "model",
        &dims.models,
        &dims.evaluators,
        sort,
        |model, evaluator| {
            mean_total_opt(&records_for_model_evaluator(records, model, evaluator))
        },
    )
}

pub fn field_kind(field: &str) -> FieldKind {
    if field == "model" {
        FieldKind::Identity
    } else {
        FieldKind::Score
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::extract_dimensions;

    fn rec(model: &str, evaluator: &str, total: f64) -> EvaluationRecord {
        EvaluationRecord {
            evaluated_model: model.to_string(),
            evaluator_model: evaluator.to_string(),
            input_file: "p1.png".to_string(),
            generated_file: String::new(),
            scores: Default::default(),
            total_score: Some(total),
            verdict: None,
            summary: None,
            detected_errors: Vec::new(),
        }
    }

    #[test]
    fn test_model_by_evaluator_cells() {
        let records = vec![
            rec("A", "judge_a", 80.0),
            rec("A", "judge_a", 70.0),
            rec("A", "judge_b", 40.0),
            rec("B", "judge_b", 95.0),
        ];
        let dims = extract_dimensions(&records);
        let view = build_evaluator_matrix(&records, &dims, None);

        assert_eq!(view.label_field, "model");
        assert_eq!(view.columns, vec!["judge_a", "judge_b"]);
        assert_eq!(view.rows[0].cells[0].mean, Some(75.0));
        assert_eq!(view.rows[0].cells[1].mean, Some(40.0));
        // B was never scored by judge_a.
        assert_eq!(view.rows[1].cells[0].mean, None);
        assert_eq!(view.rows[1].cells[1].mean, Some(95.0));
    }

    #[test]
    fn test_sort_by_evaluator_column_keeps_null_last() {
        let records = vec![
            rec("A", "judge_a", 50.0),
            rec("B", "judge_b", 95.0),
            rec("C", "judge_a", 90.0),
        ];
        let dims = extract_dimensions(&records);
        let spec = SortSpec {
            field: "judge_a".to_string(),
            ascending: false,
        };
        let view = build_evaluator_matrix(&records, &dims, Some(&spec));
        let labels: Vec<&str> = view.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["C", "A", "B"]);
    }
}
