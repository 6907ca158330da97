use crate::aggregate::{mean_total_opt, records_for_prompt_model};
use crate::keys::DimensionSets;
use crate::record::EvaluationRecord;
use crate::sort::{FieldKind, SortSpec};
use crate::views::matrix::{MatrixView, build_matrix};

/// Prompt rows against model columns; cells are mean total scores.
pub fn build_breakdown(
    records: &[EvaluationRecord],
    dims: &DimensionSets,
    sort: Option<&SortSpec>,
) -> MatrixView {
    build_matrix(
        "prompt",
        &dims.prompts,
        &dims.models,
        sort,
        |prompt, model| mean_total_opt(&records_for_prompt_model(records, prompt, model)),
    )
}

pub fn field_kind(field: &str) -> FieldKind {
    if field == "prompt" {
        FieldKind::Identity
    } else {
        FieldKind::Score
    }
}
