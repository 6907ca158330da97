pub mod appendix;
pub mod breakdown;
pub mod drilldown;
pub mod evaluators;
pub mod insights;
pub mod matrix;
pub mod summary;

use serde::Serialize;

use crate::keys::DimensionSets;
use crate::record::EvaluationRecord;
use crate::rubric::Rubric;
use crate::sort::SortSpec;

/// Per-view sort state. Matrices start unsorted (dimension order);
/// summary and appendix start at the canonical total-descending order.
#[derive(Debug, Clone, Default)]
pub struct ViewSorts {
    pub summary: SortSpec,
    pub breakdown: Option<SortSpec>,
    pub evaluators: Option<SortSpec>,
    pub appendix: SortSpec,
}

#[derive(Debug, Clone, Serialize)]
pub struct ViewBundle {
    pub n_records: usize,
    pub summary: summary::SummaryView,
    pub breakdown: matrix::MatrixView,
    pub evaluators: matrix::MatrixView,
    pub insights: Option<insights::Insights>,
    pub appendix: appendix::AppendixView,
}

/// Recomputes every view wholesale from the record store. Cheap enough
/// to rerun on each triggering action; nothing here is cached.
pub fn assemble_views(
    records: &[EvaluationRecord],
    dims: &DimensionSets,
    rubric: &Rubric,
    sorts: &ViewSorts,
) -> ViewBundle {
    let summary = summary::build_summary(records, dims, rubric, &sorts.summary);
    let insights = insights::derive_insights(&summary, rubric);
    ViewBundle {
        n_records: records.len(),
        breakdown: breakdown::build_breakdown(records, dims, sorts.breakdown.as_ref()),
        evaluators: evaluators::build_evaluator_matrix(records, dims, sorts.evaluators.as_ref()),
        appendix: appendix::build_appendix(records, rubric, &sorts.appendix),
        summary,
        insights,
    }
}
