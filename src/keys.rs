use std::collections::BTreeSet;

use crate::record::EvaluationRecord;

/// Distinct identifier sets derived once per dataset, ascending
/// code-point order, read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionSets {
    pub models: Vec<String>,
    pub evaluators: Vec<String>,
    pub prompts: Vec<String>,
}

pub fn extract_dimensions(records: &[EvaluationRecord]) -> DimensionSets {
    let mut models = BTreeSet::new();
    let mut evaluators = BTreeSet::new();
    let mut prompts = BTreeSet::new();

    for rec in records {
        models.insert(rec.evaluated_model.clone());
        evaluators.insert(rec.evaluator_model.clone());
        prompts.insert(rec.input_file.clone());
    }

    DimensionSets {
        models: models.into_iter().collect(),
        evaluators: evaluators.into_iter().collect(),
        prompts: prompts.into_iter().collect(),
    }
}
