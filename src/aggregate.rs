use std::collections::BTreeMap;

use crate::record::EvaluationRecord;

/// Arithmetic mean of one metric, missing entries counted as 0.
/// Callers must decide null-ness from the group size before calling;
/// an empty slice returns 0.0 and is never a valid aggregate.
pub fn mean_metric(records: &[&EvaluationRecord], key: &str) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.metric_score(key)).sum();
    sum / records.len() as f64
}

pub fn mean_total(records: &[&EvaluationRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let sum: f64 = records.iter().map(|r| r.total()).sum();
    sum / records.len() as f64
}

/// Empty group is `None`, never a computed zero.
pub fn mean_metric_opt(records: &[&EvaluationRecord], key: &str) -> Option<f64> {
    if records.is_empty() {
        None
    } else {
        Some(mean_metric(records, key))
    }
}

pub fn mean_total_opt(records: &[&EvaluationRecord]) -> Option<f64> {
    if records.is_empty() {
        None
    } else {
        Some(mean_total(records))
    }
}

/// Stable partition; record order within each group follows input order.
pub fn group_by<'a, K, F>(
    records: &'a [EvaluationRecord],
    key_fn: F,
) -> BTreeMap<K, Vec<&'a EvaluationRecord>>
where
    K: Ord,
    F: Fn(&EvaluationRecord) -> K,
{
    let mut out: BTreeMap<K, Vec<&'a EvaluationRecord>> = BTreeMap::new();
    for rec in records {
        out.entry(key_fn(rec)).or_default().push(rec);
    }
    out
}

pub fn records_for_model<'a>(
    records: &'a [EvaluationRecord],
    model: &str,
) -> Vec<&'a EvaluationRecord> {
    records
        .iter()
        .filter(|r| r.evaluated_model == model)
        .collect()
}

pub fn records_for_prompt_model<'a>(
    records: &'a [EvaluationRecord],
    prompt: &str,
    model: &str,
) -> Vec<&'a EvaluationRecord> {
    records
        .iter()
        .filter(|r| r.input_file == prompt && r.evaluated_model == model)
        .collect()
}

pub fn records_for_model_evaluator<'a>(
    records: &'a [EvaluationRecord],
    model: &str,
    evaluator: &str,
) -> Vec<&'a EvaluationRecord> {
    records
        .iter()
        .filter(|r| r.evaluated_model == model && r.evaluator_model == evaluator)
        .collect()
}

/// Summary aggregates round to one decimal before storage so that
/// coloring and sorting see exactly the displayed values.
pub fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
