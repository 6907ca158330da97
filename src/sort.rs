use std::cmp::Ordering;

use serde::Serialize;

/// Comparison universe for row ordering. `Null` marks an empty group
/// cell and always ranks at the worst end of the active direction.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
    Null,
}

/// Score columns default to descending on first selection, identity
/// columns (prompt, model, evaluator row labels) to ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Score,
    Identity,
}

/// Immutable per-view sort state. Each view carries its own `SortSpec`;
/// none of it is shared across views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    /// The canonical ordering: overall total score, descending.
    pub fn total_desc() -> Self {
        Self {
            field: "total".to_string(),
            ascending: false,
        }
    }

    /// Selecting the active field flips direction; selecting a new one
    /// resets to the field kind's default direction.
    pub fn select(&self, field: &str, kind: FieldKind) -> Self {
        if self.field == field {
            Self {
                field: self.field.clone(),
                ascending: !self.ascending,
            }
        } else {
            Self {
                field: field.to_string(),
                ascending: kind == FieldKind::Identity,
            }
        }
    }

    /// Rank badges are only meaningful under the canonical ordering.
    pub fn shows_rank_badges(&self) -> bool {
        self.field == "total" && !self.ascending
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::total_desc()
    }
}

// Null substitute outside the bounded 0-100 score range. The observable
// contract is only that nulls rank worst in either direction.
const NULL_SENTINEL: f64 = 999.0;

pub fn compare(a: &SortValue, b: &SortValue, ascending: bool) -> Ordering {
    use SortValue::*;
    let ord = match (a, b) {
        (Text(x), Text(y)) => x.cmp(y),
        (Text(_), _) | (_, Text(_)) => Ordering::Equal,
        _ => {
            let sentinel = if ascending {
                NULL_SENTINEL
            } else {
                -NULL_SENTINEL
            };
            let x = match a {
                Number(v) => *v,
                _ => sentinel,
            };
            let y = match b {
                Number(v) => *v,
                _ => sentinel,
            };
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
    };
    if ascending { ord } else { ord.reverse() }
}

/// Row types expose their sortable fields by name. `None` means the
/// field is not part of the row schema; sorting by it is a no-op.
pub trait SortKey {
    fn sort_value(&self, field: &str) -> Option<SortValue>;
}

pub fn sort_rows<R: SortKey>(rows: &mut [R], spec: &SortSpec) {
    rows.sort_by(|a, b| {
        match (a.sort_value(&spec.field), b.sort_value(&spec.field)) {
            (Some(x), Some(y)) => compare(&x, &y, spec.ascending),
            _ => Ordering::Equal,
        }
    });
}
