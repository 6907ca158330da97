use serde::Serialize;

use crate::color::{CellStyle, ColorScale};
use crate::sort::{self, SortSpec, SortValue};

/// One cell of a comparison matrix. `mean` is `None` for an empty
/// group; null cells carry no color and render as "-".
#[derive(Debug, Clone, Serialize)]
pub struct MatrixCell {
    pub mean: Option<f64>,
    pub style: Option<CellStyle>,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    pub label: String,
    pub cells: Vec<MatrixCell>,
}

/// Sparse comparison matrix shared by the breakdown (prompt x model)
/// and evaluator (model x evaluator) views.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixView {
    pub label_field: String,
    pub columns: Vec<String>,
    pub rows: Vec<MatrixRow>,
    pub sort: Option<SortSpec>,
}

/// Builds, optionally sorts, then colorizes. Color scales are
/// per-column over that column's non-null means.
pub fn build_matrix<F>(
    label_field: &str,
    row_keys: &[String],
    columns: &[String],
    sort: Option<&SortSpec>,
    cell_mean: F,
) -> MatrixView
where
    F: Fn(&str, &str) -> Option<f64>,
{
    let mut rows: Vec<MatrixRow> = row_keys
        .iter()
        .map(|row_key| MatrixRow {
            label: row_key.clone(),
            cells: columns
                .iter()
                .map(|col| MatrixCell {
                    mean: cell_mean(row_key, col),
                    style: None,
                })
                .collect(),
        })
        .collect();

    if let Some(spec) = sort {
        apply_sort(&mut rows, label_field, columns, spec);
    }

    for (col_idx, _) in columns.iter().enumerate() {
        let values: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.cells[col_idx].mean)
            .collect();
        let scale = ColorScale::from_values(&values);
        for row in &mut rows {
            let cell = &mut row.cells[col_idx];
            cell.style = scale.style_of(cell.mean);
        }
    }

    MatrixView {
        label_field: label_field.to_string(),
        columns: columns.to_vec(),
        rows,
        sort: sort.cloned(),
    }
}

fn apply_sort(rows: &mut [MatrixRow], label_field: &str, columns: &[String], spec: &SortSpec) {
    if spec.field == label_field {
        rows.sort_by(|a, b| {
            sort::compare(
                &SortValue::Text(a.label.clone()),
                &SortValue::Text(b.label.clone()),
                spec.ascending,
            )
        });
        return;
    }
    // Unknown column: leave the order unchanged.
    let Some(col_idx) = columns.iter().position(|c| *c == spec.field) else {
        return;
    };
    rows.sort_by(|a, b| {
        let value = |row: &MatrixRow| match row.cells[col_idx].mean {
            Some(v) => SortValue::Number(v),
            None => SortValue::Null,
        };
        sort::compare(&value(a), &value(b), spec.ascending)
    });
}
