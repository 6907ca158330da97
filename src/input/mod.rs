use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::record::EvaluationRecord;
use crate::rubric::Rubric;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error in {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

/// Reads the already-scored evaluation records (a JSON array). Parsing
/// happens here at the boundary; the engine only ever sees typed
/// records.
pub fn load_records(path: &Path) -> Result<Vec<EvaluationRecord>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "records file {} not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    let records: Vec<EvaluationRecord> =
        serde_json::from_str(&data).map_err(|source| InputError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    info!(
        "loaded {} evaluation records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Optional rubric override; absent a file the built-in profile applies.
pub fn load_rubric(path: &Path) -> Result<Rubric, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(format!(
            "rubric file {} not found",
            path.display()
        )));
    }
    let data = fs::read_to_string(path)?;
    let rubric: Rubric = serde_json::from_str(&data).map_err(|source| InputError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    info!(
        "loaded rubric with {} metrics from {}",
        rubric.metrics.len(),
        path.display()
    );
    Ok(rubric)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
