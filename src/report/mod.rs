pub mod text;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::views::ViewBundle;
use crate::views::drilldown::DrilldownView;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes every assembled view-model as JSON plus the plain-text
/// leaderboard. The JSON artifacts are what an external renderer
/// consumes; nothing else crosses the engine boundary.
pub fn write_reports(
    bundle: &ViewBundle,
    drilldown: Option<&DrilldownView>,
    out_dir: &Path,
) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;

    write_json(&out_dir.join("summary.json"), &bundle.summary)?;
    write_json(&out_dir.join("breakdown.json"), &bundle.breakdown)?;
    write_json(&out_dir.join("evaluators.json"), &bundle.evaluators)?;
    write_json(&out_dir.join("appendix.json"), &bundle.appendix)?;
    if let Some(insights) = &bundle.insights {
        write_json(&out_dir.join("insights.json"), insights)?;
    }
    if let Some(view) = drilldown {
        write_json(&out_dir.join("drilldown.json"), view)?;
    }

    let report = text::render_report_text(bundle);
    write_text(&out_dir.join("report.txt"), &report)?;

    info!("reports written to {}", out_dir.display());
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(value)?;
    write_text(path, &json)?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> Result<(), ReportError> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    if !contents.ends_with('\n') {
        w.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
