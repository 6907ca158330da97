mod aggregate;
mod color;
mod display;
mod input;
mod keys;
mod record;
mod report;
mod rubric;
mod sort;
mod views;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::input::{InputError, load_records, load_rubric};
use crate::keys::extract_dimensions;
use crate::report::{ReportError, write_reports};
use crate::rubric::Rubric;
use crate::sort::SortSpec;
use crate::views::drilldown::build_drilldown;
use crate::views::{ViewSorts, assemble_views};

#[derive(Debug, Parser)]
#[command(name = "evalboard", version, about = "Evaluation aggregation and ranking engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Aggregate scored evaluation records into report view-models.
    Run {
        /// JSON array of scored evaluation records.
        #[arg(long)]
        data: PathBuf,
        /// Output directory for the report artifacts.
        #[arg(long)]
        out: PathBuf,
        /// Rubric override; the built-in floor-plan rubric applies otherwise.
        #[arg(long)]
        rubric: Option<PathBuf>,
        /// Leaderboard sort column (model, total, or a rubric metric key).
        #[arg(long)]
        sort_field: Option<String>,
        /// Sort ascending instead of the column's default direction.
        #[arg(long)]
        ascending: bool,
        /// Also emit a per-prompt drill-down for this model.
        #[arg(long)]
        model: Option<String>,
        /// Narrow the drill-down to a single evaluator.
        #[arg(long)]
        evaluator: Option<String>,
        /// Focus metric for the drill-down row ordering.
        #[arg(long)]
        metric: Option<String>,
    },
}

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let Command::Run {
        data,
        out,
        rubric,
        sort_field,
        ascending,
        model,
        evaluator,
        metric,
    } = cli.command;

    let records = load_records(&data)?;
    let rubric = match rubric {
        Some(path) => load_rubric(&path)?,
        None => Rubric::floor_plan_v1(),
    };
    let dims = extract_dimensions(&records);

    let leaderboard_sort = resolve_sort(sort_field.as_deref(), ascending, &rubric);
    let sorts = ViewSorts {
        summary: leaderboard_sort.clone(),
        appendix: leaderboard_sort,
        ..ViewSorts::default()
    };
    let bundle = assemble_views(&records, &dims, &rubric, &sorts);

    let drill = model.as_deref().map(|m| {
        if !dims.models.iter().any(|known| known == m) {
            warn!("model {m} has no evaluation records; drill-down will be empty");
        }
        build_drilldown(
            &records,
            &dims,
            &rubric,
            m,
            evaluator.as_deref(),
            metric.as_deref(),
        )
    });

    write_reports(&bundle, drill.as_ref(), &out)?;
    Ok(())
}

/// Unknown columns fall back to the canonical total-descending order
/// rather than producing an arbitrarily ordered report.
fn resolve_sort(field: Option<&str>, ascending: bool, rubric: &Rubric) -> SortSpec {
    let Some(field) = field else {
        return SortSpec::total_desc();
    };
    let known = matches!(field, "model" | "prompt" | "evaluator" | "total")
        || rubric.contains(field);
    if !known {
        warn!("unknown sort column {field}; using total descending");
        return SortSpec::total_desc();
    }
    SortSpec {
        field: field.to_string(),
        ascending,
    }
}
