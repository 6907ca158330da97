use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{text::render_report_text, write_reports};
use crate::keys::extract_dimensions;
use crate::record::{EvaluationRecord, MetricScore};
use crate::rubric::Rubric;
use crate::views::drilldown::build_drilldown;
use crate::views::{ViewBundle, ViewSorts, assemble_views};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("evalboard_report_{}_{}", std::process::id(), id));
    dir
}

fn rec(model: &str, evaluator: &str, prompt: &str, total: f64) -> EvaluationRecord {
    let mut scores = std::collections::BTreeMap::new();
    scores.insert(
        "visual_clarity".to_string(),
        MetricScore {
            score: total / 5.0,
            notes: "clean lines".to_string(),
        },
    );
    EvaluationRecord {
        evaluated_model: model.to_string(),
        evaluator_model: evaluator.to_string(),
        input_file: prompt.to_string(),
        generated_file: format!("{model}_{prompt}.glb"),
        scores,
        total_score: Some(total),
        verdict: Some("PASS".to_string()),
        summary: None,
        detected_errors: Vec::new(),
    }
}

fn bundle() -> ViewBundle {
    let records = vec![
        rec("google_gemini-2.5", "judge-1", "floor_plan_01.png", 82.0),
        rec("openai_gpt-5", "judge-1", "floor_plan_01.png", 64.0),
        rec("google_gemini-2.5", "judge-2", "floor_plan_02.png", 78.0),
    ];
    let dims = extract_dimensions(&records);
    assemble_views(&records, &dims, &Rubric::floor_plan_v1(), &ViewSorts::default())
}

#[test]
fn test_write_reports_emits_all_artifacts() {
    let dir = make_temp_dir();
    write_reports(&bundle(), None, &dir).unwrap();

    for name in [
        "summary.json",
        "breakdown.json",
        "evaluators.json",
        "appendix.json",
        "insights.json",
        "report.txt",
    ] {
        assert!(dir.join(name).exists(), "missing {name}");
    }
    assert!(!dir.join("drilldown.json").exists());

    let summary: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("summary.json")).unwrap()).unwrap();
    let rows = summary["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["model"], "google_gemini-2.5");
    assert_eq!(rows[0]["rank"], 1);
    // Styles serialize as hex strings.
    let bg = rows[0]["total_style"]["background"].as_str().unwrap();
    assert!(bg.starts_with('#') && bg.len() == 7);
}

#[test]
fn test_write_reports_includes_drilldown_when_given() {
    let records = vec![rec("google_gemini-2.5", "judge-1", "floor_plan_01.png", 82.0)];
    let dims = extract_dimensions(&records);
    let rubric = Rubric::floor_plan_v1();
    let sorts = ViewSorts::default();
    let bundle = assemble_views(&records, &dims, &rubric, &sorts);
    let drill = build_drilldown(&records, &dims, &rubric, "google_gemini-2.5", None, None);

    let dir = make_temp_dir();
    write_reports(&bundle, Some(&drill), &dir).unwrap();

    let drill_json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.join("drilldown.json")).unwrap()).unwrap();
    assert_eq!(drill_json["model"], "google_gemini-2.5");
    assert_eq!(drill_json["rows"].as_array().unwrap().len(), 1);
}

#[test]
fn test_text_report_structure() {
    let text = render_report_text(&bundle());
    assert!(text.starts_with("Model Evaluation Report\n"));
    assert!(text.contains("1. Leaderboard (3 evaluations)"));
    // Vendor prefixes drop from displayed names.
    assert!(text.contains("gemini-2.5"));
    assert!(!text.contains("google_gemini-2.5"));
    assert!(text.contains("Top performer: gemini-2.5 (80.0)"));
    assert!(text.contains("3. Totals by prompt"));
    assert!(text.contains("4. Totals by evaluator"));
}

#[test]
fn test_text_report_empty_dataset() {
    let dims = extract_dimensions(&[]);
    let bundle = assemble_views(&[], &dims, &Rubric::floor_plan_v1(), &ViewSorts::default());
    let text = render_report_text(&bundle);
    assert!(text.contains("No evaluations available."));
}
