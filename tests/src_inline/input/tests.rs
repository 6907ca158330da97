use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::{InputError, load_records, load_rubric};

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("evalboard_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

#[test]
fn test_load_records_from_json_array() {
    let dir = make_temp_dir();
    let path = dir.join("records.json");
    write_file(
        &path,
        r#"[
            {
                "evaluated_model": "google_gemini",
                "evaluator_model": "judge",
                "input_file": "floor_plan_01.png",
                "scores": {"visual_clarity": {"score": 14, "notes": "ok"}},
                "total_score": 72
            },
            {
                "evaluated_model": "openai_gpt",
                "evaluator_model": "judge",
                "input_file": "floor_plan_01.png"
            }
        ]"#,
    );
    let records = load_records(&path).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].total(), 72.0);
    // Optional fields all default.
    assert_eq!(records[1].total(), 0.0);
    assert!(records[1].scores.is_empty());
}

#[test]
fn test_load_records_missing_file() {
    let dir = make_temp_dir();
    let err = load_records(&dir.join("nope.json")).unwrap_err();
    assert!(matches!(err, InputError::MissingInput(_)));
}

#[test]
fn test_load_records_invalid_json() {
    let dir = make_temp_dir();
    let path = dir.join("bad.json");
    write_file(&path, "{not json");
    let err = load_records(&path).unwrap_err();
    assert!(matches!(err, InputError::Parse { .. }));
}

#[test]
fn test_load_rubric_override() {
    let dir = make_temp_dir();
    let path = dir.join("rubric.json");
    write_file(
        &path,
        r#"{
            "metrics": [
                {"key": "spatial", "label": "Spatial Accuracy", "max_weight": 40},
                {"key": "style", "label": "Style", "max_weight": 20}
            ],
            "total_weight": 60
        }"#,
    );
    let rubric = load_rubric(&path).unwrap();
    assert_eq!(rubric.metrics.len(), 2);
    assert_eq!(rubric.total_weight, 60.0);
    assert_eq!(rubric.max_weight("spatial"), Some(40.0));
}
