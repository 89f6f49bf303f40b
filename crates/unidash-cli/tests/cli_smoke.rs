//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `unidash` binary to verify that
//! argument parsing, help text, and error handling work end-to-end.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("unidash").unwrap()
}

fn fixture() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../unidash/tests/data/university_student_dashboard_data.csv")
        .to_string_lossy()
        .to_string()
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("views"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("unidash"));
}

// ---------------------------------------------------------------------------
// render
// ---------------------------------------------------------------------------

#[test]
fn render_writes_html() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dashboard.html");

    cmd()
        .args(["render", "--data", &fixture(), "--output"])
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("Effective config"));

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("Department Enrollment Proportions"));
    assert!(html.contains("End of dashboard."));
}

#[test]
fn render_with_config_file_and_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("dashboard.json");
    let output = dir.path().join("from_config.html");
    let views = dir.path().join("views.json");
    std::fs::write(
        &config,
        format!(
            r#"{{ "data_file": "{}", "output_file": "{}", "page_title": "Campus Trends" }}"#,
            fixture(),
            output.to_string_lossy()
        ),
    )
    .unwrap();

    cmd()
        .arg("render")
        .arg(&config)
        .args(["--no-findings", "--views-json"])
        .arg(&views)
        .assert()
        .success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<title>Campus Trends</title>"));
    assert!(!html.contains("Key Findings"));
    assert!(views.exists());
}

#[test]
fn render_uses_config_file_version() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("dashboard.json");
    let output = dir.path().join("versioned.html");
    std::fs::write(
        &config,
        format!(
            r#"{{ "version": "9.9.9", "show_config": true, "data_file": "{}", "output_file": "{}" }}"#,
            fixture(),
            output.to_string_lossy()
        ),
    )
    .unwrap();

    cmd().arg("render").arg(&config).assert().success();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("unidash v9.9.9"));
}

#[test]
fn render_leaves_no_page_when_views_dir_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dashboard.html");
    let views = dir.path().join("missing_dir").join("views.json");

    cmd()
        .args(["render", "--data", &fixture(), "--output"])
        .arg(&output)
        .arg("--views-json")
        .arg(&views)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn render_missing_data_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("dashboard.html");

    cmd()
        .args(["render", "--data", "/nonexistent/path/data.csv", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
    assert!(!output.exists());
}

#[test]
fn render_missing_column_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("partial.csv");
    std::fs::write(&data, "Year,Term,Applications\n2024,Fall,10\n").unwrap();
    let output = dir.path().join("dashboard.html");

    cmd()
        .args(["render", "--data"])
        .arg(&data)
        .arg("--output")
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing column(s)"));
    assert!(!output.exists());
}

// ---------------------------------------------------------------------------
// views
// ---------------------------------------------------------------------------

#[test]
fn views_prints_json() {
    cmd()
        .args(["views", "--data", &fixture()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"term_totals\""))
        .stdout(predicate::str::contains("\"department_shares\""));
}

#[test]
fn views_writes_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("views.json");

    cmd()
        .args(["views", "--data", &fixture(), "--output"])
        .arg(&output)
        .assert()
        .success();

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(json["term_totals"].as_array().unwrap().len(), 6);
}

#[test]
fn views_rejects_non_csv() {
    cmd()
        .args(["views", "--data", "data.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".csv extension"));
}
