//! Integration tests for CLI config resolution and util helpers.

use std::path::PathBuf;

use clap::{Arg, ArgAction, Command};
use unidash_cli::dashboard::input::config_from_arguments;
use unidash_cli::util::validate_csv_file;

fn fixture() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../unidash/tests/data/university_student_dashboard_data.csv")
        .to_string_lossy()
        .to_string()
}

fn render_command() -> Command {
    Command::new("render")
        .arg(Arg::new("data_file").long("data"))
        .arg(Arg::new("output_file").long("output"))
        .arg(Arg::new("views_json").long("views-json"))
        .arg(Arg::new("no_findings").long("no-findings").action(ArgAction::SetTrue))
}

// ---------------------------------------------------------------------------
// validate_csv_file
// ---------------------------------------------------------------------------

#[test]
fn validate_csv_file_exists() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.csv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_csv_file(path.to_str().unwrap()).is_ok());
}

#[test]
fn validate_wrong_extension_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    std::fs::File::create(&path).unwrap();
    assert!(validate_csv_file(path.to_str().unwrap()).is_err());
}

#[test]
fn validate_nonexistent_file_errors() {
    assert!(validate_csv_file("/nonexistent/path/data.csv").is_err());
}

// ---------------------------------------------------------------------------
// config_from_arguments
// ---------------------------------------------------------------------------

#[test]
fn cli_flags_override_defaults() {
    let data = fixture();
    let matches = render_command().get_matches_from([
        "render",
        "--data",
        data.as_str(),
        "--output",
        "custom.html",
        "--no-findings",
    ]);
    let cfg = config_from_arguments(None, &matches).unwrap();
    assert_eq!(cfg.data_file, data);
    assert_eq!(cfg.output_file, "custom.html");
    assert!(!cfg.show_findings);
    assert!(cfg.views_json.is_none());
}

#[test]
fn config_file_values_are_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("dashboard.json");
    std::fs::write(
        &config,
        format!(
            r#"{{ "data_file": "{}", "views_json": "views.json", "show_overview": false }}"#,
            fixture()
        ),
    )
    .unwrap();

    let matches = render_command().get_matches_from(["render"]);
    let cfg = config_from_arguments(Some(&config), &matches).unwrap();
    assert_eq!(cfg.views_json.as_deref(), Some("views.json"));
    assert!(!cfg.show_overview);
    assert!(cfg.show_findings);
}

#[test]
fn invalid_field_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("dashboard.json");
    std::fs::write(
        &config,
        format!(r#"{{ "data_file": "{}", "show_findings": "sometimes" }}"#, fixture()),
    )
    .unwrap();

    let matches = render_command().get_matches_from(["render"]);
    let cfg = config_from_arguments(Some(&config), &matches).unwrap();
    assert!(cfg.show_findings);
}

#[test]
fn missing_data_file_is_rejected() {
    let matches = render_command().get_matches_from(["render", "--data", "/nonexistent/data.csv"]);
    assert!(config_from_arguments(None, &matches).is_err());
}
