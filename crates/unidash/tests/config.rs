//! Integration tests for dashboard configuration loading.

use unidash::config::{load_dashboard_config, DashboardConfig, DEFAULT_DATA_FILE};

#[test]
fn default_config_values() {
    let cfg = DashboardConfig::default();
    assert_eq!(cfg.data_file, DEFAULT_DATA_FILE);
    assert_eq!(cfg.page_title, "University Dashboard");
    assert!(cfg.show_findings);
    assert!(cfg.show_overview);
    assert!(!cfg.show_config);
    assert!(cfg.views_json.is_none());
}

#[test]
fn partial_json_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    std::fs::write(&path, r#"{ "output_file": "out.html", "show_findings": false }"#).unwrap();

    let cfg = load_dashboard_config(&path).unwrap();
    assert_eq!(cfg.output_file, "out.html");
    assert!(!cfg.show_findings);
    assert_eq!(cfg.data_file, DEFAULT_DATA_FILE);
}

#[test]
fn config_roundtrips_through_json() {
    let cfg = DashboardConfig {
        views_json: Some("views.json".to_string()),
        ..DashboardConfig::default()
    };
    let json = serde_json::to_string_pretty(&cfg).unwrap();
    assert!(json.contains("views_json"));
    let back: DashboardConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, cfg);
}

#[test]
fn invalid_json_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let err = load_dashboard_config(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to parse config"));
}

#[test]
fn version_is_loaded_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    std::fs::write(&path, r#"{ "version": "9.9.9", "show_config": true }"#).unwrap();

    let cfg = load_dashboard_config(&path).unwrap();
    assert_eq!(cfg.version, "9.9.9");
    assert!(cfg.show_config);
}

#[test]
fn invalid_field_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dashboard.json");
    std::fs::write(&path, r#"{ "show_findings": "sometimes", "page_title": "Campus" }"#).unwrap();

    let cfg = load_dashboard_config(&path).unwrap();
    assert!(cfg.show_findings);
    assert_eq!(cfg.page_title, "Campus");
}
