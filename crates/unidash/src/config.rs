use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_DATA_FILE: &str = "university_student_dashboard_data.csv";
pub const DEFAULT_OUTPUT_FILE: &str = "university_dashboard.html";
pub const DEFAULT_PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.12.1.min.js";

/// Settings for rendering the dashboard page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub version: String,
    /// Browser tab title.
    pub page_title: String,
    /// Main heading shown at the top of the page.
    pub heading: String,
    pub data_file: String,
    pub output_file: String,
    /// When set, the eight views are also written here as JSON.
    pub views_json: Option<String>,
    pub show_overview: bool,
    pub show_findings: bool,
    pub show_config: bool,
    pub plotly_cdn: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            page_title: "University Dashboard".to_string(),
            heading: "University Dashboard - Admissions, Retention & Satisfaction".to_string(),
            data_file: DEFAULT_DATA_FILE.to_string(),
            output_file: DEFAULT_OUTPUT_FILE.to_string(),
            views_json: None,
            show_overview: true,
            show_findings: true,
            show_config: false,
            plotly_cdn: DEFAULT_PLOTLY_CDN.to_string(),
        }
    }
}

/// Load a dashboard configuration from a JSON file.
///
/// Missing keys fall back to [`DashboardConfig::default`]. A key whose value
/// has the wrong type is logged and also falls back to the default; only a
/// file that is not valid JSON fails the load.
pub fn load_dashboard_config<P: AsRef<Path>>(path: P) -> Result<DashboardConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let partial: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;

    let mut config = DashboardConfig::default();

    macro_rules! load_or_default {
        ($field:ident) => {
            if let Some(val) = partial.get(stringify!($field)) {
                if let Ok(parsed) = serde_json::from_value(val.clone()) {
                    config.$field = parsed;
                } else {
                    log::warn!(
                        "Config Invalid value for '{}', using default: {:?}",
                        stringify!($field), config.$field
                    );
                }
            } else {
                log::debug!(
                    "Config Missing field '{}', using default: {:?}",
                    stringify!($field), config.$field
                );
            }
        };
    }

    load_or_default!(version);
    load_or_default!(page_title);
    load_or_default!(heading);
    load_or_default!(data_file);
    load_or_default!(output_file);
    load_or_default!(views_json);
    load_or_default!(show_overview);
    load_or_default!(show_findings);
    load_or_default!(show_config);
    load_or_default!(plotly_cdn);

    Ok(config)
}
