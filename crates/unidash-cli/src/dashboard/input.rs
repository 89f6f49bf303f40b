use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use unidash::config::{load_dashboard_config, DashboardConfig};

use crate::util::validate_csv_file;

/// Build the effective dashboard configuration: the JSON config file (or the
/// defaults when none is given), then command line overrides.
pub fn config_from_arguments(
    config_path: Option<&PathBuf>,
    matches: &ArgMatches,
) -> Result<DashboardConfig> {
    let mut config = match config_path {
        Some(path) => load_dashboard_config(path)?,
        None => DashboardConfig::default(),
    };

    // Apply CLI overrides
    if let Some(data_file) = get_string(matches, "data_file") {
        config.data_file = data_file;
    }
    validate_csv_file(&config.data_file)?;

    if let Some(output_file) = get_string(matches, "output_file") {
        config.output_file = output_file;
    }
    if let Some(views_json) = get_string(matches, "views_json") {
        config.views_json = Some(views_json);
    }
    if get_flag(matches, "no_findings") {
        config.show_findings = false;
    }
    if get_flag(matches, "show_config") {
        config.show_config = true;
    }

    Ok(config)
}

// Subcommands only define the arguments they use.
fn get_string(matches: &ArgMatches, id: &str) -> Option<String> {
    matches
        .try_get_one::<String>(id)
        .ok()
        .flatten()
        .cloned()
}

fn get_flag(matches: &ArgMatches, id: &str) -> bool {
    matches
        .try_get_one::<bool>(id)
        .ok()
        .flatten()
        .copied()
        .unwrap_or(false)
}
