use std::time::Instant;

use anyhow::Result;
use unidash::config::DashboardConfig;
use unidash::io::read_student_csv;
use unidash::report::{render_dashboard, write_views_json};
use unidash::views::DashboardViews;

/// Render the dashboard page described by `config`.
pub fn run_render(config: &DashboardConfig) -> Result<()> {
    let start_time = Instant::now();
    log::info!("Rendering dashboard from {}", config.data_file);

    let views = render_dashboard(config)?;

    log::info!(
        "Dashboard with {} term groups written to {} in {:?}",
        views.term_totals.len(),
        config.output_file,
        start_time.elapsed()
    );
    Ok(())
}

/// Compute the eight views and print them as JSON, or write them to
/// `output_file` when given.
pub fn run_views(data_file: &str, output_file: Option<&str>) -> Result<()> {
    let records = read_student_csv(data_file)?;
    let views = DashboardViews::build(&records);

    match output_file {
        Some(path) => write_views_json(&views, path)?,
        None => println!("{}", serde_json::to_string_pretty(&views)?),
    }
    Ok(())
}
