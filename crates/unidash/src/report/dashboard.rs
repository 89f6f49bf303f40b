//! Dashboard page assembly: views, figures and narrative in fixed order.
use std::path::Path;

use anyhow::{bail, Context, Result};
use maud::html;
use plotly::Plot;

use crate::config::DashboardConfig;
use crate::data_handling::StudentRecord;
use crate::io::read_student_csv;
use crate::report::narrative;
use crate::report::plots::{
    plot_department_breakdown, plot_department_shares, plot_retention_distribution,
    plot_retention_trend, plot_retention_vs_satisfaction, plot_satisfaction, plot_term_comparison,
    plot_term_totals,
};
use crate::report::report::{Report, ReportSection};
use crate::views::DashboardViews;

/// Chart section headers, in page order.
pub const CHART_SECTIONS: [&str; 8] = [
    "Total Applications, Admissions, and Enrollments per Term",
    "Retention Rate Trends Over Time",
    "Student Satisfaction Over the Years",
    "Enrollment Breakdown by Department",
    "Spring vs. Fall Term Comparison",
    "Department-Wise Comparison for Retention & Satisfaction",
    "Retention Rate Distribution",
    "Department Enrollment Proportions",
];

/// One figure per view, in the same order as [`CHART_SECTIONS`].
pub fn chart_plots(views: &DashboardViews) -> [Plot; 8] {
    [
        plot_term_totals(&views.term_totals),
        plot_retention_trend(&views.retention_trend),
        plot_satisfaction(&views.satisfaction_points),
        plot_department_breakdown(&views.department_totals),
        plot_term_comparison(&views.term_comparison),
        plot_retention_vs_satisfaction(&views.retention_vs_satisfaction),
        plot_retention_distribution(&views.retention_distribution),
        plot_department_shares(&views.department_shares),
    ]
}

/// Build the dashboard page for already computed views.
pub fn build_dashboard(
    records: &[StudentRecord],
    views: &DashboardViews,
    config: &DashboardConfig,
) -> Result<Report> {
    let mut report = Report::new("unidash", &config.version, None, &config.page_title);
    report.set_heading(&config.heading);
    report.set_plotly_cdn(&config.plotly_cdn);
    report.set_intro(narrative::introduction());

    if config.show_overview {
        let mut overview_section = ReportSection::new("Dataset Overview");
        overview_section.add_content(narrative::dataset_overview(records));
        report.add_section(overview_section);
    }

    for (title, plot) in CHART_SECTIONS.iter().zip(chart_plots(views)) {
        log::debug!("Building section '{}'", title);
        let mut section = ReportSection::new(title);
        section.add_plot(plot);
        report.add_section(section);
    }

    if config.show_findings {
        let mut findings_section = ReportSection::new("Findings & Insights");
        findings_section.add_content(narrative::key_findings());
        report.add_section(findings_section);
    }

    if config.show_config {
        let mut config_section = ReportSection::new("Configuration");
        config_section.add_content(html! {
            style {
                ".code-container {
                    background-color: #f5f5f5;
                    padding: 10px;
                    border-radius: 5px;
                    overflow-x: auto;
                    font-family: monospace;
                    white-space: pre-wrap;
                }"
            }
            div class="code-container" {
                pre {
                    code { (serde_json::to_string_pretty(config)?) }
                }
            }
        });
        report.add_section(config_section);
    }

    report.set_footer(narrative::footer());
    Ok(report)
}

/// Write the eight views as pretty JSON.
pub fn write_views_json<P: AsRef<Path>>(views: &DashboardViews, path: P) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(views).context("Failed to serialize views")?;
    std::fs::write(&path, bytes)
        .with_context(|| format!("Failed to write views: {}", path.as_ref().display()))?;
    log::info!("Views written to {}", path.as_ref().display());
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.is_dir() => {
            bail!("Output directory does not exist: {}", parent.display())
        }
        _ => Ok(()),
    }
}

/// Load the configured data file, build every view and figure, then write the
/// page and the views JSON when configured.
///
/// Both outputs are checked before anything is written, and the page is
/// removed again if the views JSON cannot be written.
pub fn render_dashboard(config: &DashboardConfig) -> Result<DashboardViews> {
    let records = read_student_csv(&config.data_file)?;
    let views = DashboardViews::build(&records);
    let report = build_dashboard(&records, &views, config)?;

    let output = Path::new(&config.output_file);
    ensure_parent_dir(output)?;
    if let Some(path) = &config.views_json {
        ensure_parent_dir(Path::new(path))?;
    }

    report.save_to_file(output)?;
    if let Some(path) = &config.views_json {
        if let Err(e) = write_views_json(&views, path) {
            if let Err(remove_err) = std::fs::remove_file(output) {
                log::warn!(
                    "Failed to remove {} after error: {}",
                    output.display(),
                    remove_err
                );
            }
            return Err(e);
        }
    }

    Ok(views)
}
