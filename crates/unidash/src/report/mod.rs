//! Reporting and plotting helpers for the dashboard page.
//!
//! `plots` turns each derived view into a `plotly::Plot`, `narrative` holds
//! the page text, `report` assembles HTML with maud and `dashboard` wires
//! them together in page order.
pub mod dashboard;
pub mod narrative;
pub mod plots;
pub mod report;

pub use dashboard::{build_dashboard, render_dashboard, write_views_json, CHART_SECTIONS};
pub use report::{Report, ReportSection};
