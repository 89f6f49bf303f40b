//! unidash: admissions, retention and satisfaction dashboards for university
//! enrollment data.
//!
//! The crate loads a single CSV of per-term records, derives eight grouped
//! views (totals, trends, means, distributions and department shares) and
//! renders them as Plotly figures on one standalone HTML page.
pub mod config;
pub mod data_handling;
pub mod io;
pub mod report;
pub mod stats;
pub mod views;

pub use config::{load_dashboard_config, DashboardConfig};
pub use data_handling::{Department, GroupKey, StudentRecord, Term};
pub use views::DashboardViews;
