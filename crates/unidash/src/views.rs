//! Derived tabular views, one per dashboard chart.
//!
//! Every per-term view groups on [`GroupKey`] through a `BTreeMap`, so rows
//! come out sorted by year and then term (`Fall` before `Spring`). Views that
//! chart raw observations keep the source row order instead.
use std::collections::BTreeMap;

use serde::Serialize;

use crate::data_handling::{Department, GroupKey, StudentRecord, Term};
use crate::stats::{five_number_summary, mean, FiveNumberSummary};

/// Applications, admissions and enrollments summed per (Year, Term).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermTotals {
    pub year: i32,
    pub term: Term,
    pub applications: u64,
    pub admitted: u64,
    pub enrolled: u64,
}

/// A single raw observation of a percentage metric.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermObservation {
    pub year: i32,
    pub term: Term,
    pub value: f64,
}

/// Department enrollments summed per (Year, Term), in [`Department::ALL`] order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentTermTotals {
    pub year: i32,
    pub term: Term,
    pub enrolled: [u64; 4],
}

impl DepartmentTermTotals {
    pub fn get(&self, department: Department) -> u64 {
        self.enrolled[department_index(department)]
    }
}

/// Mean retention and satisfaction for one (Year, Term) group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermMeans {
    pub year: i32,
    pub term: Term,
    pub retention_rate: f64,
    pub satisfaction: f64,
}

/// Retention values of one term plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermDistribution {
    pub term: Term,
    pub values: Vec<f64>,
    pub summary: FiveNumberSummary,
}

/// Total enrollment of one department across every record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentShare {
    pub department: Department,
    pub enrolled: u64,
}

fn department_index(department: Department) -> usize {
    match department {
        Department::Engineering => 0,
        Department::Business => 1,
        Department::Arts => 2,
        Department::Science => 3,
    }
}

fn group_by_key(records: &[StudentRecord]) -> BTreeMap<GroupKey, Vec<&StudentRecord>> {
    let mut groups: BTreeMap<GroupKey, Vec<&StudentRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.key()).or_default().push(record);
    }
    groups
}

/// Grouped mean of a single metric, keyed by (Year, Term).
fn grouped_mean<F>(records: &[StudentRecord], metric: F) -> BTreeMap<GroupKey, f64>
where
    F: Fn(&StudentRecord) -> f64,
{
    group_by_key(records)
        .into_iter()
        .map(|(key, rows)| {
            let values: Vec<f64> = rows.iter().map(|r| metric(*r)).collect();
            (key, mean(&values))
        })
        .collect()
}

/// View 1: sum of Applications / Admitted / Enrolled grouped by (Year, Term).
pub fn term_totals(records: &[StudentRecord]) -> Vec<TermTotals> {
    group_by_key(records)
        .into_iter()
        .map(|(key, rows)| TermTotals {
            year: key.year,
            term: key.term,
            applications: rows.iter().map(|r| r.applications).sum(),
            admitted: rows.iter().map(|r| r.admitted).sum(),
            enrolled: rows.iter().map(|r| r.enrolled).sum(),
        })
        .collect()
}

/// View 2: raw retention rate per row.
pub fn retention_trend(records: &[StudentRecord]) -> Vec<TermObservation> {
    records
        .iter()
        .map(|r| TermObservation {
            year: r.year,
            term: r.term,
            value: r.retention_rate,
        })
        .collect()
}

/// View 3: raw student satisfaction per row.
pub fn satisfaction_points(records: &[StudentRecord]) -> Vec<TermObservation> {
    records
        .iter()
        .map(|r| TermObservation {
            year: r.year,
            term: r.term,
            value: r.satisfaction,
        })
        .collect()
}

/// View 4: department enrollments summed per (Year, Term).
pub fn department_totals_by_term(records: &[StudentRecord]) -> Vec<DepartmentTermTotals> {
    group_by_key(records)
        .into_iter()
        .map(|(key, rows)| {
            let mut enrolled = [0u64; 4];
            for department in Department::ALL {
                enrolled[department_index(department)] = rows
                    .iter()
                    .map(|r| r.department_enrolled(department))
                    .sum();
            }
            DepartmentTermTotals {
                year: key.year,
                term: key.term,
                enrolled,
            }
        })
        .collect()
}

/// View 5: mean retention and satisfaction grouped by (Year, Term).
pub fn term_comparison(records: &[StudentRecord]) -> Vec<TermMeans> {
    group_by_key(records)
        .into_iter()
        .map(|(key, rows)| {
            let retention: Vec<f64> = rows.iter().map(|r| r.retention_rate).collect();
            let satisfaction: Vec<f64> = rows.iter().map(|r| r.satisfaction).collect();
            TermMeans {
                year: key.year,
                term: key.term,
                retention_rate: mean(&retention),
                satisfaction: mean(&satisfaction),
            }
        })
        .collect()
}

/// View 6: separately grouped retention and satisfaction means, inner-joined
/// on (Year, Term).
///
/// Both sides are keyed maps over the same records, so the join yields
/// exactly one row per group present in the data.
pub fn retention_vs_satisfaction(records: &[StudentRecord]) -> Vec<TermMeans> {
    let retention = grouped_mean(records, |r| r.retention_rate);
    let satisfaction = grouped_mean(records, |r| r.satisfaction);

    retention
        .into_iter()
        .filter_map(|(key, retention_rate)| {
            satisfaction.get(&key).map(|&satisfaction| TermMeans {
                year: key.year,
                term: key.term,
                retention_rate,
                satisfaction,
            })
        })
        .collect()
}

/// View 7: retention rate distribution per term. Terms with no rows are
/// left out.
pub fn retention_distribution(records: &[StudentRecord]) -> Vec<TermDistribution> {
    Term::ALL
        .iter()
        .filter_map(|&term| {
            let values: Vec<f64> = records
                .iter()
                .filter(|r| r.term == term)
                .map(|r| r.retention_rate)
                .collect();
            five_number_summary(&values).map(|summary| TermDistribution {
                term,
                values,
                summary,
            })
        })
        .collect()
}

/// View 8: total enrollment per department across all records.
pub fn department_shares(records: &[StudentRecord]) -> Vec<DepartmentShare> {
    Department::ALL
        .iter()
        .map(|&department| DepartmentShare {
            department,
            enrolled: records
                .iter()
                .map(|r| r.department_enrolled(department))
                .sum(),
        })
        .collect()
}

/// All eight views, computed in chart order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardViews {
    pub term_totals: Vec<TermTotals>,
    pub retention_trend: Vec<TermObservation>,
    pub satisfaction_points: Vec<TermObservation>,
    pub department_totals: Vec<DepartmentTermTotals>,
    pub term_comparison: Vec<TermMeans>,
    pub retention_vs_satisfaction: Vec<TermMeans>,
    pub retention_distribution: Vec<TermDistribution>,
    pub department_shares: Vec<DepartmentShare>,
}

impl DashboardViews {
    pub fn build(records: &[StudentRecord]) -> Self {
        log::debug!("Building dashboard views from {} records", records.len());
        Self {
            term_totals: term_totals(records),
            retention_trend: retention_trend(records),
            satisfaction_points: satisfaction_points(records),
            department_totals: department_totals_by_term(records),
            term_comparison: term_comparison(records),
            retention_vs_satisfaction: retention_vs_satisfaction(records),
            retention_distribution: retention_distribution(records),
            department_shares: department_shares(records),
        }
    }
}
