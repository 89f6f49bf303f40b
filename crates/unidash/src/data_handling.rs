//! Core record types for the university dashboard dataset.
use std::fmt;

use serde::{Deserialize, Serialize};

/// Academic session. `Fall` orders before `Spring`, matching the lexical
/// ordering of grouped output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Fall,
    Spring,
}

impl Term {
    pub const ALL: [Term; 2] = [Term::Fall, Term::Spring];

    pub fn as_str(&self) -> &'static str {
        match self {
            Term::Fall => "Fall",
            Term::Spring => "Spring",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the dashboard CSV.
///
/// Field names map onto the CSV headers verbatim; a missing header fails
/// deserialization for the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Term")]
    pub term: Term,
    #[serde(rename = "Applications")]
    pub applications: u64,
    #[serde(rename = "Admitted")]
    pub admitted: u64,
    #[serde(rename = "Enrolled")]
    pub enrolled: u64,
    #[serde(rename = "Retention Rate (%)")]
    pub retention_rate: f64,
    #[serde(rename = "Student Satisfaction (%)")]
    pub satisfaction: f64,
    #[serde(rename = "Engineering Enrolled")]
    pub engineering_enrolled: u64,
    #[serde(rename = "Business Enrolled")]
    pub business_enrolled: u64,
    #[serde(rename = "Arts Enrolled")]
    pub arts_enrolled: u64,
    #[serde(rename = "Science Enrolled")]
    pub science_enrolled: u64,
}

impl StudentRecord {
    pub fn key(&self) -> GroupKey {
        GroupKey {
            year: self.year,
            term: self.term,
        }
    }

    pub fn department_enrolled(&self, department: Department) -> u64 {
        match department {
            Department::Engineering => self.engineering_enrolled,
            Department::Business => self.business_enrolled,
            Department::Arts => self.arts_enrolled,
            Department::Science => self.science_enrolled,
        }
    }
}

/// Grouping key used by every per-term view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GroupKey {
    pub year: i32,
    pub term: Term,
}

/// Departments tracked in the enrollment breakdown, in column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Department {
    Engineering,
    Business,
    Arts,
    Science,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::Engineering,
        Department::Business,
        Department::Arts,
        Department::Science,
    ];

    /// CSV header holding this department's enrollment count.
    pub fn column(&self) -> &'static str {
        match self {
            Department::Engineering => "Engineering Enrolled",
            Department::Business => "Business Enrolled",
            Department::Arts => "Arts Enrolled",
            Department::Science => "Science Enrolled",
        }
    }
}
