// Shared fixtures for integration tests.
#![allow(dead_code)]

use std::path::PathBuf;

use unidash::data_handling::{StudentRecord, Term};

pub fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join("university_student_dashboard_data.csv")
}

pub fn record(year: i32, term: Term, retention: f64, satisfaction: f64) -> StudentRecord {
    StudentRecord {
        year,
        term,
        applications: 1000,
        admitted: 600,
        enrolled: 300,
        retention_rate: retention,
        satisfaction,
        engineering_enrolled: 120,
        business_enrolled: 90,
        arts_enrolled: 50,
        science_enrolled: 40,
    }
}

pub const HEADER: &str = "Year,Term,Applications,Admitted,Enrolled,Retention Rate (%),Student Satisfaction (%),Engineering Enrolled,Business Enrolled,Arts Enrolled,Science Enrolled";
