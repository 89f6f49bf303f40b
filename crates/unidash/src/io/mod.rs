//! IO utilities for loading the dashboard dataset.

pub mod student_csv;

pub use student_csv::{read_student_csv, read_student_records, REQUIRED_COLUMNS};
