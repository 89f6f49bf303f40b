//! University dashboard CSV reader.
use std::io::Read;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::StringRecord;

use crate::data_handling::StudentRecord;

/// Header names the dashboard depends on. Matching is exact.
pub const REQUIRED_COLUMNS: [&str; 11] = [
    "Year",
    "Term",
    "Applications",
    "Admitted",
    "Enrolled",
    "Retention Rate (%)",
    "Student Satisfaction (%)",
    "Engineering Enrolled",
    "Business Enrolled",
    "Arts Enrolled",
    "Science Enrolled",
];

/// Read the dashboard CSV file from disk.
pub fn read_student_csv<P: AsRef<Path>>(path: P) -> Result<Vec<StudentRecord>> {
    let file = std::fs::File::open(&path)
        .with_context(|| format!("Failed to open data file: {}", path.as_ref().display()))?;
    let records = read_student_records(file)
        .with_context(|| format!("Failed to load data file: {}", path.as_ref().display()))?;
    log::info!(
        "Loaded {} records from {}",
        records.len(),
        path.as_ref().display()
    );
    Ok(records)
}

/// Read dashboard records from any CSV source with a header row.
pub fn read_student_records<R: Read>(source: R) -> Result<Vec<StudentRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let headers = reader
        .headers()
        .context("Failed to read CSV header row")?
        .clone();
    check_columns(&headers)?;

    let mut records = Vec::new();
    for (row_idx, result) in reader.deserialize::<StudentRecord>().enumerate() {
        // Row numbers are 1-based and exclude the header.
        let record = result.with_context(|| format!("Failed to parse row {}", row_idx + 1))?;
        records.push(record);
    }
    log::trace!("Parsed {} rows", records.len());

    Ok(records)
}

fn check_columns(headers: &StringRecord) -> Result<()> {
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|name| !headers.iter().any(|header| header == *name))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(anyhow!("Missing column(s): {}", missing.join(", ")))
    }
}
