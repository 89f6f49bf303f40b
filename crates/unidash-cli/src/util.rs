use anyhow::Result;
use std::path::PathBuf;

pub fn validate_csv_file(path: &str) -> Result<()> {
    let pb = PathBuf::from(path);

    let ext = pb
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_lowercase());
    match ext.as_deref() {
        Some("csv") => {}
        _ => anyhow::bail!("Data file must have a .csv extension: {}", path),
    }

    if !pb.exists() {
        anyhow::bail!("Data file does not exist: {}", path);
    }

    Ok(())
}
