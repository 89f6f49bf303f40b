//! Descriptive statistics for grouped dashboard views.
use serde::Serialize;
use statrs::statistics::Statistics;

/// Arithmetic mean of `values`, `NaN` when empty.
pub fn mean(values: &[f64]) -> f64 {
    values.iter().mean()
}

/// Quantile using linear interpolation between closest ranks.
///
/// This is the default method of both pandas (`Series.quantile`) and the
/// Plotly box trace, so summaries agree with what the box plot draws.
///
/// # Arguments
///
/// * `sorted` - Values in ascending order.
/// * `q` - Quantile in `[0, 1]`.
///
/// # Returns
///
/// `None` when `sorted` is empty.
pub fn quantile_linear(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    Some(sorted[lo] + (sorted[hi] - sorted[lo]) * frac)
}

/// Min / quartiles / max of a sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FiveNumberSummary {
    pub count: usize,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }
}

/// Summarize a sample, or `None` if it is empty.
pub fn five_number_summary(values: &[f64]) -> Option<FiveNumberSummary> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Some(FiveNumberSummary {
        count: sorted.len(),
        min: Statistics::min(sorted.iter()),
        q1: quantile_linear(&sorted, 0.25)?,
        median: quantile_linear(&sorted, 0.5)?,
        q3: quantile_linear(&sorted, 0.75)?,
        max: Statistics::max(sorted.iter()),
    })
}
