use plotly::common::{DashType, Line, Marker, Mode, Title};
use plotly::layout::{Axis, BarMode, Legend};
use plotly::{Bar, BoxPlot, Layout, Pie, Plot, Scatter};

use crate::data_handling::{Department, Term};
use crate::views::{
    DepartmentShare, DepartmentTermTotals, TermDistribution, TermMeans, TermObservation,
    TermTotals,
};

/// Largest marker diameter (px) for size-mapped scatter plots.
const SIZE_MAX: f64 = 20.0;

/// Terms that actually occur in `terms`, in canonical order.
fn present_terms<I: IntoIterator<Item = Term>>(terms: I) -> Vec<Term> {
    let seen: Vec<Term> = terms.into_iter().collect();
    Term::ALL
        .iter()
        .copied()
        .filter(|t| seen.contains(t))
        .collect()
}

/// Marker diameters proportional to the square root of the value, so the
/// marker area tracks the value. The largest value maps to `SIZE_MAX`.
fn marker_sizes(values: &[f64]) -> Vec<usize> {
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    values
        .iter()
        .map(|&v| {
            if max <= 0.0 || v <= 0.0 {
                1
            } else {
                ((SIZE_MAX * (v / max).sqrt()).round() as usize).max(1)
            }
        })
        .collect()
}

fn hover_labels(points: &[(i32, Term)]) -> Vec<String> {
    points
        .iter()
        .map(|(year, term)| format!("Year: {}<br>Term: {}", year, term))
        .collect()
}

/// Chart 1: grouped bars of applications, admissions and enrollments per year,
/// one series per metric and term.
pub fn plot_term_totals(rows: &[TermTotals]) -> Plot {
    let metrics: [(&str, fn(&TermTotals) -> u64); 3] = [
        ("Applications", |r| r.applications),
        ("Admitted", |r| r.admitted),
        ("Enrolled", |r| r.enrolled),
    ];

    let mut plot = Plot::new();
    for term in present_terms(rows.iter().map(|r| r.term)) {
        let term_rows: Vec<&TermTotals> = rows.iter().filter(|r| r.term == term).collect();
        let years: Vec<i32> = term_rows.iter().map(|r| r.year).collect();
        for (metric, value) in metrics {
            let y: Vec<u64> = term_rows.iter().map(|r| value(*r)).collect();
            plot.add_trace(
                Bar::new(years.clone(), y)
                    .name(&format!("{} ({})", metric, term))
                    .legend_group(term.as_str()),
            );
        }
    }

    plot.set_layout(
        Layout::new()
            .title("Total Applications, Admissions, and Enrollments Over Time")
            .bar_mode(BarMode::Group)
            .legend(Legend::new().title(Title::from("Metric")))
            .x_axis(Axis::new().title("Year"))
            .y_axis(Axis::new().title("Count")),
    );

    plot
}

/// Chart 2: retention rate lines per term, in source row order.
pub fn plot_retention_trend(points: &[TermObservation]) -> Plot {
    let mut plot = Plot::new();
    for term in present_terms(points.iter().map(|p| p.term)) {
        let (x, y): (Vec<i32>, Vec<f64>) = points
            .iter()
            .filter(|p| p.term == term)
            .map(|p| (p.year, p.value))
            .unzip();
        plot.add_trace(Scatter::new(x, y).mode(Mode::Lines).name(term.as_str()));
    }

    plot.set_layout(
        Layout::new()
            .title("Retention Rate Trends Over Time")
            .legend(Legend::new().title(Title::from("Term")))
            .x_axis(Axis::new().title("Year"))
            .y_axis(Axis::new().title("Retention Rate (%)")),
    );

    plot
}

/// Chart 3: satisfaction scatter sized by satisfaction, colored by term.
pub fn plot_satisfaction(points: &[TermObservation]) -> Plot {
    let all_values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let max = all_values.iter().copied().fold(0.0_f64, f64::max);

    let mut plot = Plot::new();
    for term in present_terms(points.iter().map(|p| p.term)) {
        let term_points: Vec<&TermObservation> = points.iter().filter(|p| p.term == term).collect();
        let x: Vec<i32> = term_points.iter().map(|p| p.year).collect();
        let y: Vec<f64> = term_points.iter().map(|p| p.value).collect();
        let keys: Vec<(i32, Term)> = term_points.iter().map(|p| (p.year, p.term)).collect();

        // Scale against the global max so sizes are comparable across terms.
        let mut scaled = y.clone();
        scaled.push(max);
        let mut sizes = marker_sizes(&scaled);
        sizes.pop();

        plot.add_trace(
            Scatter::new(x, y)
                .mode(Mode::Markers)
                .name(term.as_str())
                .marker(Marker::new().size_array(sizes))
                .hover_text_array(hover_labels(&keys)),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("Student Satisfaction Over the Years")
            .legend(Legend::new().title(Title::from("Term")))
            .x_axis(Axis::new().title("Year"))
            .y_axis(Axis::new().title("Satisfaction (%)")),
    );

    plot
}

/// Chart 4: department enrollments stacked per year, one series per
/// department and term.
pub fn plot_department_breakdown(rows: &[DepartmentTermTotals]) -> Plot {
    let mut plot = Plot::new();
    for term in present_terms(rows.iter().map(|r| r.term)) {
        let term_rows: Vec<&DepartmentTermTotals> = rows.iter().filter(|r| r.term == term).collect();
        let years: Vec<i32> = term_rows.iter().map(|r| r.year).collect();
        for department in Department::ALL {
            let y: Vec<u64> = term_rows.iter().map(|r| r.get(department)).collect();
            plot.add_trace(
                Bar::new(years.clone(), y)
                    .name(&format!("{} ({})", department.column(), term))
                    .legend_group(term.as_str()),
            );
        }
    }

    plot.set_layout(
        Layout::new()
            .title("Enrollment Breakdown by Department")
            .bar_mode(BarMode::Stack)
            .legend(Legend::new().title(Title::from("Department")))
            .x_axis(Axis::new().title("Year"))
            .y_axis(Axis::new().title("Enrolled Students")),
    );

    plot
}

/// Chart 5: mean retention and satisfaction lines, one per metric and term.
pub fn plot_term_comparison(rows: &[TermMeans]) -> Plot {
    let mut plot = Plot::new();
    for term in present_terms(rows.iter().map(|r| r.term)) {
        let term_rows: Vec<&TermMeans> = rows.iter().filter(|r| r.term == term).collect();
        let years: Vec<i32> = term_rows.iter().map(|r| r.year).collect();
        let retention: Vec<f64> = term_rows.iter().map(|r| r.retention_rate).collect();
        let satisfaction: Vec<f64> = term_rows.iter().map(|r| r.satisfaction).collect();

        plot.add_trace(
            Scatter::new(years.clone(), retention)
                .mode(Mode::Lines)
                .name(&format!("Retention Rate (%) ({})", term))
                .legend_group(term.as_str()),
        );
        plot.add_trace(
            Scatter::new(years, satisfaction)
                .mode(Mode::Lines)
                .name(&format!("Student Satisfaction (%) ({})", term))
                .legend_group(term.as_str())
                .line(Line::new().dash(DashType::Dash)),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("Spring vs. Fall Term Comparison")
            .legend(Legend::new().title(Title::from("Metric")))
            .x_axis(Axis::new().title("Year"))
            .y_axis(Axis::new().title("Percentage")),
    );

    plot
}

/// Chart 6: bubble scatter of mean retention against mean satisfaction,
/// bubble size following retention.
pub fn plot_retention_vs_satisfaction(rows: &[TermMeans]) -> Plot {
    let max = rows
        .iter()
        .map(|r| r.retention_rate)
        .fold(0.0_f64, f64::max);

    let mut plot = Plot::new();
    for term in present_terms(rows.iter().map(|r| r.term)) {
        let term_rows: Vec<&TermMeans> = rows.iter().filter(|r| r.term == term).collect();
        let x: Vec<f64> = term_rows.iter().map(|r| r.retention_rate).collect();
        let y: Vec<f64> = term_rows.iter().map(|r| r.satisfaction).collect();
        let keys: Vec<(i32, Term)> = term_rows.iter().map(|r| (r.year, r.term)).collect();

        let mut scaled = x.clone();
        scaled.push(max);
        let mut sizes = marker_sizes(&scaled);
        sizes.pop();

        plot.add_trace(
            Scatter::new(x, y)
                .mode(Mode::Markers)
                .name(term.as_str())
                .marker(Marker::new().size_array(sizes))
                .hover_text_array(hover_labels(&keys)),
        );
    }

    plot.set_layout(
        Layout::new()
            .title("Department-Wise Retention & Satisfaction Comparison")
            .legend(Legend::new().title(Title::from("Term")))
            .x_axis(Axis::new().title("Retention Rate (%)"))
            .y_axis(Axis::new().title("Student Satisfaction (%)")),
    );

    plot
}

/// Chart 7: retention rate box plot per term.
pub fn plot_retention_distribution(groups: &[TermDistribution]) -> Plot {
    let mut plot = Plot::new();
    for group in groups {
        let x = vec![group.term.as_str().to_string(); group.values.len()];
        plot.add_trace(BoxPlot::new_xy(x, group.values.clone()).name(group.term.as_str()));
    }

    plot.set_layout(
        Layout::new()
            .title("Retention Rate Distribution by Term")
            .legend(Legend::new().title(Title::from("Term")))
            .x_axis(Axis::new().title("Term"))
            .y_axis(Axis::new().title("Retention Rate (%)")),
    );

    plot
}

/// Chart 8: share of total enrollment per department.
pub fn plot_department_shares(shares: &[DepartmentShare]) -> Plot {
    let labels: Vec<String> = shares
        .iter()
        .map(|s| s.department.column().to_string())
        .collect();
    let values: Vec<u64> = shares.iter().map(|s| s.enrolled).collect();

    let mut plot = Plot::new();
    plot.add_trace(Pie::new(values).labels(labels));
    plot.set_layout(Layout::new().title("Department Enrollment Proportions"));

    plot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_sizes_scale_with_sqrt() {
        let sizes = marker_sizes(&[100.0, 25.0, 0.0]);
        assert_eq!(sizes, vec![20, 10, 1]);
    }

    #[test]
    fn present_terms_keeps_canonical_order() {
        let terms = present_terms(vec![Term::Spring, Term::Fall, Term::Spring]);
        assert_eq!(terms, vec![Term::Fall, Term::Spring]);
        assert!(present_terms(Vec::new()).is_empty());
    }
}
