//! Static page text and the data-derived overview block.
use maud::{html, Markup};

use crate::data_handling::{StudentRecord, Term};

/// Welcome text and the list of analyses on the page.
pub fn introduction() -> Markup {
    html! {
        p {
            "Welcome to the interactive dashboard of the university's admission, retention, and satisfaction trends over the years."
            br;
            "This dashboard allows you to analyze:"
        }
        ul {
            li { "Total applications, admissions, and enrollments per term" }
            li { "Retention rate trends over time" }
            li { "Student satisfaction scores over the years" }
            li { "Enrollment breakdown by department (Engineering, Business, Arts, Science)" }
            li { "Spring vs. Fall term comparison" }
            li { "Trends for departments, retention rates, and satisfaction levels" }
        }
    }
}

/// Record count, year span and terms present in the loaded data.
pub fn dataset_overview(records: &[StudentRecord]) -> Markup {
    let first_year = records.iter().map(|r| r.year).min();
    let last_year = records.iter().map(|r| r.year).max();
    let terms: Vec<&str> = Term::ALL
        .iter()
        .filter(|t| records.iter().any(|r| r.term == **t))
        .map(|t| t.as_str())
        .collect();

    html! {
        table class="overview" {
            tr { th { "Records" } td { (records.len()) } }
            tr {
                th { "Years" }
                td {
                    @match (first_year, last_year) {
                        (Some(first), Some(last)) if first == last => { (first) }
                        (Some(first), Some(last)) => { (first) " - " (last) }
                        _ => { "n/a" }
                    }
                }
            }
            tr {
                th { "Terms" }
                td {
                    @if terms.is_empty() { "n/a" } @else { (terms.join(", ")) }
                }
            }
        }
    }
}

/// Key findings and actionable insights.
pub fn key_findings() -> Markup {
    html! {
        h3 { "\u{1F50D} Key Findings:" }
        ul {
            li {
                strong { "Retention Trends" }
                ": The retention rate has increased steadily, reaching a high of 90% in 2024, indicating strong student satisfaction and commitment."
            }
            li {
                strong { "Satisfaction Trends" }
                ": Student satisfaction has increased year-over-year, with 2024 showing the highest satisfaction rate at 88%."
            }
            li {
                strong { "Department-wise Insights" }
                ": Engineering and Business departments have consistently higher enrollment numbers compared to Arts and Science."
            }
            li {
                strong { "Term Comparison" }
                ": Spring terms generally show slightly higher applications, admissions, and enrollments than Fall terms. Retention and satisfaction rates are also better in Spring, suggesting that students may be more committed to starting their studies in the Spring term."
            }
            li {
                strong { "Enrollment Distribution" }
                ": Engineering continues to have the largest share of enrollments, making up the bulk of the university's student body."
            }
        }
        h3 { strong { "Actionable Insights" } ":" }
        ol {
            li {
                strong { "Focus on Engineering & Business" }
                ": These departments show the highest growth in enrollments. The institution could consider expanding their programs, faculty, and resources to support the growing student population."
            }
            li {
                strong { "Spring Term Strategy" }
                ": The higher retention and satisfaction rates in the Spring term suggest that efforts should be made to replicate this success in the Fall. Offering early enrollment incentives, improved orientation, or additional resources could improve Fall term performance."
            }
            li {
                strong { "Monitor Arts and Science Enrollments" }
                ": The relatively lower enrollments in these departments could prompt a review of the programs offered. Increasing awareness, offering scholarships, or revising curriculums might be beneficial."
            }
            li {
                strong { "Retention Programs" }
                ": Given the increasing retention rates, the university should analyze the programs, mentorship opportunities, and student services that are contributing to these results and consider extending them across all departments."
            }
        }
        p { "By focusing on these insights, the university can improve its admissions, retention, and satisfaction further." }
    }
}

pub fn footer() -> Markup {
    html! { p { "End of dashboard." } }
}
