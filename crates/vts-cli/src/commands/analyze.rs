//! `vts analyze`: workforce and performance summaries.

use serde::Serialize;
use std::path::Path;
use vts_analysis::{
    CountEntry, CrossTab, EXPERIENCE_BINS, FiveNumberSummary, HistogramBin, RatingAverage, Share,
    TOP_SKILLS, average_rating_by_role, experience_by_rating, experience_histogram,
    gender_by_job_role, gender_distribution, gender_vs_performance, job_role_distribution,
    job_roles_vs_performance, rating_distribution, top_skills,
};
use vts_core::{EmployeeRecord, load_employees};

use crate::Result;
use crate::cli::{AnalysisView, OutputFormat};
use crate::render::{TextTable, number, to_json};

/// Computed figures for one view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Report {
    /// Label counts
    Counts(Vec<CountEntry>),
    /// Label counts with percentages
    Shares(Vec<Share>),
    /// Two-way counts
    CrossTab(CrossTab),
    /// Histogram bins
    Histogram(Vec<HistogramBin>),
    /// Per-role average ratings
    Averages(Vec<RatingAverage>),
    /// Per-rating experience summaries
    Summaries(Vec<FiveNumberSummary>),
}

/// Loads `data` and renders `view`.
pub fn run(data: &Path, view: AnalysisView, format: OutputFormat) -> Result<String> {
    let records = load_employees(data)?;
    let report = compute(&records, view);
    tracing::debug!(?view, employees = records.len(), "Computed analysis");
    render(&report, first_column(view), format)
}

/// Computes the figures behind `view`.
pub fn compute(records: &[EmployeeRecord], view: AnalysisView) -> Report {
    match view {
        AnalysisView::JobRoles => Report::Counts(job_role_distribution(records)),
        AnalysisView::Gender => Report::Shares(gender_distribution(records)),
        AnalysisView::GenderByRole => Report::CrossTab(gender_by_job_role(records)),
        AnalysisView::Experience => {
            Report::Histogram(experience_histogram(records, EXPERIENCE_BINS))
        }
        AnalysisView::TopSkills => Report::Counts(top_skills(records, TOP_SKILLS)),
        AnalysisView::Ratings => Report::Counts(rating_distribution(records)),
        AnalysisView::RatingByRole => Report::Averages(average_rating_by_role(records)),
        AnalysisView::RolesVsRating => Report::CrossTab(job_roles_vs_performance(records)),
        AnalysisView::GenderVsRating => Report::CrossTab(gender_vs_performance(records)),
        AnalysisView::ExperienceVsRating => Report::Summaries(experience_by_rating(records)),
    }
}

fn first_column(view: AnalysisView) -> &'static str {
    match view {
        AnalysisView::JobRoles | AnalysisView::GenderByRole | AnalysisView::RolesVsRating => {
            "Job Role"
        }
        AnalysisView::Gender | AnalysisView::GenderVsRating => "Gender",
        AnalysisView::TopSkills => "Skill",
        AnalysisView::Ratings => "Performance Rating",
        AnalysisView::Experience => "Experience",
        AnalysisView::RatingByRole => "Job Role",
        AnalysisView::ExperienceVsRating => "Performance Rating",
    }
}

/// Renders a report. `label` names the first column in table and CSV output.
pub fn render(report: &Report, label: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(report),
        OutputFormat::Table => {
            let (headers, rows) = cells(report, label);
            if rows.is_empty() {
                return Ok("No data.\n".to_string());
            }
            let mut table = TextTable::new(headers);
            for row in rows {
                table.push_row(row);
            }
            Ok(table.render())
        }
        OutputFormat::Csv => {
            let (headers, rows) = cells(report, label);
            let mut writer = csv::Writer::from_writer(Vec::new());
            writer.write_record(&headers)?;
            for row in rows {
                writer.write_record(&row)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| crate::Error::io_with_path(e.into_error(), "<csv buffer>"))?;
            Ok(String::from_utf8_lossy(&bytes).into_owned())
        }
    }
}

fn cells(report: &Report, label: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let header = |names: &[&str]| names.iter().map(|s| s.to_string()).collect::<Vec<_>>();
    match report {
        Report::Counts(entries) => (
            header(&[label, "Count"]),
            entries
                .iter()
                .map(|e| vec![e.label.clone(), e.count.to_string()])
                .collect(),
        ),
        Report::Shares(shares) => (
            header(&[label, "Count", "Percent"]),
            shares
                .iter()
                .map(|s| vec![s.label.clone(), s.count.to_string(), format!("{:.1}%", s.percent)])
                .collect(),
        ),
        Report::CrossTab(tab) => {
            let mut headers = vec![label.to_string()];
            headers.extend(tab.columns.iter().cloned());
            let rows = tab
                .rows
                .iter()
                .zip(&tab.cells)
                .map(|(row, counts)| {
                    let mut line = vec![row.clone()];
                    line.extend(counts.iter().map(usize::to_string));
                    line
                })
                .collect();
            (headers, rows)
        }
        Report::Histogram(bins) => (
            header(&["From", "To", "Count"]),
            bins.iter()
                .map(|b| vec![number(b.lower), number(b.upper), b.count.to_string()])
                .collect(),
        ),
        Report::Averages(averages) => (
            header(&[label, "Average Rating", "Employees"]),
            averages
                .iter()
                .map(|a| vec![a.job_role.clone(), number(a.average), a.employees.to_string()])
                .collect(),
        ),
        Report::Summaries(summaries) => (
            header(&[label, "Count", "Min", "Q1", "Median", "Q3", "Max"]),
            summaries
                .iter()
                .map(|s| {
                    vec![
                        s.rating.to_string(),
                        s.count.to_string(),
                        number(s.min),
                        number(s.q1),
                        number(s.median),
                        number(s.q3),
                        number(s.max),
                    ]
                })
                .collect(),
        ),
    }
}
