//! Category distributions over employee records.
//!
//! Provides:
//! - Value counts (job role, gender, skills) ordered by frequency
//! - Percentage shares
//! - Job role × gender cross-tabulation
//! - Equal-width experience histogram

use std::collections::{HashMap, HashSet};

use vts_core::EmployeeRecord;

use crate::types::{CountEntry, CrossTab, HistogramBin, Share};

/// Default number of experience histogram bins.
pub const EXPERIENCE_BINS: usize = 10;

/// Default number of skills returned by [`top_skills`].
pub const TOP_SKILLS: usize = 10;

/// Counts labels, most frequent first. Ties are ordered by label.
pub fn value_counts<'a, I>(labels: I) -> Vec<CountEntry>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for label in labels {
        *counts.entry(label).or_default() += 1;
    }

    let mut entries: Vec<CountEntry> = counts
        .into_iter()
        .map(|(label, count)| CountEntry {
            label: label.to_string(),
            count,
        })
        .collect();
    entries.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    entries
}

/// Converts counts into percentage shares of their sum.
pub fn shares(counts: &[CountEntry]) -> Vec<Share> {
    let total: usize = counts.iter().map(|c| c.count).sum();
    counts
        .iter()
        .map(|c| Share {
            label: c.label.clone(),
            count: c.count,
            percent: if total == 0 {
                0.0
            } else {
                c.count as f64 * 100.0 / total as f64
            },
        })
        .collect()
}

/// Employees per job role.
pub fn job_role_distribution(records: &[EmployeeRecord]) -> Vec<CountEntry> {
    value_counts(records.iter().map(|r| r.job_role.as_str()))
}

/// Employees per gender, with percentage shares.
pub fn gender_distribution(records: &[EmployeeRecord]) -> Vec<Share> {
    shares(&value_counts(records.iter().map(|r| r.gender.as_str())))
}

/// Employees per (job role, gender).
///
/// Rows follow [`job_role_distribution`] order, columns follow gender
/// frequency order.
pub fn gender_by_job_role(records: &[EmployeeRecord]) -> CrossTab {
    let rows = labels(&job_role_distribution(records));
    let columns = labels(&value_counts(records.iter().map(|r| r.gender.as_str())));

    let mut tab = CrossTab::new(rows, columns);
    for record in records {
        tab.increment(&record.job_role, &record.gender);
    }
    tab
}

/// The `limit` most common skill tokens.
///
/// Each employee counts once per distinct token, so `"sql sql"` adds one to
/// `sql`. Tokens are compared exactly (case-sensitive).
pub fn top_skills(records: &[EmployeeRecord], limit: usize) -> Vec<CountEntry> {
    let tokens = records.iter().flat_map(|record| {
        let unique: HashSet<&str> = record.skill_tokens().collect();
        unique
    });
    let mut counts = value_counts(tokens);
    counts.truncate(limit);
    counts
}

/// Equal-width histogram of years of experience.
///
/// Bins span `[min, max]` of the data; when every value is equal the range
/// is widened to `value ± 0.5`. Returns no bins for no records or `bins == 0`.
pub fn experience_histogram(records: &[EmployeeRecord], bins: usize) -> Vec<HistogramBin> {
    let values: Vec<f64> = records.iter().map(|r| r.experience).collect();
    histogram(&values, bins)
}

pub(crate) fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let (lo, hi) = if min == max {
        (min - 0.5, max + 0.5)
    } else {
        (min, max)
    };
    let width = (hi - lo) / bins as f64;

    let mut result: Vec<HistogramBin> = (0..bins)
        .map(|i| HistogramBin {
            lower: lo + i as f64 * width,
            upper: if i + 1 == bins {
                hi
            } else {
                lo + (i + 1) as f64 * width
            },
            count: 0,
        })
        .collect();

    for value in values {
        let index = (((value - lo) / width).floor() as usize).min(bins - 1);
        if let Some(bin) = result.get_mut(index) {
            bin.count += 1;
        }
    }
    result
}

fn labels(counts: &[CountEntry]) -> Vec<String> {
    counts.iter().map(|c| c.label.clone()).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn staff() -> Vec<EmployeeRecord> {
        vec![
            EmployeeRecord::new(0, "A")
                .with_job_role("Developer")
                .with_gender("Female")
                .with_skills("rust sql")
                .with_experience(1.0),
            EmployeeRecord::new(1, "B")
                .with_job_role("Analyst")
                .with_gender("Male")
                .with_skills("sql excel")
                .with_experience(4.0),
            EmployeeRecord::new(2, "C")
                .with_job_role("Developer")
                .with_gender("Male")
                .with_skills("rust rust go")
                .with_experience(11.0),
            EmployeeRecord::new(3, "D")
                .with_job_role("Developer")
                .with_gender("Female")
                .with_skills("")
                .with_experience(6.0),
        ]
    }

    #[test]
    fn test_value_counts_orders_by_count_then_label() {
        let counts = value_counts(["b", "a", "b", "c", "a", "b"]);
        let pairs: Vec<(&str, usize)> =
            counts.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("b", 3), ("a", 2), ("c", 1)]);
    }

    #[test]
    fn test_job_role_distribution() {
        let counts = job_role_distribution(&staff());
        assert_eq!(counts[0].label, "Developer");
        assert_eq!(counts[0].count, 3);
        assert_eq!(counts[1].label, "Analyst");
    }

    #[test]
    fn test_gender_distribution_percentages() {
        let shares = gender_distribution(&staff());
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].label, "Female");
        assert!((shares[0].percent - 50.0).abs() < 1e-9);
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_of_nothing() {
        assert!(shares(&[]).is_empty());
        let zero = shares(&[CountEntry {
            label: "x".to_string(),
            count: 0,
        }]);
        assert_eq!(zero[0].percent, 0.0);
    }

    #[test]
    fn test_gender_by_job_role() {
        let tab = gender_by_job_role(&staff());
        assert_eq!(tab.rows, vec!["Developer", "Analyst"]);
        assert_eq!(tab.get("Developer", "Female"), 2);
        assert_eq!(tab.get("Developer", "Male"), 1);
        assert_eq!(tab.get("Analyst", "Male"), 1);
        assert_eq!(tab.total(), 4);
    }

    #[test]
    fn test_top_skills_counts_each_employee_once() {
        let top = top_skills(&staff(), TOP_SKILLS);
        let pairs: Vec<(&str, usize)> = top.iter().map(|c| (c.label.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("rust", 2), ("sql", 2), ("excel", 1), ("go", 1)]);
    }

    #[test]
    fn test_top_skills_limit() {
        assert_eq!(top_skills(&staff(), 1).len(), 1);
        assert!(top_skills(&staff(), 0).is_empty());
    }

    #[test]
    fn test_experience_histogram_edges() {
        let bins = experience_histogram(&staff(), EXPERIENCE_BINS);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0].lower, 1.0);
        assert_eq!(bins[9].upper, 11.0);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[3].count, 1);
        assert_eq!(bins[5].count, 1);
        // the maximum lands in the closed last bin
        assert_eq!(bins[9].count, 1);
    }

    #[test]
    fn test_histogram_degenerate_range() {
        let bins = histogram(&[3.0, 3.0], 2);
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].lower, 2.5);
        assert_eq!(bins[1].upper, 3.5);
        assert_eq!(bins[1].count, 2);
    }

    #[test]
    fn test_histogram_empty() {
        assert!(histogram(&[], 10).is_empty());
        assert!(histogram(&[1.0], 0).is_empty());
    }

    proptest! {
        #[test]
        fn test_histogram_counts_every_value(
            values in prop::collection::vec(0.0f64..40.0, 1..50),
            bins in 1usize..15,
        ) {
            let result = histogram(&values, bins);
            prop_assert_eq!(result.len(), bins);
            prop_assert_eq!(result.iter().map(|b| b.count).sum::<usize>(), values.len());
        }
    }
}
