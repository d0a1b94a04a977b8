//! Performance rating analysis.
//!
//! Records without a performance rating are skipped by every function here.
//!
//! Ratings are whole numbers. The cleaner treats a fractional cell such as
//! `4.5` as missing (see [`vts_core::cleaner::parse_performance_rating`]), so
//! such employees do not appear in any rating view; there is no separate
//! `4.5` category.

use std::collections::BTreeMap;

use vts_core::EmployeeRecord;

use crate::distribution::{job_role_distribution, value_counts};
use crate::types::{CountEntry, CrossTab, FiveNumberSummary, RatingAverage};

/// Number of job roles compared in [`job_roles_vs_performance`].
pub const TOP_JOB_ROLES: usize = 5;

fn rated(records: &[EmployeeRecord]) -> impl Iterator<Item = (&EmployeeRecord, u32)> {
    records
        .iter()
        .filter_map(|r| r.performance_rating.map(|rating| (r, rating)))
}

fn rating_labels(records: &[EmployeeRecord]) -> Vec<String> {
    let mut ratings: Vec<u32> = rated(records).map(|(_, rating)| rating).collect();
    ratings.sort_unstable();
    ratings.dedup();
    ratings.iter().map(u32::to_string).collect()
}

/// Employees per performance rating, in ascending rating order.
pub fn rating_distribution(records: &[EmployeeRecord]) -> Vec<CountEntry> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for (_, rating) in rated(records) {
        *counts.entry(rating).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(rating, count)| CountEntry {
            label: rating.to_string(),
            count,
        })
        .collect()
}

/// Mean rating per job role, highest first. Ties are ordered by role.
pub fn average_rating_by_role(records: &[EmployeeRecord]) -> Vec<RatingAverage> {
    let mut sums: BTreeMap<&str, (u64, usize)> = BTreeMap::new();
    for (record, rating) in rated(records) {
        let entry = sums.entry(record.job_role.as_str()).or_default();
        entry.0 += u64::from(rating);
        entry.1 += 1;
    }

    let mut averages: Vec<RatingAverage> = sums
        .into_iter()
        .map(|(role, (sum, n))| RatingAverage {
            job_role: role.to_string(),
            average: sum as f64 / n as f64,
            employees: n,
        })
        .collect();
    averages.sort_by(|a, b| {
        b.average
            .total_cmp(&a.average)
            .then_with(|| a.job_role.cmp(&b.job_role))
    });
    averages
}

/// Rating counts for the [`TOP_JOB_ROLES`] most common job roles.
///
/// The most common roles are chosen over all records, rated or not.
pub fn job_roles_vs_performance(records: &[EmployeeRecord]) -> CrossTab {
    let mut roles = job_role_distribution(records);
    roles.truncate(TOP_JOB_ROLES);
    let rows = roles.into_iter().map(|c| c.label).collect();

    let mut tab = CrossTab::new(rows, rating_labels(records));
    for (record, rating) in rated(records) {
        tab.increment(&record.job_role, &rating.to_string());
    }
    tab
}

/// Rating counts per gender.
pub fn gender_vs_performance(records: &[EmployeeRecord]) -> CrossTab {
    let rows = value_counts(rated(records).map(|(r, _)| r.gender.as_str()))
        .into_iter()
        .map(|c| c.label)
        .collect();

    let mut tab = CrossTab::new(rows, rating_labels(records));
    for (record, rating) in rated(records) {
        tab.increment(&record.gender, &rating.to_string());
    }
    tab
}

/// Experience five-number summary per rating, in ascending rating order.
pub fn experience_by_rating(records: &[EmployeeRecord]) -> Vec<FiveNumberSummary> {
    let mut groups: BTreeMap<u32, Vec<f64>> = BTreeMap::new();
    for (record, rating) in rated(records) {
        groups.entry(rating).or_default().push(record.experience);
    }

    groups
        .into_iter()
        .filter_map(|(rating, mut values)| {
            values.sort_by(f64::total_cmp);
            Some(FiveNumberSummary {
                rating,
                count: values.len(),
                min: *values.first()?,
                q1: quantile(&values, 0.25)?,
                median: quantile(&values, 0.5)?,
                q3: quantile(&values, 0.75)?,
                max: *values.last()?,
            })
        })
        .collect()
}

/// Linear-interpolation quantile of sorted values.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    let a = *sorted.get(lower)?;
    let b = *sorted.get(upper)?;
    Some(a + (b - a) * (pos - lower as f64))
}
