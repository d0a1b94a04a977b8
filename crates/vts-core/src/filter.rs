//! Candidate filtering by required skills.

use crate::types::{EmployeeRecord, SkillTag};

/// Selects the records that have at least one of the required skills.
///
/// Matching is a case-insensitive substring test on the skills field, and
/// several required skills combine with OR: one matching skill is enough.
/// With no required skills the input is returned unchanged. Input order is
/// preserved and an empty result is a valid outcome.
///
/// # Examples
///
/// ```
/// use vts_core::{EmployeeRecord, SkillTag, filter_candidates};
///
/// let records = vec![
///     EmployeeRecord::new(0, "A").with_skills("python sql"),
///     EmployeeRecord::new(1, "B").with_skills("java"),
/// ];
/// let hits = filter_candidates(&records, &[SkillTag::new("SQL")]);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].name, "A");
/// ```
pub fn filter_candidates(
    records: &[EmployeeRecord],
    required_skills: &[SkillTag],
) -> Vec<EmployeeRecord> {
    if required_skills.is_empty() {
        return records.to_vec();
    }

    let filtered: Vec<EmployeeRecord> = records
        .iter()
        .filter(|record| required_skills.iter().any(|skill| record.has_skill(skill)))
        .cloned()
        .collect();

    tracing::debug!(
        total = records.len(),
        matched = filtered.len(),
        skills = required_skills.len(),
        "Filtered candidates"
    );
    filtered
}
