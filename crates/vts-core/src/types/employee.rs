//! Employee record and identifier types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::SkillTag;

/// Placeholder used for missing text fields.
pub const UNKNOWN: &str = "Unknown";

/// Placeholder used for a missing preferences field.
pub const NO_PREFERENCES: &str = "None";

/// Identifier of an employee within one analysis session.
///
/// The value is the row's original 0-based position in the uploaded table,
/// so identifiers may have gaps once duplicate rows are dropped. They are
/// not stable across re-uploads of modified data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(usize);

impl EmployeeId {
    /// Creates an identifier from a row position.
    ///
    /// # Examples
    ///
    /// ```
    /// use vts_core::EmployeeId;
    ///
    /// let id = EmployeeId::new(3);
    /// assert_eq!(id.position(), 3);
    /// ```
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Returns the original row position.
    pub fn position(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for EmployeeId {
    fn from(position: usize) -> Self {
        Self(position)
    }
}

/// A cleaned employee row.
///
/// Field names serialize to the dashboard's CSV column names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Original row position
    #[serde(rename = "Employee ID")]
    pub id: EmployeeId,

    /// Display name
    #[serde(rename = "Name")]
    pub name: String,

    /// Years of experience, never negative
    #[serde(rename = "Experience")]
    pub experience: f64,

    /// Job role
    #[serde(rename = "Job Role")]
    pub job_role: String,

    /// Gender
    #[serde(rename = "Gender")]
    pub gender: String,

    /// Space-separated skill tags
    #[serde(rename = "Skills")]
    pub skills: String,

    /// Phone number (carried, unused by team formation)
    #[serde(rename = "Phone Number")]
    pub phone_number: String,

    /// Email address (carried, unused by team formation)
    #[serde(rename = "Email")]
    pub email: String,

    /// Employment status (carried, unused by team formation)
    #[serde(rename = "Employment Status")]
    pub employment_status: String,

    /// Free-text preferences (carried, unused by team formation)
    #[serde(rename = "Preferences")]
    pub preferences: String,

    /// Performance rating, when the dataset has one
    #[serde(rename = "Performance Rating")]
    pub performance_rating: Option<u32>,
}

impl EmployeeRecord {
    /// Creates a record with every optional field at its default.
    pub fn new<S: Into<String>>(id: impl Into<EmployeeId>, name: S) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            experience: 0.0,
            job_role: UNKNOWN.to_string(),
            gender: UNKNOWN.to_string(),
            skills: String::new(),
            phone_number: UNKNOWN.to_string(),
            email: UNKNOWN.to_string(),
            employment_status: UNKNOWN.to_string(),
            preferences: NO_PREFERENCES.to_string(),
            performance_rating: None,
        }
    }

    /// Sets the skills field.
    pub fn with_skills<S: Into<String>>(mut self, skills: S) -> Self {
        self.skills = skills.into();
        self
    }

    /// Sets years of experience. Negative or non-finite values become 0.
    pub fn with_experience(mut self, years: f64) -> Self {
        self.experience = if years.is_finite() && years >= 0.0 {
            years
        } else {
            0.0
        };
        self
    }

    /// Sets the job role.
    pub fn with_job_role<S: Into<String>>(mut self, role: S) -> Self {
        self.job_role = role.into();
        self
    }

    /// Sets the gender.
    pub fn with_gender<S: Into<String>>(mut self, gender: S) -> Self {
        self.gender = gender.into();
        self
    }

    /// Sets the performance rating.
    pub fn with_performance_rating(mut self, rating: u32) -> Self {
        self.performance_rating = Some(rating);
        self
    }

    /// Returns `true` if the skills field contains `tag`, ignoring case.
    ///
    /// This is a substring test: `"Java"` matches a record listing
    /// `"JavaScript"`.
    pub fn has_skill(&self, tag: &SkillTag) -> bool {
        tag.matches(&self.skills)
    }

    /// Iterates over the whitespace-separated skill tokens.
    pub fn skill_tokens(&self) -> impl Iterator<Item = &str> {
        self.skills.split_whitespace()
    }
}
