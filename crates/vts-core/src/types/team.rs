//! Team, warning and allocation result types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{EmployeeId, EmployeeRecord, SkillTag};

/// A team produced by one allocation run.
///
/// Members keep the order in which they were assigned. `target_size` is the
/// rotation threshold the allocator used; a team can end up larger or
/// smaller than it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    index: usize,
    target_size: usize,
    members: Vec<EmployeeRecord>,
}

impl Team {
    /// Creates an empty team at position `index` (0-based).
    pub fn new(index: usize, target_size: usize) -> Self {
        Self {
            index,
            target_size,
            members: Vec::new(),
        }
    }

    /// Appends a member.
    pub fn push(&mut self, member: EmployeeRecord) {
        self.members.push(member);
    }

    /// Returns the 0-based team index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the 1-based team number shown to users.
    pub fn number(&self) -> usize {
        self.index + 1
    }

    /// Returns the minimum size the allocator aimed for.
    pub fn target_size(&self) -> usize {
        self.target_size
    }

    /// Returns the members in assignment order.
    pub fn members(&self) -> &[EmployeeRecord] {
        &self.members
    }

    /// Returns the member count.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if nobody was assigned.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Returns `true` once the team holds at least `target_size` members.
    pub fn is_full(&self) -> bool {
        self.members.len() >= self.target_size
    }

    /// Returns the tabular view of this team.
    pub fn rows(&self) -> Vec<TeamRow> {
        self.members.iter().map(TeamRow::from).collect()
    }
}

/// One row of a team view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamRow {
    /// Employee identifier
    #[serde(rename = "Employee ID")]
    pub employee_id: EmployeeId,
    /// Name
    #[serde(rename = "Name")]
    pub name: String,
    /// Years of experience
    #[serde(rename = "Experience")]
    pub experience: f64,
    /// Job role
    #[serde(rename = "Job Role")]
    pub job_role: String,
    /// Skills field
    #[serde(rename = "Skills")]
    pub skills: String,
}

impl From<&EmployeeRecord> for TeamRow {
    fn from(record: &EmployeeRecord) -> Self {
        Self {
            employee_id: record.id,
            name: record.name.clone(),
            experience: record.experience,
            job_role: record.job_role.clone(),
            skills: record.skills.clone(),
        }
    }
}

/// Notice that no candidate has a required skill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillWarning {
    /// Skill with no candidates
    pub skill: SkillTag,
}

impl SkillWarning {
    /// Creates a warning for `skill`.
    pub fn new(skill: SkillTag) -> Self {
        Self { skill }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SkillWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "No candidates with the skill {} available in the dataset.",
            self.skill
        )
    }
}

/// Teams and warnings from one allocation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// One entry per requested team, possibly empty
    pub teams: Vec<Team>,
    /// One entry per required skill with an empty candidate pool
    pub warnings: Vec<SkillWarning>,
}

impl Allocation {
    /// Total members across all teams, counting duplicated candidates.
    pub fn total_members(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Returns `true` if any warnings were raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
