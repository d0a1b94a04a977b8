//! Validated team formation parameters.

use serde::Serialize;

use crate::types::{SkillTag, parse_skill_list};
use crate::{Error, Result};

/// Team formation parameters, validated at construction.
///
/// The allocator relies on `num_teams >= 1` and `team_size >= 1`; building a
/// `TeamParams` is the only way to hand it those values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamParams {
    num_teams: usize,
    team_size: usize,
    required_skills: Vec<SkillTag>,
    seed: Option<u64>,
}

fn at_least_one(value: i64, what: &str) -> Result<usize> {
    usize::try_from(value)
        .ok()
        .filter(|v| *v >= 1)
        .ok_or_else(|| Error::config(format!("{what} must be at least 1, got {value}")))
}

impl TeamParams {
    /// Creates parameters, rejecting zero or negative counts.
    ///
    /// Blank skill tags are dropped; a blank tag would match every record.
    ///
    /// # Examples
    ///
    /// ```
    /// use vts_core::{SkillTag, TeamParams};
    ///
    /// let params = TeamParams::new(2, 3, vec![SkillTag::new("sql")]).unwrap();
    /// assert_eq!(params.num_teams(), 2);
    ///
    /// assert!(TeamParams::new(0, 3, vec![]).is_err());
    /// assert!(TeamParams::new(2, -1, vec![]).is_err());
    /// ```
    pub fn new(num_teams: i64, team_size: i64, required_skills: Vec<SkillTag>) -> Result<Self> {
        let num_teams = at_least_one(num_teams, "number of teams")?;
        let team_size = at_least_one(team_size, "team size")?;
        let required_skills = required_skills
            .into_iter()
            .filter(|skill| !skill.is_empty())
            .collect();
        Ok(Self {
            num_teams,
            team_size,
            required_skills,
            seed: None,
        })
    }

    /// Creates parameters from a comma-separated skills field.
    pub fn from_input(num_teams: i64, team_size: i64, skills: &str) -> Result<Self> {
        Self::new(num_teams, team_size, parse_skill_list(skills))
    }

    /// Fixes the shuffle seed for reproducible allocations.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of teams to form.
    pub fn num_teams(&self) -> usize {
        self.num_teams
    }

    /// Minimum members per team before the allocator rotates.
    pub fn team_size(&self) -> usize {
        self.team_size
    }

    /// Required skills in caller order.
    pub fn required_skills(&self) -> &[SkillTag] {
        &self.required_skills
    }

    /// Shuffle seed, if fixed.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}
