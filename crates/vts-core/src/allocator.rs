//! Skill-grouped round-robin team allocation.
//!
//! # Algorithm
//!
//! 1. Create `num_teams` empty teams
//! 2. For each required skill (caller order), collect its candidate pool:
//!    the filtered records whose skills contain that skill
//! 3. Concatenate the pools in skill order. A record matching several
//!    required skills appears once per matching skill
//! 4. Shuffle the combined list once
//! 5. Walk it with a team pointer starting at 0. While the current team has
//!    fewer than `team_size` members the candidate joins it; otherwise the
//!    pointer advances (wrapping) and the candidate joins the next team
//!    whatever its size
//! 6. Emit one warning per skill whose pool was empty
//!
//! `team_size` is a rotation threshold, not a cap: once every team has
//! reached it, the remaining candidates are dealt one per team in turn.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::TeamParams;
use crate::types::{Allocation, EmployeeRecord, SkillTag, SkillWarning, Team};

/// Candidates holding one required skill.
#[derive(Debug, Clone)]
pub struct SkillPool<'a> {
    /// The required skill
    pub skill: &'a SkillTag,
    /// Matching records, in input order
    pub candidates: Vec<&'a EmployeeRecord>,
}

impl SkillPool<'_> {
    /// Returns `true` if no record has the skill.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

/// Builds one candidate pool per required skill, in skill order.
pub fn skill_pools<'a>(
    filtered: &'a [EmployeeRecord],
    required_skills: &'a [SkillTag],
) -> Vec<SkillPool<'a>> {
    required_skills
        .iter()
        .map(|skill| SkillPool {
            skill,
            candidates: filtered.iter().filter(|r| r.has_skill(skill)).collect(),
        })
        .collect()
}

/// Concatenates pools in order, keeping one entry per (skill, record) match.
pub fn combined_candidates(pools: &[SkillPool<'_>]) -> Vec<EmployeeRecord> {
    pools
        .iter()
        .flat_map(|pool| pool.candidates.iter().map(|r| (*r).clone()))
        .collect()
}

/// Deals candidates into teams, rotating once the current team reaches
/// `team_size`.
///
/// Callers guarantee `num_teams >= 1`; [`TeamParams`] enforces it.
fn deal_round_robin(
    candidates: Vec<EmployeeRecord>,
    num_teams: usize,
    team_size: usize,
) -> Vec<Team> {
    let mut teams: Vec<Team> = (0..num_teams).map(|i| Team::new(i, team_size)).collect();
    let mut current = 0;

    for candidate in candidates {
        if teams[current].len() >= team_size {
            current = (current + 1) % num_teams;
        }
        teams[current].push(candidate);
    }

    teams
}

/// Forms teams from filtered candidates using an injectable random source.
///
/// # Examples
///
/// ```
/// use vts_core::{EmployeeRecord, TeamAllocator, TeamParams};
///
/// let staff = vec![
///     EmployeeRecord::new(0, "A").with_skills("python sql"),
///     EmployeeRecord::new(1, "B").with_skills("sql"),
/// ];
/// let params = TeamParams::from_input(2, 1, "python, sql").unwrap();
///
/// let allocation = TeamAllocator::seeded(7).allocate(&staff, &params);
/// assert_eq!(allocation.teams.len(), 2);
/// assert_eq!(allocation.total_members(), 3);
/// assert!(allocation.warnings.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct TeamAllocator<R = StdRng> {
    rng: R,
}

impl TeamAllocator<StdRng> {
    /// Creates an allocator seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an allocator with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates an allocator honouring the seed in `params`, if any.
    pub fn for_params(params: &TeamParams) -> Self {
        match params.seed() {
            Some(seed) => Self::seeded(seed),
            None => Self::from_os_rng(),
        }
    }
}

impl Default for TeamAllocator<StdRng> {
    fn default() -> Self {
        Self::from_os_rng()
    }
}

impl<R: Rng> TeamAllocator<R> {
    /// Creates an allocator drawing permutations from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Partitions `filtered` into teams and reports skills without candidates.
    pub fn allocate(&mut self, filtered: &[EmployeeRecord], params: &TeamParams) -> Allocation {
        let pools = skill_pools(filtered, params.required_skills());

        let warnings: Vec<SkillWarning> = pools
            .iter()
            .filter(|pool| pool.is_empty())
            .map(|pool| SkillWarning::new(pool.skill.clone()))
            .collect();
        for warning in &warnings {
            tracing::warn!(skill = %warning.skill, "No candidates for required skill");
        }

        let mut candidates = combined_candidates(&pools);
        candidates.shuffle(&mut self.rng);

        tracing::debug!(
            candidates = candidates.len(),
            num_teams = params.num_teams(),
            team_size = params.team_size(),
            "Dealing candidates into teams"
        );

        let teams = deal_round_robin(candidates, params.num_teams(), params.team_size());
        Allocation { teams, warnings }
    }
}

/// Forms teams using the seed from `params`, or an OS-seeded generator when
/// none is set.
pub fn form_teams(filtered: &[EmployeeRecord], params: &TeamParams) -> Allocation {
    TeamAllocator::for_params(params).allocate(filtered, params)
}
