//! Core types for employee data and team formation.

mod employee;
mod proptests;
mod skill;
mod team;

pub use employee::{EmployeeId, EmployeeRecord, NO_PREFERENCES, UNKNOWN};
pub use skill::{SkillTag, parse_skill_list};
pub use team::{Allocation, SkillWarning, Team, TeamRow};
