#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! VTS Core Library
//!
//! Employee records, data cleaning, candidate filtering and skill-based team
//! allocation for the VTS project dashboard.
//!
//! The usual flow is:
//!
//! ```
//! use vts_core::{RawTable, TeamAllocator, TeamParams, clean, filter_candidates};
//!
//! let csv = "Name,Experience,Skills\nAnn,4,python sql\nBen,x,sql\nCal,2,java\n";
//! let records = clean(&RawTable::from_reader(csv.as_bytes()).unwrap());
//!
//! let params = TeamParams::from_input(2, 1, "python, sql").unwrap().with_seed(1);
//! let filtered = filter_candidates(&records, params.required_skills());
//! let allocation = TeamAllocator::for_params(&params).allocate(&filtered, &params);
//!
//! assert_eq!(allocation.teams.len(), 2);
//! assert_eq!(allocation.total_members(), 3);
//! ```

pub mod allocator;
pub mod cleaner;
pub mod error;
pub mod filter;
pub mod params;
pub mod types;

// Re-exports for convenience
pub use allocator::{SkillPool, TeamAllocator, combined_candidates, form_teams, skill_pools};
pub use cleaner::{RawTable, clean, load_employees, write_employees};
pub use error::{Error, Result};
pub use filter::filter_candidates;
pub use params::TeamParams;
pub use types::{
    Allocation, EmployeeId, EmployeeRecord, SkillTag, SkillWarning, Team, TeamRow,
    parse_skill_list,
};
