//! # vts-analysis
//!
//! Employee data analysis for the VTS dashboard.
//!
//! This crate turns cleaned employee records into the figures behind the
//! dashboard's analysis views:
//! - Job role, gender and skill distributions
//! - Job role × gender and rating cross-tabulations
//! - Experience histogram and per-rating five-number summaries
//! - Average performance rating per job role
//!
//! All functions are pure and return plain data.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod distribution;
pub mod performance;
pub mod types;

pub use distribution::{
    EXPERIENCE_BINS, TOP_SKILLS, experience_histogram, gender_by_job_role, gender_distribution,
    job_role_distribution, top_skills, value_counts,
};
pub use performance::{
    TOP_JOB_ROLES, average_rating_by_role, experience_by_rating, gender_vs_performance,
    job_roles_vs_performance, rating_distribution,
};
pub use types::{CountEntry, CrossTab, FiveNumberSummary, HistogramBin, RatingAverage, Share};
