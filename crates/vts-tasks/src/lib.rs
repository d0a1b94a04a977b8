//! # vts-tasks
//!
//! Task tracking for VTS teams.
//!
//! Tasks live in a flat CSV file with the columns
//! `Task Name, Team Number, Deadline, Status`. This crate provides:
//! - [`TaskRecord`] and [`TaskStatus`], one row of the file
//! - [`TaskTable`], an owned in-memory table with assign / remove /
//!   update-status operations and deadline queries
//! - [`TaskStore`], which reads and fully rewrites the file around each edit

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod table;
pub mod task;

pub use error::{Error, Result};
pub use store::{TASK_COLUMNS, TaskStore};
pub use table::{TaskEdit, TaskTable};
pub use task::{TaskRecord, TaskStatus};
