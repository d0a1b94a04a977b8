//! Task record and status types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Progress of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not begun.
    #[serde(rename = "Not Started")]
    NotStarted,

    /// Work is under way.
    #[serde(rename = "In Progress")]
    InProgress,

    /// Work is done.
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in workflow order.
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::NotStarted,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Returns the label stored in the task file.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "Not Started",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Returns `true` for [`TaskStatus::Completed`].
    pub fn is_done(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = Error;

    /// Accepts the stored labels in any case, and kebab/snake forms such as
    /// `in-progress` or `not_started`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        match normalized.as_str() {
            "not started" => Ok(TaskStatus::NotStarted),
            "in progress" => Ok(TaskStatus::InProgress),
            "completed" | "done" => Ok(TaskStatus::Completed),
            _ => Err(Error::InvalidStatus {
                value: s.to_string(),
            }),
        }
    }
}

/// One row of the task file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    /// Task name; not guaranteed unique
    #[serde(rename = "Task Name")]
    pub task_name: String,

    /// Team the task is assigned to, as entered
    #[serde(rename = "Team Number")]
    pub team_number: String,

    /// Due date
    #[serde(rename = "Deadline")]
    pub deadline: NaiveDate,

    /// Current status
    #[serde(rename = "Status")]
    pub status: TaskStatus,
}

impl TaskRecord {
    /// Creates a task record.
    pub fn new<N, T>(task_name: N, team_number: T, deadline: NaiveDate, status: TaskStatus) -> Self
    where
        N: Into<String>,
        T: Into<String>,
    {
        Self {
            task_name: task_name.into(),
            team_number: team_number.into(),
            deadline,
            status,
        }
    }

    /// Returns `true` if the deadline has passed and the task is not done.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.status.is_done() && self.deadline < today
    }
}
