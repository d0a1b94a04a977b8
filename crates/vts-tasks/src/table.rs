//! In-memory task table.
//!
//! A [`TaskTable`] is an owned value. Mutations consume the table and hand
//! back the new one inside a [`TaskEdit`], so a caller always goes through
//! load → mutate → persist and never shares a table between edits.
//!
//! # Duplicate names
//!
//! Task names are not unique. [`TaskTable::remove`] and
//! [`TaskTable::update_status`] act on every row carrying the name and report
//! how many rows they touched; a name with no rows is
//! [`Error::TaskNotFound`](crate::Error::TaskNotFound).

use chrono::{Days, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

use crate::task::{TaskRecord, TaskStatus};
use crate::{Error, Result};

/// Ordered collection of task rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TaskTable {
    tasks: Vec<TaskRecord>,
}

/// The table produced by a mutation and the number of rows it affected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEdit {
    /// Table after the mutation
    pub table: TaskTable,
    /// Rows appended, removed or updated
    pub affected: usize,
}

impl TaskTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table from existing rows.
    pub fn from_tasks(tasks: Vec<TaskRecord>) -> Self {
        Self { tasks }
    }

    /// Returns the rows in file order.
    pub fn tasks(&self) -> &[TaskRecord] {
        &self.tasks
    }

    /// Consumes the table, returning its rows.
    pub fn into_tasks(self) -> Vec<TaskRecord> {
        self.tasks
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if there are no rows.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Appends a task. The name must contain a non-whitespace character.
    pub fn assign(mut self, task: TaskRecord) -> Result<TaskEdit> {
        if task.task_name.trim().is_empty() {
            return Err(vts_core::Error::validation_field("task_name", "must not be empty").into());
        }
        tracing::debug!(task = %task.task_name, team = %task.team_number, "Assigning task");
        self.tasks.push(task);
        Ok(TaskEdit {
            table: self,
            affected: 1,
        })
    }

    /// Removes every row named `name`.
    pub fn remove(mut self, name: &str) -> Result<TaskEdit> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task_name != name);
        let affected = before - self.tasks.len();
        if affected == 0 {
            return Err(Error::not_found(name));
        }
        tracing::debug!(task = %name, rows = affected, "Removed task");
        Ok(TaskEdit {
            table: self,
            affected,
        })
    }

    /// Sets the status of every row named `name`, leaving other fields alone.
    pub fn update_status(mut self, name: &str, status: TaskStatus) -> Result<TaskEdit> {
        let mut affected = 0;
        for task in self.tasks.iter_mut().filter(|t| t.task_name == name) {
            task.status = status;
            affected += 1;
        }
        if affected == 0 {
            return Err(Error::not_found(name));
        }
        tracing::debug!(task = %name, %status, rows = affected, "Updated task status");
        Ok(TaskEdit {
            table: self,
            affected,
        })
    }

    /// Distinct task names in first-seen order.
    pub fn task_names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.tasks
            .iter()
            .map(|t| t.task_name.as_str())
            .filter(|name| seen.insert(*name))
            .collect()
    }

    /// Rows assigned to `team`.
    pub fn for_team(&self, team: &str) -> Vec<&TaskRecord> {
        self.tasks.iter().filter(|t| t.team_number == team).collect()
    }

    /// Unfinished rows whose deadline is before `today`.
    pub fn overdue(&self, today: NaiveDate) -> Vec<&TaskRecord> {
        self.tasks.iter().filter(|t| t.is_overdue(today)).collect()
    }

    /// Unfinished rows due between `today` and `today + days`, inclusive,
    /// soonest first. A window past the last representable date ends there.
    pub fn upcoming(&self, today: NaiveDate, days: u32) -> Vec<&TaskRecord> {
        let horizon = today
            .checked_add_days(Days::new(u64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        let mut due: Vec<&TaskRecord> = self
            .tasks
            .iter()
            .filter(|t| !t.status.is_done() && t.deadline >= today && t.deadline <= horizon)
            .collect();
        due.sort_by_key(|t| t.deadline);
        due
    }

    /// Row count per status, in workflow order, including zero counts.
    pub fn status_summary(&self) -> Vec<(TaskStatus, usize)> {
        TaskStatus::ALL
            .iter()
            .map(|status| {
                let n = self.tasks.iter().filter(|t| t.status == *status).count();
                (*status, n)
            })
            .collect()
    }
}

impl FromIterator<TaskRecord> for TaskTable {
    fn from_iter<I: IntoIterator<Item = TaskRecord>>(iter: I) -> Self {
        Self::from_tasks(iter.into_iter().collect())
    }
}
