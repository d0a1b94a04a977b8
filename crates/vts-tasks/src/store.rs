//! File-backed task store.
//!
//! The store reads the whole CSV file, lets the caller edit the resulting
//! [`TaskTable`], and writes the whole file back. Writes go to a sibling
//! temporary file which is then renamed over the original, so a failed
//! write leaves the previous contents in place.
//!
//! A single `TaskStore` serialises its own edits through [`TaskStore::edit`];
//! several processes writing the same file can still lose updates.

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::table::{TaskEdit, TaskTable};
use crate::task::{TaskRecord, TaskStatus};

/// Column order of the task file.
pub const TASK_COLUMNS: [&str; 4] = ["Task Name", "Team Number", "Deadline", "Status"];

/// Task file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    /// Creates a store for `path`. The file need not exist yet.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Returns the task file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the whole table. A missing file is an empty table.
    pub fn load(&self) -> Result<TaskTable> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "Task file absent, starting empty");
            return Ok(TaskTable::new());
        }

        let file =
            File::open(&self.path).map_err(|e| vts_core::Error::io_with_path(e, &self.path))?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut tasks = Vec::new();
        for row in reader.deserialize::<TaskRecord>() {
            tasks.push(row?);
        }
        tracing::debug!(path = %self.path.display(), tasks = tasks.len(), "Loaded task file");
        Ok(TaskTable::from_tasks(tasks))
    }

    /// Rewrites the whole file with `table`, header row included.
    pub fn save(&self, table: &TaskTable) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| vts_core::Error::io_with_path(e, parent))?;
        }

        let tmp = self.temp_path();
        {
            let file = File::create(&tmp).map_err(|e| vts_core::Error::io_with_path(e, &tmp))?;
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(file);
            writer.write_record(TASK_COLUMNS)?;
            for task in table.tasks() {
                writer.serialize(task)?;
            }
            writer
                .flush()
                .map_err(|e| vts_core::Error::io_with_path(e, &tmp))?;
        }
        std::fs::rename(&tmp, &self.path)
            .map_err(|e| vts_core::Error::io_with_path(e, &self.path))?;

        tracing::info!(path = %self.path.display(), tasks = table.len(), "Saved task file");
        Ok(())
    }

    /// Loads the table, applies `change`, and persists the result.
    ///
    /// Nothing is written when `change` fails.
    pub fn edit<F>(&self, change: F) -> Result<TaskEdit>
    where
        F: FnOnce(TaskTable) -> Result<TaskEdit>,
    {
        let edit = change(self.load()?)?;
        self.save(&edit.table)?;
        Ok(edit)
    }

    /// Appends a task and persists.
    pub fn assign(&self, task: TaskRecord) -> Result<TaskEdit> {
        self.edit(|table| table.assign(task))
    }

    /// Removes every task named `name` and persists.
    pub fn remove(&self, name: &str) -> Result<TaskEdit> {
        self.edit(|table| table.remove(name))
    }

    /// Updates the status of every task named `name` and persists.
    pub fn update_status(&self, name: &str, status: TaskStatus) -> Result<TaskEdit> {
        self.edit(|table| table.update_status(name, status))
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "tasks.csv".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
