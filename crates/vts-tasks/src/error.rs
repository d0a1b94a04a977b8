//! Error types for vts-tasks

use thiserror::Error;

/// Result type alias for vts-tasks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vts-tasks
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vts-core (validation, file access)
    #[error("Core error: {0}")]
    Core(#[from] vts_core::Error),

    /// The task file could not be parsed or written
    #[error("Task file error: {0}")]
    Csv(#[from] csv::Error),

    /// No task carries the given name
    #[error("Task not found: {name}")]
    TaskNotFound {
        /// Name that matched no task
        name: String,
    },

    /// A status label that is not one of the known statuses
    #[error("Unknown task status: '{value}' (expected Not Started, In Progress or Completed)")]
    InvalidStatus {
        /// The rejected label
        value: String,
    },
}

impl Error {
    /// Creates a task-not-found error.
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Error::TaskNotFound { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        assert_eq!(Error::not_found("T9").to_string(), "Task not found: T9");
    }

    #[test]
    fn test_core_error_wraps() {
        let err: Error = vts_core::Error::validation("bad").into();
        assert_eq!(err.to_string(), "Core error: Validation error: bad");
    }

    #[test]
    fn test_invalid_status_display() {
        let err = Error::InvalidStatus {
            value: "Done?".to_string(),
        };
        assert!(err.to_string().contains("'Done?'"));
    }
}
