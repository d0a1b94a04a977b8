//! Error types for vts-cli

use std::path::Path;
use thiserror::Error;

/// Result type alias for vts-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in vts-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from vts-core
    #[error(transparent)]
    Core(#[from] vts_core::Error),

    /// Error from vts-tasks
    #[error(transparent)]
    Tasks(#[from] vts_tasks::Error),

    /// Configuration file or value problem
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// JSON output could not be produced
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV output could not be produced
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path it occurred on.
    pub fn io_with_path<P: AsRef<Path>>(source: std::io::Error, path: P) -> Self {
        Error::Core(vts_core::Error::io_with_path(source, path))
    }
}
