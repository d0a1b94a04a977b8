//! Configuration for the `vts` command.
//!
//! The config file is TOML. Its location is resolved in order from the
//! `--config` flag, the `VTS_CONFIG` environment variable, and
//! `<config dir>/vts/config.toml`. A missing default file means defaults;
//! a missing file that was asked for explicitly is an error.
//!
//! ```toml
//! [teams]
//! num_teams = 3
//! team_size = 4
//! seed = 42
//!
//! [tasks]
//! file = "tasks.csv"
//!
//! [logging]
//! level = "info"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "VTS_CONFIG";

/// Project name used for the config directory and messages.
pub const PROJECT_NAME: &str = "vts";

/// Default task file.
pub const DEFAULT_TASKS_FILE: &str = "tasks.csv";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VtsConfig {
    /// Team formation defaults
    pub teams: TeamDefaults,
    /// Task store settings
    pub tasks: TaskSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Defaults for `vts teams` when flags are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamDefaults {
    /// Number of teams
    pub num_teams: i64,
    /// Members per team before rotating
    pub team_size: i64,
    /// Fixed shuffle seed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for TeamDefaults {
    fn default() -> Self {
        Self {
            num_teams: 1,
            team_size: 1,
            seed: None,
        }
    }
}

/// Task store settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskSettings {
    /// Task CSV file
    pub file: PathBuf,
}

impl Default for TaskSettings {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_TASKS_FILE),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

fn env_config() -> Option<String> {
    std::env::var(CONFIG_ENV).ok()
}

/// A path the user asked for: the flag, else a non-blank `VTS_CONFIG`.
fn requested_path(explicit: Option<&str>, env: Option<&str>) -> Option<PathBuf> {
    explicit
        .or_else(|| env.filter(|p| !p.trim().is_empty()))
        .map(PathBuf::from)
}

impl VtsConfig {
    /// Returns `<config dir>/vts/config.toml`, if the platform has a config dir.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(PROJECT_NAME).join("config.toml"))
    }

    /// Resolves the config path from an explicit flag, the environment, or
    /// the platform default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        requested_path(explicit, env_config().as_deref()).or_else(Self::default_config_path)
    }

    /// Loads and validates the configuration.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        Self::load_with(explicit, env_config().as_deref())
    }

    /// Loads with `env` standing in for the value of `VTS_CONFIG`.
    fn load_with(explicit: Option<&str>, env: Option<&str>) -> Result<Self> {
        if let Some(path) = requested_path(explicit, env) {
            if !path.exists() {
                return Err(Error::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::from_file(&path);
        }

        let Some(path) = Self::default_config_path() else {
            tracing::debug!("No config directory on this platform, using defaults");
            return Ok(Self::default());
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Reads, parses and validates a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parses and validates TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| Error::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects zero or negative team defaults and an empty task file path.
    pub fn validate(&self) -> Result<()> {
        if self.teams.num_teams < 1 {
            return Err(Error::config(format!(
                "teams.num_teams must be at least 1, got {}",
                self.teams.num_teams
            )));
        }
        if self.teams.team_size < 1 {
            return Err(Error::config(format!(
                "teams.team_size must be at least 1, got {}",
                self.teams.team_size
            )));
        }
        if self.tasks.file.as_os_str().is_empty() {
            return Err(Error::config("tasks.file must not be empty"));
        }
        Ok(())
    }

    /// Serializes to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }
}
