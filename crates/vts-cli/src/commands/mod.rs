//! Command implementations.
//!
//! Every command returns the text to print on stdout; `main` does the
//! printing and maps errors to the exit status.

pub mod analyze;
pub mod clean;
pub mod tasks;
pub mod teams;

use crate::Result;
use crate::cli::{Args, Command};
use crate::config::VtsConfig;
use crate::config_handlers::handle_config_command;

/// Runs the parsed command against `config`.
pub fn run(args: &Args, config: &VtsConfig) -> Result<String> {
    match &args.command {
        Command::Teams(teams_args) => teams::run(teams_args, config),
        Command::Clean(data) => clean::run(&data.data),
        Command::Analyze { data, view, format } => analyze::run(&data.data, *view, *format),
        Command::Tasks { file, action } => {
            let path = file.clone().unwrap_or_else(|| config.tasks.file.clone());
            tasks::run(&path, action, tasks::today())
        }
        Command::Config { action } => handle_config_command(args.config.as_deref(), action),
    }
}
