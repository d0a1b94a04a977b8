//! Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// VTS - virtual team formation, workforce analysis and task tracking
#[derive(Parser, Debug)]
#[command(name = "vts")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[allow(missing_docs)]
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Form teams from an employee CSV
    Teams(TeamsArgs),
    /// Print the cleaned employee table as CSV
    Clean(DataArgs),
    /// Workforce and performance summaries
    Analyze {
        #[allow(missing_docs)]
        #[command(flatten)]
        data: DataArgs,

        /// Which summary to compute
        #[arg(value_enum)]
        view: AnalysisView,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Task tracking
    Tasks {
        /// Task CSV file (defaults to `tasks.file` from config)
        #[arg(long)]
        file: Option<PathBuf>,

        #[allow(missing_docs)]
        #[command(subcommand)]
        action: TaskAction,
    },
    /// Configuration management
    Config {
        #[allow(missing_docs)]
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Employee data source.
#[derive(clap::Args, Debug, Clone)]
pub struct DataArgs {
    /// Employee CSV file
    #[arg(short, long)]
    pub data: PathBuf,
}

/// Arguments for `vts teams`.
#[derive(clap::Args, Debug, Clone)]
pub struct TeamsArgs {
    #[allow(missing_docs)]
    #[command(flatten)]
    pub data: DataArgs,

    /// Number of teams (defaults to `teams.num_teams`)
    #[arg(short = 'n', long = "teams", allow_negative_numbers = true)]
    pub num_teams: Option<i64>,

    /// Members per team before rotating (defaults to `teams.team_size`)
    #[arg(short = 's', long = "size", allow_negative_numbers = true)]
    pub team_size: Option<i64>,

    /// Required skills, comma-separated
    #[arg(short = 'k', long, default_value = "")]
    pub skills: String,

    /// Shuffle seed for repeatable teams (defaults to `teams.seed`)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned text tables
    #[default]
    Table,
    /// Comma-separated values
    Csv,
    /// Pretty JSON
    Json,
}

/// Analysis summaries.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisView {
    /// Employees per job role
    JobRoles,
    /// Gender shares
    Gender,
    /// Gender counts within each job role
    GenderByRole,
    /// Experience histogram
    Experience,
    /// Most common skills
    TopSkills,
    /// Employees per performance rating
    Ratings,
    /// Average rating per job role
    RatingByRole,
    /// Ratings within the five largest job roles
    RolesVsRating,
    /// Ratings by gender
    GenderVsRating,
    /// Experience spread within each rating
    ExperienceVsRating,
}

/// Task subcommands.
#[derive(Subcommand, Debug)]
pub enum TaskAction {
    /// Assign a task to a team
    Assign {
        /// Task name
        #[arg(long)]
        name: String,
        /// Team number
        #[arg(long)]
        team: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(long)]
        deadline: chrono::NaiveDate,
        /// Initial status
        #[arg(long, default_value = "Not Started")]
        status: String,
    },
    /// Remove every task with this name
    Remove {
        /// Task name
        #[arg(long)]
        name: String,
    },
    /// Change the status of every task with this name
    Update {
        /// Task name
        #[arg(long)]
        name: String,
        /// New status
        #[arg(long)]
        status: String,
    },
    /// List tasks
    List {
        /// Only tasks for this team
        #[arg(long)]
        team: Option<String>,
    },
    /// Distinct task names
    Names,
    /// Unfinished tasks past their deadline
    Overdue {
        /// Reference date (defaults to today)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },
    /// Unfinished tasks due soon
    Upcoming {
        /// Days ahead to look
        #[arg(long, default_value_t = 7)]
        days: u32,
        /// Reference date (defaults to today)
        #[arg(long)]
        today: Option<chrono::NaiveDate>,
    },
    /// Task count per status
    Summary,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Create a default config file
    Init {
        /// Write to this path instead of the default location
        #[arg(long)]
        file: Option<String>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print one value by dotted key, e.g. `teams.team_size`
    Get {
        /// Dotted key
        key: String,
    },
    /// Print the effective configuration
    Show,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition_is_valid() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_teams() {
        let args = Args::try_parse_from([
            "vts", "teams", "--data", "emp.csv", "--teams", "3", "--size", "2", "--skills",
            "Python, SQL", "--seed", "7",
        ])
        .unwrap();
        let Command::Teams(teams) = args.command else {
            panic!("expected teams command");
        };
        assert_eq!(teams.data.data, PathBuf::from("emp.csv"));
        assert_eq!(teams.num_teams, Some(3));
        assert_eq!(teams.team_size, Some(2));
        assert_eq!(teams.skills, "Python, SQL");
        assert_eq!(teams.seed, Some(7));
        assert_eq!(teams.format, OutputFormat::Table);
    }

    #[test]
    fn test_negative_sizes_reach_validation() {
        let args =
            Args::try_parse_from(["vts", "teams", "--data", "e.csv", "--size", "-1"]).unwrap();
        let Command::Teams(teams) = args.command else {
            panic!("expected teams command");
        };
        assert_eq!(teams.team_size, Some(-1));
    }

    #[test]
    fn test_parse_analyze_view() {
        let args = Args::try_parse_from([
            "vts",
            "analyze",
            "--data",
            "e.csv",
            "experience-vs-rating",
            "--format",
            "json",
        ])
        .unwrap();
        assert!(matches!(
            args.command,
            Command::Analyze {
                view: AnalysisView::ExperienceVsRating,
                format: OutputFormat::Json,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_task_assign_date() {
        let args = Args::try_parse_from([
            "vts",
            "tasks",
            "assign",
            "--name",
            "T1",
            "--team",
            "1",
            "--deadline",
            "2025-01-01",
        ])
        .unwrap();
        let Command::Tasks { file, action } = args.command else {
            panic!("expected tasks command");
        };
        assert!(file.is_none());
        let TaskAction::Assign {
            deadline, status, ..
        } = action
        else {
            panic!("expected assign");
        };
        assert_eq!(deadline, chrono::NaiveDate::from_ymd_opt(2025, 1, 1).unwrap());
        assert_eq!(status, "Not Started");
    }

    #[test]
    fn test_bad_deadline_rejected() {
        let result = Args::try_parse_from([
            "vts", "tasks", "assign", "--name", "T1", "--team", "1", "--deadline", "01/02/2025",
        ]);
        assert!(result.is_err());
    }
}
