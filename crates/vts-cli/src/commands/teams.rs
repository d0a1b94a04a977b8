//! `vts teams`: form teams from an employee file.

use serde::Serialize;
use vts_core::{Allocation, TeamAllocator, TeamParams, TeamRow, filter_candidates, load_employees};

use crate::Result;
use crate::cli::{OutputFormat, TeamsArgs};
use crate::config::VtsConfig;
use crate::render::{TextTable, number, to_csv, to_json};

/// Shown in place of an empty team's table.
pub const EMPTY_TEAM: &str = "No members in this team.";

/// Merges flags over config defaults into validated parameters.
pub fn resolve_params(args: &TeamsArgs, config: &VtsConfig) -> Result<TeamParams> {
    let num_teams = args.num_teams.unwrap_or(config.teams.num_teams);
    let team_size = args.team_size.unwrap_or(config.teams.team_size);
    let params = TeamParams::from_input(num_teams, team_size, &args.skills)?;
    Ok(match args.seed.or(config.teams.seed) {
        Some(seed) => params.with_seed(seed),
        None => params,
    })
}

/// Loads, cleans and filters the employee file, then allocates teams.
pub fn run(args: &TeamsArgs, config: &VtsConfig) -> Result<String> {
    let params = resolve_params(args, config)?;
    let records = load_employees(&args.data.data)?;
    let filtered = filter_candidates(&records, params.required_skills());
    tracing::info!(
        employees = records.len(),
        candidates = filtered.len(),
        "Filtered candidates"
    );

    let allocation = TeamAllocator::for_params(&params).allocate(&filtered, &params);
    render(&allocation, args.format)
}

/// Renders an allocation in the requested format.
pub fn render(allocation: &Allocation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(allocation)),
        OutputFormat::Csv => render_csv(allocation),
        OutputFormat::Json => to_json(&TeamsReport::from(allocation)),
    }
}

fn render_table(allocation: &Allocation) -> String {
    let mut out = String::new();
    for (i, team) in allocation.teams.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&format!("Team {}\n", team.number()));
        if team.is_empty() {
            out.push_str(EMPTY_TEAM);
            out.push('\n');
            continue;
        }
        let mut table = TextTable::new(["Employee ID", "Name", "Experience", "Job Role", "Skills"]);
        for row in team.rows() {
            table.push_row([
                row.employee_id.to_string(),
                row.name,
                number(row.experience),
                row.job_role,
                row.skills,
            ]);
        }
        out.push_str(&table.render());
    }

    if allocation.has_warnings() {
        out.push_str("\nWarnings\n");
        for warning in &allocation.warnings {
            out.push_str(&format!("- {warning}\n"));
        }
    }
    out
}

#[derive(Serialize)]
struct CsvRow {
    #[serde(rename = "Team")]
    team: usize,
    #[serde(rename = "Employee ID")]
    employee_id: usize,
    #[serde(rename = "Name")]
    name: String,
    #[serde(rename = "Experience")]
    experience: f64,
    #[serde(rename = "Job Role")]
    job_role: String,
    #[serde(rename = "Skills")]
    skills: String,
}

fn render_csv(allocation: &Allocation) -> Result<String> {
    let rows: Vec<CsvRow> = allocation
        .teams
        .iter()
        .flat_map(|team| {
            team.rows().into_iter().map(move |row| CsvRow {
                team: team.number(),
                employee_id: row.employee_id.position(),
                name: row.name,
                experience: row.experience,
                job_role: row.job_role,
                skills: row.skills,
            })
        })
        .collect();
    if rows.is_empty() {
        return Ok("Team,Employee ID,Name,Experience,Job Role,Skills\n".to_string());
    }
    to_csv(&rows)
}

#[derive(Serialize)]
struct TeamsReport {
    teams: Vec<TeamReport>,
    warnings: Vec<String>,
}

#[derive(Serialize)]
struct TeamReport {
    team: usize,
    members: Vec<TeamRow>,
}

impl From<&Allocation> for TeamsReport {
    fn from(allocation: &Allocation) -> Self {
        Self {
            teams: allocation
                .teams
                .iter()
                .map(|team| TeamReport {
                    team: team.number(),
                    members: team.rows(),
                })
                .collect(),
            warnings: allocation.warnings.iter().map(|w| w.message()).collect(),
        }
    }
}
