//! End-to-end runs of parsed command lines against temporary files.

#![allow(clippy::unwrap_used)]

use clap::Parser;
use std::path::Path;
use tempfile::TempDir;
use vts_cli::VtsConfig;
use vts_cli::cli::Args;
use vts_cli::commands;

const EMPLOYEES: &str = "\
Name,Experience,Job Role,Gender,Skills,Phone Number,Email,Employment Status,Preferences,Performance Rating
Asha,4,Data Scientist,Female,python sql,555-0100,asha@example.com,Full-time,Remote,4
Bruno,7,Backend Developer,Male,java sql,555-0101,bruno@example.com,Full-time,,3
Chen,2,Data Analyst,Male,python excel,,chen@example.com,Contract,Hybrid,5
Dana,,Backend Developer,Female,go,555-0103,,Full-time,,
";

fn run(dir: &Path, line: &[&str]) -> vts_cli::Result<String> {
    let args = Args::try_parse_from(line).unwrap();
    let config_path = dir.join("config.toml");
    let config = if config_path.exists() {
        VtsConfig::from_file(&config_path)?
    } else {
        VtsConfig::default()
    };
    commands::run(&args, &config)
}

fn setup() -> (TempDir, String) {
    let dir = TempDir::new().unwrap();
    let data = dir.path().join("employees.csv");
    std::fs::write(&data, EMPLOYEES).unwrap();
    let data = data.to_str().unwrap().to_string();
    (dir, data)
}

#[test]
fn teams_from_config_defaults() {
    let (dir, data) = setup();
    std::fs::write(
        dir.path().join("config.toml"),
        "[teams]\nnum_teams = 2\nteam_size = 2\nseed = 11\n",
    )
    .unwrap();

    let out = run(
        dir.path(),
        &["vts", "teams", "--data", &data, "--skills", "python, sql", "--format", "json"],
    )
    .unwrap();
    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    let sizes: Vec<usize> = value["teams"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["members"].as_array().unwrap().len())
        .collect();
    assert_eq!(sizes, vec![2, 2]);
    assert!(value["warnings"].as_array().unwrap().is_empty());
}

#[test]
fn teams_with_skills_and_warning() {
    let (dir, data) = setup();
    let out = run(
        dir.path(),
        &[
            "vts", "teams", "--data", &data, "--teams", "3", "--size", "1", "--skills",
            "Python, rust", "--seed", "3",
        ],
    )
    .unwrap();

    assert!(out.contains("Team 1"));
    assert!(out.contains("Team 3\nNo members in this team."));
    assert!(out.contains("No candidates with the skill rust available in the dataset."));
    assert!(!out.contains("Bruno"));
}

#[test]
fn teams_without_skills_are_empty() {
    let (dir, data) = setup();
    let out = run(dir.path(), &["vts", "teams", "--data", &data, "--teams", "2"]).unwrap();
    assert_eq!(out.matches("No members in this team.").count(), 2);
}

#[test]
fn teams_rejects_zero_teams() {
    let (dir, data) = setup();
    let err = run(dir.path(), &["vts", "teams", "--data", &data, "--teams", "0"]).unwrap_err();
    assert!(err.to_string().contains("number of teams must be at least 1"));
}

#[test]
fn clean_fills_defaults() {
    let (dir, data) = setup();
    let out = run(dir.path(), &["vts", "clean", "--data", &data]).unwrap();
    let dana = out.lines().find(|l| l.contains("Dana")).unwrap();
    assert!(dana.starts_with("3,Dana,0.0,Backend Developer"));
    assert!(dana.contains("Unknown,Full-time,None,"));
}

#[test]
fn analyze_views() {
    let (dir, data) = setup();
    let out = run(dir.path(), &["vts", "analyze", "--data", &data, "job-roles"]).unwrap();
    assert!(out.lines().nth(2).unwrap().starts_with("Backend Developer"));

    let out = run(
        dir.path(),
        &["vts", "analyze", "--data", &data, "ratings", "--format", "csv"],
    )
    .unwrap();
    assert_eq!(out, "Performance Rating,Count\n3,1\n4,1\n5,1\n");
}

#[test]
fn task_lifecycle_through_commands() {
    let (dir, _) = setup();
    let tasks = dir.path().join("tasks.csv");
    let tasks = tasks.to_str().unwrap();

    let out = run(
        dir.path(),
        &[
            "vts", "tasks", "--file", tasks, "assign", "--name", "Kickoff", "--team", "1",
            "--deadline", "2025-02-01",
        ],
    )
    .unwrap();
    assert!(out.starts_with("Task 'Kickoff' assigned to 1"));

    let out = run(
        dir.path(),
        &[
            "vts", "tasks", "--file", tasks, "update", "--name", "Kickoff", "--status",
            "In Progress",
        ],
    )
    .unwrap();
    assert_eq!(out, "Task 'Kickoff' status updated to 'In Progress'.\n");

    let out = run(
        dir.path(),
        &["vts", "tasks", "--file", tasks, "overdue", "--today", "2025-03-01"],
    )
    .unwrap();
    assert!(out.contains("Kickoff"));

    run(
        dir.path(),
        &["vts", "tasks", "--file", tasks, "remove", "--name", "Kickoff"],
    )
    .unwrap();
    let out = run(dir.path(), &["vts", "tasks", "--file", tasks, "list"]).unwrap();
    assert_eq!(out, "No tasks assigned yet.\n");
}

#[test]
fn upcoming_accepts_the_largest_day_count() {
    let (dir, _) = setup();
    let tasks = dir.path().join("tasks.csv");
    let tasks = tasks.to_str().unwrap();
    run(
        dir.path(),
        &[
            "vts", "tasks", "--file", tasks, "assign", "--name", "Launch", "--team", "2",
            "--deadline", "2030-06-01",
        ],
    )
    .unwrap();

    let out = run(
        dir.path(),
        &[
            "vts", "tasks", "--file", tasks, "upcoming", "--days", "4294967295", "--today",
            "2025-01-01",
        ],
    )
    .unwrap();
    assert!(out.contains("Launch"));
}

#[test]
fn config_init_then_get() {
    let (dir, _) = setup();
    let path = dir.path().join("vts.toml");
    let path = path.to_str().unwrap();

    let out = run(dir.path(), &["vts", "config", "init", "--file", path]).unwrap();
    assert!(out.contains(path));

    let out = run(
        dir.path(),
        &["vts", "--config", path, "config", "get", "tasks.file"],
    )
    .unwrap();
    assert_eq!(out, "tasks.csv");
}
