//! `vts tasks`: task assignment and tracking.

use chrono::NaiveDate;
use std::path::Path;
use vts_tasks::{TaskRecord, TaskStatus, TaskStore};

use crate::Result;
use crate::cli::TaskAction;
use crate::render::TextTable;

/// Printed by `list` when the file holds no tasks.
pub const NO_TASKS: &str = "No tasks assigned yet.";

/// Local calendar date.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Runs a task action against the file at `path`.
pub fn run(path: &Path, action: &TaskAction, today: NaiveDate) -> Result<String> {
    let store = TaskStore::new(path);
    match action {
        TaskAction::Assign {
            name,
            team,
            deadline,
            status,
        } => {
            let status: TaskStatus = status.parse()?;
            store.assign(TaskRecord::new(name.trim(), team.trim(), *deadline, status))?;
            Ok(format!(
                "Task '{}' assigned to {} with a deadline of {} and status '{}'.\n",
                name.trim(),
                team.trim(),
                deadline,
                status
            ))
        }
        TaskAction::Remove { name } => {
            let edit = store.remove(name)?;
            Ok(format!(
                "Task '{name}' removed successfully.{}\n",
                rows_note(edit.affected)
            ))
        }
        TaskAction::Update { name, status } => {
            let status: TaskStatus = status.parse()?;
            let edit = store.update_status(name, status)?;
            Ok(format!(
                "Task '{name}' status updated to '{status}'.{}\n",
                rows_note(edit.affected)
            ))
        }
        TaskAction::List { team } => {
            let table = store.load()?;
            let tasks: Vec<&TaskRecord> = match team {
                Some(team) => table.for_team(team),
                None => table.tasks().iter().collect(),
            };
            Ok(task_table(&tasks, NO_TASKS))
        }
        TaskAction::Names => {
            let table = store.load()?;
            let names = table.task_names();
            if names.is_empty() {
                return Ok(format!("{NO_TASKS}\n"));
            }
            Ok(names.iter().map(|n| format!("{n}\n")).collect())
        }
        TaskAction::Overdue { today: reference } => {
            let table = store.load()?;
            let tasks = table.overdue(reference.unwrap_or(today));
            Ok(task_table(&tasks, "No overdue tasks."))
        }
        TaskAction::Upcoming {
            days,
            today: reference,
        } => {
            let table = store.load()?;
            let tasks = table.upcoming(reference.unwrap_or(today), *days);
            Ok(task_table(
                &tasks,
                &format!("No tasks due in the next {days} days."),
            ))
        }
        TaskAction::Summary => {
            let table = store.load()?;
            let mut out = TextTable::new(["Status", "Tasks"]);
            for (status, count) in table.status_summary() {
                out.push_row([status.to_string(), count.to_string()]);
            }
            Ok(out.render())
        }
    }
}

fn rows_note(affected: usize) -> String {
    if affected > 1 {
        format!(" ({affected} rows)")
    } else {
        String::new()
    }
}

fn task_table(tasks: &[&TaskRecord], empty: &str) -> String {
    if tasks.is_empty() {
        return format!("{empty}\n");
    }
    let mut table = TextTable::new(vts_tasks::TASK_COLUMNS);
    for task in tasks {
        table.push_row([
            task.task_name.clone(),
            task.team_number.clone(),
            task.deadline.to_string(),
            task.status.to_string(),
        ]);
    }
    table.render()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn assign(name: &str, team: &str, deadline: &str, status: &str) -> TaskAction {
        TaskAction::Assign {
            name: name.to_string(),
            team: team.to_string(),
            deadline: day(deadline),
            status: status.to_string(),
        }
    }

    #[test]
    fn test_assign_message_and_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");
        let today = day("2025-01-05");

        let out = run(&path, &assign("Design", "2", "2025-01-10", "not started"), today).unwrap();
        assert_eq!(
            out,
            "Task 'Design' assigned to 2 with a deadline of 2025-01-10 and status 'Not Started'.\n"
        );

        run(&path, &assign("Design", "3", "2025-01-11", "In Progress"), today).unwrap();
        let names = run(&path, &TaskAction::Names, today).unwrap();
        assert_eq!(names, "Design\n");

        let listed = run(&path, &TaskAction::List { team: None }, today).unwrap();
        assert!(listed.contains("Task Name"));
        assert!(listed.contains("Design"));
    }

    #[test]
    fn test_empty_list() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");
        let out = run(&path, &TaskAction::List { team: None }, day("2025-01-01")).unwrap();
        assert_eq!(out, "No tasks assigned yet.\n");
    }

    #[test]
    fn test_update_and_remove_messages() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");
        let today = day("2025-01-01");
        run(&path, &assign("T1", "1", "2025-01-02", "Not Started"), today).unwrap();
        run(&path, &assign("T1", "3", "2025-01-09", "Not Started"), today).unwrap();

        let updated = run(
            &path,
            &TaskAction::Update {
                name: "T1".to_string(),
                status: "completed".to_string(),
            },
            today,
        )
        .unwrap();
        assert_eq!(updated, "Task 'T1' status updated to 'Completed'. (2 rows)\n");

        let removed = run(
            &path,
            &TaskAction::Remove {
                name: "T1".to_string(),
            },
            today,
        )
        .unwrap();
        assert_eq!(removed, "Task 'T1' removed successfully. (2 rows)\n");
    }

    #[test]
    fn test_unknown_task_and_status_are_errors() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");
        let today = day("2025-01-01");

        let err = run(
            &path,
            &TaskAction::Remove {
                name: "ghost".to_string(),
            },
            today,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Task not found: ghost");

        assert!(run(&path, &assign("T1", "1", "2025-01-02", "Paused"), today).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_overdue_upcoming_summary() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tasks.csv");
        let today = day("2025-01-10");
        run(&path, &assign("Late", "1", "2025-01-01", "In Progress"), today).unwrap();
        run(&path, &assign("Soon", "2", "2025-01-12", "Not Started"), today).unwrap();
        run(&path, &assign("Done", "2", "2025-01-02", "Completed"), today).unwrap();

        let overdue = run(&path, &TaskAction::Overdue { today: None }, today).unwrap();
        assert!(overdue.contains("Late"));
        assert!(!overdue.contains("Done"));

        let upcoming = run(
            &path,
            &TaskAction::Upcoming {
                days: 7,
                today: None,
            },
            today,
        )
        .unwrap();
        assert!(upcoming.contains("Soon"));
        assert!(!upcoming.contains("Late"));

        let summary = run(&path, &TaskAction::Summary, today).unwrap();
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines[2], "Not Started  1");
        assert_eq!(lines[3], "In Progress  1");
        assert_eq!(lines[4], "Completed    1");
    }
}
