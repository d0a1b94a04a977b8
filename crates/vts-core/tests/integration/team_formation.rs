//! End-to-end team formation tests.

use crate::common::{EMPLOYEES_CSV, csv_file};
use vts_core::{
    Error, TeamAllocator, TeamParams, filter_candidates, form_teams, load_employees,
    write_employees,
};

#[test]
fn test_load_cleans_uploaded_file() {
    let file = csv_file(EMPLOYEES_CSV);
    let records = load_employees(file.path()).unwrap();

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Bruno", "Chen", "Dana", "Eli"]);

    let ids: Vec<usize> = records.iter().map(|r| r.id.position()).collect();
    assert_eq!(ids, vec![0, 1, 2, 4, 5]);

    let chen = &records[2];
    assert_eq!(chen.experience, 0.0);
    assert_eq!(chen.gender, "Unknown");
    assert_eq!(chen.preferences, "None");

    let eli = &records[4];
    assert_eq!(eli.skills, "");
    assert_eq!(eli.performance_rating, None);
}

#[test]
fn test_end_to_end_allocation() {
    let file = csv_file(EMPLOYEES_CSV);
    let records = load_employees(file.path()).unwrap();

    let params = TeamParams::from_input(2, 2, "sql, java, cobol")
        .unwrap()
        .with_seed(2024);
    let filtered = filter_candidates(&records, params.required_skills());
    let names: Vec<&str> = filtered.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Bruno", "Chen"]);

    let allocation = form_teams(&filtered, &params);
    assert_eq!(allocation.teams.len(), 2);
    // sql: Asha, Bruno; java: Chen (javascript matches too, once per skill)
    assert_eq!(allocation.total_members(), 3);
    assert_eq!(allocation.teams[0].len(), 2);
    assert_eq!(allocation.teams[1].len(), 1);

    let warnings: Vec<String> = allocation.warnings.iter().map(|w| w.message()).collect();
    assert_eq!(
        warnings,
        vec!["No candidates with the skill cobol available in the dataset."]
    );
}

#[test]
fn test_seeded_runs_repeat() {
    let file = csv_file(EMPLOYEES_CSV);
    let records = load_employees(file.path()).unwrap();
    let params = TeamParams::from_input(3, 1, "sql, python, go").unwrap();

    let first = TeamAllocator::seeded(77).allocate(&records, &params);
    let second = TeamAllocator::seeded(77).allocate(&records, &params);
    assert_eq!(first, second);
}

#[test]
fn test_invalid_params_rejected_before_allocation() {
    let err = TeamParams::from_input(0, 2, "sql").unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
    assert!(err.is_input_error());
}

#[test]
fn test_cleaned_table_roundtrips_through_writer() {
    let file = csv_file(EMPLOYEES_CSV);
    let records = load_employees(file.path()).unwrap();

    let mut out = Vec::new();
    write_employees(&records, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();

    assert_eq!(text.lines().count(), records.len() + 1);
    assert!(text.contains("Employee ID"));
    assert!(text.contains("Chen,0.0,Developer,Unknown"));
}
