//! Raw table loading and employee data cleaning.
//!
//! An uploaded employee file is read into a [`RawTable`] of string cells and
//! then cleaned exactly once into [`EmployeeRecord`]s:
//!
//! 1. Exact-duplicate rows are dropped (first occurrence kept)
//! 2. Each remaining row keeps its original 0-based position as its ID
//! 3. Missing cells get documented defaults
//! 4. Experience is coerced to a non-negative number, falling back to 0
//!
//! Cleaning never fails; only reading the file can.

use std::collections::HashSet;
use std::io::{Read, Write};
use std::path::Path;

use crate::types::{EmployeeId, EmployeeRecord, NO_PREFERENCES, UNKNOWN};
use crate::{Error, Result};

/// Column names recognised in employee tables.
pub mod columns {
    /// Employee identifier (written, never read)
    pub const EMPLOYEE_ID: &str = "Employee ID";
    /// Name
    pub const NAME: &str = "Name";
    /// Years of experience
    pub const EXPERIENCE: &str = "Experience";
    /// Job role
    pub const JOB_ROLE: &str = "Job Role";
    /// Gender
    pub const GENDER: &str = "Gender";
    /// Space-separated skills
    pub const SKILLS: &str = "Skills";
    /// Phone number
    pub const PHONE_NUMBER: &str = "Phone Number";
    /// Email
    pub const EMAIL: &str = "Email";
    /// Employment status
    pub const EMPLOYMENT_STATUS: &str = "Employment Status";
    /// Preferences
    pub const PREFERENCES: &str = "Preferences";
    /// Performance rating
    pub const PERFORMANCE_RATING: &str = "Performance Rating";

    /// Column order used when writing cleaned records.
    pub const CLEANED: [&str; 11] = [
        EMPLOYEE_ID,
        NAME,
        EXPERIENCE,
        JOB_ROLE,
        GENDER,
        SKILLS,
        PHONE_NUMBER,
        EMAIL,
        EMPLOYMENT_STATUS,
        PREFERENCES,
        PERFORMANCE_RATING,
    ];
}

/// A table of string cells exactly as uploaded.
///
/// Every row has one cell per header; short rows are padded with empty
/// cells and long rows truncated when the table is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Creates a table, normalising every row to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, String::new());
                row
            })
            .collect();
        Self { headers, rows }
    }

    /// Reads a CSV table with a header row.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(String::from).collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(String::from).collect());
        }

        Ok(Self::new(headers, rows))
    }

    /// Reads a CSV table from a file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io_with_path(e, path))?;
        Self::from_reader(file)
    }

    /// Returns the header row.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the position of `name` in the header row.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}

/// Resolved column positions for one table.
struct ColumnMap {
    name: Option<usize>,
    experience: Option<usize>,
    job_role: Option<usize>,
    gender: Option<usize>,
    skills: Option<usize>,
    phone_number: Option<usize>,
    email: Option<usize>,
    employment_status: Option<usize>,
    preferences: Option<usize>,
    performance_rating: Option<usize>,
}

impl ColumnMap {
    fn resolve(table: &RawTable) -> Self {
        Self {
            name: table.column_index(columns::NAME),
            experience: table.column_index(columns::EXPERIENCE),
            job_role: table.column_index(columns::JOB_ROLE),
            gender: table.column_index(columns::GENDER),
            skills: table.column_index(columns::SKILLS),
            phone_number: table.column_index(columns::PHONE_NUMBER),
            email: table.column_index(columns::EMAIL),
            employment_status: table.column_index(columns::EMPLOYMENT_STATUS),
            preferences: table.column_index(columns::PREFERENCES),
            performance_rating: table.column_index(columns::PERFORMANCE_RATING),
        }
    }
}

fn cell<'a>(row: &'a [String], column: Option<usize>) -> Option<&'a str> {
    column
        .and_then(|i| row.get(i))
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
}

fn text_or(row: &[String], column: Option<usize>, default: &str) -> String {
    cell(row, column).unwrap_or(default).to_string()
}

/// Parses experience, mapping anything non-numeric, non-finite or negative to 0.
pub fn parse_experience(value: Option<&str>) -> f64 {
    value
        .and_then(|v| v.parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

/// Parses a whole-number performance rating. `"4.0"` is accepted, `"4.5"` is not.
///
/// A rejected value is reported as missing, which drops the employee from
/// every rating view in `vts-analysis`.
pub fn parse_performance_rating(value: Option<&str>) -> Option<u32> {
    let rating = value?.parse::<f64>().ok()?;
    if rating.is_finite() && rating >= 0.0 && rating.fract() == 0.0 && rating <= u32::MAX as f64 {
        Some(rating as u32)
    } else {
        None
    }
}

/// Cleans a raw table into employee records.
pub fn clean(table: &RawTable) -> Vec<EmployeeRecord> {
    let map = ColumnMap::resolve(table);
    let mut seen: HashSet<&[String]> = HashSet::with_capacity(table.len());
    let mut records = Vec::with_capacity(table.len());

    for (position, row) in table.rows().iter().enumerate() {
        if !seen.insert(row.as_slice()) {
            tracing::debug!(row = position, "Dropping duplicate row");
            continue;
        }

        records.push(EmployeeRecord {
            id: EmployeeId::new(position),
            name: text_or(row, map.name, UNKNOWN),
            experience: parse_experience(cell(row, map.experience)),
            job_role: text_or(row, map.job_role, UNKNOWN),
            gender: text_or(row, map.gender, UNKNOWN),
            skills: text_or(row, map.skills, ""),
            phone_number: text_or(row, map.phone_number, UNKNOWN),
            email: text_or(row, map.email, UNKNOWN),
            employment_status: text_or(row, map.employment_status, UNKNOWN),
            preferences: text_or(row, map.preferences, NO_PREFERENCES),
            performance_rating: parse_performance_rating(cell(row, map.performance_rating)),
        });
    }

    tracing::debug!(
        rows = table.len(),
        records = records.len(),
        "Cleaned employee table"
    );
    records
}

/// Reads and cleans an employee CSV file.
pub fn load_employees<P: AsRef<Path>>(path: P) -> Result<Vec<EmployeeRecord>> {
    let path = path.as_ref();
    let table = RawTable::from_path(path)?;
    tracing::info!(path = %path.display(), rows = table.len(), "Loaded employee table");
    Ok(clean(&table))
}

/// Writes cleaned records as CSV, header row included even when empty.
pub fn write_employees<W: Write>(records: &[EmployeeRecord], writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(columns::CLEANED)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
