//! `vts clean`: print the cleaned employee table.

use std::path::Path;
use vts_core::{load_employees, write_employees};

use crate::Result;

/// Loads and cleans `data`, returning the cleaned table as CSV text.
pub fn run(data: &Path) -> Result<String> {
    let records = load_employees(data)?;
    let mut buffer = Vec::new();
    write_employees(&records, &mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_clean_output() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "Name,Experience,Skills\nAnn,4,python\nAnn,4,python\nBen,oops,\n"
        )
        .unwrap();
        file.flush().unwrap();

        let text = run(file.path()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Employee ID,Name,Experience"));
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("0,Ann,4"));
        assert!(lines[2].starts_with("2,Ben,0"));
    }

    #[test]
    fn test_missing_file_is_error() {
        let err = run(Path::new("/no/such/employees.csv")).unwrap_err();
        assert!(err.to_string().contains("/no/such/employees.csv"));
    }
}
