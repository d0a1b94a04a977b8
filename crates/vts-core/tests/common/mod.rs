//! Common test utilities for VTS core integration tests.

use std::io::Write;
use tempfile::NamedTempFile;

/// Employee table with a duplicate row, blanks and bad experience values.
pub const EMPLOYEES_CSV: &str = "\
Name,Experience,Job Role,Gender,Skills,Phone Number,Email,Employment Status,Preferences,Performance Rating
Asha,6,Data Engineer,Female,python sql spark,555-0100,asha@vts.io,Full-time,Remote,4
Bruno,3,Analyst,Male,sql excel,555-0101,bruno@vts.io,Full-time,Office,3
Chen,eleven,Developer,,java javascript,,,Contract,,3
Asha,6,Data Engineer,Female,python sql spark,555-0100,asha@vts.io,Full-time,Remote,4
Dana,9,Developer,Female,rust go,555-0103,dana@vts.io,Full-time,Hybrid,4
Eli,,Analyst,Male,,555-0104,eli@vts.io,Part-time,,
";

/// Writes `contents` to a temporary CSV file that lives as long as the handle.
pub fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".csv")
        .tempfile()
        .expect("create temp csv");
    file.write_all(contents.as_bytes()).expect("write temp csv");
    file.flush().expect("flush temp csv");
    file
}
