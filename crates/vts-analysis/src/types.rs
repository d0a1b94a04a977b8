//! Result types for employee analysis.
//!
//! Every analysis returns plain data; drawing charts is left to the caller.

use serde::{Deserialize, Serialize};

// ============================================================================
// Counts and shares
// ============================================================================

/// Number of employees carrying a label (role, gender, skill, rating).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountEntry {
    /// Category label
    pub label: String,
    /// Number of employees in the category
    pub count: usize,
}

/// A count together with its percentage of the total.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Share {
    /// Category label
    pub label: String,
    /// Number of employees in the category
    pub count: usize,
    /// Percentage of all employees (0.0 to 100.0)
    pub percent: f64,
}

// ============================================================================
// Histograms and summaries
// ============================================================================

/// One equal-width histogram bin, `[lower, upper)` except the last which is
/// closed on both ends.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Values falling in the bin
    pub count: usize,
}

/// Average performance rating for one job role.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RatingAverage {
    /// Job role
    pub job_role: String,
    /// Mean rating over rated employees in the role
    pub average: f64,
    /// Number of rated employees in the role
    pub employees: usize,
}

/// Five-number summary of experience for one performance rating.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FiveNumberSummary {
    /// Performance rating the summary describes
    pub rating: u32,
    /// Number of employees with the rating
    pub count: usize,
    /// Smallest value
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Median
    pub median: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest value
    pub max: f64,
}

// ============================================================================
// Cross-tabulation
// ============================================================================

/// Counts of employees per (row label, column label) pair.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossTab {
    /// Row labels in display order
    pub rows: Vec<String>,
    /// Column labels in display order
    pub columns: Vec<String>,
    /// `cells[r][c]` is the count for `rows[r]` × `columns[c]`
    pub cells: Vec<Vec<usize>>,
}

impl CrossTab {
    /// Creates an all-zero table with the given labels.
    pub fn new(rows: Vec<String>, columns: Vec<String>) -> Self {
        let cells = vec![vec![0; columns.len()]; rows.len()];
        Self {
            rows,
            columns,
            cells,
        }
    }

    /// Adds one to the cell for `(row, column)`. Unknown labels are ignored.
    pub fn increment(&mut self, row: &str, column: &str) {
        let r = self.rows.iter().position(|l| l == row);
        let c = self.columns.iter().position(|l| l == column);
        if let (Some(r), Some(c)) = (r, c)
            && let Some(cell) = self.cells.get_mut(r).and_then(|cols| cols.get_mut(c))
        {
            *cell += 1;
        }
    }

    /// Returns the count for `(row, column)`, or 0 for unknown labels.
    pub fn get(&self, row: &str, column: &str) -> usize {
        let r = self.rows.iter().position(|l| l == row);
        let c = self.columns.iter().position(|l| l == column);
        match (r, c) {
            (Some(r), Some(c)) => self.cells[r][c],
            _ => 0,
        }
    }

    /// Sum of all cells.
    pub fn total(&self) -> usize {
        self.cells.iter().flatten().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crosstab_increment_and_get() {
        let mut tab = CrossTab::new(
            vec!["Dev".to_string(), "Analyst".to_string()],
            vec!["F".to_string(), "M".to_string()],
        );
        tab.increment("Dev", "F");
        tab.increment("Dev", "F");
        tab.increment("Analyst", "M");
        tab.increment("Nobody", "M");

        assert_eq!(tab.get("Dev", "F"), 2);
        assert_eq!(tab.get("Analyst", "M"), 1);
        assert_eq!(tab.get("Analyst", "F"), 0);
        assert_eq!(tab.get("Nobody", "M"), 0);
        assert_eq!(tab.total(), 3);
    }

    #[test]
    fn test_empty_crosstab() {
        let tab = CrossTab::default();
        assert_eq!(tab.total(), 0);
        assert!(tab.cells.is_empty());
    }
}
