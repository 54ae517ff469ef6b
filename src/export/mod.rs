//! Export module
//!
//! Builds the downloadable expense export as an in-memory artifact that the
//! presentation layer hands to the user (written to a file of their choice).

pub mod csv;

pub use self::csv::{export_expenses_csv, EXPENSES_CSV_HEADER};

use std::fs;
use std::path::Path;

use crate::error::{ExpenseError, ExpenseResult};
use crate::session::Session;

/// Default file name for the expense export
pub const DEFAULT_EXPORT_FILE_NAME: &str = "expenses.csv";

/// A fully buffered export and the file name to offer it under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Serialize the session ledger to CSV
    pub fn expenses_csv(session: &Session, file_name: impl Into<String>) -> ExpenseResult<Self> {
        let mut bytes = Vec::new();
        export_expenses_csv(session.ledger(), &mut bytes)?;

        Ok(Self {
            file_name: file_name.into(),
            bytes,
        })
    }

    /// Number of data rows (excluding the header)
    pub fn row_count(&self) -> usize {
        self.bytes
            .iter()
            .filter(|b| **b == b'\n')
            .count()
            .saturating_sub(1)
    }

    /// Write the artifact to `path`
    pub fn write_to(&self, path: &Path) -> ExpenseResult<()> {
        fs::write(path, &self.bytes).map_err(|e| {
            ExpenseError::Export(format!("Failed to write {}: {}", path.display(), e))
        })?;
        tracing::info!(path = %path.display(), rows = self.row_count(), "expenses exported");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_artifact_round_trip_to_disk() {
        let mut session = Session::new();
        for day in 1..=3 {
            session.add_expense(
                NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
                Category::Food,
                Money::from_dollars(day as i64),
            );
        }

        let artifact = ExportArtifact::expenses_csv(&session, DEFAULT_EXPORT_FILE_NAME).unwrap();
        assert_eq!(artifact.file_name, "expenses.csv");
        assert_eq!(artifact.row_count(), 3);

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(&artifact.file_name);
        artifact.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Date,Category,Amount\n"));
        assert_eq!(written.lines().count(), 4);
    }

    #[test]
    fn test_write_to_missing_directory_fails() {
        let artifact = ExportArtifact::expenses_csv(&Session::new(), "x.csv").unwrap();
        let temp_dir = TempDir::new().unwrap();
        let err = artifact
            .write_to(&temp_dir.path().join("missing").join("x.csv"))
            .unwrap_err();
        assert!(matches!(err, ExpenseError::Export(_)));
    }
}
