//! Whole-file persistence for the expense collection
//!
//! The backing file is read once and rewritten in full on every save.
//! Loading is permissive: a missing file is a first run, and an unreadable
//! or malformed file degrades to an empty collection with a warning.

use std::path::{Path, PathBuf};

use crate::codec::{self, Decoded};
use crate::error::ExpenseResult;
use crate::models::Expense;

use super::file_io::{read_text, write_text_atomic};

/// The file that holds every expense
#[derive(Debug, Clone)]
pub struct ExpenseFile {
    path: PathBuf,
}

impl ExpenseFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the file, surfacing every failure
    ///
    /// A missing file decodes as an empty collection.
    pub fn try_load(&self) -> ExpenseResult<Decoded> {
        match read_text(&self.path)? {
            Some(text) => codec::decode_collection(&text),
            None => Ok(Decoded::default()),
        }
    }

    /// Load the collection, degrading to empty on any failure
    pub fn load(&self) -> Decoded {
        self.try_load().unwrap_or_else(|e| Decoded {
            expenses: Vec::new(),
            warnings: vec![format!(
                "The file {} couldn't be loaded ({}); starting with no expenses",
                self.path.display(),
                e
            )],
        })
    }

    /// Encode and overwrite the whole file
    pub fn save(&self, expenses: &[Expense]) -> ExpenseResult<()> {
        write_text_atomic(&self.path, &codec::encode_collection(expenses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, Money};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_file() -> (TempDir, ExpenseFile) {
        let temp_dir = TempDir::new().unwrap();
        let file = ExpenseFile::new(temp_dir.path().join("expenses.json"));
        (temp_dir, file)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_temp_dir, file) = create_test_file();
        let decoded = file.load();
        assert!(decoded.expenses.is_empty());
        assert!(decoded.warnings.is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let (_temp_dir, file) = create_test_file();
        let expenses = vec![Expense::from_parts(
            ExpenseId::new(3),
            "Pharmacy",
            Money::from_cents(1299),
            ExpenseCategory::Health,
            "2025-03-01T09:15:00",
        )];

        file.save(&expenses).unwrap();
        let decoded = file.load();
        assert_eq!(decoded.expenses, expenses);
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let (_temp_dir, file) = create_test_file();
        fs::write(file.path(), r#"[{"id": 1, "description": "x"}]"#).unwrap();

        assert!(file.try_load().is_err());
        let decoded = file.load();
        assert!(decoded.expenses.is_empty());
        assert_eq!(decoded.warnings.len(), 1);
    }

    #[test]
    fn test_save_to_unwritable_location_fails() {
        let (temp_dir, _) = create_test_file();
        let blocker = temp_dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        let file = ExpenseFile::new(blocker.join("expenses.json"));
        assert!(file.save(&[]).is_err());
    }
}
