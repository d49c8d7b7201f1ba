//! Audit logger for the append-only audit log
//!
//! Each entry is written as a single JSON line and flushed immediately.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Handles writing audit entries to the audit log file (JSONL)
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Create a new AuditLogger that writes to the specified path
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append an entry and flush it
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let json = serde_json::to_string(entry)
            .map_err(|e| ExpenseError::Json(format!("Failed to serialize audit entry: {}", e)))?;

        writeln!(file, "{}", json)
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))?;

        file.flush()
            .map_err(|e| ExpenseError::Io(format!("Failed to flush audit log: {}", e)))?;

        Ok(())
    }

    /// Read all audit entries, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;

        let reader = BufReader::new(file);
        let mut entries = Vec::new();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Failed to read audit log line {}: {}", line_num + 1, e))
            })?;

            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Json(format!(
                    "Failed to parse audit entry at line {}: {}",
                    line_num + 1,
                    e
                ))
            })?;

            entries.push(entry);
        }

        Ok(entries)
    }

    /// Read the most recent N entries from the log
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let all_entries = self.read_all()?;
        let start = all_entries.len().saturating_sub(count);
        Ok(all_entries[start..].to_vec())
    }

    /// Get the path to the audit log file
    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::Operation;
    use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("expenses.audit.log"));
        (logger, temp_dir)
    }

    fn expense(id: u32) -> Expense {
        Expense::from_parts(
            ExpenseId::new(id),
            format!("Expense {}", id),
            Money::from_cents(100),
            ExpenseCategory::General,
            "2025-01-01T00:00:00",
        )
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        logger.log(&AuditEntry::create(&expense(1))).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();
        for i in 1..=10 {
            logger.log(&AuditEntry::create(&expense(i))).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<u32> = recent.iter().map(|e| e.expense_id.value()).collect();
        assert_eq!(ids, vec![8, 9, 10]);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(logger.read_all().unwrap().is_empty());
        assert!(logger.read_recent(5).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_line_is_error() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "not json\n").unwrap();
        assert!(logger.read_all().is_err());
    }

    #[test]
    fn test_survives_restart() {
        let (logger, temp) = create_test_logger();
        logger.log(&AuditEntry::delete(&expense(2))).unwrap();

        let logger2 = AuditLogger::new(temp.path().join("expenses.audit.log"));
        let entries = logger2.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Delete);
    }
}
