//! Storage layer for the expense tracker
//!
//! The expenses file (whole-file text persistence), the audit log, and the
//! JSON helpers shared with settings.

pub mod file_io;
pub mod gateway;

pub use file_io::{read_json, read_text, write_json_atomic, write_text_atomic};
pub use gateway::ExpenseFile;

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::ExpensePaths;
use crate::error::ExpenseResult;

/// Main storage coordinator: the expenses file plus its audit log
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: ExpenseFile,
    pub audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ExpensePaths) -> Self {
        Self {
            expenses: ExpenseFile::new(paths.data_file().to_path_buf()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Append an entry to the audit log
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        self.audit.log(entry)
    }

    /// Check whether the expenses file exists yet
    pub fn is_initialized(&self) -> bool {
        self.paths.data_file().exists()
    }
}
