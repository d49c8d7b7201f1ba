//! Path management for the expense tracker
//!
//! Everything lives next to the expenses file. The file itself is chosen by
//! the `--file` flag, then the `EXPENSES_FILE` environment variable, then
//! `expenses.json` in the working directory.

use std::path::{Path, PathBuf};

/// Default name of the expenses file
pub const DEFAULT_FILE_NAME: &str = "expenses.json";

/// Environment variable that overrides the expenses file location
pub const FILE_ENV_VAR: &str = "EXPENSES_FILE";

/// Manages all paths used by the expense tracker
#[derive(Debug, Clone)]
pub struct ExpensePaths {
    /// The expenses file
    data_file: PathBuf,
}

impl Default for ExpensePaths {
    fn default() -> Self {
        Self::new(PathBuf::from(DEFAULT_FILE_NAME))
    }
}

impl ExpensePaths {
    /// Create paths rooted at an explicit expenses file
    pub fn new(data_file: PathBuf) -> Self {
        Self { data_file }
    }

    /// Use the default file name inside `base_dir` (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_FILE_NAME))
    }

    /// Get the expenses file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Directory holding the expenses file and its siblings
    pub fn data_dir(&self) -> PathBuf {
        match self.data_file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.sibling("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.sibling("audit.log")
    }

    /// `<stem>.<suffix>` next to the expenses file
    fn sibling(&self, suffix: &str) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("expenses");
        self.data_dir().join(format!("{}.{}", stem, suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_is_working_directory() {
        let paths = ExpensePaths::default();
        assert_eq!(paths.data_file(), Path::new("expenses.json"));
        assert_eq!(paths.data_dir(), PathBuf::from("."));
        assert_eq!(paths.audit_log(), PathBuf::from("./expenses.audit.log"));
    }

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.data_file(), temp_dir.path().join("expenses.json"));
        assert_eq!(paths.data_dir(), temp_dir.path());
        assert_eq!(
            paths.settings_file(),
            temp_dir.path().join("expenses.config.json")
        );
    }

    #[test]
    fn test_siblings_follow_file_stem() {
        let paths = ExpensePaths::new(PathBuf::from("/tmp/money/2025.json"));
        assert_eq!(paths.audit_log(), PathBuf::from("/tmp/money/2025.audit.log"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/money/2025.config.json")
        );
    }
}
