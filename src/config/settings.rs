//! User settings for the expense tracker
//!
//! Display and logging preferences, stored as JSON next to the expenses file.

use serde::{Deserialize, Serialize};

use super::paths::ExpensePaths;
use crate::error::{ExpenseError, ExpenseResult};
use crate::storage::file_io::{read_json, write_json_atomic};

/// User settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether mutations are recorded in the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether listings end with a total line
    #[serde(default = "default_true")]
    pub show_totals: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            audit_enabled: true,
            show_totals: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &ExpensePaths) -> ExpenseResult<Self> {
        read_json(paths.settings_file()).map_err(|e| {
            ExpenseError::Config(format!("Failed to load settings: {}", e))
        })
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ExpensePaths) -> ExpenseResult<()> {
        write_json_atomic(paths.settings_file(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.currency_symbol, "$");
        assert!(settings.audit_enabled);
        assert!(settings.show_totals);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            currency_symbol: "€".into(),
            audit_enabled: false,
            ..Default::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.currency_symbol, "£");
        assert!(loaded.audit_enabled);
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        fs::write(paths.settings_file(), "{").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, ExpenseError::Config(_)));
    }
}
