//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Expenses file location and its sibling files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ExpensePaths;
pub use settings::Settings;
