//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod expense;
pub mod export;
pub mod history;

pub use expense::{handle_expense_command, parse_update_pairs, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::handle_history_command;

/// Print non-fatal problems to stderr
pub fn report_warnings(warnings: &[String]) {
    for warning in warnings {
        eprintln!("Warning: {}", warning);
    }
}
