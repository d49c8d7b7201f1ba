//! YAML export for human-readable backups

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ExpenseExport;
use crate::models::Expense;

/// Export the collection as YAML with a short header comment
pub fn export_full_yaml<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);

    writeln!(writer, "# Expense export")
        .and_then(|_| writeln!(writer, "# Generated: {}", export.exported_at))
        .and_then(|_| writeln!(writer, "# App Version: {}", export.app_version))
        .and_then(|_| writeln!(writer))
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
