//! JSON export with schema versioning

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, Money};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All expenses, in insertion order
    pub expenses: Vec<Expense>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Summary figures for the exported expenses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub expense_count: usize,

    /// Sum of all amounts, in cents
    pub total: Money,

    /// Earliest recorded date
    pub earliest_expense: Option<String>,

    /// Latest recorded date
    pub latest_expense: Option<String>,
}

impl ExpenseExport {
    /// Build an export from the current collection
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let dates = expenses.iter().map(|e| &e.date).filter(|d| !d.is_empty());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            metadata: ExportMetadata {
                expense_count: expenses.len(),
                total: expenses.iter().map(|e| e.amount).sum(),
                earliest_expense: dates.clone().min().cloned(),
                latest_expense: dates.max().cloned(),
            },
            expenses: expenses.to_vec(),
        }
    }
}

/// Export the collection as pretty JSON
pub fn export_full_json<W: Write>(expenses: &[Expense], writer: &mut W) -> ExpenseResult<()> {
    let export = ExpenseExport::from_expenses(expenses);
    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}
