//! CLI command for exporting expenses

use clap::ValueEnum;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_full_json, export_full_yaml};
use crate::services::ExpenseService;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV rows, one per expense
    Csv,
    /// JSON with schema version and metadata
    Json,
    /// YAML, human-readable
    Yaml,
}

/// Export every expense to a file, or stdout when no output is given
pub fn handle_export_command(
    service: &ExpenseService<'_>,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    let expenses = service.list_all();

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv => export_expenses_csv(expenses, &mut writer)?,
        ExportFormat::Json => export_full_json(expenses, &mut writer)?,
        ExportFormat::Yaml => export_full_yaml(expenses, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!("Exported {} expenses to: {}", expenses.len(), path.display());
    }

    Ok(())
}
