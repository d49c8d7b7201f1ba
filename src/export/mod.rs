//! Export of the expense collection
//!
//! - CSV: spreadsheet-compatible rows
//! - JSON: machine-readable export with schema version and metadata
//! - YAML: human-readable version of the JSON export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_full_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
