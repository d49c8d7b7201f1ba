//! Audit logging for expense mutations
//!
//! Every add, update and delete is appended to a line-delimited JSON log
//! next to the expenses file, with before/after snapshots of the expense.
//!
//! - `AuditEntry`: one logged operation
//! - `AuditLogger`: appends entries and reads them back
//! - `generate_diff`: `field: old -> new` summary between two expenses

mod diff;
mod entry;
mod logger;

pub use diff::generate_diff;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
