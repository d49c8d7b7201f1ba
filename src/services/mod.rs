//! Business logic layer
//!
//! Services combine the in-memory store with persistence and audit logging.

pub mod expense;

pub use expense::{Applied, ExpenseService};
