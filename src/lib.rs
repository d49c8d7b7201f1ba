//! Expense tracker - record, edit, delete and list personal expenses
//!
//! This library provides the core of a single-user expense tracker. Expenses
//! live in memory while a command runs and are persisted to a local text
//! file (a flat JSON dialect) that is rewritten in full after every change.
//!
//! # Architecture
//!
//! - `models`: expense record, categories and money
//! - `codec`: encoding/decoding of the expenses file format
//! - `store`: the in-memory collection and its id generator
//! - `storage`: whole-file persistence and the audit log location
//! - `services`: store operations plus persistence and auditing
//! - `audit`: append-only log of every mutation
//! - `config`: file locations and user settings
//! - `cli`, `display`, `export`: command handlers and output
//!
//! # Example
//!
//! ```rust,ignore
//! use expenses::config::{ExpensePaths, Settings};
//! use expenses::services::ExpenseService;
//! use expenses::storage::Storage;
//!
//! let paths = ExpensePaths::default();
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::new(paths);
//! let mut service = ExpenseService::load(&storage, &settings);
//! service.add("Coffee", "3.50".parse()?, Some("food"))?;
//! ```

pub mod audit;
pub mod cli;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;
pub mod store;

pub use error::{ExpenseError, ExpenseResult};
