//! Core data models for the expense tracker
//!
//! Expenses, their categories, and the money type used for amounts.

pub mod category;
pub mod expense;
pub mod money;

pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseId, ExpenseUpdate, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
