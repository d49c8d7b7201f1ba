//! Expense categories
//!
//! Expenses belong to one of a fixed set of categories. Free-form input is
//! normalized onto that set, with anything unrecognized landing in General.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of expense categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ExpenseCategory {
    #[default]
    General,
    Food,
    Entertainment,
    Health,
    Shopping,
    Bills,
}

impl ExpenseCategory {
    /// All categories, in display order
    pub const ALL: [ExpenseCategory; 6] = [
        ExpenseCategory::General,
        ExpenseCategory::Food,
        ExpenseCategory::Entertainment,
        ExpenseCategory::Health,
        ExpenseCategory::Shopping,
        ExpenseCategory::Bills,
    ];

    /// Strictly parse a category name (trimmed, case-insensitive)
    ///
    /// Returns `None` for anything outside the known set.
    pub fn parse(s: &str) -> Option<Self> {
        let upper = s.trim().to_uppercase();
        Self::ALL.into_iter().find(|c| c.as_str() == upper)
    }

    /// Normalize free-form input to a category, defaulting to General
    pub fn normalize(s: &str) -> Self {
        Self::parse(s).unwrap_or_default()
    }

    /// Canonical upper-case name, as stored on disk
    pub const fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::General => "GENERAL",
            ExpenseCategory::Food => "FOOD",
            ExpenseCategory::Entertainment => "ENTERTAINMENT",
            ExpenseCategory::Health => "HEALTH",
            ExpenseCategory::Shopping => "SHOPPING",
            ExpenseCategory::Bills => "BILLS",
        }
    }

    /// Human-friendly label ("Food")
    pub const fn label(&self) -> &'static str {
        match self {
            ExpenseCategory::General => "General",
            ExpenseCategory::Food => "Food",
            ExpenseCategory::Entertainment => "Entertainment",
            ExpenseCategory::Health => "Health",
            ExpenseCategory::Shopping => "Shopping",
            ExpenseCategory::Bills => "Bills",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
