//! Expense model
//!
//! A single recorded expense. New expenses are created by the store, which
//! hands out ids; expenses read back from disk are rebuilt verbatim.

use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::category::ExpenseCategory;
use super::money::Money;
use crate::error::{ExpenseError, ExpenseResult};

/// Timestamp format stamped on new expenses
pub const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Sequential expense identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(u32);

impl ExpenseId {
    /// Wrap a raw id value
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw id value
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ExpenseId {
    type Err = ExpenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .ok()
            .filter(|v| *v > 0)
            .map(Self)
            .ok_or_else(|| ExpenseError::Parse(format!("ID must be a positive number: {}", s)))
    }
}

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, never reused
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount as entered (any sign)
    pub amount: Money,

    /// Category
    pub category: ExpenseCategory,

    /// When the expense was recorded
    pub date: String,
}

impl Expense {
    /// Create a new expense stamped with the current local time
    ///
    /// Fails when the description or amount is missing. The category is
    /// normalized; unknown or missing categories become General.
    pub fn create(
        id: ExpenseId,
        description: Option<&str>,
        amount: Option<Money>,
        category: Option<&str>,
    ) -> ExpenseResult<Self> {
        let (description, amount) = match (description, amount) {
            (Some(d), Some(a)) => (d, a),
            _ => {
                return Err(ExpenseError::Validation(
                    "Description or amount argument is missing".into(),
                ))
            }
        };

        let expense = Self {
            id,
            description: description.to_string(),
            amount,
            category: category.map(ExpenseCategory::normalize).unwrap_or_default(),
            date: Local::now().format(DATE_FORMAT).to_string(),
        };
        expense.validate()?;
        Ok(expense)
    }

    /// Rebuild an expense from stored fields, taking every value verbatim
    pub fn from_parts(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        category: ExpenseCategory,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            category,
            date: date.into(),
        }
    }

    /// Set the category from free-form text
    pub fn set_category(&mut self, category: &str) {
        self.category = ExpenseCategory::normalize(category);
    }

    /// Validate the expense
    pub fn validate(&self) -> ExpenseResult<()> {
        if self.description.trim().is_empty() {
            return Err(ExpenseError::Validation(
                "Description cannot be empty".into(),
            ));
        }
        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} {} [{}]",
            self.id, self.description, self.amount, self.category
        )
    }
}

/// A partial update: `None` leaves the field unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseUpdate {
    pub description: Option<String>,
    pub amount: Option<Money>,
    pub category: Option<String>,
}

impl ExpenseUpdate {
    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }

    /// Apply the supplied fields to an expense
    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(description) = &self.description {
            expense.description = description.clone();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(category) = &self.category {
            expense.set_category(category);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_with_category() {
        let e = Expense::create(
            ExpenseId::new(1),
            Some("Coffee"),
            Some(Money::from_cents(350)),
            Some(" food "),
        )
        .unwrap();

        assert_eq!(e.id.value(), 1);
        assert_eq!(e.description, "Coffee");
        assert_eq!(e.category, ExpenseCategory::Food);
        assert!(chrono::NaiveDateTime::parse_from_str(&e.date, DATE_FORMAT).is_ok());
    }

    #[test]
    fn test_create_defaults_to_general() {
        let e = Expense::create(ExpenseId::new(2), Some("Rent"), Some(Money::from_cents(1)), None)
            .unwrap();
        assert_eq!(e.category, ExpenseCategory::General);

        let e = Expense::create(
            ExpenseId::new(3),
            Some("Trip"),
            Some(Money::from_cents(1)),
            Some("travel"),
        )
        .unwrap();
        assert_eq!(e.category, ExpenseCategory::General);
    }

    #[test]
    fn test_create_requires_description_and_amount() {
        let err = Expense::create(ExpenseId::new(1), None, Some(Money::zero()), None).unwrap_err();
        assert!(err.is_validation());

        let err = Expense::create(ExpenseId::new(1), Some("Coffee"), None, None).unwrap_err();
        assert!(err.is_validation());

        let err =
            Expense::create(ExpenseId::new(1), Some("   "), Some(Money::zero()), None).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_equality_covers_all_fields() {
        let a = Expense::from_parts(
            ExpenseId::new(1),
            "Coffee",
            Money::from_cents(350),
            ExpenseCategory::Food,
            "2025-01-01T10:00:00",
        );
        let mut b = a.clone();
        assert_eq!(a, b);

        b.date = "2025-01-02T10:00:00".into();
        assert_ne!(a, b);
    }

    #[test]
    fn test_update_applies_only_supplied_fields() {
        let mut e = Expense::from_parts(
            ExpenseId::new(1),
            "Coffee",
            Money::from_cents(350),
            ExpenseCategory::Food,
            "2025-01-01T10:00:00",
        );

        let update = ExpenseUpdate {
            amount: Some(Money::from_cents(400)),
            category: Some("bogus".into()),
            ..Default::default()
        };
        assert!(!update.is_empty());
        update.apply_to(&mut e);

        assert_eq!(e.description, "Coffee");
        assert_eq!(e.amount.cents(), 400);
        assert_eq!(e.category, ExpenseCategory::General);
        assert_eq!(e.date, "2025-01-01T10:00:00");
        assert!(ExpenseUpdate::default().is_empty());
    }

    #[test]
    fn test_id_parse() {
        assert_eq!("7".parse::<ExpenseId>().unwrap(), ExpenseId::new(7));
        assert!("abc".parse::<ExpenseId>().is_err());
        assert!("0".parse::<ExpenseId>().is_err());
        assert!("-1".parse::<ExpenseId>().is_err());
    }
}
