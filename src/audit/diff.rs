//! Diff generation for audit logging
//!
//! Summarizes which fields of an expense changed in an update.

use crate::models::Expense;

const MAX_TEXT_LEN: usize = 50;

/// Describe the fields that differ between two versions of an expense
///
/// Returns `None` when nothing changed.
pub fn generate_diff(before: &Expense, after: &Expense) -> Option<String> {
    let mut changes = Vec::new();

    if before.description != after.description {
        changes.push(format!(
            "description: {} -> {}",
            quote(&before.description),
            quote(&after.description)
        ));
    }
    if before.amount != after.amount {
        changes.push(format!(
            "amount: {} -> {}",
            before.amount.to_fixed(),
            after.amount.to_fixed()
        ));
    }
    if before.category != after.category {
        changes.push(format!("category: {} -> {}", before.category, after.category));
    }

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Quote text for display, truncating long values
fn quote(text: &str) -> String {
    if text.chars().count() > MAX_TEXT_LEN {
        let short: String = text.chars().take(MAX_TEXT_LEN - 3).collect();
        format!("\"{}...\"", short)
    } else {
        format!("\"{}\"", text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, Money};

    fn expense() -> Expense {
        Expense::from_parts(
            ExpenseId::new(1),
            "Coffee",
            Money::from_cents(350),
            ExpenseCategory::Food,
            "2025-01-01T08:00:00",
        )
    }

    #[test]
    fn test_amount_change() {
        let before = expense();
        let mut after = before.clone();
        after.amount = Money::from_cents(400);

        let diff = generate_diff(&before, &after).unwrap();
        assert_eq!(diff, "amount: 3.50 -> 4.00");
    }

    #[test]
    fn test_multiple_changes() {
        let before = expense();
        let mut after = before.clone();
        after.description = "Tea".into();
        after.category = ExpenseCategory::General;

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("description: \"Coffee\" -> \"Tea\""));
        assert!(diff.contains("category: FOOD -> GENERAL"));
        assert!(!diff.contains("amount"));
    }

    #[test]
    fn test_no_changes() {
        assert!(generate_diff(&expense(), &expense()).is_none());
    }

    #[test]
    fn test_long_description_truncated() {
        let before = expense();
        let mut after = before.clone();
        after.description = "a".repeat(100);

        let diff = generate_diff(&before, &after).unwrap();
        assert!(diff.contains("...\""));
    }
}
