//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use crate::models::{Expense, Money};

/// Format a single expense as a block of labelled fields
pub fn format_expense_details(expense: &Expense, symbol: &str) -> String {
    format!(
        "ID:          {}\nDescription: {}\nAmount:      {}\nCategory:    {}\nDate:        {}\n",
        expense.id,
        expense.description,
        expense.amount.format_with_symbol(symbol),
        expense.category.label(),
        expense.date
    )
}

/// Format a list of expenses as a table, optionally followed by a total
pub fn format_expense_table(expenses: &[&Expense], symbol: &str, show_total: bool) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let desc_width = expenses
        .iter()
        .map(|e| e.description.chars().count())
        .max()
        .unwrap_or(11)
        .clamp(11, 40);

    let amounts: Vec<String> = expenses
        .iter()
        .map(|e| e.amount.format_with_symbol(symbol))
        .collect();
    let total: Money = expenses.iter().map(|e| e.amount).sum();
    let total_str = total.format_with_symbol(symbol);
    let amount_width = amounts
        .iter()
        .map(|a| a.chars().count())
        .chain(std::iter::once(total_str.chars().count()))
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<desc_width$}  {:>amount_width$}  {:<13}  {}\n",
        "ID",
        "Description",
        "Amount",
        "Category",
        "Date",
        desc_width = desc_width,
        amount_width = amount_width,
    ));
    output.push_str(&"-".repeat(4 + 2 + desc_width + 2 + amount_width + 2 + 13 + 2 + 19));
    output.push('\n');

    for (expense, amount) in expenses.iter().zip(&amounts) {
        output.push_str(&format!(
            "{:>4}  {:<desc_width$}  {:>amount_width$}  {:<13}  {}\n",
            expense.id.to_string(),
            truncate(&expense.description, desc_width),
            amount,
            expense.category.label(),
            expense.date,
            desc_width = desc_width,
            amount_width = amount_width,
        ));
    }

    if show_total {
        output.push_str(&format!(
            "{:>4}  {:<desc_width$}  {:>amount_width$}\n",
            "",
            format!("Total ({} expenses)", expenses.len()),
            total_str,
            desc_width = desc_width,
            amount_width = amount_width,
        ));
    }

    output
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let short: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", short)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId};

    fn expense(id: u32, description: &str, cents: i64) -> Expense {
        Expense::from_parts(
            ExpenseId::new(id),
            description,
            Money::from_cents(cents),
            ExpenseCategory::Food,
            "2025-01-01T12:00:00",
        )
    }

    #[test]
    fn test_details() {
        let output = format_expense_details(&expense(1, "Coffee", 350), "$");
        assert!(output.contains("ID:          1"));
        assert!(output.contains("Amount:      $3.50"));
        assert!(output.contains("Category:    Food"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(format_expense_table(&[], "$", true), "No expenses found.\n");
    }

    #[test]
    fn test_table_with_total() {
        let a = expense(1, "Coffee", 350);
        let b = expense(2, "Bagel", 225);
        let output = format_expense_table(&[&a, &b], "€", true);

        assert!(output.contains("Coffee"));
        assert!(output.contains("€2.25"));
        assert!(output.contains("Total (2 expenses)"));
        assert!(output.contains("€5.75"));
    }

    #[test]
    fn test_table_without_total_truncates() {
        let long = "x".repeat(60);
        let a = expense(1, &long, 100);
        let output = format_expense_table(&[&a], "$", false);

        assert!(!output.contains("Total"));
        assert!(output.contains("..."));
    }
}
