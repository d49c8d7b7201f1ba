//! Textual encoding of expenses
//!
//! The expenses file is a flat JSON dialect: an array of objects with the
//! keys `id`, `description`, `amount`, `category` and `date`, one key per
//! line. The amount is written as a quoted two-decimal string.
//!
//! Decoding is forgiving about individual values (an unreadable amount
//! becomes zero, an unknown category becomes General, both with a warning)
//! but a structurally broken object aborts the whole decode.

pub mod lexer;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};

use lexer::{escape, parse_object, split_top_level};

/// Result of decoding a collection
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    /// Expenses in file order
    pub expenses: Vec<Expense>,
    /// Recoverable problems hit while decoding
    pub warnings: Vec<String>,
}

/// Encode one expense as a text object
pub fn encode_expense(expense: &Expense) -> String {
    format!(
        "{{\n\"id\": {},\n\"description\": \"{}\",\n\"amount\": \"{}\",\n\"category\": \"{}\",\n\"date\": \"{}\"\n}}",
        expense.id,
        escape(&expense.description),
        expense.amount.to_fixed(),
        expense.category,
        escape(&expense.date),
    )
}

/// Encode a whole collection as a text array
pub fn encode_collection(expenses: &[Expense]) -> String {
    let objects: Vec<String> = expenses.iter().map(encode_expense).collect();
    format!("[\n{}\n]", objects.join(",\n"))
}

/// Decode one expense object
///
/// Recoverable issues are pushed onto `warnings`.
pub fn decode_expense(text: &str, warnings: &mut Vec<String>) -> ExpenseResult<Expense> {
    let fields = parse_object(text)?;

    let raw_id = fields
        .get("id")
        .ok_or_else(|| ExpenseError::Validation("Stored expense has no id".into()))?;
    let id: ExpenseId = raw_id.parse().map_err(|_| {
        ExpenseError::Validation(format!("Stored expense has an invalid id: {}", raw_id))
    })?;

    let description = fields.get("description").ok_or_else(|| {
        ExpenseError::Validation(format!("Stored expense {} has no description", id))
    })?;

    let raw_amount = fields.get("amount").ok_or_else(|| {
        ExpenseError::Validation(format!("Stored expense {} has no amount", id))
    })?;
    let amount = match Money::parse(raw_amount) {
        Ok(amount) => amount,
        Err(e) => {
            warnings.push(format!(
                "Couldn't parse the amount of expense {} ({}); using 0.00",
                id, e
            ));
            Money::zero()
        }
    };

    let category = match fields.get("category") {
        None => ExpenseCategory::General,
        Some(raw) => ExpenseCategory::parse(raw).unwrap_or_else(|| {
            warnings.push(format!(
                "Unknown category '{}' on expense {}; using GENERAL",
                raw, id
            ));
            ExpenseCategory::General
        }),
    };

    let date = fields.get("date").cloned().unwrap_or_default();

    Ok(Expense::from_parts(id, description.as_str(), amount, category, date))
}

/// Decode a whole collection
pub fn decode_collection(text: &str) -> ExpenseResult<Decoded> {
    let text = text.trim();
    let body = text
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| {
            ExpenseError::Validation("Expenses file is not a bracketed array".into())
        })?;

    let mut decoded = Decoded::default();
    for object in split_top_level(body)? {
        let expense = decode_expense(object, &mut decoded.warnings)?;
        decoded.expenses.push(expense);
    }
    Ok(decoded)
}
