//! Expense CLI commands
//!
//! Implements add, update, delete and the list verbs.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, ExpenseUpdate, Money};
use crate::services::ExpenseService;

use super::report_warnings;

/// Expense commands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount (e.g., "3.50" or "3,50")
        #[arg(allow_hyphen_values = true)]
        amount: Money,
        /// general, food, entertainment, health, shopping or bills
        category: Option<String>,
    },

    /// Change fields of an expense: update <id> <field> <value> [<field> <value> ...]
    ///
    /// Fields are description, amount and category. A value of `null`
    /// leaves that field unchanged.
    Update {
        /// Expense ID
        id: String,
        /// Field/value pairs
        #[arg(num_args = 0.., allow_hyphen_values = true)]
        pairs: Vec<String>,
    },

    /// Delete an expense
    Delete {
        /// Expense ID
        #[arg(allow_hyphen_values = true)]
        id: String,
    },

    /// List every expense
    ListAll,
    /// List General expenses
    ListGeneral,
    /// List Food expenses
    ListFood,
    /// List Entertainment expenses
    ListEntertainment,
    /// List Health expenses
    ListHealth,
    /// List Shopping expenses
    ListShopping,
    /// List Bills expenses
    ListBills,
}

/// Turn `<field> <value>` pairs into a partial update
///
/// `null` (any case) as a value leaves the field unchanged.
pub fn parse_update_pairs(pairs: &[String]) -> ExpenseResult<ExpenseUpdate> {
    if pairs.is_empty() || pairs.len() % 2 != 0 {
        return Err(ExpenseError::Validation(
            "You must pass pairs <field> <value> (fields: description | amount | category)".into(),
        ));
    }

    let mut update = ExpenseUpdate::default();
    for pair in pairs.chunks(2) {
        let (field, value) = (pair[0].to_lowercase(), pair[1].as_str());
        let value = if value.eq_ignore_ascii_case("null") {
            None
        } else {
            Some(value)
        };

        match field.as_str() {
            "description" => update.description = value.map(str::to_string),
            "amount" => {
                update.amount = value
                    .map(|v| {
                        Money::parse(v).map_err(|_| {
                            ExpenseError::Parse(format!(
                                "'amount' must be numeric. Received: {}",
                                v
                            ))
                        })
                    })
                    .transpose()?
            }
            "category" => update.category = value.map(str::to_string),
            other => {
                return Err(ExpenseError::Validation(format!(
                    "Invalid field: {}. Use: description | amount | category",
                    other
                )))
            }
        }
    }

    Ok(update)
}

/// Handle an expense command
pub fn handle_expense_command(
    service: &mut ExpenseService<'_>,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> ExpenseResult<()> {
    let symbol = settings.currency_symbol.as_str();

    match cmd {
        ExpenseCommands::Add {
            description,
            amount,
            category,
        } => {
            let applied = service.add(&description, amount, category.as_deref())?;
            let expense = &applied.value;
            println!(
                "Added expense #{}: {} ({}, {})",
                expense.id,
                expense.description,
                expense.amount.format_with_symbol(symbol),
                expense.category.label()
            );
            report_warnings(&applied.warnings());
        }

        ExpenseCommands::Update { id, pairs } => {
            // Usage problems and unknown ids are reported, not fatal
            if let Err(e) = handle_update(service, symbol, &id, &pairs) {
                println!("Error updating the expense: {}", e);
            }
        }

        ExpenseCommands::Delete { id } => handle_delete(service, &id),

        ExpenseCommands::ListAll => {
            let expenses: Vec<&Expense> = service.list_all().iter().collect();
            print!(
                "{}",
                format_expense_table(&expenses, symbol, settings.show_totals)
            );
        }

        ExpenseCommands::ListGeneral => list_category(service, settings, ExpenseCategory::General),
        ExpenseCommands::ListFood => list_category(service, settings, ExpenseCategory::Food),
        ExpenseCommands::ListEntertainment => {
            list_category(service, settings, ExpenseCategory::Entertainment)
        }
        ExpenseCommands::ListHealth => list_category(service, settings, ExpenseCategory::Health),
        ExpenseCommands::ListShopping => {
            list_category(service, settings, ExpenseCategory::Shopping)
        }
        ExpenseCommands::ListBills => list_category(service, settings, ExpenseCategory::Bills),
    }

    Ok(())
}

fn handle_update(
    service: &mut ExpenseService<'_>,
    symbol: &str,
    id: &str,
    pairs: &[String],
) -> ExpenseResult<()> {
    let id: ExpenseId = id.parse()?;
    let update = parse_update_pairs(pairs)?;
    let applied = service.update(id, &update)?;

    println!("Expense with id {} updated successfully", id);
    print!("{}", format_expense_details(&applied.value, symbol));
    report_warnings(&applied.warnings());
    Ok(())
}

/// Ids that can never exist (zero, negative, too large) are reported like
/// any other unknown id
fn handle_delete(service: &mut ExpenseService<'_>, raw: &str) {
    let Ok(number) = raw.trim().parse::<i64>() else {
        println!("Error deleting the expense: ID must be a number: {}", raw);
        return;
    };

    let existing = u32::try_from(number)
        .ok()
        .filter(|v| *v > 0)
        .map(ExpenseId::new);
    let applied = match existing {
        Some(id) => service.delete(id),
        None => {
            println!("ID: {} doesn't exist.", number);
            return;
        }
    };

    match &applied.value {
        Some(expense) => println!("Expense with id {} deleted successfully", expense.id),
        None => println!("ID: {} doesn't exist.", number),
    }
    report_warnings(&applied.warnings());
}

fn list_category(service: &ExpenseService<'_>, settings: &Settings, category: ExpenseCategory) {
    let expenses = service.list_by_category(category);
    println!("{} expenses", category.label());
    print!(
        "{}",
        format_expense_table(&expenses, &settings.currency_symbol, settings.show_totals)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_all_fields() {
        let update = parse_update_pairs(&pairs(&[
            "description",
            "Dinner",
            "AMOUNT",
            "12,50",
            "category",
            "food",
        ]))
        .unwrap();

        assert_eq!(update.description.as_deref(), Some("Dinner"));
        assert_eq!(update.amount, Some(Money::from_cents(1250)));
        assert_eq!(update.category.as_deref(), Some("food"));
    }

    #[test]
    fn test_null_leaves_field_unchanged() {
        let update =
            parse_update_pairs(&pairs(&["description", "NULL", "amount", "3"])).unwrap();
        assert!(update.description.is_none());
        assert_eq!(update.amount, Some(Money::from_cents(300)));

        let update = parse_update_pairs(&pairs(&["amount", "null"])).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_odd_pairs_rejected() {
        let err = parse_update_pairs(&pairs(&["description"])).unwrap_err();
        assert!(err.is_validation());
        assert!(parse_update_pairs(&[]).unwrap_err().is_validation());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = parse_update_pairs(&pairs(&["date", "today"])).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Invalid field: date"));
    }

    #[test]
    fn test_bad_amount_rejected() {
        let err = parse_update_pairs(&pairs(&["amount", "lots"])).unwrap_err();
        assert!(err.is_parse());
        assert!(err.to_string().contains("Received: lots"));
    }
}
