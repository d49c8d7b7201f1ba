//! CSV export of expenses

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;

/// Write every expense as a CSV row
pub fn export_expenses_csv<W: Write>(expenses: &[Expense], writer: W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Description", "Category", "Amount"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in expenses {
        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.date.clone(),
                expense.description.clone(),
                expense.category.label().to_string(),
                expense.amount.to_fixed(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, Money};

    #[test]
    fn test_export_csv() {
        let expenses = vec![Expense::from_parts(
            ExpenseId::new(1),
            "Dinner, with \"friends\"",
            Money::from_cents(4250),
            ExpenseCategory::Food,
            "2025-01-01T20:00:00",
        )];

        let mut output = Vec::new();
        export_expenses_csv(&expenses, &mut output).unwrap();
        let csv_string = String::from_utf8(output).unwrap();

        assert!(csv_string.starts_with("ID,Date,Description,Category,Amount\n"));
        assert!(csv_string.contains("\"Dinner, with \"\"friends\"\"\""));
        assert!(csv_string.contains("Food,42.50"));
    }

    #[test]
    fn test_export_csv_empty() {
        let mut output = Vec::new();
        export_expenses_csv(&[], &mut output).unwrap();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "ID,Date,Description,Category,Amount\n"
        );
    }
}
