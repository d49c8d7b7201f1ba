//! In-memory expense store
//!
//! Owns the expense collection (insertion order preserved) and the id
//! generator. Ids only ever grow: loading advances the generator past every
//! id seen, and deleting an expense never frees its id.

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, ExpenseUpdate, Money};

/// The authoritative collection of expenses plus its mutation rules
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    /// `None` once every id up to `u32::MAX` has been handed out or loaded
    next_id: Option<u32>,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store; the first id handed out is 1
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Build a store from previously persisted expenses
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let mut store = Self::new();
        for expense in &expenses {
            store.advance_past(expense.id);
        }
        store.expenses = expenses;
        store
    }

    /// Make sure future ids are strictly greater than `id`
    fn advance_past(&mut self, id: ExpenseId) {
        if let Some(next) = self.next_id {
            if id.value() >= next {
                self.next_id = id.value().checked_add(1);
            }
        }
    }

    /// The id the next added expense will get, if any is left
    pub fn next_id(&self) -> Option<ExpenseId> {
        self.next_id.map(ExpenseId::new)
    }

    /// Add a new expense and return it
    pub fn add(
        &mut self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> ExpenseResult<Expense> {
        let id = self
            .next_id()
            .ok_or_else(|| ExpenseError::Validation("No expense ids left to assign".into()))?;
        let expense = Expense::create(id, Some(description), Some(amount), category)?;
        self.advance_past(expense.id);
        self.expenses.push(expense.clone());
        Ok(expense)
    }

    /// Remove an expense, returning it if it existed
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|e| e.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Apply a partial update, returning the expense before and after it
    ///
    /// An update with no fields is rejected before the lookup; an unknown id
    /// fails with not found. Neither case touches the collection.
    pub fn update(
        &mut self,
        id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<(Expense, Expense)> {
        if update.is_empty() {
            return Err(ExpenseError::Validation(
                "At least one field must be supplied".into(),
            ));
        }

        let expense = self
            .expenses
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;

        let mut updated = expense.clone();
        update.apply_to(&mut updated);
        updated.validate()?;

        let before = std::mem::replace(expense, updated.clone());
        Ok((before, updated))
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> &[Expense] {
        &self.expenses
    }

    /// Expenses in one category, in insertion order
    pub fn list_by_category(&self, category: ExpenseCategory) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    /// Look up an expense by id
    pub fn find_by_id(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Sum of amounts, optionally restricted to one category
    pub fn total(&self, category: Option<ExpenseCategory>) -> Money {
        self.expenses
            .iter()
            .filter(|e| category.map_or(true, |c| e.category == c))
            .map(|e| e.amount)
            .sum()
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
