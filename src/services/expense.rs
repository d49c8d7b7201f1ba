//! Expense service
//!
//! Runs the store operations and, after each successful mutation, rewrites
//! the expenses file and appends an audit entry. Persistence problems are
//! handed back to the caller instead of failing the operation: the
//! in-memory state stays usable even when the file could not be written.

use crate::audit::{generate_diff, AuditEntry};
use crate::config::Settings;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, ExpenseUpdate, Money};
use crate::storage::Storage;
use crate::store::ExpenseStore;

/// Outcome of a mutation together with any non-fatal persistence failure
#[derive(Debug)]
pub struct Applied<T> {
    pub value: T,
    /// The expenses file could not be rewritten
    pub save_error: Option<ExpenseError>,
    /// The audit entry could not be appended
    pub audit_error: Option<ExpenseError>,
}

impl<T> Applied<T> {
    fn unsaved(value: T) -> Self {
        Self {
            value,
            save_error: None,
            audit_error: None,
        }
    }

    /// Problems to report to the user
    pub fn warnings(&self) -> Vec<String> {
        let mut warnings = Vec::new();
        if let Some(e) = &self.save_error {
            warnings.push(format!("Expenses couldn't be saved: {}", e));
        }
        if let Some(e) = &self.audit_error {
            warnings.push(format!("Audit log not updated: {}", e));
        }
        warnings
    }
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
    store: ExpenseStore,
    audit_enabled: bool,
    load_warnings: Vec<String>,
}

impl<'a> ExpenseService<'a> {
    /// Load the expenses file into a fresh store
    pub fn load(storage: &'a Storage, settings: &Settings) -> Self {
        let decoded = storage.expenses.load();
        Self {
            storage,
            store: ExpenseStore::from_expenses(decoded.expenses),
            audit_enabled: settings.audit_enabled,
            load_warnings: decoded.warnings,
        }
    }

    /// Wrap an existing store
    pub fn with_store(storage: &'a Storage, store: ExpenseStore, audit_enabled: bool) -> Self {
        Self {
            storage,
            store,
            audit_enabled,
            load_warnings: Vec::new(),
        }
    }

    /// Problems hit while loading (bad amounts, unreadable file, ...)
    pub fn load_warnings(&self) -> &[String] {
        &self.load_warnings
    }

    /// Read-only access to the store
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    /// Add an expense and persist
    pub fn add(
        &mut self,
        description: &str,
        amount: Money,
        category: Option<&str>,
    ) -> ExpenseResult<Applied<Expense>> {
        let expense = self.store.add(description, amount, category)?;
        let entry = AuditEntry::create(&expense);
        Ok(self.persist(expense, entry))
    }

    /// Apply a partial update and persist
    pub fn update(
        &mut self,
        id: ExpenseId,
        update: &ExpenseUpdate,
    ) -> ExpenseResult<Applied<Expense>> {
        let (before, after) = self.store.update(id, update)?;
        let entry = AuditEntry::update(&before, &after, generate_diff(&before, &after));
        Ok(self.persist(after, entry))
    }

    /// Delete an expense and persist
    ///
    /// An unknown id is not an error: the value is `None` and nothing is written.
    pub fn delete(&mut self, id: ExpenseId) -> Applied<Option<Expense>> {
        match self.store.delete(id) {
            Some(expense) => {
                let entry = AuditEntry::delete(&expense);
                self.persist(Some(expense), entry)
            }
            None => Applied::unsaved(None),
        }
    }

    /// All expenses in insertion order
    pub fn list_all(&self) -> &[Expense] {
        self.store.list_all()
    }

    /// Expenses in one category, in insertion order
    pub fn list_by_category(&self, category: ExpenseCategory) -> Vec<&Expense> {
        self.store.list_by_category(category)
    }

    /// Look up an expense by id
    pub fn find_by_id(&self, id: ExpenseId) -> Option<&Expense> {
        self.store.find_by_id(id)
    }

    /// Rewrite the file and log the entry, collecting failures
    fn persist<T>(&self, value: T, entry: AuditEntry) -> Applied<T> {
        let save_error = self.storage.expenses.save(self.store.list_all()).err();
        let audit_error = if self.audit_enabled {
            self.storage.log(&entry).err()
        } else {
            None
        };

        Applied {
            value,
            save_error,
            audit_error,
        }
    }
}
