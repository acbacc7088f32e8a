//! Expense store
//!
//! Owns the ordered collection of expenses and its single mutation, and
//! persists it to expenses.json. Order is insertion order with the newest
//! record first; it is not date order.

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, ExpenseId, Money};

use super::file_io::{read_json, write_json_atomic};

/// Serializable expense data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct ExpenseData {
    expenses: Vec<Expense>,
}

/// The ordered, caller-owned collection of expenses
#[derive(Debug, Clone, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `expenses` in the given order
    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        Self { expenses }
    }

    /// All expenses, newest addition first
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    /// Add a new expense to the front of the store
    ///
    /// The description is trimmed and the amount text parsed. Blank
    /// descriptions, unparsable amounts and negative amounts are rejected with
    /// [`ExpenseError::Validation`] and leave the store untouched.
    pub fn add_expense(
        &mut self,
        description: &str,
        category: Category,
        amount_text: &str,
        date: NaiveDate,
    ) -> ExpenseResult<Expense> {
        let amount = Money::parse(amount_text).map_err(|e| {
            tracing::warn!(amount = amount_text, "rejected expense amount");
            ExpenseError::Validation(e.to_string())
        })?;

        let expense = Expense::new(description, category, amount, date);
        expense.validate().map_err(|e| {
            tracing::warn!(error = %e, "rejected expense");
            ExpenseError::Validation(e.to_string())
        })?;

        tracing::info!(
            id = %expense.id,
            category = %expense.category,
            amount = %expense.amount,
            date = %expense.date,
            "added expense"
        );

        self.expenses.insert(0, expense.clone());
        Ok(expense)
    }

    /// Find an expense by id
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|e| e.id == id)
    }

    /// Find an expense by its full id or its short `exp-xxxxxxxx` form
    pub fn find(&self, query: &str) -> ExpenseResult<&Expense> {
        let query = query.trim();
        let found = match query.parse::<ExpenseId>() {
            Ok(id) => self.get(id),
            Err(_) => self.expenses.iter().find(|e| e.id.short() == query),
        };
        found.ok_or_else(|| ExpenseError::expense_not_found(query))
    }

    /// Load the store from a JSON file, or an empty store if it doesn't exist
    ///
    /// Records that fail [`Expense::validate`] are refused with a storage
    /// error, so out-of-range amounts never reach the reports.
    pub fn load(path: &Path) -> ExpenseResult<Self> {
        let data: ExpenseData = read_json(path)?;
        if let Some((expense, err)) = data
            .expenses
            .iter()
            .find_map(|e| e.validate().err().map(|err| (e, err)))
        {
            return Err(ExpenseError::Storage(format!(
                "Invalid expense {} in {}: {}",
                expense.id.short(),
                path.display(),
                err
            )));
        }
        tracing::debug!(path = %path.display(), count = data.expenses.len(), "loaded expenses");
        Ok(Self::from_expenses(data.expenses))
    }

    /// Save the store to a JSON file, keeping store order
    pub fn save(&self, path: &Path) -> ExpenseResult<()> {
        let data = ExpenseData {
            expenses: self.expenses.clone(),
        };
        write_json_atomic(path, &data)?;
        tracing::debug!(path = %path.display(), count = self.expenses.len(), "saved expenses");
        Ok(())
    }
}
