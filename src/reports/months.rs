//! Selectable months
//!
//! The months that actually hold expenses, oldest first, for populating a
//! month filter. Empty months in between are left out.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::{Expense, MonthKey};

/// One entry of the month filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub key: MonthKey,
    /// e.g. "April 2024"
    pub label: String,
}

/// Distinct months present in `expenses`, in ascending order
pub fn month_options(expenses: &[Expense]) -> Vec<MonthOption> {
    expenses
        .iter()
        .map(Expense::month_key)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(|key| MonthOption {
            key,
            label: key.label(),
        })
        .collect()
}
