//! Storage initialization
//!
//! Handles first-run setup and the starter expenses shown on a fresh
//! dashboard.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::config::paths::DashboardPaths;
use crate::error::ExpenseError;
use crate::models::{Category, Expense, Money};

use super::expenses::ExpenseStore;

/// Starter records: (description, category, amount in cents, year, month, day)
const SEED: [(&str, Category, i64, i32, u32, u32); 10] = [
    ("Rent", Category::Housing, 120000, 2024, 4, 1),
    ("Groceries", Category::Food, 16425, 2024, 4, 6),
    ("Gym Membership", Category::Health, 4500, 2024, 4, 4),
    ("Spotify", Category::Subscriptions, 1099, 2024, 3, 24),
    ("Dinner Out", Category::Food, 6850, 2024, 3, 30),
    ("Gas", Category::Transportation, 5280, 2024, 4, 10),
    ("Movie Night", Category::Entertainment, 3200, 2024, 4, 12),
    ("Electricity Bill", Category::Utilities, 8630, 2024, 3, 18),
    ("Coffee", Category::Food, 1250, 2024, 4, 8),
    ("Therapy Session", Category::Health, 12000, 2024, 3, 12),
];

/// The starter expenses, in store order (deliberately not sorted by date)
pub fn seed_expenses() -> Vec<Expense> {
    SEED.iter()
        .filter_map(|&(description, category, cents, y, m, d)| {
            let date = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Expense::new(
                description,
                category,
                Money::new(Decimal::new(cents, 2)),
                date,
            ))
        })
        .collect()
}

/// Initialize storage for a fresh installation
///
/// Writes the starter expenses unless an expense file already exists. Returns
/// whether anything was written.
pub fn initialize_storage(paths: &DashboardPaths) -> Result<bool, ExpenseError> {
    paths.ensure_directories()?;

    if paths.expenses_file().exists() {
        tracing::debug!("expense file already present, skipping seed");
        return Ok(false);
    }

    let store = ExpenseStore::from_expenses(seed_expenses());
    store.save(&paths.expenses_file())?;
    tracing::info!(count = store.len(), "seeded starter expenses");
    Ok(true)
}
