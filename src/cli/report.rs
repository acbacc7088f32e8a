//! Report CLI commands
//!
//! The dashboard summary and the month picker.

use crate::config::Settings;
use crate::error::ExpenseResult;
use crate::models::MonthKey;
use crate::reports::{month_options, DashboardReport, ExpenseFilter};
use crate::storage::Storage;

use super::FilterArgs;

/// Print the dashboard for the current view
///
/// With every month shown, the trend compares the current calendar month
/// against the one before it.
pub fn handle_summary(storage: &Storage, settings: &Settings, filter: FilterArgs) -> ExpenseResult<()> {
    let report = DashboardReport::generate(
        storage.expenses.expenses(),
        ExpenseFilter::from(filter),
        MonthKey::current(),
    );
    print!("{}", report.format_terminal(settings));
    Ok(())
}

/// Print the months that hold expenses, oldest first
pub fn handle_months(storage: &Storage) -> ExpenseResult<()> {
    let options = month_options(storage.expenses.expenses());

    if options.is_empty() {
        println!("No expenses recorded yet.");
        return Ok(());
    }

    for option in options {
        println!("{}  {}", option.key, option.label);
    }
    Ok(())
}
