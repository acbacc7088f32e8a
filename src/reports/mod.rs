//! Reports module for the expense dashboard
//!
//! Pure computations over the expense list: view filtering, summary
//! statistics, category shares, the month-over-month trend and the month
//! picker, plus the dashboard report that bundles them.

pub mod dashboard;
pub mod filter;
pub mod months;
pub mod summary;
pub mod trend;

pub use dashboard::{DashboardReport, StatCard};
pub use filter::{filter_expenses, CategoryFilter, ExpenseFilter, MonthFilter};
pub use months::{month_options, MonthOption};
pub use summary::{category_share, CategoryShare, CategoryTotals, SpendingSummary};
pub use trend::{month_totals, MonthlyTrend, TrendTone};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::models::{Category, Expense, Money};

    /// Build an expense from text literals
    pub fn expense(description: &str, category: Category, amount: &str, date: &str) -> Expense {
        Expense::new(
            description,
            category,
            Money::parse(amount).unwrap(),
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        )
    }

    /// The starter expenses
    pub fn sample_expenses() -> Vec<Expense> {
        crate::storage::seed_expenses()
    }
}
