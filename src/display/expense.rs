//! Expense display formatting
//!
//! The expense table in store order, newest entry first.

use crate::config::Settings;
use crate::models::Expense;

use super::report::truncate;

/// Shown in place of the table when the view is empty
pub const EMPTY_TABLE: &str = "No expenses logged for this view.";

/// Format a single expense as a table row
pub fn format_expense_row(expense: &Expense, settings: &Settings) -> String {
    format!(
        "{:<24} {:<15} {:<8} {:>12}",
        truncate(&expense.description, 24),
        expense.category,
        expense.date.format(&settings.date_format).to_string(),
        expense.amount.format_with_symbol(&settings.currency_symbol)
    )
}

/// Format a list of expenses as a table
pub fn format_expense_table(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return format!("{}\n", EMPTY_TABLE);
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<24} {:<15} {:<8} {:>12}\n",
        "Description", "Category", "Date", "Amount"
    ));
    output.push_str(&"-".repeat(62));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, settings));
        output.push('\n');
    }

    output
}

/// Format one expense after it has been recorded
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id.short()));
    output.push_str(&format!("Description: {}\n", expense.description));
    output.push_str(&format!("Category:    {}\n", expense.category));
    output.push_str(&format!("Date:        {}\n", expense.date.format("%Y-%m-%d")));
    output.push_str(&format!(
        "Amount:      {}\n",
        expense.amount.format_with_symbol(&settings.currency_symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn coffee() -> Expense {
        Expense::new(
            "Coffee",
            Category::Food,
            Money::new(dec!(12.50)),
            NaiveDate::from_ymd_opt(2024, 4, 8).unwrap(),
        )
    }

    #[test]
    fn test_row_uses_short_date() {
        let row = format_expense_row(&coffee(), &Settings::default());
        assert!(row.starts_with("Coffee"));
        assert!(row.contains("Food"));
        assert!(row.contains("Apr 8"));
        assert!(row.ends_with("$12.50"));
    }

    #[test]
    fn test_table_keeps_order() {
        let rent = Expense::new(
            "Rent",
            Category::Housing,
            Money::new(dec!(1200)),
            NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
        );
        let text = format_expense_table(&[coffee(), rent], &Settings::default());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("Coffee"));
        assert!(lines[3].starts_with("Rent"));
        assert!(lines[3].contains("$1,200.00"));
    }

    #[test]
    fn test_empty_table() {
        assert_eq!(
            format_expense_table(&[], &Settings::default()).trim_end(),
            EMPTY_TABLE
        );
    }

    #[test]
    fn test_custom_currency_symbol() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            ..Settings::default()
        };
        assert!(format_expense_details(&coffee(), &settings).contains("€12.50"));
    }
}
