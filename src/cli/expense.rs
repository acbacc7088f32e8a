//! Expense CLI commands
//!
//! Recording expenses and listing the current view.

use chrono::{Local, NaiveDate};
use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Category;
use crate::reports::{ExpenseFilter, SpendingSummary};
use crate::storage::Storage;

use super::FilterArgs;

/// Arguments for recording an expense
#[derive(Args, Debug)]
pub struct AddArgs {
    /// What the money was spent on
    pub description: String,

    /// Amount (e.g., "12.50" or "$1,200")
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category (defaults to the configured default category)
    #[arg(short, long)]
    pub category: Option<Category>,

    /// Expense date (YYYY-MM-DD, defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,
}

fn parse_date(text: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", text))
    })
}

/// Record a new expense and persist the store
pub fn handle_add(storage: &mut Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let date = match args.date.as_deref() {
        Some(text) => parse_date(text)?,
        None => Local::now().date_naive(),
    };
    let category = args.category.unwrap_or(settings.default_category);

    let expense = storage
        .expenses
        .add_expense(&args.description, category, &args.amount, date)?;
    storage.save_all()?;

    println!("Added expense");
    print!("{}", format_expense_details(&expense, settings));
    Ok(())
}

/// Print the expenses of the current view
pub fn handle_list(storage: &Storage, settings: &Settings, filter: FilterArgs) -> ExpenseResult<()> {
    let view = ExpenseFilter::from(filter).apply(storage.expenses.expenses());
    print!("{}", format_expense_table(&view, settings));
    Ok(())
}

/// Print one expense
pub fn handle_show(storage: &Storage, settings: &Settings, id: &str) -> ExpenseResult<()> {
    let expense = storage.expenses.find(id)?;
    print!("{}", format_expense_details(expense, settings));
    Ok(())
}

/// Print every category with its total and share in the current view
pub fn handle_categories(
    storage: &Storage,
    settings: &Settings,
    filter: FilterArgs,
) -> ExpenseResult<()> {
    let view = ExpenseFilter::from(filter).apply(storage.expenses.expenses());
    let summary = SpendingSummary::from_expenses(&view);

    println!("{:<16} {:>12} {:>5}", "Category", "Total", "Share");
    println!("{}", "-".repeat(35));
    for &category in Category::all() {
        let total = summary
            .category_totals
            .get(category)
            .unwrap_or_default()
            .format_with_symbol(&settings.currency_symbol);
        println!(
            "{:<16} {:>12} {:>4}%",
            category.name(),
            total,
            summary.category_share(category)
        );
    }

    Ok(())
}
