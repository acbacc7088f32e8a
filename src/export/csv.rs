//! CSV Export functionality
//!
//! Exports the expenses of a filtered view to CSV, one row per expense.

use serde::Serialize;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Expense;
use crate::reports::ExpenseFilter;

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: String,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Category")]
    category: &'static str,
    #[serde(rename = "Amount")]
    amount: String,
}

/// Export the expenses matching `filter` to CSV
///
/// Returns the number of rows written.
pub fn export_view_csv<W: Write>(
    expenses: &[Expense],
    filter: &ExpenseFilter,
    writer: W,
) -> ExpenseResult<usize> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut count = 0;

    for expense in expenses.iter().filter(|e| filter.matches(e)) {
        csv_writer
            .serialize(CsvRow {
                id: expense.id.to_string(),
                date: expense.date.format("%Y-%m-%d").to_string(),
                description: &expense.description,
                category: expense.category.name(),
                amount: format!("{:.2}", expense.amount.round_to_cents()),
            })
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
        count += 1;
    }

    if count == 0 {
        csv_writer
            .write_record(["ID", "Date", "Description", "Category", "Amount"])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(count)
}
