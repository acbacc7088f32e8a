//! YAML Export functionality
//!
//! Exports a filtered view to YAML format for human reading.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::json::ViewExport;
use crate::models::Expense;
use crate::reports::ExpenseFilter;

/// Export a view to YAML format
pub fn export_view_yaml<W: Write>(
    expenses: &[Expense],
    filter: &ExpenseFilter,
    writer: &mut W,
) -> ExpenseResult<()> {
    let export = ViewExport::from_view(expenses, filter);

    let header = format!(
        "# Expense Dashboard Export\n# Generated: {}\n# Filters: month {}, category {}\n\n",
        export.exported_at, export.month, export.category
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}

/// Read a YAML export back
pub fn read_view_yaml(yaml_str: &str) -> ExpenseResult<ViewExport> {
    serde_yaml::from_str(yaml_str).map_err(|e| ExpenseError::Export(e.to_string()))
}
