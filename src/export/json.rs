//! JSON Export functionality
//!
//! Exports a filtered view, with its summary, to JSON format with schema
//! versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{Category, Expense, Money};
use crate::reports::{ExpenseFilter, SpendingSummary};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ViewExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Month filter, `all` or `YYYY-MM`
    pub month: String,

    /// Category filter, `all` or a category name
    pub category: String,

    /// Matching expenses in store order
    pub expenses: Vec<Expense>,

    pub summary: ExportSummary,
}

/// Summary figures of the exported view
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    pub count: usize,
    pub total: Money,
    pub average: Money,
    pub largest: Money,
    pub top_category: Option<Category>,
    /// Category rows, largest first
    pub categories: Vec<ExportCategoryRow>,
    /// Date range of the view (earliest)
    pub earliest_expense: Option<String>,
    /// Date range of the view (latest)
    pub latest_expense: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportCategoryRow {
    pub category: Category,
    pub total: Money,
    pub percent: u32,
}

impl ViewExport {
    /// Build an export of `expenses` as seen through `filter`
    pub fn from_view(expenses: &[Expense], filter: &ExpenseFilter) -> Self {
        let view = filter.apply(expenses);
        let summary = SpendingSummary::from_expenses(&view);

        let categories = summary
            .breakdown()
            .into_iter()
            .map(|row| ExportCategoryRow {
                category: row.category,
                total: row.total,
                percent: row.percent,
            })
            .collect();

        let summary = ExportSummary {
            count: summary.count,
            total: summary.total,
            average: summary.average,
            largest: summary.max,
            top_category: summary.top_category(),
            categories,
            earliest_expense: view.iter().map(|e| e.date).min().map(|d| d.to_string()),
            latest_expense: view.iter().map(|e| e.date).max().map(|d| d.to_string()),
        };

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            month: filter.month.to_string(),
            category: filter.category.to_string(),
            expenses: view,
            summary,
        }
    }
}

/// Export a view to JSON
pub fn export_view_json<W: Write>(
    expenses: &[Expense],
    filter: &ExpenseFilter,
    writer: &mut W,
    pretty: bool,
) -> ExpenseResult<()> {
    let export = ViewExport::from_view(expenses, filter);

    if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    }
    .map_err(|e| ExpenseError::Export(e.to_string()))?;

    Ok(())
}
