//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store and reports.

pub mod expense;
pub mod export;
pub mod report;

use clap::Args;

use crate::reports::{CategoryFilter, ExpenseFilter, MonthFilter};

pub use expense::{handle_add, handle_categories, handle_list, handle_show, AddArgs};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use report::{handle_months, handle_summary};

/// View filters shared by the read commands
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct FilterArgs {
    /// Month to show (YYYY-MM), or "all"
    #[arg(short, long, default_value = "all")]
    pub month: MonthFilter,

    /// Category to show, or "all"
    #[arg(short, long, default_value = "all")]
    pub category: CategoryFilter,
}

impl From<FilterArgs> for ExpenseFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            month: args.month,
            category: args.category,
        }
    }
}
