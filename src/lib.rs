//! Expense Dashboard - terminal expense tracking with spending analytics
//!
//! This library holds an ordered list of expenses and derives everything a
//! spending dashboard shows from it: the view under month and category
//! filters, totals and averages, rounded category shares, a month-over-month
//! trend and the list of months on record.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, categories, months)
//! - `storage`: The expense store and its JSON file persistence
//! - `reports`: Filtering and analytics over the store
//! - `display`: Terminal formatting
//! - `export`: CSV, JSON and YAML export of a view
//! - `cli`: Command handlers for the `expenses` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_dashboard::models::MonthKey;
//! use expense_dashboard::reports::{DashboardReport, ExpenseFilter};
//! use expense_dashboard::storage::seed_expenses;
//!
//! let expenses = seed_expenses();
//! let filter = ExpenseFilter::new().month(MonthKey::new(2024, 4)?);
//! let report = DashboardReport::generate(&expenses, filter, MonthKey::current());
//! println!("{}", report.summary.total);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{ExpenseError, ExpenseResult};
