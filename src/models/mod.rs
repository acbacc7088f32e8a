//! Core data models for the expense dashboard
//!
//! Expenses, their categories and amounts, and the month keys used to group
//! them.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod month;

pub use category::{Category, CategoryParseError};
pub use expense::{Expense, ExpenseValidationError, MAX_EXPENSE_AMOUNT};
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use month::{MonthKey, MonthParseError};
