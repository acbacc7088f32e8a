//! View filters
//!
//! A view is the subset of the store matching the active month and category
//! filters. Filtering never reorders: the view keeps the store's order.

use std::fmt;
use std::str::FromStr;

use crate::models::{Category, CategoryParseError, Expense, MonthKey, MonthParseError};

const ALL: &str = "all";

/// Month half of a view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    #[default]
    All,
    Month(MonthKey),
}

impl MonthFilter {
    /// Check if an expense passes this filter
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Month(key) => expense.month_key() == *key,
        }
    }

    /// The selected month, or `fallback` when every month is shown
    pub fn selected_or(&self, fallback: MonthKey) -> MonthKey {
        match self {
            Self::All => fallback,
            Self::Month(key) => *key,
        }
    }
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL),
            Self::Month(key) => write!(f, "{}", key),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = MonthParseError;

    /// `"all"` or a `YYYY-MM` key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        MonthKey::parse(s).map(Self::Month)
    }
}

/// Category half of a view filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check if an expense passes this filter
    pub fn matches(&self, expense: &Expense) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => expense.category == *category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "{}", ALL),
            Self::Only(category) => write!(f, "{}", category),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CategoryParseError;

    /// `"all"` or a category name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL) {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// The pair of filters defining a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpenseFilter {
    pub month: MonthFilter,
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    /// A filter that lets everything through
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one month
    pub fn month(mut self, key: MonthKey) -> Self {
        self.month = MonthFilter::Month(key);
        self
    }

    /// Restrict to one category
    pub fn category(mut self, category: Category) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    /// Back to all months and all categories
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check if neither filter is active
    pub fn is_unfiltered(&self) -> bool {
        self.month == MonthFilter::All && self.category == CategoryFilter::All
    }

    /// Check if an expense belongs to the view
    pub fn matches(&self, expense: &Expense) -> bool {
        self.month.matches(expense) && self.category.matches(expense)
    }

    /// Build the view over `expenses`
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        filter_expenses(expenses, self.month, self.category)
    }
}

/// Keep the expenses matching every active filter, in their original order
pub fn filter_expenses(
    expenses: &[Expense],
    month: MonthFilter,
    category: CategoryFilter,
) -> Vec<Expense> {
    expenses
        .iter()
        .filter(|e| month.matches(e) && category.matches(e))
        .cloned()
        .collect()
}
