//! Spending summary
//!
//! Totals, average, largest expense and per-category totals over a view.
//! Every figure is defined for an empty view (zero, or no category).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::RoundingStrategy;
use rust_decimal_macros::dec;

use crate::models::{Category, Expense, Money};

/// Per-category accumulated amounts, in the order categories were first seen
///
/// Only categories with at least one expense in the view have an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryTotals {
    entries: Vec<(Category, Money)>,
}

impl CategoryTotals {
    /// Accumulate amounts per category across a view
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let mut totals = Self::default();
        for expense in expenses {
            totals.add(expense.category, expense.amount);
        }
        totals
    }

    /// Add an amount to a category, creating its entry on first use
    pub fn add(&mut self, category: Category, amount: Money) {
        match self.entries.iter_mut().find(|(c, _)| *c == category) {
            Some((_, total)) => *total += amount,
            None => self.entries.push((category, amount)),
        }
    }

    /// Total for a category, if it appears in the view
    pub fn get(&self, category: Category) -> Option<Money> {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, total)| *total)
    }

    /// Entries in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (Category, Money)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all category totals
    pub fn sum(&self) -> Money {
        self.iter().map(|(_, total)| total).sum()
    }

    /// The category with the largest total
    ///
    /// On a tie the category seen first wins. `None` for an empty view.
    pub fn top_category(&self) -> Option<Category> {
        let mut top: Option<(Category, Money)> = None;
        for (category, total) in self.iter() {
            match top {
                Some((_, best)) if total <= best => {}
                _ => top = Some((category, total)),
            }
        }
        top.map(|(category, _)| category)
    }

    /// Rounded percentage of `total` spent in `category`; 0 if absent
    pub fn share_of(&self, category: Category, total: Money) -> u32 {
        self.get(category)
            .map(|value| category_share(value, total))
            .unwrap_or(0)
    }

    /// Rows for a category breakdown, largest total first
    ///
    /// Equal totals keep their first-seen order. Each share is rounded on its
    /// own, so the shares need not add up to exactly 100.
    pub fn breakdown(&self, total: Money) -> Vec<CategoryShare> {
        let mut rows: Vec<CategoryShare> = self
            .iter()
            .map(|(category, value)| CategoryShare {
                category,
                total: value,
                percent: category_share(value, total),
            })
            .collect();
        rows.sort_by(|a, b| b.total.cmp(&a.total));
        rows
    }
}

/// Percentage of `total` that `value` represents, rounded half up
///
/// Zero when `total` is not positive.
pub fn category_share(value: Money, total: Money) -> u32 {
    if !total.is_positive() {
        return 0;
    }
    let percent = value.amount() / total.amount() * dec!(100);
    percent
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// One row of a category breakdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Whole-number percentage of the view total
    pub percent: u32,
}

/// Summary statistics over a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendingSummary {
    /// Number of expenses in the view
    pub count: usize,
    pub total: Money,
    /// `total / count`, or zero for an empty view
    pub average: Money,
    /// Largest single amount, or zero for an empty view
    pub max: Money,
    pub category_totals: CategoryTotals,
}

impl SpendingSummary {
    /// Summarize a view
    pub fn from_expenses(expenses: &[Expense]) -> Self {
        let total: Money = expenses.iter().map(|e| e.amount).sum();
        let max = expenses
            .iter()
            .map(|e| e.amount)
            .max()
            .unwrap_or_else(Money::zero);

        Self {
            count: expenses.len(),
            total,
            average: total.split_evenly(expenses.len()),
            max,
            category_totals: CategoryTotals::from_expenses(expenses),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// The category with the largest total in the view
    pub fn top_category(&self) -> Option<Category> {
        self.category_totals.top_category()
    }

    /// Rounded share of the view total spent in `category`
    pub fn category_share(&self, category: Category) -> u32 {
        self.category_totals.share_of(category, self.total)
    }

    /// Category rows, largest first
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        self.category_totals.breakdown(self.total)
    }
}
