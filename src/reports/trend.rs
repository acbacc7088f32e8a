//! Month-over-month trend
//!
//! Compares total spending of a reference month against the month before it.
//! Always computed over the whole store, never over a filtered view.

use std::collections::BTreeMap;

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::{Expense, Money, MonthKey};

/// Sum amounts per month across `expenses`
pub fn month_totals(expenses: &[Expense]) -> BTreeMap<MonthKey, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.month_key()).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// How a trend should read to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendTone {
    /// Spending went down, held steady, or there is nothing to compare with
    Positive,
    /// Spending went up
    Negative,
}

/// Spending change between a month and its predecessor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthlyTrend {
    pub reference: MonthKey,
    pub previous: MonthKey,
    pub current_total: Money,
    pub previous_total: Money,
    /// Percentage change; `None` when the previous month has no spending
    pub delta_percent: Option<Decimal>,
}

impl MonthlyTrend {
    /// Compare `reference` with the month before it
    ///
    /// The caller picks the reference month; this never falls back to today.
    pub fn calculate(expenses: &[Expense], reference: MonthKey) -> Self {
        let totals = month_totals(expenses);
        let previous = reference.previous();

        let current_total = totals.get(&reference).copied().unwrap_or_default();
        let previous_total = totals.get(&previous).copied().unwrap_or_default();

        let delta_percent = if previous_total.is_zero() {
            None
        } else {
            Some(
                (current_total.amount() - previous_total.amount()) / previous_total.amount()
                    * dec!(100),
            )
        };

        tracing::debug!(
            %reference,
            %current_total,
            %previous_total,
            ?delta_percent,
            "calculated monthly trend"
        );

        Self {
            reference,
            previous,
            current_total,
            previous_total,
            delta_percent,
        }
    }

    /// Check if there was a baseline to compare against
    pub fn has_baseline(&self) -> bool {
        self.delta_percent.is_some()
    }

    pub fn tone(&self) -> TrendTone {
        match self.delta_percent {
            Some(delta) if delta > Decimal::ZERO => TrendTone::Negative,
            _ => TrendTone::Positive,
        }
    }

    /// Delta as shown on a stat card: `+12.3%`, `-4.0%`, or `N/A`
    pub fn format_delta(&self) -> String {
        match self.delta_percent {
            None => "N/A".to_string(),
            Some(delta) => {
                let rounded =
                    delta.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
                let sign = if delta > Decimal::ZERO { "+" } else { "" };
                format!("{}{:.1}%", sign, rounded)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::reports::test_support::{expense, sample_expenses};

    fn key(s: &str) -> MonthKey {
        s.parse().unwrap()
    }

    #[test]
    fn test_month_totals() {
        let totals = month_totals(&sample_expenses());

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&key("2024-03")], Money::new(dec!(285.79)));
        assert_eq!(totals[&key("2024-04")], Money::new(dec!(1506.55)));
    }

    #[test]
    fn test_trend_against_previous_month() {
        let trend = MonthlyTrend::calculate(&sample_expenses(), key("2024-04"));

        assert_eq!(trend.previous, key("2024-03"));
        assert_eq!(trend.current_total, Money::new(dec!(1506.55)));
        assert_eq!(trend.previous_total, Money::new(dec!(285.79)));
        assert_eq!(trend.format_delta(), "+427.2%");
        assert_eq!(trend.tone(), TrendTone::Negative);
    }

    #[test]
    fn test_no_previous_month_means_no_delta() {
        let expenses = vec![
            expense("Rent", Category::Housing, "1200", "2024-04-01"),
            expense("Groceries", Category::Food, "164.25", "2024-04-06"),
        ];
        let trend = MonthlyTrend::calculate(&expenses, key("2024-04"));

        assert_eq!(trend.previous_total, Money::zero());
        assert_eq!(trend.delta_percent, None);
        assert!(!trend.has_baseline());
        assert_eq!(trend.format_delta(), "N/A");
        assert_eq!(trend.tone(), TrendTone::Positive);
    }

    #[test]
    fn test_reference_month_without_spending() {
        let trend = MonthlyTrend::calculate(&sample_expenses(), key("2024-05"));

        assert_eq!(trend.current_total, Money::zero());
        assert_eq!(trend.previous_total, Money::new(dec!(1506.55)));
        assert_eq!(trend.delta_percent, Some(dec!(-100)));
        assert_eq!(trend.format_delta(), "-100.0%");
        assert_eq!(trend.tone(), TrendTone::Positive);
    }

    #[test]
    fn test_trend_across_year_boundary() {
        let expenses = vec![
            expense("Holiday gifts", Category::Other, "200", "2023-12-20"),
            expense("Gym", Category::Health, "50", "2024-01-05"),
        ];
        let trend = MonthlyTrend::calculate(&expenses, key("2024-01"));

        assert_eq!(trend.previous, key("2023-12"));
        assert_eq!(trend.delta_percent, Some(dec!(-75)));
        assert_eq!(trend.format_delta(), "-75.0%");
    }

    #[test]
    fn test_unchanged_spending() {
        let expenses = vec![
            expense("Rent", Category::Housing, "900", "2024-03-01"),
            expense("Rent", Category::Housing, "900", "2024-04-01"),
        ];
        let trend = MonthlyTrend::calculate(&expenses, key("2024-04"));

        assert_eq!(trend.format_delta(), "0.0%");
        assert_eq!(trend.tone(), TrendTone::Positive);
    }

    #[test]
    fn test_ignores_months_beyond_the_pair() {
        let expenses = vec![
            expense("Old", Category::Other, "1000", "2024-01-15"),
            expense("Base", Category::Other, "100", "2024-03-15"),
            expense("Now", Category::Other, "110", "2024-04-15"),
        ];
        let trend = MonthlyTrend::calculate(&expenses, key("2024-04"));
        assert_eq!(trend.delta_percent, Some(dec!(10)));
        assert_eq!(trend.format_delta(), "+10.0%");
    }
}
