//! Expense model
//!
//! One recorded spending event. Expenses are created once and never edited.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::month::MonthKey;

/// Largest amount a single expense may carry
pub const MAX_EXPENSE_AMOUNT: Money = Money::new(dec!(1000000000000000));

/// A single spending record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    pub category: Category,

    /// Amount spent (never negative)
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// When the record was created
    pub created_at: DateTime<Utc>,
}

impl Expense {
    /// Create a new expense with a fresh id
    ///
    /// The description is stored trimmed. No other checks are made here; see
    /// [`Expense::validate`].
    pub fn new(
        description: impl Into<String>,
        category: Category,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: ExpenseId::new(),
            description: description.into().trim().to_string(),
            category,
            amount,
            date,
            created_at: Utc::now(),
        }
    }

    /// The month this expense is grouped under
    pub fn month_key(&self) -> MonthKey {
        MonthKey::of(self.date)
    }

    /// Validate the expense
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if self.amount.is_negative() {
            return Err(ExpenseValidationError::NegativeAmount(self.amount));
        }

        if self.amount > MAX_EXPENSE_AMOUNT {
            return Err(ExpenseValidationError::AmountTooLarge(self.amount));
        }

        if self.amount.amount().normalize().scale() > 2 {
            return Err(ExpenseValidationError::TooManyDecimals(self.amount.amount()));
        }

        Ok(())
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} [{}] {}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NegativeAmount(Money),
    AmountTooLarge(Money),
    TooManyDecimals(Decimal),
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NegativeAmount(amount) => {
                write!(f, "Amount cannot be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount cannot exceed {} (got {})",
                MAX_EXPENSE_AMOUNT, amount
            ),
            Self::TooManyDecimals(amount) => {
                write!(f, "Amount can have at most 2 decimal places (got {})", amount)
            }
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn april(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 4, day).unwrap()
    }

    #[test]
    fn test_new_trims_description() {
        let expense = Expense::new("  Groceries \n", Category::Food, Money::new(dec!(164.25)), april(6));
        assert_eq!(expense.description, "Groceries");
        assert_eq!(expense.category, Category::Food);
        assert_eq!(expense.amount.amount(), dec!(164.25));
    }

    #[test]
    fn test_month_key() {
        let expense = Expense::new("Rent", Category::Housing, Money::new(dec!(1200)), april(1));
        assert_eq!(expense.month_key().to_string(), "2024-04");
    }

    #[test]
    fn test_validate() {
        let ok = Expense::new("Rent", Category::Housing, Money::new(dec!(1200)), april(1));
        assert!(ok.validate().is_ok());

        let free = Expense::new("Sample", Category::Other, Money::zero(), april(1));
        assert!(free.validate().is_ok());

        let blank = Expense::new("   ", Category::Other, Money::new(dec!(1)), april(1));
        assert_eq!(blank.validate(), Err(ExpenseValidationError::EmptyDescription));

        let refund = Expense::new("Refund", Category::Other, Money::new(dec!(-5)), april(1));
        assert!(matches!(
            refund.validate(),
            Err(ExpenseValidationError::NegativeAmount(_))
        ));
    }

    #[test]
    fn test_validate_amount_bounds() {
        let at_limit = Expense::new("Jet", Category::Other, MAX_EXPENSE_AMOUNT, april(1));
        assert!(at_limit.validate().is_ok());
        assert_eq!(MAX_EXPENSE_AMOUNT.amount(), dec!(1000000000000000));

        let huge = Expense::new(
            "Huge",
            Category::Other,
            Money::new(dec!(50000000000000000000000000000)),
            april(1),
        );
        assert!(matches!(
            huge.validate(),
            Err(ExpenseValidationError::AmountTooLarge(_))
        ));

        let fractional = Expense::new("Tiny", Category::Other, Money::new(dec!(0.001)), april(1));
        assert!(matches!(
            fractional.validate(),
            Err(ExpenseValidationError::TooManyDecimals(_))
        ));

        let padded = Expense::new("Padded", Category::Other, Money::new(dec!(5.000)), april(1));
        assert!(padded.validate().is_ok());
    }

    #[test]
    fn test_display() {
        let expense = Expense::new("Coffee", Category::Food, Money::new(dec!(12.5)), april(8));
        assert_eq!(expense.to_string(), "2024-04-08 Coffee [Food] $12.50");
    }

    #[test]
    fn test_serialization() {
        let expense = Expense::new("Gas", Category::Transportation, Money::new(dec!(52.8)), april(10));
        let json = serde_json::to_string(&expense).unwrap();
        let deserialized: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(expense, deserialized);
    }
}
