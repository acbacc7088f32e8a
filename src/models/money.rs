//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so sums, averages and shares are computed
//! exactly. Amounts are expected to carry two decimal places, but the type does
//! not enforce it: an average of two amounts can legitimately carry three.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};
use std::str::FromStr;

/// A monetary amount in a single, implicit currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal value
    ///
    /// # Examples
    /// ```
    /// use expense_dashboard::models::Money;
    /// use rust_decimal_macros::dec;
    /// let amount = Money::new(dec!(10.50));
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal amount
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Divide evenly across `count` entries. Zero entries yield zero.
    pub fn split_evenly(&self, count: usize) -> Self {
        if count == 0 {
            return Self::zero();
        }
        Self(self.0 / Decimal::from(count))
    }

    /// Parse a money amount from user input
    ///
    /// Accepts "10.50", "10", "$10.50", "1,200.00" and a single leading `-`.
    /// Anything past the sign and `$` must be digits, commas and at most one
    /// `.`. Sign and range checks are left to the caller.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(MoneyParseError::Empty);
        }

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest);

        let well_formed = rest.chars().any(|c| c.is_ascii_digit())
            && rest.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.')
            && rest.matches('.').count() <= 1;
        if !well_formed {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }
        let digits: String = rest.chars().filter(|c| *c != ',').collect();

        let value = Decimal::from_str(&digits)
            .map_err(|_| MoneyParseError::InvalidFormat(trimmed.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }

    /// Round to cents, halves away from zero
    pub fn round_to_cents(&self) -> Decimal {
        self.0
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }

    /// Format with a currency symbol, thousands separators and two decimals
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let rounded = self.round_to_cents();
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };
        let text = format!("{:.2}", rounded.abs());
        let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        format!("{}{}{}.{}", sign, symbol, group_thousands(whole), fraction)
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_with_symbol("$"))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    Empty,
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::Empty => write!(f, "Amount is required"),
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
