//! Calendar month keys
//!
//! A [`MonthKey`] groups expenses by the calendar month of their date. Its
//! canonical text form is `YYYY-MM`; because both parts are zero padded, the
//! text form sorts the same way the months do.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A year-month grouping key, e.g. `2024-04`
///
/// Ordering is chronological. Years are expected in `0..=9999` so the text form
/// stays four digits wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// Create a key from a year and a 1-based month
    pub fn new(year: i32, month: u32) -> Result<Self, MonthParseError> {
        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month a calendar date falls in
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month of today's date on the local calendar
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.month
    }

    /// The month immediately before this one
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month immediately after this one
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::of(date) == *self
    }

    /// English month name
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Human label, e.g. "April 2024"
    pub fn label(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Parse the canonical `YYYY-MM` form
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if year.len() != 4 || month.len() != 2 || !all_digits(year) || !all_digits(month) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        Self::new(year, month)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthKey {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
    InvalidMonth(u32),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format: {}. Use YYYY-MM (e.g., 2024-04)", s)
            }
            MonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for MonthParseError {}
