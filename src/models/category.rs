//! Expense categories
//!
//! A fixed, closed set. The order of [`Category::all`] is the order offered to
//! users when picking a category.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Spending category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    Housing,
    Food,
    Transportation,
    Utilities,
    Health,
    Entertainment,
    Subscriptions,
    Other,
}

impl Category {
    /// Get all categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Housing,
            Self::Food,
            Self::Transportation,
            Self::Utilities,
            Self::Health,
            Self::Entertainment,
            Self::Subscriptions,
            Self::Other,
        ]
    }

    /// Get the display name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Food => "Food",
            Self::Transportation => "Transportation",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Entertainment => "Entertainment",
            Self::Subscriptions => "Subscriptions",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Category {
    type Err = CategoryParseError;

    /// Case-insensitive match on the display name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(name) => write!(
                f,
                "Unknown category '{}'. Expected one of: {}",
                name,
                Category::all()
                    .iter()
                    .map(Category::name)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_categories() {
        let all = Category::all();
        assert_eq!(all.len(), 8);
        assert_eq!(all[0], Category::Housing);
        assert_eq!(all[7], Category::Other);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("food".parse::<Category>().unwrap(), Category::Food);
        assert_eq!(" HEALTH ".parse::<Category>().unwrap(), Category::Health);
        assert_eq!(
            "Subscriptions".parse::<Category>().unwrap(),
            Category::Subscriptions
        );
    }

    #[test]
    fn test_parse_unknown() {
        let err = "Travel".parse::<Category>().unwrap_err();
        assert_eq!(err, CategoryParseError::Unknown("Travel".into()));
        assert!(err.to_string().contains("Housing, Food"));
    }

    #[test]
    fn test_display_round_trip() {
        for category in Category::all() {
            assert_eq!(category.to_string().parse::<Category>().unwrap(), *category);
        }
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Category::Transportation).unwrap();
        assert_eq!(json, "\"Transportation\"");
    }
}
