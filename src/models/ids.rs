//! Strongly-typed expense identifier
//!
//! A UUID newtype so an expense id can't be confused with any other string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Opaque unique identifier of an [`Expense`](super::Expense)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short form used in tables, e.g. `exp-1a2b3c4d`
    pub fn short(&self) -> String {
        format!("{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_unique() {
        let a = ExpenseId::new();
        let b = ExpenseId::new();
        assert_ne!(a, b);
        assert!(!a.as_uuid().is_nil());
    }

    #[test]
    fn test_short_form() {
        let id = ExpenseId::new();
        let short = id.short();
        assert!(short.starts_with("exp-"));
        assert_eq!(short.len(), 12);
    }

    #[test]
    fn test_parse() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: ExpenseId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);

        let prefixed: ExpenseId = format!("exp-{}", uuid_str).parse().unwrap();
        assert_eq!(prefixed, id);
    }

    #[test]
    fn test_serialization() {
        let id = ExpenseId::new();
        let json = serde_json::to_string(&id).unwrap();
        let deserialized: ExpenseId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, deserialized);
    }
}
