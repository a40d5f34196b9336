//! Store-assigned row identity

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Integer identity of a Recipes or Ingredients row.
///
/// Always positive; the store assigns ids starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Validate an integer id supplied in a request body.
    pub fn new(field: &'static str, value: i64) -> Result<Self, ValidationError> {
        if value <= 0 {
            return Err(ValidationError::InvalidFormat {
                field,
                reason: "must be a positive integer",
            });
        }
        Ok(Self(value))
    }

    /// Parse an id taken from a path segment.
    ///
    /// # Example
    /// ```
    /// use recipe_server::models::EntityId;
    ///
    /// assert!(EntityId::parse("id", "42").is_ok());
    /// assert!(EntityId::parse("id", "abc").is_err());
    /// assert!(EntityId::parse("id", "0").is_err());
    /// ```
    pub fn parse(field: &'static str, raw: &str) -> Result<Self, ValidationError> {
        let value = raw.trim().parse::<i64>().map_err(|_| ValidationError::InvalidFormat {
            field,
            reason: "must be a positive integer",
        })?;
        Self::new(field, value)
    }

    /// Wrap an id handed back by the store.
    pub(crate) fn from_store(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        assert_eq!(EntityId::parse("id", "7").unwrap().get(), 7);
        assert_eq!(EntityId::parse("id", " 12 ").unwrap().get(), 12);
    }

    #[test]
    fn rejects_malformed() {
        for raw in ["", "abc", "1.5", "-3", "0", "99999999999999999999"] {
            let err = EntityId::parse("id", raw).unwrap_err();
            assert!(matches!(err, ValidationError::InvalidFormat { field: "id", .. }), "{raw}");
        }
    }

    #[test]
    fn serializes_as_bare_integer() {
        let id = EntityId::new("id", 3).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "3");
    }
}
