//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a user row.
///
/// User ids are opaque strings assigned outside this system. Any string is
/// representable (including the empty string, which simply matches no row);
/// use [`UserId::parse`] where an id must be present.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse a user-supplied id, rejecting empty input.
    ///
    /// The text is kept verbatim: `" u1"` and `"u1"` are different rows.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.is_empty() {
            return Err(DomainError::invalid_id("UserId: must not be empty"));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_surrounding_whitespace() {
        let id = UserId::parse(" u1").unwrap();
        assert_eq!(id.as_str(), " u1");
        assert_ne!(id, UserId::new("u1"));
        assert_eq!("  ".parse::<UserId>().unwrap().as_str(), "  ");
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(UserId::parse(""), Err(DomainError::InvalidId(_))));
        assert!(matches!("".parse::<UserId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn new_accepts_empty_string() {
        let id = UserId::new("");
        assert!(id.is_empty());
        assert_eq!(id.to_string(), "");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_value(UserId::new("u1")).unwrap();
        assert_eq!(json, serde_json::json!("u1"));
    }
}
