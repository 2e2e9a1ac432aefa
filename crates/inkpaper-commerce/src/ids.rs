//! Newtype identifiers.
//!
//! Product ids are stable strings supplied by the catalog; order numbers are
//! short random integers shown on the confirmation screen.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) for generated order numbers.
pub const ORDER_NUMBER_LIMIT: u32 = 100_000;

/// Unique, stable product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Order confirmation number, displayed as `#<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(u32);

impl OrderNumber {
    /// Wrap an explicit number. Values at or above [`ORDER_NUMBER_LIMIT`] are reduced modulo the limit.
    pub fn new(n: u32) -> Self {
        Self(n % ORDER_NUMBER_LIMIT)
    }

    /// Draw a random order number in `0..ORDER_NUMBER_LIMIT`.
    pub fn random(rng: &mut impl rand::Rng) -> Self {
        Self(rng.random_range(0..ORDER_NUMBER_LIMIT))
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let id = ProductId::new("7");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"7\"");
    }

    #[test]
    fn test_order_number_display() {
        assert_eq!(OrderNumber::new(4821).to_string(), "#4821");
    }

    #[test]
    fn test_random_order_numbers_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            assert!(OrderNumber::random(&mut rng).value() < ORDER_NUMBER_LIMIT);
        }
    }
}
