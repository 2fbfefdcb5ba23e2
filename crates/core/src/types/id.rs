//! Cart line item identifiers.
//!
//! IDs are generated once when an item is added and never reassigned. The
//! format is the current Unix time in milliseconds followed by a random
//! base-36 suffix, e.g. `1760780000000k3j9x0q2a`.

use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of random base-36 characters appended to the timestamp.
const SUFFIX_LEN: usize = 9;

/// Identifier of a single line in the cart.
///
/// Uniqueness is probabilistic: two items added in the same millisecond
/// only collide if their random suffixes match too.
///
/// ```
/// use shelfcart_core::CartItemId;
///
/// let a = CartItemId::generate();
/// let b = CartItemId::generate();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartItemId(String);

impl CartItemId {
    /// Wrap an existing ID string (e.g. one read back from storage).
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh ID from the current time and a random suffix.
    #[must_use]
    pub fn generate() -> Self {
        let millis = chrono::Utc::now().timestamp_millis();
        let mut rng = rand::rng();
        let suffix: String = (0..SUFFIX_LEN)
            .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
            .collect();
        Self(format!("{millis}{suffix}"))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the ID and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CartItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for CartItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for CartItemId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl AsRef<str> for CartItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_generate_format() {
        let id = CartItemId::generate();
        let s = id.as_str();
        // Millisecond timestamps have 13 digits until the year 2286
        assert_eq!(s.len(), 13 + SUFFIX_LEN);
        assert!(s.chars().take(13).all(|c| c.is_ascii_digit()));
        assert!(
            s.chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }

    #[test]
    fn test_generate_is_unique() {
        let ids: HashSet<CartItemId> = (0..500).map(|_| CartItemId::generate()).collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn test_serde_transparent() {
        let id = CartItemId::new("abc123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc123\"");

        let parsed: CartItemId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_display() {
        let id = CartItemId::from("17000xyz");
        assert_eq!(id.to_string(), "17000xyz");
    }
}
