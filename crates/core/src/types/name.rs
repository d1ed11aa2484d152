//! Product display name.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The display name of a product.
///
/// Wishlist identity is keyed on this value: two entries with equal names are
/// the same wishlist item, whatever their product IDs. Comparison is exact and
/// case-sensitive, so `"Chiron"` and `"chiron"` are distinct.
///
/// No validation is applied. An empty name is a legal (if useless) key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Create a product name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the name is empty or only whitespace.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ProductName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
