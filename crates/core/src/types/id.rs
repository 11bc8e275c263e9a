//! Newtype IDs for type-safe entity references.

use serde::{Deserialize, Serialize};

/// Opaque product identifier assigned by the catalog source.
///
/// Catalog ids are strings (the upstream API uses document ids, the fixture
/// set uses short slugs), so this wraps `String` rather than an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new product ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the underlying string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<ProductId> for String {
    fn from(id: ProductId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_display() {
        let id = ProductId::new("biz-cards-standard");
        assert_eq!(id.to_string(), "biz-cards-standard");
        assert_eq!(id.as_str(), "biz-cards-standard");
    }

    #[test]
    fn test_product_id_serde_transparent() {
        let id = ProductId::new("p-1");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"p-1\"");
    }
}
