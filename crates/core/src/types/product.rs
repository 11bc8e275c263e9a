//! Catalog product type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;

/// A product as served by the catalog source.
///
/// Products are immutable once fetched; cart and wishlist entries hold the
/// product they were created from rather than re-fetching it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier assigned by the catalog source.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Ordered image references. May be empty.
    #[serde(default)]
    pub images: Vec<String>,
    /// Base unit price in USD. Never negative.
    pub price: Decimal,
    /// Units per pack (e.g. business cards sold in sets of 100). At least 1.
    pub set_size: u32,
    /// Units in stock.
    pub stock: u32,
    /// Descriptive text.
    pub description: String,
    /// Category tag, e.g. "marketing".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sub-category tag, e.g. "business-cards".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category: Option<String>,
    /// Shape tag, e.g. "rectangular", "circular", "a4".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Free-form size tag, e.g. "3.5\" x 2\"".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    /// Pre-discount reference price, shown struck through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compare_at_price: Option<Decimal>,
    /// Display discount percentage derived from `compare_at_price`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_percentage: Option<u32>,
}

impl Product {
    /// Whether the product has any units in stock.
    #[must_use]
    pub const fn in_stock(&self) -> bool {
        self.stock > 0
    }

    /// First image reference, if any.
    #[must_use]
    pub fn featured_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}
