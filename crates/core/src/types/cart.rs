//! Cart line item type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::product::Product;

/// One cart entry: a single product and its quantity.
///
/// Lines are unique per product id; adding an already-present product merges
/// into the existing line instead of appending a duplicate. Quantity never
/// drops below 1 - removal is an explicit operation, not a decrement to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    /// The product this line was created from.
    pub product: Product,
    /// Units ordered. At least 1.
    pub quantity: u32,
    /// Local references to user-supplied design files attached at add time.
    /// The first add wins; a repeat add never overwrites these.
    #[serde(default)]
    pub design_files: Vec<String>,
}

impl CartItem {
    /// Create a new line, clamping quantity to at least 1.
    #[must_use]
    pub fn new(product: Product, quantity: u32, design_files: Vec<String>) -> Self {
        Self {
            product,
            quantity: quantity.max(1),
            design_files,
        }
    }

    /// Line total at the product's base price (no tier applied).
    ///
    /// Cart-level discounting works on the sum of these; the per-line tiered
    /// price is a separate, non-composing scheme used on the detail view.
    #[must_use]
    pub fn base_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::id::ProductId;

    fn product(price_cents: i64) -> Product {
        Product {
            id: ProductId::new("p-1"),
            title: "Vinyl Banner".to_string(),
            images: Vec::new(),
            price: Decimal::new(price_cents, 2),
            set_size: 1,
            stock: 50,
            description: String::new(),
            category: None,
            sub_category: None,
            shape: None,
            size: None,
            compare_at_price: None,
            discount_percentage: None,
        }
    }

    #[test]
    fn test_new_clamps_quantity() {
        let item = CartItem::new(product(1000), 0, Vec::new());
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_base_total() {
        let item = CartItem::new(product(1000), 12, Vec::new());
        assert_eq!(item.base_total(), Decimal::from(120));
    }
}
