//! Quantity-tiered pricing and order totals.
//!
//! Two independent discount schemes exist by design and never compose:
//!
//! - [`unit_price`] applies a per-line multiplier keyed on that line's
//!   quantity. Used on the product detail view and single-product quotes.
//! - [`bulk_tier`] applies one cart-level rate keyed on the *aggregate*
//!   quantity across all lines, against the sum of base-price line totals.
//!   Used on the cart view and order summaries.
//!
//! All arithmetic is exact `Decimal`; rounding to two decimals happens only
//! when formatting for display.

pub mod summary;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::types::CartItem;

/// Fixed sales tax rate (8%), applied to the post-discount subtotal.
#[must_use]
pub fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Per-line price multiplier for a quantity. Highest threshold met wins.
///
/// | quantity | multiplier |
/// |----------|------------|
/// | >= 100   | 0.80       |
/// | 50-99    | 0.85       |
/// | 25-49    | 0.90       |
/// | 10-24    | 0.95       |
/// | < 10     | 1.00       |
#[must_use]
pub fn quantity_multiplier(quantity: u32) -> Decimal {
    match quantity {
        100.. => Decimal::new(80, 2),
        50..=99 => Decimal::new(85, 2),
        25..=49 => Decimal::new(90, 2),
        10..=24 => Decimal::new(95, 2),
        _ => Decimal::ONE,
    }
}

/// Tiered unit price for a base price at a given quantity.
#[must_use]
pub fn unit_price(base_price: Decimal, quantity: u32) -> Decimal {
    base_price * quantity_multiplier(quantity)
}

/// Per-line quote for the product detail view: tiered unit price, line
/// total, and savings against the base price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LineQuote {
    /// Tiered unit price.
    pub unit_price: Decimal,
    /// `unit_price * quantity`.
    pub total: Decimal,
    /// `(base - unit_price) * quantity`. Never negative; display only when
    /// positive.
    pub savings: Decimal,
}

impl LineQuote {
    /// Compute the quote for a base price and quantity.
    #[must_use]
    pub fn compute(base_price: Decimal, quantity: u32) -> Self {
        let unit = unit_price(base_price, quantity);
        let qty = Decimal::from(quantity);
        Self {
            unit_price: unit,
            total: unit * qty,
            savings: (base_price - unit) * qty,
        }
    }
}

/// A cart-level bulk discount tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkTier {
    /// Minimum aggregate quantity for this tier.
    pub min_quantity: u32,
    /// Discount rate applied once to the raw subtotal.
    pub rate: Decimal,
    /// Display label, e.g. "15% off".
    pub label: &'static str,
}

/// Bulk discount tier for an aggregate cart quantity, if any.
///
/// Thresholds are evaluated highest-first; boundary quantities (10, 25, 50,
/// 100) select the tier they open, not the one below.
#[must_use]
pub fn bulk_tier(total_quantity: u32) -> Option<BulkTier> {
    let (min_quantity, percent, label) = match total_quantity {
        100.. => (100, 20, "20% off"),
        50..=99 => (50, 15, "15% off"),
        25..=49 => (25, 10, "10% off"),
        10..=24 => (10, 5, "5% off"),
        _ => return None,
    };
    Some(BulkTier {
        min_quantity,
        rate: Decimal::new(percent, 2),
        label,
    })
}

/// Aggregate quantity needed to reach the first bulk tier.
const FIRST_TIER_QUANTITY: u32 = 10;

/// Quantity at which the "order more" nudge starts showing.
const INCENTIVE_FLOOR: u32 = 5;

/// Units short of the first bulk tier, when worth surfacing.
///
/// Returns `Some` only when no tier is met and the aggregate quantity is at
/// least 5 (so near-misses get a nudge but trivial carts do not).
#[must_use]
pub const fn units_to_first_tier(total_quantity: u32) -> Option<u32> {
    if total_quantity >= INCENTIVE_FLOOR && total_quantity < FIRST_TIER_QUANTITY {
        Some(FIRST_TIER_QUANTITY - total_quantity)
    } else {
        None
    }
}

/// Derived order totals for a cart.
///
/// Recomputed from cart state on every read; never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTotals {
    /// Aggregate quantity across all lines.
    pub total_quantity: u32,
    /// Sum of base-price line totals.
    pub subtotal: Decimal,
    /// Bulk tier applied, if the aggregate quantity met one.
    pub bulk_tier: Option<BulkTier>,
    /// `subtotal * rate`, or zero without a tier.
    pub discount_amount: Decimal,
    /// `subtotal - discount_amount`.
    pub subtotal_after_discount: Decimal,
    /// `8% * subtotal_after_discount`.
    pub tax: Decimal,
    /// `subtotal_after_discount + tax`.
    pub total: Decimal,
    /// Units short of the first tier, when the nudge applies.
    pub units_to_first_tier: Option<u32>,
}

impl OrderTotals {
    /// Compute totals for a set of cart lines.
    #[must_use]
    pub fn compute(items: &[CartItem]) -> Self {
        let total_quantity: u32 = items.iter().map(|item| item.quantity).sum();
        let subtotal: Decimal = items.iter().map(CartItem::base_total).sum();

        let bulk_tier = bulk_tier(total_quantity);
        let discount_amount = bulk_tier
            .as_ref()
            .map_or(Decimal::ZERO, |tier| subtotal * tier.rate);
        let subtotal_after_discount = subtotal - discount_amount;
        let tax = subtotal_after_discount * tax_rate();
        let total = subtotal_after_discount + tax;

        Self {
            total_quantity,
            subtotal,
            bulk_tier,
            discount_amount,
            subtotal_after_discount,
            tax,
            total,
            units_to_first_tier: units_to_first_tier(total_quantity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Product, ProductId};

    fn product(id: &str, price_cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            title: format!("Product {id}"),
            images: Vec::new(),
            price: Decimal::new(price_cents, 2),
            set_size: 1,
            stock: 1000,
            description: String::new(),
            category: None,
            sub_category: None,
            shape: None,
            size: None,
            compare_at_price: None,
            discount_percentage: None,
        }
    }

    fn line(id: &str, price_cents: i64, quantity: u32) -> CartItem {
        CartItem::new(product(id, price_cents), quantity, Vec::new())
    }

    #[test]
    fn test_unit_price_tier_boundaries() {
        let base = Decimal::from(10);
        assert_eq!(unit_price(base, 9), base);
        assert_eq!(unit_price(base, 10), Decimal::new(95, 1));
        assert_eq!(unit_price(base, 24), Decimal::new(95, 1));
        assert_eq!(unit_price(base, 25), Decimal::new(90, 1));
        assert_eq!(unit_price(base, 49), Decimal::new(90, 1));
        assert_eq!(unit_price(base, 50), Decimal::new(85, 1));
        assert_eq!(unit_price(base, 99), Decimal::new(85, 1));
        assert_eq!(unit_price(base, 100), Decimal::new(80, 1));
        assert_eq!(unit_price(base, 5000), Decimal::new(80, 1));
    }

    #[test]
    fn test_unit_price_non_increasing() {
        let base = Decimal::from(10);
        let mut previous = unit_price(base, 1);
        for quantity in 2..=150 {
            let current = unit_price(base, quantity);
            assert!(current <= previous, "price rose at quantity {quantity}");
            previous = current;
        }
    }

    #[test]
    fn test_line_quote_scenario() {
        // base $10.00, qty 12 -> unit $9.50, total $114.00, savings $6.00
        let quote = LineQuote::compute(Decimal::from(10), 12);
        assert_eq!(quote.unit_price, Decimal::new(95, 1));
        assert_eq!(quote.total, Decimal::new(114, 0));
        assert_eq!(quote.savings, Decimal::from(6));
    }

    #[test]
    fn test_line_quote_savings_never_negative() {
        for quantity in 1..=120 {
            let quote = LineQuote::compute(Decimal::new(799, 2), quantity);
            assert!(quote.savings >= Decimal::ZERO);
        }
    }

    #[test]
    fn test_bulk_tier_selection() {
        let cases: &[(u32, Option<i64>)] = &[
            (9, None),
            (10, Some(5)),
            (24, Some(5)),
            (25, Some(10)),
            (49, Some(10)),
            (50, Some(15)),
            (99, Some(15)),
            (100, Some(20)),
        ];
        for &(quantity, percent) in cases {
            let tier = bulk_tier(quantity);
            match percent {
                None => assert!(tier.is_none(), "unexpected tier at {quantity}"),
                Some(p) => {
                    let tier = tier.unwrap_or_else(|| panic!("missing tier at {quantity}"));
                    assert_eq!(tier.rate, Decimal::new(p, 2), "wrong rate at {quantity}");
                }
            }
        }
    }

    #[test]
    fn test_units_to_first_tier() {
        assert_eq!(units_to_first_tier(4), None);
        assert_eq!(units_to_first_tier(5), Some(5));
        assert_eq!(units_to_first_tier(9), Some(1));
        assert_eq!(units_to_first_tier(10), None);
        assert_eq!(units_to_first_tier(150), None);
    }

    #[test]
    fn test_order_totals_identity() {
        let items = vec![line("a", 1250, 30), line("b", 499, 25)];
        let totals = OrderTotals::compute(&items);
        assert_eq!(totals.tax, totals.subtotal_after_discount * tax_rate());
        assert_eq!(
            totals.total,
            totals.subtotal - totals.discount_amount + totals.tax
        );
    }

    #[test]
    fn test_order_totals_two_line_scenario() {
        // quantities 4 and 8 -> aggregate 12 -> 5% off the combined subtotal
        let items = vec![line("a", 1000, 4), line("b", 500, 8)];
        let totals = OrderTotals::compute(&items);

        assert_eq!(totals.total_quantity, 12);
        assert_eq!(totals.subtotal, Decimal::from(80));
        let tier = totals.bulk_tier.as_ref().expect("5% tier");
        assert_eq!(tier.rate, Decimal::new(5, 2));
        assert_eq!(totals.discount_amount, Decimal::from(4));
        assert_eq!(totals.subtotal_after_discount, Decimal::from(76));
        // tax on the discounted subtotal, not the raw one
        assert_eq!(totals.tax, Decimal::new(608, 2));
        assert_eq!(totals.total, Decimal::new(8208, 2));
        assert_eq!(totals.units_to_first_tier, None);
    }

    #[test]
    fn test_order_totals_no_tier_incentive() {
        let items = vec![line("a", 1000, 3), line("b", 500, 4)];
        let totals = OrderTotals::compute(&items);
        assert!(totals.bulk_tier.is_none());
        assert_eq!(totals.discount_amount, Decimal::ZERO);
        assert_eq!(totals.units_to_first_tier, Some(3));
    }

    #[test]
    fn test_order_totals_empty_cart() {
        let totals = OrderTotals::compute(&[]);
        assert_eq!(totals.total_quantity, 0);
        assert_eq!(totals.subtotal, Decimal::ZERO);
        assert_eq!(totals.total, Decimal::ZERO);
        assert!(totals.bulk_tier.is_none());
        assert_eq!(totals.units_to_first_tier, None);
    }
}
