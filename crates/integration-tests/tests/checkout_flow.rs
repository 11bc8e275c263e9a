//! End-to-end checkout scenarios: store mutations, derived order totals,
//! and the messaging handoff, all without network.

use printshop_core::pricing::{LineQuote, OrderTotals};
use printshop_core::format_usd;
use printshop_integration_tests::{open_test_store, test_product};
use printshop_storefront::config::CheckoutConfig;
use printshop_storefront::services::handoff;
use rust_decimal::Decimal;

fn checkout_config() -> CheckoutConfig {
    CheckoutConfig {
        whatsapp_number: "16788089383".to_string(),
    }
}

#[test]
fn test_twelve_units_hit_first_tiers() {
    let (mut store, _) = open_test_store();
    store
        .add_to_cart(test_product("yard-sign", 1000), 12, Vec::new())
        .expect("add");

    // Per-line tier: 12 units price at 0.95
    let line = LineQuote::compute(Decimal::new(1000, 2), 12);
    assert_eq!(format_usd(line.unit_price), "$9.50");
    assert_eq!(format_usd(line.total), "$114.00");
    assert_eq!(format_usd(line.savings), "$6.00");

    // Cart-level: subtotal on base prices, 5% bulk tier applied once
    let totals = OrderTotals::compute(store.cart());
    assert_eq!(totals.total_quantity, 12);
    assert_eq!(format_usd(totals.subtotal), "$120.00");
    assert_eq!(
        totals.bulk_tier.map(|tier| tier.label),
        Some("5% off")
    );
    assert_eq!(format_usd(totals.discount_amount), "$6.00");
    assert_eq!(format_usd(totals.subtotal_after_discount), "$114.00");
    assert_eq!(format_usd(totals.tax), "$9.12");
    assert_eq!(format_usd(totals.total), "$123.12");
}

#[test]
fn test_mixed_cart_aggregate_discount() {
    let (mut store, _) = open_test_store();
    store
        .add_to_cart(test_product("flyers", 1000), 4, Vec::new())
        .expect("add");
    store
        .add_to_cart(test_product("stickers", 500), 8, Vec::new())
        .expect("add");

    // 4 + 8 = 12 aggregate units unlocks the 5% cart tier even though
    // neither line reaches a per-line tier on its own quantity.
    let totals = OrderTotals::compute(store.cart());
    assert_eq!(totals.total_quantity, 12);
    assert_eq!(format_usd(totals.subtotal), "$80.00");
    assert_eq!(format_usd(totals.discount_amount), "$4.00");
    assert_eq!(format_usd(totals.tax), "$6.08");
    assert_eq!(format_usd(totals.total), "$82.08");

    // Identity: total = subtotal - discount + tax
    assert_eq!(
        totals.total,
        totals.subtotal - totals.discount_amount + totals.tax
    );
}

#[test]
fn test_incentive_below_first_tier() {
    let (mut store, _) = open_test_store();
    store
        .add_to_cart(test_product("mugs", 1200), 7, Vec::new())
        .expect("add");

    let totals = OrderTotals::compute(store.cart());
    assert!(totals.bulk_tier.is_none());
    assert_eq!(totals.units_to_first_tier, Some(3));
}

#[test]
fn test_empty_cart_checkout_is_noop() {
    let (store, _) = open_test_store();
    assert!(handoff::cart_checkout(&checkout_config(), store.cart()).is_none());
}

#[test]
fn test_checkout_handoff_message_and_url() {
    let (mut store, _) = open_test_store();
    store
        .add_to_cart(test_product("banner", 2500), 10, Vec::new())
        .expect("add");

    let handoff =
        handoff::cart_checkout(&checkout_config(), store.cart()).expect("non-empty cart");

    assert!(handoff.message.starts_with("*New Order Request*"));
    assert!(handoff.message.contains("1. Product banner"));
    assert!(handoff.message.contains("*Subtotal:* $250.00"));
    assert!(handoff.message.contains("*Bulk Discount (5% off):* -$12.50"));
    assert!(handoff.message.contains("*Tax (8%):* $19.00"));
    assert!(handoff.message.contains("*Total:* $256.50"));
    assert!(handoff.message.contains("Total Items: 10 (5% off applied!)"));
    assert!(handoff.message.ends_with("Please confirm my order. Thank you!"));

    assert!(handoff.url.starts_with("https://wa.me/16788089383?text="));
    assert!(!handoff.url.contains(' '));
    assert!(!handoff.url.contains('\n'));
}

#[test]
fn test_checkout_reflects_quantity_updates() {
    let (mut store, _) = open_test_store();
    let product = test_product("posters", 1500);
    store
        .add_to_cart(product.clone(), 2, Vec::new())
        .expect("add");
    store
        .update_quantity(&product.id, 25)
        .expect("update");

    let handoff =
        handoff::cart_checkout(&checkout_config(), store.cart()).expect("non-empty cart");

    // 25 units: item lines stay at base price, the 10% cart tier applies once
    assert!(handoff.message.contains("Qty: 25 \u{d7} $15.00 = $375.00"));
    assert!(handoff.message.contains("*Bulk Discount (10% off):* -$37.50"));
}
