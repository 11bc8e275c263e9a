//! Plain-text order summaries for the messaging handoff.
//!
//! The rendering is deterministic: the same cart always produces the same
//! byte sequence, so the handoff link is reproducible. Percent-encoding into
//! the messaging URI happens downstream, in the storefront.

use rust_decimal::Decimal;

use crate::pricing::{LineQuote, OrderTotals};
use crate::types::{CartItem, Product, format_usd};

/// Render the full-cart order summary message.
///
/// Returns `None` for an empty cart: checkout must be a no-op rather than
/// producing a summary for zero lines.
#[must_use]
pub fn order_message(items: &[CartItem]) -> Option<String> {
    if items.is_empty() {
        return None;
    }

    let totals = OrderTotals::compute(items);

    let lines = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            format!(
                "{}. {}\n   Qty: {} \u{d7} {} = {}",
                index + 1,
                item.product.title,
                item.quantity,
                format_usd(item.product.price),
                format_usd(item.base_total()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n");

    let mut message = format!(
        "*New Order Request*\n\n{lines}\n\n*Subtotal:* {}",
        format_usd(totals.subtotal)
    );

    if let Some(tier) = &totals.bulk_tier {
        message.push_str(&format!(
            "\n*Bulk Discount ({}):* -{}",
            tier.label,
            format_usd(totals.discount_amount)
        ));
        message.push_str(&format!(
            "\n*Subtotal after discount:* {}",
            format_usd(totals.subtotal_after_discount)
        ));
    }

    message.push_str(&format!(
        "\n*Tax (8%):* {}\n*Total:* {}",
        format_usd(totals.tax),
        format_usd(totals.total)
    ));

    message.push_str(&format!("\n\nTotal Items: {}", totals.total_quantity));
    if let Some(tier) = &totals.bulk_tier {
        message.push_str(&format!(" ({} applied!)", tier.label));
    }

    message.push_str("\n\nPlease confirm my order. Thank you!");

    Some(message)
}

/// Render the single-product quote message used on the detail view.
///
/// Applies only the per-line tiered price - never the cart-level discount.
#[must_use]
pub fn quote_message(product: &Product, quantity: u32, design_file_count: usize) -> String {
    let quote = LineQuote::compute(product.price, quantity);
    let design_note = if design_file_count > 0 {
        format!("I have {design_file_count} design file(s) to upload.")
    } else {
        "I need help with the design.".to_string()
    };

    format!(
        "Hi, I'm interested in:\n\n*{}*\nUnit Price: {}\nQuantity: {}\n\nTotal: {}\n\n{}",
        product.title,
        format_usd(quote.unit_price),
        quantity,
        format_usd(quote.total),
        design_note,
    )
}

/// Savings line shown on the detail view when the tiered price beats base.
#[must_use]
pub fn savings_note(base_price: Decimal, quantity: u32) -> Option<String> {
    let quote = LineQuote::compute(base_price, quantity);
    if quote.savings > Decimal::ZERO {
        Some(format!(
            "You save {} on this order!",
            format_usd(quote.savings)
        ))
    } else {
        None
    }
}
