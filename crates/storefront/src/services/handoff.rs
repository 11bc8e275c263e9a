//! Checkout handoff to the external messaging channel.
//!
//! Checkout does not submit an order anywhere: it renders the deterministic
//! order summary, percent-encodes it, and produces a `wa.me` URI pointing at
//! a fixed recipient. The caller opens the URI in a new context and nothing
//! is awaited or parsed - success is assumed once the link is handed over.

use printshop_core::pricing::summary;
use printshop_core::{CartItem, Product};

use crate::config::CheckoutConfig;

/// A prepared handoff: the plain message and its messaging URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Handoff {
    /// Human-readable order summary.
    pub message: String,
    /// `https://wa.me/{recipient}?text={encoded message}`.
    pub url: String,
}

/// Build the messaging URI for an already-rendered message.
#[must_use]
pub fn handoff_url(config: &CheckoutConfig, message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config.whatsapp_number,
        urlencoding::encode(message)
    )
}

/// Prepare the full-cart checkout handoff.
///
/// Returns `None` for an empty cart: checkout is a no-op, no handoff is
/// produced.
#[must_use]
pub fn cart_checkout(config: &CheckoutConfig, items: &[CartItem]) -> Option<Handoff> {
    let message = summary::order_message(items)?;
    let url = handoff_url(config, &message);
    Some(Handoff { message, url })
}

/// Prepare the single-product order handoff used on the detail view.
#[must_use]
pub fn product_order(
    config: &CheckoutConfig,
    product: &Product,
    quantity: u32,
    design_file_count: usize,
) -> Handoff {
    let message = summary::quote_message(product, quantity, design_file_count);
    let url = handoff_url(config, &message);
    Handoff { message, url }
}
