//! Money formatting helpers.
//!
//! All price arithmetic in PrintShop uses [`rust_decimal::Decimal`] so that
//! intermediate computations stay exact. Two-decimal rounding happens only
//! here, at render time.

use rust_decimal::{Decimal, RoundingStrategy};

/// Format a decimal amount as a USD price string, e.g. `$19.99`.
///
/// Rounds half-away-from-zero to two decimal places, then pads to exactly
/// two fractional digits.
#[must_use]
pub fn format_usd(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("${rounded:.2}")
}
