//! Cart route handlers.
//!
//! Reads recompute all derived pricing from cart state; nothing priced is
//! ever stored. Mutations lock the store, run synchronously, and never hold
//! the lock across an await point, so catalog lookups happen first.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printshop_core::pricing::{LineQuote, OrderTotals};
use printshop_core::{CartItem, Product, ProductId, format_usd};

use crate::error::Result;
use crate::services::handoff;
use crate::services::uploads::{self, DesignFile};
use crate::state::AppState;

/// One cart line with its tier-priced amounts.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineView {
    pub product: Product,
    pub quantity: u32,
    pub design_files: Vec<String>,
    pub unit_price: String,
    pub line_total: String,
    /// Present only when the tiered unit price beats the base price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        let line = LineQuote::compute(item.product.price, item.quantity);
        Self {
            product: item.product.clone(),
            quantity: item.quantity,
            design_files: item.design_files.clone(),
            unit_price: format_usd(line.unit_price),
            line_total: format_usd(line.total),
            savings: (line.savings > Decimal::ZERO).then(|| format_usd(line.savings)),
        }
    }
}

/// Cart-level totals: base-price subtotal, bulk discount, tax, total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalsView {
    pub total_quantity: u32,
    pub subtotal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<String>,
    pub subtotal_after_discount: String,
    pub tax: String,
    pub total: String,
}

/// Full cart state plus derived pricing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartView {
    pub items: Vec<CartLineView>,
    pub totals: TotalsView,
    /// Nudge towards the first bulk tier, shown from 5 aggregate units up.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incentive: Option<String>,
}

impl CartView {
    fn build(items: &[CartItem]) -> Self {
        let totals = OrderTotals::compute(items);
        Self {
            items: items.iter().map(CartLineView::from).collect(),
            incentive: totals.units_to_first_tier.map(|remaining| {
                format!("Add {remaining} more item(s) to unlock 5% off!")
            }),
            totals: TotalsView {
                total_quantity: totals.total_quantity,
                subtotal: format_usd(totals.subtotal),
                discount_label: totals.bulk_tier.map(|tier| tier.label.to_string()),
                discount_amount: (totals.discount_amount > Decimal::ZERO)
                    .then(|| format_usd(totals.discount_amount)),
                subtotal_after_discount: format_usd(totals.subtotal_after_discount),
                tax: format_usd(totals.tax),
                total: format_usd(totals.total),
            },
        }
    }
}

/// Add to cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
    pub quantity: Option<u32>,
    #[serde(default)]
    pub design_files: Vec<DesignFile>,
}

/// Add to cart response: the updated cart plus any design-file advisories.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartResponse {
    pub cart: CartView,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Update quantity request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    pub product_id: String,
    pub quantity: u32,
}

/// Remove from cart request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    pub product_id: String,
}

/// Checkout handoff response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub message: String,
    pub url: String,
}

/// Current cart with derived totals.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<CartView> {
    let items = state.store().cart().to_vec();
    Json(CartView::build(&items))
}

/// Add a product to the cart, merging into an existing line.
#[instrument(skip(state, body))]
pub async fn add(
    State(state): State<AppState>,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<AddToCartResponse>> {
    // Resolve the product before taking the store lock
    let product = state.catalog().get_by_id(&body.product_id).await?;

    let warnings = uploads::advisory_warnings(&body.design_files);
    let references: Vec<String> = body
        .design_files
        .into_iter()
        .map(|file| file.reference)
        .collect();

    let items = {
        let mut store = state.store();
        store.add_to_cart(product, body.quantity.unwrap_or(1), references)?;
        store.cart().to_vec()
    };

    Ok(Json(AddToCartResponse {
        cart: CartView::build(&items),
        warnings,
    }))
}

/// Set a cart line's quantity. No-op when the product is not in the cart.
#[instrument(skip(state))]
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<CartView>> {
    let items = {
        let mut store = state.store();
        store.update_quantity(&ProductId::new(body.product_id), body.quantity)?;
        store.cart().to_vec()
    };
    Ok(Json(CartView::build(&items)))
}

/// Remove a cart line. No-op when the product is not in the cart.
#[instrument(skip(state))]
pub async fn remove(
    State(state): State<AppState>,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Json<CartView>> {
    let items = {
        let mut store = state.store();
        store.remove_from_cart(&ProductId::new(body.product_id))?;
        store.cart().to_vec()
    };
    Ok(Json(CartView::build(&items)))
}

/// Empty the cart.
#[instrument(skip(state))]
pub async fn clear(State(state): State<AppState>) -> Result<Json<CartView>> {
    state.store().clear_cart()?;
    Ok(Json(CartView::build(&[])))
}

/// Prepare the checkout handoff. 204 when the cart is empty.
#[instrument(skip(state))]
pub async fn checkout(State(state): State<AppState>) -> Response {
    let items = state.store().cart().to_vec();

    match handoff::cart_checkout(&state.config().checkout, &items) {
        Some(handoff) => Json(CheckoutResponse {
            message: handoff.message,
            url: handoff.url,
        })
        .into_response(),
        None => StatusCode::NO_CONTENT.into_response(),
    }
}
