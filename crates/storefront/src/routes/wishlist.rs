//! Wishlist route handlers.

use axum::Json;
use axum::extract::{Path, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printshop_core::{Product, ProductId};

use crate::error::Result;
use crate::state::AppState;

/// Wishlist listing response, in insertion order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub products: Vec<Product>,
}

/// Toggle request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleRequest {
    pub product_id: String,
}

/// Membership after a toggle or query.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub in_wishlist: bool,
}

/// Current wishlist.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<WishlistResponse> {
    let products = state.store().wishlist().to_vec();
    Json(WishlistResponse { products })
}

/// Toggle a product's wishlist membership.
#[instrument(skip(state))]
pub async fn toggle(
    State(state): State<AppState>,
    Json(body): Json<ToggleRequest>,
) -> Result<Json<MembershipResponse>> {
    // Resolve the product before taking the store lock
    let product = state.catalog().get_by_id(&body.product_id).await?;
    let in_wishlist = state.store().toggle_wishlist(product)?;
    Ok(Json(MembershipResponse { in_wishlist }))
}

/// Membership query; no side effect.
#[instrument(skip(state))]
pub async fn contains(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MembershipResponse> {
    let in_wishlist = state.store().is_in_wishlist(&ProductId::new(id));
    Json(MembershipResponse { in_wishlist })
}
