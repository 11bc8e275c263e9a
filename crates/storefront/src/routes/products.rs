//! Product route handlers.
//!
//! Listing, detail, the quantity-tier quote view, and the single-product
//! order handoff.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use printshop_core::pricing::{LineQuote, summary};
use printshop_core::{Product, format_usd};

use crate::catalog::{ProductFilters, ProductPage, SortKey};
use crate::error::Result;
use crate::services::handoff;
use crate::services::uploads::{self, DesignFile};
use crate::state::AppState;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub keyword: Option<String>,
    pub category: Option<String>,
    pub sub_category: Option<String>,
    pub shape: Option<String>,
    /// `asc`, `desc`, or `discount`; anything else means source order.
    pub sort: Option<String>,
    pub page: Option<u32>,
}

impl From<ListQuery> for ProductFilters {
    fn from(query: ListQuery) -> Self {
        Self {
            keyword: query.keyword,
            category: query.category,
            sub_category: query.sub_category,
            shape: query.shape,
            sort: query.sort.as_deref().and_then(SortKey::parse),
            page: query.page,
        }
    }
}

/// Product listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse {
    pub products: Vec<Product>,
    pub total_count: u32,
    pub total_pages: u32,
}

impl From<ProductPage> for ListResponse {
    fn from(page: ProductPage) -> Self {
        Self {
            products: page.products,
            total_count: page.total_count,
            total_pages: page.total_pages,
        }
    }
}

/// Quote query parameters.
#[derive(Debug, Deserialize)]
pub struct QuoteQuery {
    pub quantity: Option<u32>,
}

/// Quantity-tier quote for one product.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub product_id: String,
    pub quantity: u32,
    pub unit_price: String,
    pub line_total: String,
    /// Present only when the tiered unit price beats the base price.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub savings_note: Option<String>,
}

/// Single-product order request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub quantity: Option<u32>,
    #[serde(default)]
    pub design_files: Vec<DesignFile>,
}

/// Prepared messaging handoff.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub message: String,
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// List products matching the given filters.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ListResponse>> {
    let filters = ProductFilters::from(query);
    let page = state.catalog().list(&filters).await?;
    Ok(Json(ListResponse::from(page)))
}

/// Product detail, or 404 when the id is unknown.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>> {
    let product = state.catalog().get_by_id(&id).await?;
    Ok(Json(product))
}

/// Quantity-tier quote for a product.
#[instrument(skip(state))]
pub async fn quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<QuoteQuery>,
) -> Result<Json<QuoteResponse>> {
    let product = state.catalog().get_by_id(&id).await?;
    let quantity = query.quantity.unwrap_or(1).max(1);
    let line = LineQuote::compute(product.price, quantity);

    Ok(Json(QuoteResponse {
        product_id: product.id.as_str().to_string(),
        quantity,
        unit_price: format_usd(line.unit_price),
        line_total: format_usd(line.total),
        savings: (line.savings > rust_decimal::Decimal::ZERO)
            .then(|| format_usd(line.savings)),
        savings_note: summary::savings_note(product.price, quantity),
    }))
}

/// Prepare the single-product order handoff.
#[instrument(skip(state, body))]
pub async fn order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<OrderRequest>,
) -> Result<Json<OrderResponse>> {
    let product = state.catalog().get_by_id(&id).await?;
    let quantity = body.quantity.unwrap_or(1).max(1);
    let warnings = uploads::advisory_warnings(&body.design_files);

    let handoff = handoff::product_order(
        &state.config().checkout,
        &product,
        quantity,
        body.design_files.len(),
    );

    Ok(Json(OrderResponse {
        message: handoff.message,
        url: handoff.url,
        warnings,
    }))
}
