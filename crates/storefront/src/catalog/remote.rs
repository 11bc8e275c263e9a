//! Remote catalog API client.
//!
//! Speaks the upstream product API's JSON dialect (`_id`, `image`, `set`,
//! `off_price`, camelCase filters) and converts responses into core types at
//! this boundary.

use std::time::Duration;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use printshop_core::{Product, ProductId};

use crate::catalog::{CatalogError, ProductFilters, ProductPage};

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    data: ListData,
}

#[derive(Debug, Deserialize)]
struct ListData {
    products: Vec<ApiProduct>,
    #[serde(rename = "productLength")]
    product_length: u32,
    #[serde(rename = "totalPage")]
    total_page: u32,
}

#[derive(Debug, Deserialize)]
struct ProductEnvelope {
    product: ApiProduct,
}

#[derive(Debug, Deserialize)]
struct ApiProduct {
    #[serde(rename = "_id")]
    id: String,
    title: String,
    #[serde(default)]
    image: Vec<String>,
    price: Decimal,
    #[serde(rename = "off_price", default)]
    off_price: Option<Decimal>,
    #[serde(rename = "discountPercentage", default)]
    discount_percentage: Option<u32>,
    set: u32,
    stock: u32,
    #[serde(default)]
    description: String,
    #[serde(default)]
    category: Option<String>,
    // The upstream API is inconsistent about this field's casing
    #[serde(rename = "subCategory", alias = "subcategory", default)]
    sub_category: Option<String>,
    #[serde(default)]
    shape: Option<String>,
    #[serde(default)]
    size: Option<String>,
}

/// Decode a response body, distinguishing an uninterpretable payload from a
/// transport failure.
fn decode_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, CatalogError> {
    serde_json::from_str(body).map_err(|e| CatalogError::UnexpectedResponse(e.to_string()))
}

fn convert_product(api: ApiProduct) -> Product {
    // An off_price at or below the selling price is display noise, not a
    // reference price
    let compare_at_price = api.off_price.filter(|&off| off > api.price);

    Product {
        id: ProductId::new(api.id),
        title: api.title,
        images: api.image,
        price: api.price,
        set_size: api.set.max(1),
        stock: api.stock,
        description: api.description,
        category: api.category,
        sub_category: api.sub_category,
        shape: api.shape,
        size: api.size,
        compare_at_price,
        discount_percentage: api.discount_percentage.filter(|&pct| pct > 0),
    }
}

// =============================================================================
// RemoteCatalog
// =============================================================================

/// HTTP client for the primary catalog source.
pub struct RemoteCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCatalog {
    /// Create a new remote catalog client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List products from the remote API.
    ///
    /// # Errors
    ///
    /// Returns a transport error when the source is unreachable or times
    /// out, and [`CatalogError::UnexpectedResponse`] when it answers with an
    /// uninterpretable body.
    #[instrument(skip(self))]
    pub async fn list(&self, filters: &ProductFilters) -> Result<ProductPage, CatalogError> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(keyword) = &filters.keyword {
            query.push(("keyword", keyword.clone()));
        }
        if let Some(category) = &filters.category {
            query.push(("category", category.clone()));
        }
        if let Some(sub_category) = &filters.sub_category {
            query.push(("subCategory", sub_category.clone()));
        }
        if let Some(shape) = &filters.shape {
            query.push(("shape", shape.clone()));
        }
        if let Some(sort) = filters.sort {
            query.push(("sort", sort.as_query_value().to_string()));
        }
        if let Some(page) = filters.page {
            query.push(("page", page.to_string()));
        }

        let body = self
            .client
            .get(format!("{}/product", self.base_url))
            .query(&query)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let envelope: ListEnvelope = decode_body(&body)?;

        Ok(ProductPage {
            products: envelope
                .data
                .products
                .into_iter()
                .map(convert_product)
                .collect(),
            total_count: envelope.data.product_length,
            total_pages: envelope.data.total_page.max(1),
        })
    }

    /// Get a single product by id from the remote API.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] on an HTTP 404,
    /// [`CatalogError::UnexpectedResponse`] for an uninterpretable body, and
    /// a transport error for anything else that goes wrong.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        let response = self
            .client
            .get(format!("{}/product/{id}", self.base_url))
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }

        let body = response.error_for_status()?.text().await?;
        let envelope: ProductEnvelope = decode_body(&body)?;
        Ok(convert_product(envelope.product))
    }
}
