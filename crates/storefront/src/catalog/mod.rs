//! Catalog client: product listings and single-product lookups.
//!
//! # Architecture
//!
//! Two-tier resolution chain: the primary source is a remote JSON API
//! (when `CATALOG_BASE_URL` is configured); on transport failure the client
//! falls back to the embedded fixture data set, logging the failure reason
//! rather than swallowing it. A `NotFound` from either source is
//! authoritative and surfaces as a distinct condition, never as a transport
//! error.
//!
//! Remote listing and product responses are cached via `moka` (5-minute
//! TTL). Keyword searches are never cached.

mod cache;
pub mod fixture;
mod remote;

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use thiserror::Error;
use tracing::{debug, instrument, warn};

use printshop_core::Product;

use crate::config::CatalogConfig;
use cache::{CacheKey, CacheValue};
use remote::RemoteCatalog;

/// Errors that can occur when resolving catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source was unreachable or timed out.
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// No product has the requested identifier.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The catalog source answered with a body we could not interpret.
    #[error("Unexpected catalog response: {0}")]
    UnexpectedResponse(String),
}

/// Sort order for product listings. Advisory: absence means source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    /// Price, cheapest first.
    PriceAsc,
    /// Price, most expensive first.
    PriceDesc,
    /// Display discount percentage, largest first.
    Discount,
}

impl SortKey {
    /// Parse the wire value used by the upstream API (`asc`, `desc`,
    /// `discount`). Unknown values mean "no sort".
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::PriceAsc),
            "desc" => Some(Self::PriceDesc),
            "discount" => Some(Self::Discount),
            _ => None,
        }
    }

    /// Wire value for remote queries.
    #[must_use]
    pub const fn as_query_value(self) -> &'static str {
        match self {
            Self::PriceAsc => "asc",
            Self::PriceDesc => "desc",
            Self::Discount => "discount",
        }
    }
}

/// Optional, conjunctive listing filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductFilters {
    /// Case-insensitive substring match against title OR description.
    pub keyword: Option<String>,
    /// Exact category tag match.
    pub category: Option<String>,
    /// Exact sub-category tag match.
    pub sub_category: Option<String>,
    /// Exact shape tag match.
    pub shape: Option<String>,
    /// Advisory sort order.
    pub sort: Option<SortKey>,
    /// Requested page, 1-based. The fixture source ignores this and returns
    /// all matches on one page.
    pub page: Option<u32>,
}

impl ProductFilters {
    /// Canonical cache key fragment for this filter set.
    fn cache_key(&self) -> String {
        format!(
            "cat={}|sub={}|shape={}|sort={}|page={}",
            self.category.as_deref().unwrap_or(""),
            self.sub_category.as_deref().unwrap_or(""),
            self.shape.as_deref().unwrap_or(""),
            self.sort.map_or("", SortKey::as_query_value),
            self.page.unwrap_or(1),
        )
    }
}

/// One page of listing results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductPage {
    /// Products on this page, in (possibly sorted) source order.
    pub products: Vec<Product>,
    /// Total matches across all pages.
    pub total_count: u32,
    /// Total page count.
    pub total_pages: u32,
}

// =============================================================================
// CatalogClient
// =============================================================================

/// Client for the product catalog.
///
/// Cheaply cloneable; all state lives behind an `Arc`.
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    remote: Option<RemoteCatalog>,
    cache: Cache<CacheKey, CacheValue>,
}

impl CatalogClient {
    /// Create a new catalog client.
    ///
    /// With no `base_url` configured the client serves fixtures only.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let remote = config
            .base_url
            .as_deref()
            .map(|base_url| RemoteCatalog::new(base_url, config.timeout))
            .transpose()?;

        let cache = Cache::builder()
            .max_capacity(1000)
            .time_to_live(Duration::from_secs(300)) // 5 minutes
            .build();

        Ok(Self {
            inner: Arc::new(CatalogClientInner { remote, cache }),
        })
    }

    /// List products matching the given filters.
    ///
    /// # Errors
    ///
    /// Practically infallible today: transport failures fall back to the
    /// fixture source, which always answers listings.
    #[instrument(skip(self))]
    pub async fn list(&self, filters: &ProductFilters) -> Result<ProductPage, CatalogError> {
        // Keyword searches bypass the cache entirely
        let cache_key = filters
            .keyword
            .is_none()
            .then(|| CacheKey::Products(filters.cache_key()));

        if let Some(key) = &cache_key
            && let Some(CacheValue::Page(page)) = self.inner.cache.get(key).await
        {
            debug!("Cache hit for product listing");
            return Ok(page);
        }

        if let Some(remote) = &self.inner.remote {
            match remote.list(filters).await {
                Ok(page) => {
                    if let Some(key) = cache_key {
                        self.inner
                            .cache
                            .insert(key, CacheValue::Page(page.clone()))
                            .await;
                    }
                    return Ok(page);
                }
                Err(e) => {
                    warn!(error = %e, "primary catalog unavailable, falling back to fixtures");
                }
            }
        }

        Ok(fixture::list(filters))
    }

    /// Get a product by its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] when no product has the id - a
    /// distinct condition from transport failure, which is recovered by the
    /// fixture fallback (and can itself end in `NotFound`).
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get_by_id(&self, id: &str) -> Result<Product, CatalogError> {
        let cache_key = CacheKey::Product(id.to_string());

        if let Some(CacheValue::Product(product)) = self.inner.cache.get(&cache_key).await {
            debug!("Cache hit for product");
            return Ok(*product);
        }

        if let Some(remote) = &self.inner.remote {
            match remote.get_by_id(id).await {
                Ok(product) => {
                    self.inner
                        .cache
                        .insert(cache_key, CacheValue::Product(Box::new(product.clone())))
                        .await;
                    return Ok(product);
                }
                // An authoritative miss from the primary is not recoverable
                Err(CatalogError::NotFound(id)) => return Err(CatalogError::NotFound(id)),
                Err(e) => {
                    warn!(error = %e, "primary catalog unavailable, falling back to fixtures");
                }
            }
        }

        fixture::get_by_id(id)
    }

    /// Invalidate all cached catalog data.
    pub async fn invalidate_all(&self) {
        self.inner.cache.invalidate_all();
        self.inner.cache.run_pending_tasks().await;
    }
}
