//! Cache types for catalog responses.

use printshop_core::Product;

use crate::catalog::ProductPage;

/// Cache key for products and listings.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum CacheKey {
    /// Single product by id.
    Product(String),
    /// Listing page by canonical filter string.
    Products(String),
}

/// Cached value types.
#[derive(Debug, Clone)]
pub enum CacheValue {
    Product(Box<Product>),
    Page(ProductPage),
}
