//! Integration tests for PrintShop.
//!
//! These tests exercise the storefront library end-to-end without any
//! network: store mutations with in-memory persistence, derived pricing,
//! fixture-backed catalog lookups, and the checkout handoff.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p printshop-integration-tests
//! ```

use printshop_core::{Product, ProductId};
use printshop_storefront::store::Store;
use printshop_storefront::store::snapshot::InMemoryStore;
use rust_decimal::Decimal;

/// Build a minimal product for store scenarios.
#[must_use]
pub fn test_product(id: &str, price_cents: i64) -> Product {
    Product {
        id: ProductId::new(id),
        title: format!("Product {id}"),
        images: vec![format!("https://cdn.example.com/{id}.jpg")],
        price: Decimal::new(price_cents, 2),
        set_size: 1,
        stock: 500,
        description: "Test product".to_string(),
        category: None,
        sub_category: None,
        shape: None,
        size: None,
        compare_at_price: None,
        discount_percentage: None,
    }
}

/// Open a store over a fresh in-memory backend, returning both handles so
/// tests can inspect what was persisted.
#[must_use]
pub fn open_test_store() -> (Store, InMemoryStore) {
    let backend = InMemoryStore::new();
    let store = Store::open(Box::new(backend.clone())).expect("open store");
    (store, backend)
}
