//! Catalog-to-cart scenarios against the embedded fixture data set.
//!
//! No remote is configured, so the catalog client serves fixtures only.

use std::time::Duration;

use printshop_core::pricing::OrderTotals;
use printshop_integration_tests::open_test_store;
use printshop_storefront::catalog::{CatalogClient, CatalogError, ProductFilters, SortKey};
use printshop_storefront::config::CatalogConfig;

fn fixture_client() -> CatalogClient {
    CatalogClient::new(&CatalogConfig {
        base_url: None,
        timeout: Duration::from_secs(30),
    })
    .expect("catalog client")
}

fn unreachable_remote_client() -> CatalogClient {
    // Port 1 refuses connections immediately, so the remote always fails
    // with a transport error
    CatalogClient::new(&CatalogConfig {
        base_url: Some("http://127.0.0.1:1".to_string()),
        timeout: Duration::from_secs(1),
    })
    .expect("catalog client")
}

#[tokio::test]
async fn test_transport_failure_falls_back_to_fixtures() {
    let client = unreachable_remote_client();

    // Listings recover wholesale from the fixture set
    let page = client.list(&ProductFilters::default()).await.expect("list");
    assert!(!page.products.is_empty());

    // Single-product lookups resolve against fixtures too
    let first = page.products.first().expect("fixture products");
    let product = client.get_by_id(first.id.as_str()).await.expect("get");
    assert_eq!(&product, first);
}

#[tokio::test]
async fn test_transport_failure_unknown_id_is_not_found() {
    let client = unreachable_remote_client();

    // After the fallback the fixture miss still surfaces as NotFound, not
    // as a transport error
    let err = client
        .get_by_id("definitely-not-a-product")
        .await
        .expect_err("miss");
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_browse_then_add_to_cart() {
    let client = fixture_client();
    let page = client.list(&ProductFilters::default()).await.expect("list");
    let product = page.products.first().expect("fixture products").clone();

    let (mut store, _) = open_test_store();
    store.add_to_cart(product.clone(), 10, Vec::new()).expect("add");

    let totals = OrderTotals::compute(store.cart());
    assert_eq!(totals.total_quantity, 10);
    assert!(totals.bulk_tier.is_some());
}

#[tokio::test]
async fn test_keyword_filter_matches_title_or_description() {
    let client = fixture_client();
    let filters = ProductFilters {
        keyword: Some("business".to_string()),
        ..ProductFilters::default()
    };
    let page = client.list(&filters).await.expect("list");

    assert!(!page.products.is_empty());
    for product in &page.products {
        let haystack = format!("{} {}", product.title, product.description).to_lowercase();
        assert!(haystack.contains("business"));
    }
}

#[tokio::test]
async fn test_price_sort_ascending() {
    let client = fixture_client();
    let filters = ProductFilters {
        sort: Some(SortKey::PriceAsc),
        ..ProductFilters::default()
    };
    let page = client.list(&filters).await.expect("list");

    let prices: Vec<_> = page.products.iter().map(|p| p.price).collect();
    let mut sorted = prices.clone();
    sorted.sort();
    assert_eq!(prices, sorted);
}

#[tokio::test]
async fn test_unknown_product_is_not_found() {
    let client = fixture_client();
    let err = client
        .get_by_id("definitely-not-a-product")
        .await
        .expect_err("miss");
    assert!(matches!(err, CatalogError::NotFound(_)));
}

#[tokio::test]
async fn test_detail_matches_listing() {
    let client = fixture_client();
    let page = client.list(&ProductFilters::default()).await.expect("list");
    let listed = page.products.first().expect("fixture products");

    let detail = client.get_by_id(listed.id.as_str()).await.expect("get");
    assert_eq!(&detail, listed);
}
