//! Embedded fixture catalog.
//!
//! Secondary data source for the two-tier resolution chain: served whenever
//! no remote catalog is configured or the remote is unreachable. Filtering
//! here mirrors the upstream API contract - conjunctive optional filters,
//! advisory sort, and a single non-paginated results page.

use rust_decimal::Decimal;

use printshop_core::{Product, ProductId};

use crate::catalog::{CatalogError, ProductFilters, ProductPage, SortKey};

#[allow(clippy::too_many_arguments)]
fn product(
    id: &str,
    title: &str,
    price_cents: i64,
    set_size: u32,
    stock: u32,
    description: &str,
    category: &str,
    sub_category: &str,
    shape: &str,
    size: Option<&str>,
    compare_at_cents: Option<i64>,
) -> Product {
    let compare_at_price = compare_at_cents.map(|cents| Decimal::new(cents, 2));
    let price = Decimal::new(price_cents, 2);
    // Display percentage, rounded to the nearest whole point
    let discount_percentage = compare_at_cents.map(|compare| {
        let off = (compare - price_cents) * 100;
        u32::try_from((off + compare / 2) / compare).unwrap_or(0)
    });

    Product {
        id: ProductId::new(id),
        title: title.to_string(),
        images: vec![format!("/assets/products/{id}.webp")],
        price,
        set_size,
        stock,
        description: description.to_string(),
        category: Some(category.to_string()),
        sub_category: Some(sub_category.to_string()),
        shape: Some(shape.to_string()),
        size: size.map(str::to_string),
        compare_at_price,
        discount_percentage,
    }
}

/// The full fixture data set, in source order.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        product(
            "biz-cards-standard",
            "Standard Business Cards",
            1999,
            100,
            500,
            "Full-color business cards printed on 16pt matte stock, sold in sets of 100.",
            "stationery",
            "business-cards",
            "rectangular",
            Some("3.5\" x 2\""),
            Some(2499),
        ),
        product(
            "flyers-a4-gloss",
            "A4 Glossy Flyers",
            899,
            25,
            300,
            "Vibrant single-sided A4 flyers on 100lb gloss text paper.",
            "marketing",
            "flyers",
            "a4",
            Some("8.3\" x 11.7\""),
            None,
        ),
        product(
            "vinyl-banner-large",
            "Large Vinyl Banner",
            4500,
            1,
            40,
            "Heavy-duty 13oz vinyl banner with hemmed edges and grommets.",
            "signage",
            "banners",
            "large",
            Some("6' x 3'"),
            Some(5999),
        ),
        product(
            "yard-sign-coroplast",
            "Coroplast Yard Sign",
            1250,
            1,
            150,
            "Weather-resistant double-sided yard sign with H-stake included.",
            "signage",
            "yard-signs",
            "rectangular",
            Some("24\" x 18\""),
            None,
        ),
        product(
            "stickers-die-cut",
            "Die-Cut Vinyl Stickers",
            250,
            10,
            1000,
            "Custom die-cut stickers with a weatherproof laminate finish.",
            "promotional",
            "stickers",
            "circular",
            Some("3\" x 3\""),
            Some(399),
        ),
        product(
            "mug-ceramic-11oz",
            "Ceramic Photo Mug",
            1099,
            1,
            200,
            "Dishwasher-safe 11oz ceramic mug with full-wrap print.",
            "promotional",
            "mugs",
            "circular",
            None,
            None,
        ),
        product(
            "tshirt-cotton-custom",
            "Custom Cotton T-Shirt",
            1599,
            1,
            250,
            "Soft ringspun cotton tee with direct-to-garment printing.",
            "apparel",
            "t-shirts",
            "medium",
            None,
            Some(1999),
        ),
        product(
            "poster-matte-18x24",
            "Matte Poster 18x24",
            1499,
            1,
            120,
            "Museum-quality matte poster printed on thick archival paper.",
            "marketing",
            "posters",
            "rectangular",
            Some("18\" x 24\""),
            None,
        ),
    ]
}

/// Apply conjunctive filters to a product set.
#[must_use]
pub fn apply_filters(products: Vec<Product>, filters: &ProductFilters) -> Vec<Product> {
    let keyword = filters.keyword.as_deref().map(str::to_lowercase);

    products
        .into_iter()
        .filter(|product| {
            filters
                .category
                .as_deref()
                .is_none_or(|category| product.category.as_deref() == Some(category))
        })
        .filter(|product| {
            filters
                .sub_category
                .as_deref()
                .is_none_or(|sub| product.sub_category.as_deref() == Some(sub))
        })
        .filter(|product| {
            filters
                .shape
                .as_deref()
                .is_none_or(|shape| product.shape.as_deref() == Some(shape))
        })
        .filter(|product| {
            keyword.as_deref().is_none_or(|keyword| {
                product.title.to_lowercase().contains(keyword)
                    || product.description.to_lowercase().contains(keyword)
            })
        })
        .collect()
}

/// Reorder results in place per the advisory sort key.
pub fn sort_products(products: &mut [Product], sort: SortKey) {
    match sort {
        SortKey::PriceAsc => products.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => products.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Discount => products.sort_by(|a, b| {
            b.discount_percentage
                .unwrap_or(0)
                .cmp(&a.discount_percentage.unwrap_or(0))
        }),
    }
}

/// List fixture products matching the filters.
///
/// Non-paginating fallback: all matches come back on one page regardless of
/// the requested page number.
#[must_use]
pub fn list(filters: &ProductFilters) -> ProductPage {
    let mut matched = apply_filters(products(), filters);
    if let Some(sort) = filters.sort {
        sort_products(&mut matched, sort);
    }

    let total_count = u32::try_from(matched.len()).unwrap_or(u32::MAX);
    ProductPage {
        products: matched,
        total_count,
        total_pages: 1,
    }
}

/// Look up a fixture product by id.
///
/// # Errors
///
/// Returns [`CatalogError::NotFound`] when no fixture product has the id.
pub fn get_by_id(id: &str) -> Result<Product, CatalogError> {
    products()
        .into_iter()
        .find(|product| product.id.as_str() == id)
        .ok_or_else(|| CatalogError::NotFound(id.to_string()))
}
