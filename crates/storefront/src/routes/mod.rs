//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products               - Product listing (keyword, category,
//!                                subCategory, shape, sort, page)
//! GET  /products/{id}          - Product detail
//! GET  /products/{id}/quote    - Quantity-tier quote (?quantity=)
//! POST /products/{id}/order    - Single-product order handoff
//!
//! # Cart
//! GET  /cart                   - Cart lines + derived totals + incentive
//! POST /cart/add               - Add to cart (merges by product id)
//! POST /cart/update            - Set line quantity
//! POST /cart/remove            - Remove line
//! POST /cart/clear             - Empty the cart
//! POST /cart/checkout          - Messaging handoff (204 when empty)
//!
//! # Wishlist
//! GET  /wishlist               - Ordered wishlist
//! POST /wishlist/toggle        - Toggle membership
//! GET  /wishlist/contains/{id} - Membership query
//!
//! # Session stub
//! GET  /auth/me                - Current session user
//! POST /auth/login             - Install session-local user
//! POST /auth/logout            - Clear user + cart, keep wishlist
//! ```

pub mod auth;
pub mod cart;
pub mod products;
pub mod wishlist;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
        .route("/{id}/quote", get(products::quote))
        .route("/{id}/order", post(products::order))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/clear", post(cart::clear))
        .route("/checkout", post(cart::checkout))
}

/// Create the wishlist routes router.
pub fn wishlist_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(wishlist::index))
        .route("/toggle", post(wishlist::toggle))
        .route("/contains/{id}", get(wishlist::contains))
}

/// Create the session stub routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/me", get(auth::me))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/products", product_routes())
        .nest("/cart", cart_routes())
        .nest("/wishlist", wishlist_routes())
        .nest("/auth", auth_routes())
}
