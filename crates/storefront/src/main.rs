//! PrintShop Storefront - customer-facing print-on-demand shop.
//!
//! This binary serves the storefront JSON API on port 3000.
//!
//! # Architecture
//!
//! - Axum web framework exposing a JSON surface
//! - Catalog client with a remote JSON API primary and an embedded fixture
//!   fallback (fixture-only when no remote is configured)
//! - Cart/wishlist store persisted wholesale to a JSON snapshot file
//! - Checkout hands off a formatted order message to a `wa.me` URI; there is
//!   no backend order system and no payment processing

#![cfg_attr(not(test), forbid(unsafe_code))]

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use printshop_storefront::catalog::CatalogClient;
use printshop_storefront::config::StorefrontConfig;
use printshop_storefront::routes;
use printshop_storefront::state::AppState;
use printshop_storefront::store::Store;
use printshop_storefront::store::snapshot::JsonFileStore;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "printshop_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Rehydrate the cart/wishlist store from its snapshot file
    let backend = JsonFileStore::new(config.snapshot_path.clone());
    let store = Store::open(Box::new(backend)).expect("Failed to open store snapshot");
    tracing::info!(path = %config.snapshot_path.display(), "Store snapshot loaded");

    let catalog = CatalogClient::new(&config.catalog).expect("Failed to create catalog client");
    match &config.catalog.base_url {
        Some(base_url) => tracing::info!(%base_url, "Catalog remote configured"),
        None => tracing::info!("No catalog remote configured, serving fixtures only"),
    }

    let state = AppState::new(config.clone(), catalog, store);

    // Build router
    let app = Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
