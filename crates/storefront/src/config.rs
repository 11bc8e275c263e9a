//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `PRINTSHOP_HOST` - Bind address (default: 127.0.0.1)
//! - `PRINTSHOP_PORT` - Listen port (default: 3000)
//! - `PRINTSHOP_SNAPSHOT_PATH` - Cart/wishlist snapshot file (default: printshop-store.json)
//! - `CATALOG_BASE_URL` - Remote catalog API base URL; when unset the
//!   embedded fixture data set is the only source
//! - `CATALOG_TIMEOUT_SECS` - Remote catalog request timeout (default: 30)
//! - `CHECKOUT_WHATSAPP_NUMBER` - Recipient for the checkout handoff link
//!   (default: 16788089383)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

const DEFAULT_WHATSAPP_NUMBER: &str = "16788089383";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Path of the persisted cart/wishlist snapshot
    pub snapshot_path: PathBuf,
    /// Catalog source configuration
    pub catalog: CatalogConfig,
    /// Checkout handoff configuration
    pub checkout: CheckoutConfig,
}

/// Catalog source configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Remote catalog API base URL. `None` means fixture-only operation.
    pub base_url: Option<String>,
    /// Remote request timeout.
    pub timeout: Duration,
}

/// Checkout handoff configuration.
#[derive(Debug, Clone)]
pub struct CheckoutConfig {
    /// Fixed recipient phone number for the messaging handoff URI.
    pub whatsapp_number: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PRINTSHOP_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRINTSHOP_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PRINTSHOP_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PRINTSHOP_PORT".to_string(), e.to_string()))?;
        let snapshot_path =
            PathBuf::from(get_env_or_default("PRINTSHOP_SNAPSHOT_PATH", "printshop-store.json"));

        Ok(Self {
            host,
            port,
            snapshot_path,
            catalog: CatalogConfig::from_env()?,
            checkout: CheckoutConfig::from_env(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl CatalogConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = get_env_or_default("CATALOG_TIMEOUT_SECS", "30")
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("CATALOG_TIMEOUT_SECS".to_string(), e.to_string())
            })?;

        Ok(Self {
            base_url: get_optional_env("CATALOG_BASE_URL"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl CheckoutConfig {
    fn from_env() -> Self {
        Self {
            whatsapp_number: get_env_or_default("CHECKOUT_WHATSAPP_NUMBER", DEFAULT_WHATSAPP_NUMBER),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            snapshot_path: PathBuf::from("printshop-store.json"),
            catalog: CatalogConfig {
                base_url: None,
                timeout: Duration::from_secs(30),
            },
            checkout: CheckoutConfig {
                whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
            },
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_default_whatsapp_number() {
        let checkout = CheckoutConfig::from_env();
        assert!(!checkout.whatsapp_number.is_empty());
    }
}
