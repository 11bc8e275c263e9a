//! PrintShop Core - Shared domain types and pricing engine.
//!
//! This crate provides the types and pure computation used across PrintShop
//! components:
//! - `storefront` - Customer-facing storefront service
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no persistence. Pricing is always recomputed from cart state,
//! never stored.
//!
//! # Modules
//!
//! - [`types`] - Products, cart items, users, and money formatting
//! - [`pricing`] - Quantity-tiered pricing, bulk discounts, and order summaries

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod pricing;
pub mod types;

pub use types::*;
