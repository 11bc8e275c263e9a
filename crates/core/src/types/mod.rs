//! Core types for PrintShop.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod product;
pub mod user;

pub use cart::CartItem;
pub use id::ProductId;
pub use price::format_usd;
pub use product::Product;
pub use user::User;
