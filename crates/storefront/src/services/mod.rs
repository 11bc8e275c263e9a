//! Storefront services.

pub mod handoff;
pub mod uploads;
