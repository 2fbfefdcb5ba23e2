//! Shelfcart Core - Shared cart types library.
//!
//! This crate provides the types used across all Shelfcart components:
//! - `storefront` - Cart store, pricing, and page view models
//! - `cli` - Command-line driver for a file-backed cart
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no storage access,
//! no logging, no configuration. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Cart line items, item IDs, display prices, and quantities

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
