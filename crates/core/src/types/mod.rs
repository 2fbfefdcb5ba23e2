//! Core types for Shelfcart.
//!
//! This module provides type-safe wrappers for cart domain concepts.

pub mod cart;
pub mod id;
pub mod price;
pub mod quantity;

pub use cart::{CartItem, NewCartItem};
pub use id::CartItemId;
pub use price::{Price, PriceError};
pub use quantity::QuantityStepper;
