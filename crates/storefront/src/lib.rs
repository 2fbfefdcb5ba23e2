//! Shelfcart Storefront library.
//!
//! Client-side cart behavior for the storefront: a cart persisted in a
//! key-value blob store, the badge and cart page views derived from it, and
//! the add-to-cart flow from product pages.
//!
//! # Example
//!
//! ```
//! use shelfcart_storefront::cart::{CartStore, CartView};
//! use shelfcart_storefront::config::PricingConfig;
//! use shelfcart_storefront::product::{ProductPage, add_to_cart};
//! use shelfcart_storefront::storage::MemoryStore;
//!
//! let mut store = CartStore::new(MemoryStore::new());
//! let page = ProductPage {
//!     title: Some("Widget".to_string()),
//!     price: Some("$10.00".to_string()),
//!     quantity: "2".to_string(),
//!     ..ProductPage::default()
//! };
//! add_to_cart(&mut store, &page);
//!
//! let view = CartView::build(&store.list(), &PricingConfig::default());
//! assert_eq!(view.title, "My cart (2)");
//! assert_eq!(view.summary.subtotal, "$20.00");
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod config;
pub mod error;
pub mod product;
pub mod storage;
