//! Shopping cart.
//!
//! # Modules
//!
//! - [`store`] - `CartStore`, the persisted list of line items
//! - [`pricing`] - Item counts, line totals, subtotal, and total
//! - [`badge`] - Cart count badge pushed to displays on every write
//! - [`view`] - Cart page display data

pub mod badge;
pub mod pricing;
pub mod store;
pub mod view;

pub use badge::{BadgeDisplay, CartBadge};
pub use pricing::{line_total, subtotal, total, total_item_count};
pub use store::CartStore;
pub use view::{CartLineView, CartSummary, CartView};
