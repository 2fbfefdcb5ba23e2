//! Pure computations over the cart contents.
//!
//! Nothing here is cached; callers recompute on every render.

use shelfcart_core::{CartItem, Price};

use crate::config::PricingConfig;

/// Sum of item quantities. Zero quantities count as one; empty cart is 0.
#[must_use]
pub fn total_item_count(items: &[CartItem]) -> u32 {
    items
        .iter()
        .fold(0_u32, |sum, item| sum.saturating_add(item.effective_quantity()))
}

/// Unit price times quantity.
///
/// Not rounded: fractional cents carry into the subtotal and only the
/// displayed amount is rounded.
#[must_use]
pub fn line_total(item: &CartItem) -> Price {
    item.unit_price().times(item.effective_quantity())
}

/// Sum of all line totals.
#[must_use]
pub fn subtotal(items: &[CartItem]) -> Price {
    items.iter().map(line_total).sum()
}

/// `subtotal - discount + tax`. Negative totals are returned as-is.
#[must_use]
pub fn total(items: &[CartItem], pricing: &PricingConfig) -> Price {
    subtotal(items) - pricing.discount + pricing.tax
}
