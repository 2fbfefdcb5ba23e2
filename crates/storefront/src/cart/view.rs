//! Cart page display data.
//!
//! The cart page re-renders from scratch after every mutation, so these
//! views are rebuilt from the item list each time rather than patched.

use shelfcart_core::{CartItem, CartItemId, Price, quantity};

use super::pricing::{line_total, subtotal, total, total_item_count};
use crate::config::PricingConfig;

/// Placeholder shown for an empty attribute.
const MISSING_ATTRIBUTE: &str = "N/A";

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLineView {
    pub id: CartItemId,
    pub name: String,
    pub image: String,
    /// e.g. `"Size: m, Color: blue, Material: Plastic"`
    pub attributes: String,
    /// e.g. `"Seller: Acme"`
    pub seller: String,
    pub quantity: u32,
    /// Values offered by the quantity selector.
    pub quantity_options: Vec<u32>,
    pub line_price: String,
}

/// Order summary box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: String,
    pub discount: String,
    pub tax: String,
    pub total: String,
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    /// e.g. `"My cart (3)"`
    pub title: String,
    pub items: Vec<CartLineView>,
    pub item_count: u32,
    pub summary: CartSummary,
}

impl CartView {
    /// Create an empty cart.
    #[must_use]
    pub fn empty(pricing: &PricingConfig) -> Self {
        Self::build(&[], pricing)
    }

    /// Build the page view for the given items.
    #[must_use]
    pub fn build(items: &[CartItem], pricing: &PricingConfig) -> Self {
        let item_count = total_item_count(items);
        Self {
            title: format!("My cart ({item_count})"),
            items: items.iter().map(CartLineView::from).collect(),
            item_count,
            summary: CartSummary::build(items, pricing),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CartSummary {
    /// Summarize the cart.
    ///
    /// An empty cart shows `$0.00` for both subtotal and total instead of
    /// the bare fixed charges.
    #[must_use]
    pub fn build(items: &[CartItem], pricing: &PricingConfig) -> Self {
        let (subtotal_price, total_price) = if items.is_empty() {
            (Price::ZERO, Price::ZERO)
        } else {
            (subtotal(items), total(items, pricing))
        };

        Self {
            subtotal: subtotal_price.display(),
            discount: pricing.discount.display(),
            tax: pricing.tax.display(),
            total: total_price.display(),
        }
    }
}

impl From<&CartItem> for CartLineView {
    fn from(item: &CartItem) -> Self {
        let details = &item.details;
        Self {
            id: item.id.clone(),
            name: details.name.clone(),
            image: details.image.clone(),
            attributes: format!(
                "Size: {}, Color: {}, Material: {}",
                item.size().unwrap_or(MISSING_ATTRIBUTE),
                or_missing(&details.color),
                or_missing(&details.material),
            ),
            seller: format!("Seller: {}", details.seller),
            quantity: item.effective_quantity(),
            quantity_options: quantity::selector_options().collect(),
            line_price: line_total(item).display(),
        }
    }
}

fn or_missing(value: &str) -> &str {
    if value.is_empty() {
        MISSING_ATTRIBUTE
    } else {
        value
    }
}
