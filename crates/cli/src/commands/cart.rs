//! Cart commands.
//!
//! # Usage
//!
//! ```bash
//! # Add a product (sizes offered by the page, with one selected)
//! shelfcart add -n "Trail Tee" -p '$19.99' --sizes s,m,l --size m -q 2
//!
//! # Show the cart page and summary
//! shelfcart list
//! shelfcart summary
//!
//! # Change or remove a line
//! shelfcart update 1760780000000k3j9x0q2a 3
//! shelfcart remove 1760780000000k3j9x0q2a
//! ```
//!
//! Each command returns the lines to print so it can be tested without a
//! terminal.

use shelfcart_core::{CartItemId, QuantityStepper};
use shelfcart_storefront::cart::{CartStore, CartView};
use shelfcart_storefront::config::PricingConfig;
use shelfcart_storefront::error::Result;
use shelfcart_storefront::product::{ProductPage, SizeSelector};
use shelfcart_storefront::storage::KeyValueStore;

/// Product fields accepted by `add`.
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub name: Option<String>,
    pub price: Option<String>,
    pub image: Option<String>,
    pub seller: Option<String>,
    pub sizes: Vec<String>,
    pub size: Option<String>,
    pub quantity: String,
}

impl From<AddArgs> for ProductPage {
    fn from(args: AddArgs) -> Self {
        let size = if args.sizes.is_empty() && args.size.is_none() {
            None
        } else {
            // The page dropdown always leads with an empty "Select Size" prompt
            let mut options = vec![String::new()];
            options.extend(args.sizes);
            Some(SizeSelector {
                options,
                selected: args.size.unwrap_or_default(),
            })
        };

        Self {
            title: args.name,
            image: args.image,
            price: args.price,
            supplier: args.seller,
            size,
            quantity: args.quantity,
        }
    }
}

/// Render the cart page as text lines.
pub fn list<S: KeyValueStore>(store: &CartStore<S>, pricing: &PricingConfig) -> Vec<String> {
    let view = CartView::build(&store.list(), pricing);
    let mut lines = vec![view.title.clone()];

    if view.is_empty() {
        lines.push("Your cart is empty".to_string());
        return lines;
    }

    for item in &view.items {
        lines.push(format!(
            "{}  {} x{}  {}",
            item.id, item.name, item.quantity, item.line_price
        ));
        lines.push(format!("    {}", item.attributes));
        lines.push(format!("    {}", item.seller));
    }
    lines
}

/// Render the order summary as text lines.
pub fn summary<S: KeyValueStore>(store: &CartStore<S>, pricing: &PricingConfig) -> Vec<String> {
    let view = CartView::build(&store.list(), pricing);
    let summary = view.summary;
    vec![
        format!("Subtotal: {}", summary.subtotal),
        format!("Discount: -{}", summary.discount),
        format!("Tax: +{}", summary.tax),
        format!("Total: {}", summary.total),
    ]
}

/// Render the badge.
pub fn badge<S: KeyValueStore>(store: &CartStore<S>) -> Vec<String> {
    let badge = store.badge();
    if badge.is_visible() {
        vec![format!("Cart ({})", badge.text())]
    } else {
        vec!["Cart".to_string()]
    }
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns an error if a size must be chosen or the cart cannot be saved.
pub fn add<S: KeyValueStore>(store: &mut CartStore<S>, args: AddArgs) -> Result<Vec<String>> {
    let page = ProductPage::from(args);
    let item = store.add(page.to_cart_item()?)?;
    tracing::info!(id = %item.id, name = %item.details.name, "Item added");
    Ok(vec![item.id.to_string()])
}

/// Remove a line by ID.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn remove<S: KeyValueStore>(store: &mut CartStore<S>, id: &str) -> Result<Vec<String>> {
    let id = CartItemId::new(id);
    let before = store.list().len();
    let items = store.remove(&id)?;
    if items.len() == before {
        tracing::warn!(%id, "No cart item with this id");
    }
    Ok(vec![format!("{} item(s) in cart", items.len())])
}

/// Set a line's quantity. The input is clamped into the stepper bounds.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn update<S: KeyValueStore>(
    store: &mut CartStore<S>,
    id: &str,
    quantity: &str,
) -> Result<Vec<String>> {
    let id = CartItemId::new(id);
    let quantity = QuantityStepper::default().normalize(quantity);
    let items = store.update_quantity(&id, quantity)?;
    if !items.iter().any(|item| item.id == id) {
        tracing::warn!(%id, "No cart item with this id");
    }
    Ok(vec![format!("Quantity set to {quantity}")])
}

/// Empty the cart.
///
/// # Errors
///
/// Returns an error if the cart cannot be saved.
pub fn clear<S: KeyValueStore>(store: &mut CartStore<S>) -> Result<Vec<String>> {
    store.clear()?;
    Ok(vec!["Cart cleared".to_string()])
}
