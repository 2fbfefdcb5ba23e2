//! Add-to-cart from the product detail page.
//!
//! The product page is scraped for the line item: title, main image, tier
//! price and supplier. Anything missing falls back to a placeholder so the
//! cart always gets a complete line.

use std::time::Duration;

use shelfcart_core::{NewCartItem, quantity};
use thiserror::Error;

use crate::cart::CartStore;
use crate::storage::{KeyValueStore, StorageError};

/// How long a cart message stays visible before it is cleared.
pub const MESSAGE_DURATION: Duration = Duration::from_secs(3);

const DEFAULT_NAME: &str = "Product";
const DEFAULT_PRICE: &str = "$0.00";
const DEFAULT_SELLER: &str = "Unknown Seller";
const DEFAULT_MATERIAL: &str = "Plastic";
const DEFAULT_COLOR: &str = "blue";

/// Errors that can occur when adding a product to the cart.
#[derive(Debug, Error)]
pub enum AddToCartError {
    /// The product has sizes and none is selected.
    #[error("Please select a size")]
    SizeRequired,

    /// The cart could not be saved.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// The size dropdown on a product page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeSelector {
    /// Option values in display order, including any empty prompt option.
    pub options: Vec<String>,
    /// Currently selected value (empty when only the prompt is selected).
    pub selected: String,
}

impl SizeSelector {
    /// A size must be chosen when the dropdown offers at least one real size.
    #[must_use]
    pub fn requires_selection(&self) -> bool {
        self.options.len() > 1 && self.options.iter().any(|opt| !opt.is_empty())
    }
}

/// Content read off a product detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductPage {
    pub title: Option<String>,
    pub image: Option<String>,
    /// Tier price as displayed, e.g. `"$10.00"`.
    pub price: Option<String>,
    pub supplier: Option<String>,
    pub size: Option<SizeSelector>,
    /// Raw quantity input value.
    pub quantity: String,
}

impl ProductPage {
    /// Build the cart line this page would add.
    ///
    /// # Errors
    ///
    /// Returns `AddToCartError::SizeRequired` if the page has sizes to pick
    /// from and none is selected.
    pub fn to_cart_item(&self) -> Result<NewCartItem, AddToCartError> {
        let size = self
            .size
            .as_ref()
            .map(|selector| selector.selected.clone())
            .unwrap_or_default();

        if size.is_empty()
            && self
                .size
                .as_ref()
                .is_some_and(SizeSelector::requires_selection)
        {
            return Err(AddToCartError::SizeRequired);
        }

        Ok(NewCartItem {
            name: self.title.clone().unwrap_or_else(|| DEFAULT_NAME.to_string()),
            image: self.image.clone().unwrap_or_default(),
            price: self
                .price
                .clone()
                .unwrap_or_else(|| DEFAULT_PRICE.to_string()),
            size: Some(size),
            quantity: quantity::parse_or_default(&self.quantity),
            seller: self
                .supplier
                .clone()
                .unwrap_or_else(|| DEFAULT_SELLER.to_string()),
            material: DEFAULT_MATERIAL.to_string(),
            color: DEFAULT_COLOR.to_string(),
        })
    }
}

/// Feedback shown under the add-to-cart button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartMessage {
    Success(String),
    Error(String),
}

impl CartMessage {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// How long the message is shown before it is cleared.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        match self {
            Self::Success(_) | Self::Error(_) => MESSAGE_DURATION,
        }
    }
}

/// Add the page's product to the cart and report the outcome.
pub fn add_to_cart<S: KeyValueStore>(store: &mut CartStore<S>, page: &ProductPage) -> CartMessage {
    let result = page
        .to_cart_item()
        .and_then(|item| store.add(item).map_err(AddToCartError::from));

    match result {
        Ok(item) => {
            let quantity = item.details.quantity;
            let message = match item.size() {
                Some(size) => format!(
                    "Added {quantity} item(s) to cart (Size: {})!",
                    size.to_uppercase()
                ),
                None => format!("Added {quantity} item(s) to cart!"),
            };
            tracing::info!(id = %item.id, quantity, "Added item to cart");
            CartMessage::Success(message)
        }
        Err(AddToCartError::SizeRequired) => {
            CartMessage::Error(AddToCartError::SizeRequired.to_string())
        }
        Err(e) => {
            tracing::error!("Failed to add item to cart: {e}");
            CartMessage::Error("Error adding to cart".to_string())
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn sized_page(selected: &str) -> ProductPage {
        ProductPage {
            title: Some("Trail Tee".to_string()),
            image: Some("https://cdn.example.com/tee.png".to_string()),
            price: Some("$19.99".to_string()),
            supplier: Some("Pineapple Goods".to_string()),
            size: Some(SizeSelector {
                options: vec![String::new(), "s".to_string(), "m".to_string()],
                selected: selected.to_string(),
            }),
            quantity: "2".to_string(),
        }
    }

    #[test]
    fn test_requires_selection() {
        let prompt_only = SizeSelector {
            options: vec![String::new()],
            selected: String::new(),
        };
        assert!(!prompt_only.requires_selection());

        let all_empty = SizeSelector {
            options: vec![String::new(), String::new()],
            selected: String::new(),
        };
        assert!(!all_empty.requires_selection());

        assert!(sized_page("").size.unwrap().requires_selection());
    }

    #[test]
    fn test_size_required() {
        assert!(matches!(
            sized_page("").to_cart_item(),
            Err(AddToCartError::SizeRequired)
        ));
    }

    #[test]
    fn test_to_cart_item() {
        let item = sized_page("m").to_cart_item().unwrap();
        assert_eq!(item.name, "Trail Tee");
        assert_eq!(item.price, "$19.99");
        assert_eq!(item.size.as_deref(), Some("m"));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.seller, "Pineapple Goods");
        assert_eq!(item.material, "Plastic");
        assert_eq!(item.color, "blue");
    }

    #[test]
    fn test_defaults_for_bare_page() {
        let item = ProductPage::default().to_cart_item().unwrap();
        assert_eq!(item.name, "Product");
        assert_eq!(item.image, "");
        assert_eq!(item.price, "$0.00");
        assert_eq!(item.seller, "Unknown Seller");
        assert_eq!(item.size.as_deref(), Some(""));
        assert_eq!(item.quantity, 1);
    }

    #[test]
    fn test_add_to_cart_success_with_size() {
        let mut store = CartStore::new(MemoryStore::new());
        let message = add_to_cart(&mut store, &sized_page("m"));

        assert_eq!(
            message,
            CartMessage::Success("Added 2 item(s) to cart (Size: M)!".to_string())
        );
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_add_to_cart_success_without_size() {
        let mut store = CartStore::new(MemoryStore::new());
        let page = ProductPage {
            quantity: "3".to_string(),
            ..ProductPage::default()
        };

        let message = add_to_cart(&mut store, &page);
        assert_eq!(message.text(), "Added 3 item(s) to cart!");
        assert!(!message.is_error());
        assert_eq!(message.duration(), Duration::from_secs(3));
    }

    #[test]
    fn test_add_to_cart_missing_size_leaves_cart_untouched() {
        let mut store = CartStore::new(MemoryStore::new());
        let message = add_to_cart(&mut store, &sized_page(""));

        assert!(message.is_error());
        assert_eq!(message.text(), "Please select a size");
        assert_eq!(message.duration(), MESSAGE_DURATION);
        assert!(store.list().is_empty());
        assert!(store.storage().raw("cart").is_none());
    }
}
