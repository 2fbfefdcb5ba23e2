//! Cart line items.
//!
//! A cart is an ordered `Vec<CartItem>`; insertion order is display order
//! and there is no deduplication. Adding the same product twice yields two
//! lines with distinct IDs.
//!
//! # Persisted shape
//!
//! Items serialize to flat JSON objects:
//!
//! ```json
//! {"id":"1760780000000k3j9x0q2a","name":"Widget","image":"https://...",
//!  "price":"$10.00","size":"m","quantity":2,"seller":"Acme",
//!  "material":"Plastic","color":"blue"}
//! ```
//!
//! Reading is lenient about `quantity`: numbers, numeric strings, `null` and
//! a missing field are all accepted. Anything that is not a positive integer
//! reads as 1. Every other field except `id` may be missing and reads as
//! empty, so one incomplete line never hides the rest of the cart.

use serde::{Deserialize, Deserializer, Serialize};

use super::id::CartItemId;
use super::price::Price;
use super::quantity;

/// One product line in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Assigned when the item is added; never reassigned.
    pub id: CartItemId,
    #[serde(flatten)]
    pub details: NewCartItem,
}

/// A cart line before it has been given an ID.
///
/// This is what the product page builds and hands to the cart store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    #[serde(default)]
    pub name: String,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Price as displayed, e.g. `"$10.00"`. Parsed on demand.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(
        default = "default_quantity",
        deserialize_with = "deserialize_quantity"
    )]
    pub quantity: u32,
    #[serde(default)]
    pub seller: String,
    #[serde(default)]
    pub material: String,
    #[serde(default)]
    pub color: String,
}

impl NewCartItem {
    /// Attach an ID, producing a storable item.
    #[must_use]
    pub fn with_id(self, id: CartItemId) -> CartItem {
        CartItem { id, details: self }
    }
}

impl CartItem {
    /// Effective quantity for totals: a zero quantity counts as one.
    #[must_use]
    pub fn effective_quantity(&self) -> u32 {
        self.details.quantity.max(1)
    }

    /// Unit price parsed from the display string (zero if unparsable).
    #[must_use]
    pub fn unit_price(&self) -> Price {
        Price::from_display(&self.details.price)
    }

    /// The size, if one was chosen. Empty strings count as no size.
    #[must_use]
    pub fn size(&self) -> Option<&str> {
        self.details.size.as_deref().filter(|s| !s.is_empty())
    }

    /// Copy of this item with a different quantity, identity preserved.
    #[must_use]
    pub fn with_quantity(&self, quantity: u32) -> Self {
        let mut item = self.clone();
        item.details.quantity = quantity;
        item
    }
}

const fn default_quantity() -> u32 {
    quantity::DEFAULT_QUANTITY
}

/// Quantity as it may appear in an older or hand-edited blob.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawQuantity {
    Int(i64),
    Float(f64),
    Text(String),
}

fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawQuantity>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawQuantity::Int(n)) => quantity::from_int(n),
        #[allow(clippy::cast_possible_truncation)] // Saturating cast is the intent
        Some(RawQuantity::Float(f)) if f.is_finite() => quantity::from_int(f.trunc() as i64),
        Some(RawQuantity::Text(s)) => quantity::parse_or_default(&s),
        _ => quantity::DEFAULT_QUANTITY,
    })
}
