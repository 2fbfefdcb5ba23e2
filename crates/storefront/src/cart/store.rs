//! Cart store over a key-value backend.
//!
//! The cart lives as a JSON array under a single key. Every read goes back
//! to storage and every write persists the whole list, then pushes a fresh
//! badge to each attached display. There is no in-memory copy to go stale.

use shelfcart_core::{CartItem, CartItemId, NewCartItem};
use tracing::instrument;

use super::badge::{BadgeDisplay, CartBadge};
use crate::config::DEFAULT_STORAGE_KEY;
use crate::storage::{KeyValueStore, StorageError};

/// Cart persisted in a [`KeyValueStore`].
pub struct CartStore<S> {
    storage: S,
    key: String,
    badges: Vec<Box<dyn BadgeDisplay>>,
}

impl<S: KeyValueStore> CartStore<S> {
    /// Create a store using the default `cart` key.
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Create a store persisting under a custom key.
    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            badges: Vec::new(),
        }
    }

    /// Storage key holding the cart blob.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying storage backend.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Consume the store and return its backend.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Attach a badge display and render the current count on it.
    pub fn attach_badge(&mut self, mut display: impl BadgeDisplay + 'static) {
        display.show(&self.badge());
        self.badges.push(Box::new(display));
    }

    /// Current badge state.
    #[must_use]
    pub fn badge(&self) -> CartBadge {
        CartBadge::for_items(&self.list())
    }

    /// All items in insertion order.
    ///
    /// A missing, unreadable or corrupt blob reads as an empty cart.
    #[must_use]
    pub fn list(&self) -> Vec<CartItem> {
        let raw = match self.storage.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Failed to read cart storage");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            tracing::warn!(key = %self.key, error = %e, "Discarding unreadable cart blob");
            Vec::new()
        })
    }

    /// Append an item under a freshly generated ID.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be persisted.
    #[instrument(skip(self, item), fields(name = %item.name))]
    pub fn add(&mut self, item: NewCartItem) -> Result<CartItem, StorageError> {
        let mut items = self.list();
        let item = item.with_id(CartItemId::generate());
        items.push(item.clone());
        self.save(&items)?;
        Ok(item)
    }

    /// Remove the item with `id`. Unknown IDs leave the cart unchanged.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn remove(&mut self, id: &CartItemId) -> Result<Vec<CartItem>, StorageError> {
        let mut items = self.list();
        items.retain(|item| &item.id != id);
        self.save(&items)?;
        Ok(items)
    }

    /// Set the quantity of the item with `id`. Unknown IDs are a no-op.
    ///
    /// The value is stored as given; callers clamp it first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn update_quantity(
        &mut self,
        id: &CartItemId,
        quantity: u32,
    ) -> Result<Vec<CartItem>, StorageError> {
        let items: Vec<CartItem> = self
            .list()
            .into_iter()
            .map(|item| {
                if &item.id == id {
                    item.with_quantity(quantity)
                } else {
                    item
                }
            })
            .collect();
        self.save(&items)?;
        Ok(items)
    }

    /// Remove every item.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the cart cannot be persisted.
    #[instrument(skip(self))]
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.save(&[])
    }

    fn save(&mut self, items: &[CartItem]) -> Result<(), StorageError> {
        let blob = serde_json::to_string(items)?;
        self.storage.set(&self.key, &blob)?;
        tracing::debug!(key = %self.key, items = items.len(), "Cart saved");

        let badge = CartBadge::for_items(items);
        for display in &mut self.badges {
            display.show(&badge);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use shelfcart_core::Price;

    use super::*;
    use crate::storage::MemoryStore;

    fn product(name: &str, price: &str, quantity: u32) -> NewCartItem {
        NewCartItem {
            name: name.to_string(),
            image: format!("https://cdn.example.com/{name}.png"),
            price: price.to_string(),
            size: Some("m".to_string()),
            quantity,
            seller: "Acme".to_string(),
            material: "Plastic".to_string(),
            color: "blue".to_string(),
        }
    }

    fn store() -> CartStore<MemoryStore> {
        CartStore::new(MemoryStore::new())
    }

    #[test]
    fn test_list_empty_when_absent() {
        assert!(store().list().is_empty());
    }

    #[test]
    fn test_list_empty_on_corrupt_blob() {
        let store = CartStore::new(MemoryStore::with_entry("cart", "not json"));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_list_empty_on_wrong_shape() {
        let store = CartStore::new(MemoryStore::with_entry("cart", r#"{"items":[]}"#));
        assert!(store.list().is_empty());
    }

    #[test]
    fn test_add_preserves_order_and_fields() {
        let mut store = store();
        let widget = product("Widget", "$10.00", 2);
        let added = store.add(widget.clone()).unwrap();
        store.add(product("Gadget", "$5.00", 1)).unwrap();

        let items = store.list();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], added);
        assert_eq!(items[0].details, widget);
        assert_eq!(items[1].details.name, "Gadget");
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_add_same_product_twice() {
        let mut store = store();
        store.add(product("Widget", "$10.00", 1)).unwrap();
        store.add(product("Widget", "$10.00", 1)).unwrap();

        let items = store.list();
        assert_eq!(items.len(), 2);
        assert_ne!(items[0].id, items[1].id);
    }

    #[test]
    fn test_add_persists_json_array() {
        let mut store = store();
        store.add(product("Widget", "$10.00", 2)).unwrap();

        let raw = store.storage().raw("cart").unwrap();
        let value: serde_json::Value = serde_json::from_str(raw).unwrap();
        assert_eq!(value[0]["name"], "Widget");
        assert_eq!(value[0]["quantity"], 2);
    }

    #[test]
    fn test_custom_key() {
        let mut store = CartStore::with_key(MemoryStore::new(), "basket");
        store.add(product("Widget", "$10.00", 1)).unwrap();
        assert_eq!(store.key(), "basket");
        assert!(store.storage().raw("basket").is_some());
        assert!(store.storage().raw("cart").is_none());
    }

    #[test]
    fn test_remove() {
        let mut store = store();
        let widget = store.add(product("Widget", "$10.00", 2)).unwrap();
        store.add(product("Gadget", "$5.00", 1)).unwrap();

        let remaining = store.remove(&widget.id).unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].details.name, "Gadget");
        assert_eq!(store.list(), remaining);
    }

    #[test]
    fn test_remove_absent_id_is_noop() {
        let mut store = store();
        assert!(store.remove(&CartItemId::new("missing")).unwrap().is_empty());

        store.add(product("Widget", "$10.00", 2)).unwrap();
        let before = store.list();
        let after = store.remove(&CartItemId::new("missing")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_update_quantity_touches_only_target() {
        let mut store = store();
        let widget = store.add(product("Widget", "$10.00", 2)).unwrap();
        let gadget = store.add(product("Gadget", "$5.00", 1)).unwrap();

        let items = store.update_quantity(&gadget.id, 4).unwrap();
        assert_eq!(items[0], widget);
        assert_eq!(items[1].id, gadget.id);
        assert_eq!(items[1].details.quantity, 4);
        assert_eq!(items[1].details.price, gadget.details.price);
        assert_eq!(store.list(), items);
    }

    #[test]
    fn test_update_quantity_absent_id_is_noop() {
        let mut store = store();
        store.add(product("Widget", "$10.00", 2)).unwrap();
        let before = store.list();
        let after = store.update_quantity(&CartItemId::new("missing"), 9).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_clear() {
        let mut store = store();
        store.add(product("Widget", "$10.00", 2)).unwrap();
        store.clear().unwrap();
        assert!(store.list().is_empty());
        assert_eq!(store.storage().raw("cart"), Some("[]"));
    }

    #[test]
    fn test_write_over_corrupt_blob_starts_fresh() {
        let mut store = CartStore::new(MemoryStore::with_entry("cart", "not json"));
        store.add(product("Widget", "$10.00", 1)).unwrap();
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn test_badges_follow_every_write() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();

        let sink = Rc::clone(&seen);
        store.attach_badge(move |badge: &CartBadge| {
            sink.borrow_mut().push((badge.count(), badge.is_visible()));
        });

        let widget = store.add(product("Widget", "$10.00", 2)).unwrap();
        store.add(product("Gadget", "$5.00", 1)).unwrap();
        store.update_quantity(&widget.id, 5).unwrap();
        store.remove(&widget.id).unwrap();
        store.clear().unwrap();

        assert_eq!(
            *seen.borrow(),
            vec![(0, false), (2, true), (3, true), (6, true), (1, true), (0, false)]
        );
    }

    #[test]
    fn test_multiple_badges() {
        let counts = Rc::new(RefCell::new(Vec::new()));
        let mut store = store();
        for _ in 0..2 {
            let sink = Rc::clone(&counts);
            store.attach_badge(move |badge: &CartBadge| sink.borrow_mut().push(badge.count()));
        }

        store.add(product("Widget", "$10.00", 3)).unwrap();
        assert_eq!(*counts.borrow(), vec![0, 0, 3, 3]);
        assert_eq!(store.badge().count(), 3);
    }

    #[test]
    fn test_items_price_through_store() {
        let mut store = store();
        let item = store.add(product("Widget", "$12.50", 1)).unwrap();
        assert_eq!(item.unit_price(), Price::from_cents(1250));
    }
}
