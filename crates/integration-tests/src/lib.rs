//! Integration tests for Shelfcart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p shelfcart-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_scenarios` - Cart store behavior end to end over in-memory storage
//! - `file_storage` - The same store over the file-backed key-value store
//!
//! This library holds the fixtures shared by the test files.

use std::path::Path;

use shelfcart_core::NewCartItem;
use shelfcart_storefront::cart::CartStore;
use shelfcart_storefront::storage::{FileStore, MemoryStore};

/// A product line as the product page would build it.
#[must_use]
pub fn product(name: &str, price: &str, quantity: u32) -> NewCartItem {
    NewCartItem {
        name: name.to_string(),
        image: format!("https://cdn.example.com/{}.png", name.to_lowercase()),
        price: price.to_string(),
        size: Some(String::new()),
        quantity,
        seller: "Pineapple Goods".to_string(),
        material: "Plastic".to_string(),
        color: "blue".to_string(),
    }
}

/// Empty cart over in-memory storage.
#[must_use]
pub fn memory_cart() -> CartStore<MemoryStore> {
    CartStore::new(MemoryStore::new())
}

/// Cart over a storage file inside `dir`.
#[must_use]
pub fn file_cart(dir: &Path) -> CartStore<FileStore> {
    CartStore::new(FileStore::new(dir.join("storage.json")))
}
