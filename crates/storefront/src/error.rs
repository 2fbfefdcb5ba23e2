//! Unified error handling.
//!
//! Provides a unified `AppError` type for code paths that touch several
//! concerns at once (configuration, storage, add-to-cart). Cart reads never
//! produce errors; see [`crate::cart::CartStore::list`].

use thiserror::Error;

use crate::config::ConfigError;
use crate::product::AddToCartError;
use crate::storage::StorageError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Storage operation failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Product could not be added to the cart.
    #[error("Add to cart error: {0}")]
    AddToCart(#[from] AddToCartError),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
