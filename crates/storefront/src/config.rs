//! Cart configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CART_STORAGE_KEY` - Storage key holding the cart blob (default: cart)
//! - `CART_STORAGE_PATH` - File backing the key-value store (default: .shelfcart/storage.json)
//! - `CART_FIXED_DISCOUNT` - Flat discount applied to the cart total (default: 60.00)
//! - `CART_FIXED_TAX` - Flat tax added to the cart total (default: 14.00)

use std::path::PathBuf;
use std::str::FromStr;

use rust_decimal::Decimal;
use shelfcart_core::Price;
use thiserror::Error;

/// Default storage key for the cart blob.
pub const DEFAULT_STORAGE_KEY: &str = "cart";

/// Default location of the file-backed key-value store.
pub const DEFAULT_STORAGE_PATH: &str = ".shelfcart/storage.json";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Cart application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartConfig {
    /// Key under which the cart blob is stored
    pub storage_key: String,
    /// Path of the JSON file used by the file-backed store
    pub storage_path: PathBuf,
    /// Fixed charges applied to the cart total
    pub pricing: PricingConfig,
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            storage_path: PathBuf::from(DEFAULT_STORAGE_PATH),
            pricing: PricingConfig::default(),
        }
    }
}

/// Flat discount and tax applied to every non-empty cart.
///
/// These are placeholders for a real pricing rule; they are not derived from
/// the cart contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PricingConfig {
    /// Subtracted from the subtotal
    pub discount: Price,
    /// Added to the subtotal
    pub tax: Price,
}

impl PricingConfig {
    /// Flat discount used when none is configured ($60.00).
    pub const DEFAULT_DISCOUNT_CENTS: i64 = 6000;
    /// Flat tax used when none is configured ($14.00).
    pub const DEFAULT_TAX_CENTS: i64 = 1400;

    /// Create a pricing config with explicit charges.
    #[must_use]
    pub const fn new(discount: Price, tax: Price) -> Self {
        Self { discount, tax }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            discount: Price::from_cents(Self::DEFAULT_DISCOUNT_CENTS),
            tax: Price::from_cents(Self::DEFAULT_TAX_CENTS),
        }
    }
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a pricing variable is not a decimal number.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a pricing variable is not a decimal number.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = PricingConfig::default();

        let storage_key = lookup("CART_STORAGE_KEY")
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| DEFAULT_STORAGE_KEY.to_string());
        let storage_path = lookup("CART_STORAGE_PATH")
            .filter(|path| !path.is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH), PathBuf::from);
        let discount = get_price(&lookup, "CART_FIXED_DISCOUNT")?.unwrap_or(defaults.discount);
        let tax = get_price(&lookup, "CART_FIXED_TAX")?.unwrap_or(defaults.tax);

        Ok(Self {
            storage_key,
            storage_path,
            pricing: PricingConfig { discount, tax },
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Parse an optional decimal variable into a price.
fn get_price(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<Price>, ConfigError> {
    lookup(key)
        .map(|value| {
            Decimal::from_str(value.trim())
                .map(Price::new)
                .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
        })
        .transpose()
}
