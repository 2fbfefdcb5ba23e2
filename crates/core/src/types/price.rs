//! Prices parsed from display strings.
//!
//! Cart items carry their price the way the product page showed it
//! (`"$1,299.99"`, `"US $5.00 / unit"`), and the numeric amount is extracted
//! on demand. Everything except ASCII digits and `.` is stripped, then the
//! leading decimal number is parsed.

use core::fmt;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input contains no digits.
    #[error("price contains no digits: {0:?}")]
    NoDigits(String),
    /// The digits do not form a representable decimal.
    #[error("price is not a valid decimal: {0:?}")]
    Invalid(String),
}

/// A monetary amount in the store currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    amount: Decimal,
}

impl Price {
    /// Zero amount.
    pub const ZERO: Self = Self {
        amount: Decimal::ZERO,
    };

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self { amount }
    }

    /// Create a price from an amount in cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self::new(Decimal::new(cents, 2))
    }

    /// Parse the numeric amount out of a display string.
    ///
    /// # Errors
    ///
    /// Returns an error if no leading decimal number remains after stripping
    /// non-numeric characters.
    ///
    /// ```
    /// use shelfcart_core::Price;
    ///
    /// assert_eq!(Price::parse("$1,299.99").unwrap().display(), "$1299.99");
    /// assert!(Price::parse("free").is_err());
    /// ```
    pub fn parse(display: &str) -> Result<Self, PriceError> {
        let numeric: String = display
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        let mut seen_dot = false;
        let leading: String = numeric
            .chars()
            .take_while(|c| {
                if *c == '.' {
                    if seen_dot {
                        return false;
                    }
                    seen_dot = true;
                }
                true
            })
            .collect();

        let trimmed = leading.trim_end_matches('.');
        if !trimmed.chars().any(|c| c.is_ascii_digit()) {
            return Err(PriceError::NoDigits(display.to_owned()));
        }

        let normalized = if trimmed.starts_with('.') {
            format!("0{trimmed}")
        } else {
            trimmed.to_owned()
        };

        Decimal::from_str(&normalized)
            .map(Self::new)
            .map_err(|_| PriceError::Invalid(display.to_owned()))
    }

    /// Parse a display string, falling back to zero when it has no number.
    #[must_use]
    pub fn from_display(display: &str) -> Self {
        Self::parse(display).unwrap_or(Self::ZERO)
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.amount
    }

    /// Multiply by a quantity, saturating at the largest representable amount.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self::new(self.amount.saturating_mul(Decimal::from(quantity)))
    }

    /// Round half away from zero to two decimal places.
    #[must_use]
    pub fn round_cents(self) -> Self {
        Self::new(
            self.amount
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Format for display, e.g. `"$19.99"`.
    ///
    /// Negative amounts keep the sign after the symbol (`"$-21.00"`), which
    /// is how the cart summary has always shown them.
    #[must_use]
    pub fn display(&self) -> String {
        format!("${:.2}", self.round_cents().amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

impl FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self::new(amount)
    }
}

impl core::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.amount.saturating_add(rhs.amount))
    }
}

impl core::ops::Sub for Price {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.amount.saturating_sub(rhs.amount))
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, p| acc + p)
    }
}
