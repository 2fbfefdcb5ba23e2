//! Quantity coercion and the product page quantity stepper.
//!
//! Quantities arrive as free-form input strings. They are read the lenient
//! way a browser reads an integer field: optional leading whitespace and
//! sign, then as many digits as are present. Anything that does not yield a
//! positive number becomes the default quantity of 1.

/// Quantity used when input is missing or not a positive integer.
pub const DEFAULT_QUANTITY: u32 = 1;

/// Lower bound of the stepper when the input carries none.
pub const DEFAULT_MIN: u32 = 1;

/// Upper bound of the stepper when the input carries none.
pub const DEFAULT_MAX: u32 = 999;

/// Largest quantity offered by the cart page quantity selector.
pub const SELECTOR_MAX: u32 = 20;

/// Parse the leading integer of `input`.
///
/// Returns `None` when no digits follow the optional sign.
///
/// ```
/// use shelfcart_core::quantity::parse_int;
///
/// assert_eq!(parse_int(" 12abc"), Some(12));
/// assert_eq!(parse_int("-3"), Some(-3));
/// assert_eq!(parse_int("2.9"), Some(2));
/// assert_eq!(parse_int("abc"), None);
/// ```
#[must_use]
pub fn parse_int(input: &str) -> Option<i64> {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, trimmed.get(1..)?),
        Some(b'+') => (false, trimmed.get(1..)?),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Saturate instead of failing on absurdly long digit runs
    let magnitude = rest
        .get(..digits_len)?
        .bytes()
        .fold(0_i64, |acc, b| acc.saturating_mul(10).saturating_add(i64::from(b - b'0')));

    Some(if negative { -magnitude } else { magnitude })
}

/// Parse a quantity, defaulting to 1 for missing, zero, negative or
/// non-numeric input.
#[must_use]
pub fn parse_or_default(input: &str) -> u32 {
    parse_int(input).map_or(DEFAULT_QUANTITY, from_int)
}

/// Convert an already-parsed integer to a quantity, defaulting to 1 when it
/// is not a positive `u32`.
#[must_use]
pub fn from_int(value: i64) -> u32 {
    u32::try_from(value)
        .ok()
        .filter(|q| *q >= 1)
        .unwrap_or(DEFAULT_QUANTITY)
}

/// Quantity options offered by the cart page selector (`1..=20`).
pub fn selector_options() -> impl Iterator<Item = u32> {
    1..=SELECTOR_MAX
}

/// Increment/decrement bounds for a quantity input.
///
/// Built from the input's optional `min`/`max` attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityStepper {
    min: u32,
    max: u32,
}

impl Default for QuantityStepper {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
        }
    }
}

impl QuantityStepper {
    /// Create a stepper with explicit bounds.
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Create a stepper from optional attribute strings.
    ///
    /// Missing or non-positive bounds fall back to 1 and 999.
    #[must_use]
    pub fn from_attributes(min: Option<&str>, max: Option<&str>) -> Self {
        let bound = |attr: Option<&str>, default: u32| {
            attr.and_then(parse_int)
                .and_then(|v| u32::try_from(v).ok())
                .filter(|v| *v >= 1)
                .unwrap_or(default)
        };

        Self {
            min: bound(min, DEFAULT_MIN),
            max: bound(max, DEFAULT_MAX),
        }
    }

    #[must_use]
    pub const fn min(&self) -> u32 {
        self.min
    }

    #[must_use]
    pub const fn max(&self) -> u32 {
        self.max
    }

    /// One step up, unless already at the maximum.
    #[must_use]
    pub fn increment(&self, current: &str) -> u32 {
        let value = parse_or_default(current);
        if value < self.max { value + 1 } else { value }
    }

    /// One step down, unless already at the minimum.
    #[must_use]
    pub fn decrement(&self, current: &str) -> u32 {
        let value = parse_or_default(current);
        if value > self.min { value - 1 } else { value }
    }

    /// Clamp a typed-in value into `[min, max]`.
    #[must_use]
    pub fn normalize(&self, current: &str) -> u32 {
        let value = parse_or_default(current);
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int("3"), Some(3));
        assert_eq!(parse_int("  42"), Some(42));
        assert_eq!(parse_int("+7"), Some(7));
        assert_eq!(parse_int("-2"), Some(-2));
        assert_eq!(parse_int("5 items"), Some(5));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("x5"), None);
    }

    #[test]
    fn test_parse_or_default() {
        assert_eq!(parse_or_default("4"), 4);
        assert_eq!(parse_or_default("abc"), 1);
        assert_eq!(parse_or_default("0"), 1);
        assert_eq!(parse_or_default("-5"), 1);
        assert_eq!(parse_or_default("99999999999999999999"), 1);
    }

    #[test]
    fn test_stepper_defaults() {
        let stepper = QuantityStepper::from_attributes(None, Some("lots"));
        assert_eq!(stepper, QuantityStepper::default());
        assert_eq!(stepper.min(), 1);
        assert_eq!(stepper.max(), 999);
    }

    #[test]
    fn test_stepper_increment() {
        let stepper = QuantityStepper::new(1, 5);
        assert_eq!(stepper.increment("1"), 2);
        assert_eq!(stepper.increment("5"), 5);
        assert_eq!(stepper.increment(""), 2);
    }

    #[test]
    fn test_stepper_decrement() {
        let stepper = QuantityStepper::new(2, 10);
        assert_eq!(stepper.decrement("4"), 3);
        assert_eq!(stepper.decrement("2"), 2);
        // Invalid input reads as 1, which is already below the minimum
        assert_eq!(stepper.decrement("abc"), 1);
    }

    #[test]
    fn test_stepper_normalize() {
        let stepper = QuantityStepper::from_attributes(Some("2"), Some("10"));
        assert_eq!(stepper.normalize("1"), 2);
        assert_eq!(stepper.normalize("11"), 10);
        assert_eq!(stepper.normalize("7"), 7);
        assert_eq!(stepper.normalize("junk"), 2);
    }

    #[test]
    fn test_selector_options() {
        let options: Vec<u32> = selector_options().collect();
        assert_eq!(options.len(), 20);
        assert_eq!(options.first(), Some(&1));
        assert_eq!(options.last(), Some(&20));
    }
}
