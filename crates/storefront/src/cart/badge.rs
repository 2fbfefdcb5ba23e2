//! Cart count badge.
//!
//! Every write to the cart recomputes the badge and pushes it to each
//! attached display. Pages can carry several badges (header, mobile menu).

use shelfcart_core::CartItem;

use super::pricing::total_item_count;

/// Badge state derived from the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartBadge {
    count: u32,
}

impl CartBadge {
    #[must_use]
    pub const fn new(count: u32) -> Self {
        Self { count }
    }

    /// Compute the badge for the given cart contents.
    #[must_use]
    pub fn for_items(items: &[CartItem]) -> Self {
        Self::new(total_item_count(items))
    }

    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// The badge is hidden when the cart is empty.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.count > 0
    }

    /// Text shown inside the badge.
    #[must_use]
    pub fn text(&self) -> String {
        self.count.to_string()
    }
}

/// Something that shows the cart badge.
pub trait BadgeDisplay {
    /// Render the latest badge state.
    fn show(&mut self, badge: &CartBadge);
}

impl<F> BadgeDisplay for F
where
    F: FnMut(&CartBadge),
{
    fn show(&mut self, badge: &CartBadge) {
        self(badge);
    }
}
