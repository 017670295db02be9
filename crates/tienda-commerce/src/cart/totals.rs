//! Cart summary totals.

use crate::cart::Cart;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// The summary block at the bottom of the cart drawer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Shipping cost. The store ships free, so this is always zero.
    pub shipping: Money,
    /// Amount due.
    pub total: Money,
    /// Sum of quantities across lines.
    pub item_count: i64,
}

impl CartTotals {
    /// Compute the totals for a cart.
    pub fn of(cart: &Cart) -> Self {
        let subtotal = cart.total_price();
        let shipping = Money::zero(cart.currency());
        Self {
            subtotal,
            shipping,
            // Free shipping keeps total == subtotal.
            total: subtotal,
            item_count: cart.total_items(),
        }
    }

    /// Check if there is anything to pay for.
    pub fn has_items(&self) -> bool {
        self.item_count > 0
    }
}
