//! The cart store: the session cart plus drawer visibility.

use tienda_commerce::cart::{Cart, CartLine, CartTotals};
use tienda_commerce::catalog::Product;
use tienda_commerce::ids::ProductId;
use tracing::debug;

/// Session-scoped cart state.
///
/// Wraps the domain cart with the one piece of UI state that travels with
/// it: whether the drawer is open. Adding a product opens the drawer so
/// the shopper sees what just happened.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    cart: Cart,
    is_open: bool,
}

impl CartStore {
    /// Create an empty, closed cart store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product and open the drawer.
    ///
    /// Returns whether the cart changed (it does not when the product is
    /// out of stock or the line is already at the stock cap).
    pub fn add_to_cart(&mut self, product: &Product) -> bool {
        let changed = self.cart.add(product);
        if changed {
            debug!(product = %product.id, total_items = self.cart.total_items(), "added to cart");
        } else {
            debug!(product = %product.id, "add to cart was a no-op");
        }
        self.is_open = true;
        changed
    }

    /// Remove a product entirely. Silent no-op if absent.
    pub fn remove_from_cart(&mut self, product_id: &ProductId) -> bool {
        let removed = self.cart.remove(product_id);
        if removed {
            debug!(product = %product_id, "removed from cart");
        }
        removed
    }

    /// Set a product's quantity; zero or less removes it.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        let changed = self.cart.update_quantity(product_id, quantity);
        if changed {
            debug!(product = %product_id, quantity, "updated quantity");
        }
        changed
    }

    /// Open or close the drawer. No business effect.
    pub fn set_cart_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Check whether the drawer is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The line items, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Sum of quantities; the badge on the nav cart button.
    pub fn total_items(&self) -> i64 {
        self.cart.total_items()
    }

    /// The drawer summary totals.
    pub fn totals(&self) -> CartTotals {
        CartTotals::of(&self.cart)
    }

    /// Empty the cart (after a placed order, or explicitly).
    pub fn clear(&mut self) {
        self.cart.clear();
        debug!("cart cleared");
    }

    /// Replace the cart wholesale, consuming the old one.
    pub(crate) fn take_cart(&mut self) -> Cart {
        std::mem::take(&mut self.cart)
    }
}
