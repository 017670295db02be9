//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart: one product and how many of it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product, denormalized so the drawer can render without a
    /// catalog lookup.
    pub product: Product,
    /// Quantity, always in `[1, product.stock]`.
    pub quantity: i64,
}

impl CartLine {
    /// Line total (price times quantity). Saturates on overflow.
    pub fn line_total(&self) -> Money {
        Money::new(
            self.product.price.amount_minor.saturating_mul(self.quantity),
            self.product.price.currency,
        )
    }
}

/// The session shopping cart.
///
/// Line items keep insertion order and each product appears at most once.
/// Every operation is a total function: referencing a product that is not
/// in the cart is a silent no-op, never an error. The quantity bounds are
/// maintained by the mutation methods, which is why `items` is private.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    items: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity is incremented,
    /// capped at the product's stock. An out-of-stock product is never
    /// added. Returns whether the cart changed.
    pub fn add(&mut self, product: &Product) -> bool {
        if let Some(line) = self.items.iter_mut().find(|l| l.product.id == product.id) {
            if line.quantity < line.product.stock {
                line.quantity += 1;
                return true;
            }
            return false;
        }

        if product.stock <= 0 {
            return false;
        }

        self.items.push(CartLine {
            product: product.clone(),
            quantity: 1,
        });
        true
    }

    /// Remove a product entirely. No-op if absent.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|l| &l.product.id != product_id);
        self.items.len() < len_before
    }

    /// Set a product's quantity.
    ///
    /// A quantity of zero or less removes the line; anything else is
    /// clamped to `[1, stock]`. No-op if the product is not in the cart.
    /// Returns whether the cart changed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(product_id);
        }

        if let Some(line) = self.items.iter_mut().find(|l| &l.product.id == product_id) {
            line.quantity = quantity.clamp(1, line.product.stock.max(1));
            true
        } else {
            false
        }
    }

    /// Clear all items.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// The line items, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.items
    }

    /// Get the line for a product, if present.
    pub fn get(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.items.iter().find(|l| &l.product.id == product_id)
    }

    /// Check whether a product is in the cart.
    pub fn contains(&self, product_id: &ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Total item count (sum of quantities); the nav badge number.
    pub fn total_items(&self) -> i64 {
        self.items.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct products.
    pub fn unique_items(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of line totals. Saturates on overflow so the operation stays
    /// total.
    pub fn total_price(&self) -> Money {
        let total = self
            .items
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.line_total().amount_minor));
        Money::new(total, self.currency())
    }

    /// The cart currency. The catalog is single-currency, so this is the
    /// first line's currency, or the default when empty.
    pub fn currency(&self) -> Currency {
        self.items
            .first()
            .map(|l| l.product.price.currency)
            .unwrap_or_default()
    }

    /// Consume the cart, yielding its lines. Used when an order is placed.
    pub fn into_lines(self) -> Vec<CartLine> {
        self.items
    }
}
