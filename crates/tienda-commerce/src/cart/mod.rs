//! Shopping cart module.
//!
//! Contains the cart, its line items, and the drawer summary totals.

mod cart;
mod totals;

pub use cart::{Cart, CartLine};
pub use totals::CartTotals;
