//! Checkout page: delivery form and order placement.

use serde::{Deserialize, Serialize};
use tienda_commerce::cart::{CartLine, CartTotals};
use tienda_commerce::error::StoreError;
use tienda_commerce::ids::OrderId;
use tracing::info;

use crate::store::CartStore;

/// Customer contact and delivery details.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CheckoutForm {
    /// Full name.
    pub name: String,
    /// Contact phone, used for delivery coordination.
    pub phone: String,
    /// Email for the order confirmation.
    pub email: String,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Optional delivery note.
    pub note: String,
}

impl CheckoutForm {
    /// Validate the form. The first failing field wins.
    pub fn validate(&self) -> Result<(), StoreError> {
        if self.name.trim().is_empty() {
            return Err(StoreError::validation("name", "ingresa tu nombre"));
        }
        if self.phone.trim().is_empty() {
            return Err(StoreError::validation("phone", "ingresa un tel\u{e9}fono"));
        }
        if !self.phone.trim().chars().all(|c| c.is_ascii_digit() || c == '+' || c == ' ') {
            return Err(StoreError::validation("phone", "tel\u{e9}fono inv\u{e1}lido"));
        }
        if !self.email.contains('@') {
            return Err(StoreError::validation("email", "correo inv\u{e1}lido"));
        }
        if self.address.trim().is_empty() {
            return Err(StoreError::validation("address", "ingresa la direcci\u{f3}n"));
        }
        if self.city.trim().is_empty() {
            return Err(StoreError::validation("city", "ingresa la ciudad"));
        }
        Ok(())
    }
}

/// A placed order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Order identifier.
    pub id: OrderId,
    /// Who ordered and where it ships.
    pub customer: CheckoutForm,
    /// The purchased lines, as they were in the cart.
    pub lines: Vec<CartLine>,
    /// Totals at the moment of purchase.
    pub totals: CartTotals,
    /// Unix timestamp of placement.
    pub placed_at: i64,
}

/// Checkout page view state.
#[derive(Debug, Clone, Default)]
pub struct CheckoutPage {
    /// The form being filled in.
    pub form: CheckoutForm,
    placed: Option<Order>,
}

impl CheckoutPage {
    /// Create an empty checkout page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Place the order: validate the form, take the cart's contents, and
    /// clear the cart. An empty cart is rejected before the form is read.
    pub fn place_order(&mut self, store: &mut CartStore) -> Result<Order, StoreError> {
        if store.cart().is_empty() {
            return Err(StoreError::EmptyCart);
        }
        self.form.validate()?;

        let totals = store.totals();
        let cart = store.take_cart();
        let order = Order {
            id: OrderId::generate(),
            customer: self.form.clone(),
            lines: cart.into_lines(),
            totals,
            placed_at: current_timestamp(),
        };

        info!(order = %order.id, items = order.totals.item_count, "order placed");
        store.set_cart_open(false);
        self.placed = Some(order.clone());
        Ok(order)
    }

    /// The confirmation to show, once an order has been placed.
    pub fn placed_order(&self) -> Option<&Order> {
        self.placed.as_ref()
    }
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienda_commerce::catalog::Product;
    use tienda_commerce::ids::{CategoryId, ProductId};
    use tienda_commerce::money::Money;

    fn product(id: &str, price: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Money::pesos(price),
            original_price: None,
            category: CategoryId::new("accesorios"),
            rating: 4.0,
            reviews: 0,
            stock: 5,
            is_new: false,
            is_bestseller: false,
            image: String::new(),
        }
    }

    fn valid_form() -> CheckoutForm {
        CheckoutForm {
            name: "Ana Torres".to_string(),
            phone: "+57 300 1234567".to_string(),
            email: "ana@example.com".to_string(),
            address: "Calle 45 # 12-34".to_string(),
            city: "Bogot\u{e1}".to_string(),
            note: String::new(),
        }
    }

    #[test]
    fn test_empty_cart_is_rejected() {
        let mut page = CheckoutPage::new();
        page.form = valid_form();
        let mut store = CartStore::new();

        assert!(matches!(
            page.place_order(&mut store),
            Err(StoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let mut page = CheckoutPage::new();
        page.form = valid_form();
        page.form.email = "sin-arroba".to_string();

        let mut store = CartStore::new();
        store.add_to_cart(&product("a", 45_000));

        assert!(page.place_order(&mut store).is_err());
        // The cart survives a failed attempt.
        assert_eq!(store.total_items(), 1);
    }

    #[test]
    fn test_place_order_clears_cart() {
        let mut page = CheckoutPage::new();
        page.form = valid_form();

        let mut store = CartStore::new();
        store.add_to_cart(&product("a", 45_000));
        store.add_to_cart(&product("b", 120_000));

        let order = page.place_order(&mut store).unwrap();
        assert_eq!(order.lines.len(), 2);
        assert_eq!(order.totals.subtotal.amount_minor, 165_000);

        assert!(store.cart().is_empty());
        assert!(!store.is_open());
        assert!(page.placed_order().is_some());
    }

    #[test]
    fn test_form_validation_messages() {
        let mut form = valid_form();
        form.phone = "abc".to_string();
        assert!(form.validate().is_err());

        let mut form = valid_form();
        form.name = "  ".to_string();
        assert!(form.validate().is_err());

        assert!(valid_form().validate().is_ok());
    }
}
