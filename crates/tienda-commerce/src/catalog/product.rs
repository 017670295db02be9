//! Product type.

use crate::ids::{CategoryId, ProductId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Stock level below which the listing shows a "last units" badge.
pub const LOW_STOCK_THRESHOLD: i64 = 10;

/// A product in the catalog.
///
/// Products are immutable at runtime; they come from the static catalog
/// data source and are never created or destroyed by user actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current selling price.
    pub price: Money,
    /// Pre-discount price, when the product is on sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Money>,
    /// Category this product belongs to.
    pub category: CategoryId,
    /// Average customer rating (0.0 to 5.0).
    pub rating: f64,
    /// Number of customer reviews.
    pub reviews: i64,
    /// Available inventory; upper bound for cart quantities.
    pub stock: i64,
    /// Recently added to the catalog.
    #[serde(default)]
    pub is_new: bool,
    /// Featured as a bestseller.
    #[serde(default)]
    pub is_bestseller: bool,
    /// Image reference for the listing card.
    pub image: String,
}

impl Product {
    /// Check if the product can be added to a cart.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Check if stock is low enough to warn the shopper.
    pub fn is_low_stock(&self) -> bool {
        self.stock > 0 && self.stock < LOW_STOCK_THRESHOLD
    }

    /// Check if this product is on sale (has an original price above the
    /// current one).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|op| op.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|op| {
            if op.amount_minor > self.price.amount_minor {
                let savings = op.amount_minor - self.price.amount_minor;
                Some((savings as f64 / op.amount_minor as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Amount saved versus the original price, if on sale.
    pub fn savings(&self) -> Option<Money> {
        if self.is_on_sale() {
            self.original_price?.try_subtract(&self.price)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("funda-clear"),
            name: "Funda Transparente".to_string(),
            description: "Funda delgada con esquinas reforzadas".to_string(),
            price: Money::pesos(45_000),
            original_price: None,
            category: CategoryId::new("accesorios"),
            rating: 4.5,
            reviews: 120,
            stock: 25,
            is_new: false,
            is_bestseller: true,
            image: "/img/funda-clear.webp".to_string(),
        }
    }

    #[test]
    fn test_stock_predicates() {
        let mut p = sample_product();
        assert!(p.is_in_stock());
        assert!(!p.is_low_stock());

        p.stock = 3;
        assert!(p.is_low_stock());

        p.stock = 0;
        assert!(!p.is_in_stock());
        assert!(!p.is_low_stock());
    }

    #[test]
    fn test_on_sale() {
        let mut p = sample_product();
        assert!(!p.is_on_sale());

        p.original_price = Some(Money::pesos(60_000));
        assert!(p.is_on_sale());
        assert_eq!(p.savings().unwrap().amount_minor, 15_000);

        let discount = p.discount_percentage().unwrap();
        assert!((discount - 25.0).abs() < 0.01);
    }

    #[test]
    fn test_original_price_below_current_is_not_a_sale() {
        let mut p = sample_product();
        p.original_price = Some(Money::pesos(40_000));
        assert!(!p.is_on_sale());
        assert!(p.discount_percentage().is_none());
        assert!(p.savings().is_none());
    }

    #[test]
    fn test_serde_round_trip() {
        let p = sample_product();
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
        assert_eq!(back.price.currency, Currency::COP);
    }
}
