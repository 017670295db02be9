//! The catalog container.

use crate::catalog::{Category, Product};
use crate::error::StoreError;
use crate::ids::{CategoryId, ProductId};
use serde::{Deserialize, Serialize};

/// The full product catalog.
///
/// Product order is the source order of the data file; the query engine
/// treats that order as "relevance". The catalog is loaded once at session
/// start and never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Catalog {
    /// All products, in source order.
    pub products: Vec<Product>,
    /// All categories, in sidebar order.
    pub categories: Vec<Category>,
}

impl Catalog {
    /// Create a catalog from parts, sorting categories by position.
    pub fn new(products: Vec<Product>, mut categories: Vec<Category>) -> Self {
        categories.sort_by_key(|c| c.position);
        Self {
            products,
            categories,
        }
    }

    /// Parse a catalog from its JSON data source.
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// Serialize the catalog back to JSON.
    pub fn to_json(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Look up a product by id, as a `StoreError` on miss.
    pub fn require_product(&self, id: &ProductId) -> Result<&Product, StoreError> {
        self.product(id)
            .ok_or_else(|| StoreError::UnknownProduct(id.as_str().to_string()))
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// Check whether a category id exists.
    pub fn has_category(&self, id: &CategoryId) -> bool {
        self.category(id).is_some()
    }

    /// Number of products in a category.
    pub fn category_count(&self, id: &CategoryId) -> usize {
        self.products.iter().filter(|p| &p.category == id).count()
    }

    /// Total number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Check if the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, category: &str) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Money::pesos(10_000),
            original_price: None,
            category: CategoryId::new(category),
            rating: 4.0,
            reviews: 1,
            stock: 5,
            is_new: false,
            is_bestseller: false,
            image: String::new(),
        }
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(
            vec![product("a", "celulares"), product("b", "accesorios")],
            vec![Category::new("celulares", "Celulares")],
        );

        assert!(catalog.product(&ProductId::new("a")).is_some());
        assert!(catalog.product(&ProductId::new("zzz")).is_none());
        assert!(catalog.require_product(&ProductId::new("zzz")).is_err());
        assert_eq!(catalog.category_count(&CategoryId::new("accesorios")), 1);
    }

    #[test]
    fn test_categories_sorted_by_position() {
        let catalog = Catalog::new(
            vec![],
            vec![
                Category::new("b", "B").with_position(2),
                Category::new("a", "A").with_position(1),
            ],
        );
        assert_eq!(catalog.categories[0].id.as_str(), "a");
    }

    #[test]
    fn test_json_round_trip() {
        let catalog = Catalog::new(
            vec![product("a", "celulares")],
            vec![Category::new("celulares", "Celulares")],
        );
        let json = catalog.to_json().unwrap();
        let back = Catalog::from_json(&json).unwrap();
        assert_eq!(back.len(), 1);
        assert_eq!(back.products[0].id.as_str(), "a");
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(Catalog::from_json("{not json").is_err());
    }
}
