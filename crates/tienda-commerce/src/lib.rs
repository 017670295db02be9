//! Commerce domain types and logic for the Tienda storefront.
//!
//! This crate holds the pure, I/O-free core of the shop:
//!
//! - **Catalog**: products, categories, the static catalog container
//! - **Query**: filter criteria, sort modes, the query pipeline
//! - **Cart**: line items, totals, the session cart
//!
//! # Example
//!
//! ```rust,ignore
//! use tienda_commerce::prelude::*;
//!
//! let catalog = Catalog::from_json(&data)?;
//!
//! // Derive the visible products for a filtered view
//! let query = ProductQuery::new()
//!     .with_category("accesorios")
//!     .with_sort(SortMode::PriceAsc);
//! let visible = run_query(&catalog.products, &query);
//!
//! // Add one to the cart
//! let mut cart = Cart::new();
//! cart.add(visible[0]);
//! println!("Total: {}", cart.total_price().display());
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod money;
pub mod query;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, Category, Product, LOW_STOCK_THRESHOLD};

    // Cart
    pub use crate::cart::{Cart, CartLine, CartTotals};

    // Query
    pub use crate::query::{run_query, ProductQuery, QueryResults, SortMode};
}
