//! The storefront session.
//!
//! One value owns everything the running page needs: the catalog, the
//! cart store, navigation, and the per-page view states. All mutation
//! happens through the user-action methods, one discrete action at a
//! time; there is no shared state and no background work.

use tienda_commerce::catalog::{Catalog, Product};
use tienda_commerce::error::StoreError;
use tienda_commerce::ids::ProductId;
use tienda_commerce::query::QueryResults;
use tracing::debug;

use crate::nav::{NavState, Route};
use crate::pages::{CatalogPage, CheckoutPage, Order, ReservationPage};
use crate::store::CartStore;

/// A running storefront session.
#[derive(Debug, Clone)]
pub struct Storefront {
    catalog: Catalog,
    /// Cart plus drawer state.
    pub cart: CartStore,
    /// Current route.
    pub nav: NavState,
    /// Catalog page filters.
    pub catalog_page: CatalogPage,
    /// Checkout form state.
    pub checkout: CheckoutPage,
    /// Reservation form state.
    pub reservations: ReservationPage,
}

impl Storefront {
    /// Start a session over a catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            cart: CartStore::new(),
            nav: NavState::new(),
            catalog_page: CatalogPage::new(),
            checkout: CheckoutPage::new(),
            reservations: ReservationPage::new(),
        }
    }

    /// The catalog backing the session.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Navigate to a URL (path plus optional query string).
    ///
    /// Entering the catalog page seeds the category filter from
    /// `categoria`, once; later filter changes do not touch the URL.
    pub fn visit(&mut self, url: &str) {
        let (path, query_string) = match url.split_once('?') {
            Some((p, q)) => (p, q),
            None => (url, ""),
        };

        let route = Route::parse(path);
        debug!(url, route = ?route, "visit");

        if route == Route::Catalog && !query_string.is_empty() {
            self.catalog_page.seed_from_url(query_string);
        }
        self.nav.go_to(route);
    }

    /// The visible products for the catalog page's current filters.
    pub fn visible_products(&self) -> QueryResults<'_> {
        self.catalog_page.results(&self.catalog)
    }

    /// Look up a product for the detail page.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.catalog.product(id)
    }

    /// Add a product to the cart by id. Unknown ids are a silent no-op,
    /// like every other cart operation.
    pub fn add_to_cart(&mut self, id: &ProductId) -> bool {
        match self.catalog.product(id) {
            Some(product) => self.cart.add_to_cart(product),
            None => {
                debug!(product = %id, "add to cart for unknown product ignored");
                false
            }
        }
    }

    /// Place the order from the checkout page.
    pub fn place_order(&mut self) -> Result<Order, StoreError> {
        self.checkout.place_order(&mut self.cart)
    }
}
