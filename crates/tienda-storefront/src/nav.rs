//! Navigation state.

use serde::{Deserialize, Serialize};
use tienda_commerce::ids::ProductId;

/// The storefront's routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Route {
    /// Landing page.
    #[default]
    Home,
    /// Catalog listing with filters.
    Catalog,
    /// One product's detail page.
    Product(ProductId),
    /// Checkout form.
    Checkout,
    /// Service reservation page.
    Reservations,
}

impl Route {
    /// Parse a path (query string excluded). Unknown paths go home.
    pub fn parse(path: &str) -> Self {
        let mut segments = path.trim_matches('/').split('/');
        match segments.next().unwrap_or("") {
            "" => Route::Home,
            "catalogo" => Route::Catalog,
            "producto" => match segments.next() {
                Some(id) if !id.is_empty() => Route::Product(ProductId::new(id)),
                _ => Route::Catalog,
            },
            "checkout" => Route::Checkout,
            "reservas" => Route::Reservations,
            _ => Route::Home,
        }
    }

    /// The path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Catalog => "/catalogo".to_string(),
            Route::Product(id) => format!("/producto/{}", id),
            Route::Checkout => "/checkout".to_string(),
            Route::Reservations => "/reservas".to_string(),
        }
    }

    /// Label used in the nav links.
    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Inicio",
            Route::Catalog => "Productos",
            Route::Product(_) => "Producto",
            Route::Checkout => "Checkout",
            Route::Reservations => "Reservas",
        }
    }
}

/// Current navigation state.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    route: Route,
}

impl NavState {
    /// Start at the landing page.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current route.
    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Move to a route.
    pub fn go_to(&mut self, route: Route) {
        self.route = route;
    }

    /// Check whether a nav link is the active one.
    pub fn is_active(&self, route: &Route) -> bool {
        &self.route == route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/catalogo"), Route::Catalog);
        assert_eq!(Route::parse("/checkout"), Route::Checkout);
        assert_eq!(Route::parse("/reservas"), Route::Reservations);
        assert_eq!(
            Route::parse("/producto/funda-clear"),
            Route::Product(ProductId::new("funda-clear"))
        );
    }

    #[test]
    fn test_unknown_path_goes_home() {
        assert_eq!(Route::parse("/no-existe"), Route::Home);
        assert_eq!(Route::parse("/admin/panel"), Route::Home);
    }

    #[test]
    fn test_product_without_id_goes_to_catalog() {
        assert_eq!(Route::parse("/producto"), Route::Catalog);
        assert_eq!(Route::parse("/producto/"), Route::Catalog);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            Route::Home,
            Route::Catalog,
            Route::Product(ProductId::new("x")),
            Route::Checkout,
            Route::Reservations,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_active_link() {
        let mut nav = NavState::new();
        nav.go_to(Route::Catalog);
        assert!(nav.is_active(&Route::Catalog));
        assert!(!nav.is_active(&Route::Home));
    }
}
