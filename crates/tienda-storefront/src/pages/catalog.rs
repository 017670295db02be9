//! Catalog page view state.

use tienda_commerce::catalog::Catalog;
use tienda_commerce::ids::CategoryId;
use tienda_commerce::money::Money;
use tienda_commerce::query::{ProductQuery, QueryResults, SortMode};
use tracing::debug;

/// Upper end of the price slider, in pesos. A ceiling at this value is
/// treated as "no price filter".
pub const PRICE_CEILING_MAX: i64 = 2_000_000;

/// View state for the catalog listing page.
///
/// Holds the current filter criteria and derives the visible products on
/// demand. The criteria start at the default view: empty search, no
/// category, slider at its maximum, relevance order.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    query: ProductQuery,
}

impl Default for CatalogPage {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogPage {
    /// Create the default, unfiltered view.
    pub fn new() -> Self {
        Self {
            query: ProductQuery::new().with_max_price(Money::pesos(PRICE_CEILING_MAX)),
        }
    }

    /// Seed the category filter from a URL query string at page entry.
    ///
    /// Only `categoria` is honored here; this is a one-time read, the
    /// criteria are not written back to the URL afterwards.
    pub fn seed_from_url(&mut self, query_string: &str) {
        let parsed = ProductQuery::from_query_string(query_string);
        if let Some(category) = parsed.category {
            debug!(category = %category, "seeding category filter from url");
            self.query.category = Some(category);
        }
    }

    /// The current criteria.
    pub fn query(&self) -> &ProductQuery {
        &self.query
    }

    /// Set the search text.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Select a category.
    pub fn set_category(&mut self, category: impl Into<CategoryId>) {
        self.query.category = Some(category.into());
    }

    /// Back to "Todas".
    pub fn clear_category(&mut self) {
        self.query.category = None;
    }

    /// Move the price slider. The value is clamped to `[0, PRICE_CEILING_MAX]`.
    pub fn set_max_price(&mut self, pesos: i64) {
        let clamped = pesos.clamp(0, PRICE_CEILING_MAX);
        self.query.max_price = Some(Money::pesos(clamped));
    }

    /// Change the sort mode.
    pub fn set_sort(&mut self, sort: SortMode) {
        self.query.sort = sort;
    }

    /// Reset every filter to the default view. Sort is kept, matching the
    /// page's "Limpiar todos" control.
    pub fn clear_filters(&mut self) {
        let sort = self.query.sort;
        self.query = ProductQuery::new()
            .with_max_price(Money::pesos(PRICE_CEILING_MAX))
            .with_sort(sort);
    }

    /// Check whether any filter chip should be shown.
    pub fn has_active_filters(&self) -> bool {
        !self.query.search.is_empty()
            || self.query.category.is_some()
            || self
                .query
                .max_price
                .map(|m| m.amount_minor < PRICE_CEILING_MAX)
                .unwrap_or(false)
    }

    /// Display name for the selected category chip, if any.
    pub fn active_category_name<'a>(&self, catalog: &'a Catalog) -> Option<&'a str> {
        let id = self.query.category.as_ref()?;
        catalog.category(id).map(|c| c.name.as_str())
    }

    /// Derive the visible products for the current criteria.
    pub fn results<'a>(&self, catalog: &'a Catalog) -> QueryResults<'a> {
        QueryResults::run(&catalog.products, self.query.clone())
    }

    /// The catalog URL carrying the current criteria, for sharing.
    ///
    /// A slider at its maximum is the default view and is omitted.
    pub fn share_url(&self) -> String {
        let mut query = self.query.clone();
        if let Some(max) = query.max_price {
            if max.amount_minor >= PRICE_CEILING_MAX {
                query.max_price = None;
            }
        }
        let qs = query.to_query_string();
        if qs.is_empty() {
            "/catalogo".to_string()
        } else {
            format!("/catalogo?{}", qs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienda_commerce::catalog::{Category, Product};
    use tienda_commerce::ids::ProductId;

    fn catalog() -> Catalog {
        let product = |id: &str, price: i64, category: &str| Product {
            id: ProductId::new(id),
            name: id.to_string(),
            description: String::new(),
            price: Money::pesos(price),
            original_price: None,
            category: CategoryId::new(category),
            rating: 4.0,
            reviews: 0,
            stock: 5,
            is_new: false,
            is_bestseller: false,
            image: String::new(),
        };
        Catalog::new(
            vec![
                product("a", 1_500_000, "celulares"),
                product("b", 45_000, "accesorios"),
                product("c", 80_000, "accesorios"),
            ],
            vec![
                Category::new("celulares", "Celulares"),
                Category::new("accesorios", "Accesorios"),
            ],
        )
    }

    #[test]
    fn test_default_view_shows_everything() {
        let page = CatalogPage::new();
        assert!(!page.has_active_filters());
        assert_eq!(page.results(&catalog()).total(), 3);
    }

    #[test]
    fn test_seed_from_url() {
        let mut page = CatalogPage::new();
        page.seed_from_url("categoria=accesorios");
        assert!(page.has_active_filters());
        assert_eq!(page.results(&catalog()).total(), 2);
    }

    #[test]
    fn test_seed_without_categoria_changes_nothing() {
        let mut page = CatalogPage::new();
        page.seed_from_url("utm_source=boletin");
        assert!(!page.has_active_filters());
    }

    #[test]
    fn test_price_slider_counts_as_active_below_max() {
        let mut page = CatalogPage::new();
        page.set_max_price(100_000);
        assert!(page.has_active_filters());
        assert_eq!(page.results(&catalog()).total(), 2);

        page.set_max_price(PRICE_CEILING_MAX);
        assert!(!page.has_active_filters());
    }

    #[test]
    fn test_slider_clamps_out_of_range_values() {
        let mut page = CatalogPage::new();
        page.set_max_price(99_000_000);
        assert_eq!(
            page.query().max_price.unwrap().amount_minor,
            PRICE_CEILING_MAX
        );

        page.set_max_price(-5);
        assert_eq!(page.query().max_price.unwrap().amount_minor, 0);
    }

    #[test]
    fn test_clear_filters_keeps_sort() {
        let mut page = CatalogPage::new();
        page.set_search("funda");
        page.set_category("accesorios");
        page.set_sort(SortMode::PriceAsc);

        page.clear_filters();
        assert!(!page.has_active_filters());
        assert_eq!(page.query().sort, SortMode::PriceAsc);
    }

    #[test]
    fn test_active_category_name() {
        let mut page = CatalogPage::new();
        page.set_category("accesorios");
        assert_eq!(page.active_category_name(&catalog()), Some("Accesorios"));

        page.set_category("no-existe");
        assert_eq!(page.active_category_name(&catalog()), None);
    }

    #[test]
    fn test_share_url() {
        let mut page = CatalogPage::new();
        assert_eq!(page.share_url(), "/catalogo");

        page.set_category("accesorios");
        assert_eq!(page.share_url(), "/catalogo?categoria=accesorios");

        page.set_max_price(500_000);
        assert!(page.share_url().contains("precio_max=500000"));
    }
}
