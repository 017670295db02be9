//! The catalog query engine.
//!
//! Pure derivation of the visible product list from the static catalog and
//! one `ProductQuery`. The input slice is never mutated and identical
//! inputs always produce identical output order.

use crate::catalog::Product;
use crate::query::{ProductQuery, SortMode};

/// Run a query against a product list.
///
/// Filters run first (text, category, price ceiling), then the survivors
/// are sorted. All sorts are stable: products that compare equal keep
/// their catalog order, and `Relevance` keeps it outright.
pub fn run_query<'a>(products: &'a [Product], query: &ProductQuery) -> Vec<&'a Product> {
    let mut result: Vec<&Product> = products.iter().filter(|p| query.matches(p)).collect();

    match query.sort {
        SortMode::Relevance => {}
        SortMode::PriceAsc => result.sort_by_key(|p| p.price.amount_minor),
        SortMode::PriceDesc => {
            result.sort_by(|a, b| b.price.amount_minor.cmp(&a.price.amount_minor))
        }
        SortMode::RatingDesc => result.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortMode::Newest => result.sort_by_key(|p| !p.is_new),
    }

    result
}

/// Query results ready for page rendering.
#[derive(Debug, Clone)]
pub struct QueryResults<'a> {
    /// Visible products, in display order.
    pub items: Vec<&'a Product>,
    /// The criteria that produced them.
    pub query: ProductQuery,
}

impl<'a> QueryResults<'a> {
    /// Run a query and wrap the outcome.
    pub fn run(products: &'a [Product], query: ProductQuery) -> Self {
        let items = run_query(products, &query);
        Self { items, query }
    }

    /// Number of products found (the "N productos encontrados" counter).
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Check whether the query matched nothing.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CategoryId, ProductId};
    use crate::money::Money;

    fn product(id: &str, price: i64, rating: f64, category: &str, is_new: bool) -> Product {
        Product {
            id: ProductId::new(id),
            name: format!("Producto {}", id),
            description: format!("Descripci\u{f3}n de {}", id),
            price: Money::pesos(price),
            original_price: None,
            category: CategoryId::new(category),
            rating,
            reviews: 10,
            stock: 5,
            is_new,
            is_bestseller: false,
            image: String::new(),
        }
    }

    fn fixture() -> Vec<Product> {
        vec![
            product("a", 300_000, 4.5, "celulares", false),
            product("b", 100_000, 4.8, "accesorios", true),
            product("c", 200_000, 4.5, "accesorios", false),
            product("d", 100_000, 3.9, "celulares", false),
            product("e", 500_000, 4.8, "accesorios", true),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<String> {
        result.iter().map(|p| p.id.as_str().to_string()).collect()
    }

    #[test]
    fn test_relevance_keeps_catalog_order() {
        let products = fixture();
        let result = run_query(&products, &ProductQuery::new());
        assert_eq!(ids(&result), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_category_filter_keeps_relative_order() {
        let products = fixture();
        let query = ProductQuery::new().with_category("accesorios");
        let result = run_query(&products, &query);
        assert_eq!(ids(&result), vec!["b", "c", "e"]);
    }

    #[test]
    fn test_price_asc_is_stable_on_ties() {
        let products = fixture();
        let query = ProductQuery::new().with_sort(SortMode::PriceAsc);
        let result = run_query(&products, &query);
        // b and d tie at 100k; b comes first in the catalog.
        assert_eq!(ids(&result), vec!["b", "d", "c", "a", "e"]);
    }

    #[test]
    fn test_price_desc_is_stable_on_ties() {
        let products = fixture();
        let query = ProductQuery::new().with_sort(SortMode::PriceDesc);
        let result = run_query(&products, &query);
        assert_eq!(ids(&result), vec!["e", "a", "c", "b", "d"]);
    }

    #[test]
    fn test_price_sorts_reverse_each_other_without_ties() {
        let products = vec![
            product("x", 300_000, 4.0, "celulares", false),
            product("y", 100_000, 4.0, "celulares", false),
            product("z", 200_000, 4.0, "celulares", false),
        ];
        let asc = run_query(&products, &ProductQuery::new().with_sort(SortMode::PriceAsc));
        let desc = run_query(&products, &ProductQuery::new().with_sort(SortMode::PriceDesc));

        let mut reversed = ids(&desc);
        reversed.reverse();
        assert_eq!(ids(&asc), reversed);
    }

    #[test]
    fn test_rating_desc() {
        let products = fixture();
        let query = ProductQuery::new().with_sort(SortMode::RatingDesc);
        let result = run_query(&products, &query);
        // b and e tie at 4.8 (catalog order), then a and c tie at 4.5.
        assert_eq!(ids(&result), vec!["b", "e", "a", "c", "d"]);
    }

    #[test]
    fn test_newest_puts_new_products_first() {
        let products = fixture();
        let query = ProductQuery::new().with_sort(SortMode::Newest);
        let result = run_query(&products, &query);
        assert_eq!(ids(&result), vec!["b", "e", "a", "c", "d"]);
    }

    #[test]
    fn test_query_is_idempotent() {
        let products = fixture();
        let query = ProductQuery::new()
            .with_search("producto")
            .with_max_price(Money::pesos(300_000))
            .with_sort(SortMode::PriceAsc);

        let first = ids(&run_query(&products, &query));
        let second = ids(&run_query(&products, &query));
        assert_eq!(first, second);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let products = fixture();
        let before: Vec<String> = products.iter().map(|p| p.id.as_str().to_string()).collect();
        let _ = run_query(&products, &ProductQuery::new().with_sort(SortMode::PriceAsc));
        let after: Vec<String> = products.iter().map(|p| p.id.as_str().to_string()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_results_total() {
        let products = fixture();
        let results = QueryResults::run(&products, ProductQuery::new().with_category("celulares"));
        assert_eq!(results.total(), 2);
        assert!(!results.is_empty());
    }
}
