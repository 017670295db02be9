//! Filter criteria for catalog queries.

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::money::Money;
use crate::query::SortMode;
use serde::{Deserialize, Serialize};

/// Filter and sort criteria for one catalog view.
///
/// Transient state derived from UI controls; the `categoria` value can be
/// seeded from the URL query string on page entry.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ProductQuery {
    /// Free-text search, matched case-insensitively against name and
    /// description. Empty means no text filtering.
    pub search: String,
    /// Selected category, if any.
    pub category: Option<CategoryId>,
    /// Price ceiling; products above it are filtered out.
    pub max_price: Option<Money>,
    /// Sort mode.
    pub sort: SortMode,
}

impl ProductQuery {
    /// Create an empty query (everything visible, relevance order).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the search text.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Set the category filter.
    pub fn with_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set the price ceiling.
    pub fn with_max_price(mut self, max_price: Money) -> Self {
        self.max_price = Some(max_price);
        self
    }

    /// Set the sort mode.
    pub fn with_sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether any filter deviates from the default view.
    pub fn is_default(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.max_price.is_none()
    }

    /// Check whether a single product passes the filters (sort aside).
    pub fn matches(&self, product: &Product) -> bool {
        if !self.search.is_empty() {
            let needle = self.search.to_lowercase();
            let in_name = product.name.to_lowercase().contains(&needle);
            let in_description = product.description.to_lowercase().contains(&needle);
            if !in_name && !in_description {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }

        if let Some(max_price) = &self.max_price {
            if product.price.amount_minor > max_price.amount_minor {
                return false;
            }
        }

        true
    }

    /// Parse criteria from a URL query string.
    ///
    /// Recognized keys: `q`, `categoria`, `precio_max`, `orden`. Unknown
    /// keys are ignored; malformed prices are dropped.
    pub fn from_query_string(qs: &str) -> Self {
        let mut query = ProductQuery::new();

        for pair in qs.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            let decoded = percent_decode(value);

            match key {
                "q" => query.search = decoded,
                "categoria" => {
                    if !decoded.is_empty() {
                        query.category = Some(CategoryId::new(decoded));
                    }
                }
                "precio_max" => {
                    if let Ok(amount) = decoded.parse::<i64>() {
                        query.max_price = Some(Money::pesos(amount));
                    }
                }
                "orden" => query.sort = SortMode::from_str(&decoded),
                _ => {}
            }
        }

        query
    }

    /// Encode the criteria back into a URL query string.
    ///
    /// Defaults are omitted so an unfiltered view encodes to "".
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();

        if !self.search.is_empty() {
            pairs.push(format!("q={}", percent_encode(&self.search)));
        }
        if let Some(category) = &self.category {
            pairs.push(format!("categoria={}", percent_encode(category.as_str())));
        }
        if let Some(max_price) = &self.max_price {
            pairs.push(format!("precio_max={}", max_price.amount_minor));
        }
        if self.sort != SortMode::Relevance {
            pairs.push(format!("orden={}", self.sort.as_str()));
        }

        pairs.join("&")
    }
}

/// Minimal percent-decoding for query-string values.
fn percent_decode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '%' {
            let hex: String = chars.by_ref().take(2).collect();
            if let Ok(byte) = u8::from_str_radix(&hex, 16) {
                result.push(byte as char);
            }
        } else if c == '+' {
            result.push(' ');
        } else {
            result.push(c);
        }
    }

    result
}

/// Minimal percent-encoding for query-string values.
fn percent_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                for byte in c.to_string().as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::ProductId;

    fn product(name: &str, description: &str, price: i64, category: &str) -> Product {
        Product {
            id: ProductId::new(name),
            name: name.to_string(),
            description: description.to_string(),
            price: Money::pesos(price),
            original_price: None,
            category: CategoryId::new(category),
            rating: 4.0,
            reviews: 10,
            stock: 5,
            is_new: false,
            is_bestseller: false,
            image: String::new(),
        }
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let q = ProductQuery::new();
        assert!(q.is_default());
        assert!(q.matches(&product("Cargador", "20W", 80_000, "accesorios")));
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_or_description() {
        let q = ProductQuery::new().with_search("CARGADOR");
        assert!(q.matches(&product("Cargador r\u{e1}pido", "", 80_000, "accesorios")));

        let q = ProductQuery::new().with_search("magsafe");
        assert!(q.matches(&product("Cargador", "Compatible MagSafe", 80_000, "accesorios")));
        assert!(!q.matches(&product("Cable USB-C", "1 metro", 30_000, "accesorios")));
    }

    #[test]
    fn test_category_filter() {
        let q = ProductQuery::new().with_category("celulares");
        assert!(q.matches(&product("Equipo", "", 1_000_000, "celulares")));
        assert!(!q.matches(&product("Funda", "", 45_000, "accesorios")));
    }

    #[test]
    fn test_price_ceiling_is_inclusive() {
        let q = ProductQuery::new().with_max_price(Money::pesos(50_000));
        assert!(q.matches(&product("Funda", "", 50_000, "accesorios")));
        assert!(!q.matches(&product("Cargador", "", 50_001, "accesorios")));
    }

    #[test]
    fn test_query_string_parsing() {
        let q = ProductQuery::from_query_string("categoria=accesorios&orden=precio-menor");
        assert_eq!(q.category, Some(CategoryId::new("accesorios")));
        assert_eq!(q.sort, SortMode::PriceAsc);
        assert!(q.search.is_empty());
    }

    #[test]
    fn test_query_string_search_decoding() {
        let q = ProductQuery::from_query_string("q=cargador+r%C3%A1pido");
        // Bytes decode individually; the latin chars survive either way.
        assert!(q.search.starts_with("cargador r"));
    }

    #[test]
    fn test_query_string_round_trip() {
        let q = ProductQuery::new()
            .with_search("funda")
            .with_category("accesorios")
            .with_max_price(Money::pesos(100_000))
            .with_sort(SortMode::RatingDesc);

        let back = ProductQuery::from_query_string(&q.to_query_string());
        assert_eq!(back, q);
    }

    #[test]
    fn test_default_query_encodes_empty() {
        assert_eq!(ProductQuery::new().to_query_string(), "");
    }

    #[test]
    fn test_malformed_price_is_dropped() {
        let q = ProductQuery::from_query_string("precio_max=abc");
        assert!(q.max_price.is_none());
    }
}
