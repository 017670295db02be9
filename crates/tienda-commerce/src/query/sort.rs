//! Sort modes for catalog queries.

use serde::{Deserialize, Serialize};

/// Sort mode for a catalog query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SortMode {
    /// Catalog source order; no reordering.
    #[default]
    Relevance,
    /// Price, low to high.
    PriceAsc,
    /// Price, high to low.
    PriceDesc,
    /// Highest rated first.
    RatingDesc,
    /// Newly added products first.
    Newest,
}

impl SortMode {
    /// All modes, in dropdown order.
    pub const ALL: [SortMode; 5] = [
        SortMode::Relevance,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::RatingDesc,
        SortMode::Newest,
    ];

    /// Parse from a query-string value. Unknown values fall back to
    /// relevance.
    pub fn from_str(s: &str) -> Self {
        match s {
            "precio-menor" => SortMode::PriceAsc,
            "precio-mayor" => SortMode::PriceDesc,
            "valorados" => SortMode::RatingDesc,
            "nuevos" => SortMode::Newest,
            _ => SortMode::Relevance,
        }
    }

    /// Query-string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::Relevance => "relevancia",
            SortMode::PriceAsc => "precio-menor",
            SortMode::PriceDesc => "precio-mayor",
            SortMode::RatingDesc => "valorados",
            SortMode::Newest => "nuevos",
        }
    }

    /// Label shown in the sort dropdown.
    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::Relevance => "Relevancia",
            SortMode::PriceAsc => "Precio: Menor a Mayor",
            SortMode::PriceDesc => "Precio: Mayor a Menor",
            SortMode::RatingDesc => "Mejor Valorados",
            SortMode::Newest => "M\u{e1}s Nuevos",
        }
    }
}
