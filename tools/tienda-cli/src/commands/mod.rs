//! CLI commands.

pub mod browse;
pub mod categorias;
pub mod search;

pub use browse::BrowseArgs;
pub use categorias::CategoriasArgs;
pub use search::SearchArgs;
