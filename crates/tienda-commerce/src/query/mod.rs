//! Catalog query module.
//!
//! Filter criteria, sort modes, and the pure query pipeline that derives
//! the visible product list.

mod criteria;
mod engine;
mod sort;

pub use criteria::ProductQuery;
pub use engine::{run_query, QueryResults};
pub use sort::SortMode;
