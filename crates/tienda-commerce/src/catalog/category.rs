//! Category type for product organization.

use crate::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// A product category.
///
/// The storefront uses a flat category list; there is no hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier, also used in URL query strings.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Sort order position in the filter sidebar.
    #[serde(default)]
    pub position: i32,
}

impl Category {
    /// Create a new category.
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            position: 0,
        }
    }

    /// Set the sidebar position.
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_creation() {
        let cat = Category::new("accesorios", "Accesorios").with_position(2);
        assert_eq!(cat.id.as_str(), "accesorios");
        assert_eq!(cat.name, "Accesorios");
        assert_eq!(cat.position, 2);
    }
}
