//! Storefront error types.
//!
//! Cart mutations are deliberately total functions (an update referencing an
//! unknown product is a silent no-op), so this taxonomy only covers the
//! edges that can genuinely fail: loading catalog data, money arithmetic,
//! and submitting orders or reservations.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found in the catalog.
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    /// Category not found in the catalog.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Attempted to place an order with nothing in the cart.
    #[error("Cart is empty")]
    EmptyCart,

    /// A form field failed validation.
    #[error("Validation failed for {field}: {message}")]
    Validation { field: String, message: String },

    /// Arithmetic overflow in a money calculation.
    #[error("Arithmetic overflow in money calculation")]
    Overflow,

    /// Mixed currencies in a single calculation.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Catalog data could not be parsed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Shorthand for a field validation error.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        StoreError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
