//! Domain error types.

use store::{OrderItemId, ProductId, StoreError};
use thiserror::Error;

/// Input rejected before any storage access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Create and replace need both a product and a quantity.
    #[error("Product and quantity are required")]
    MissingRequiredFields,

    #[error("Quantity must be at least 1")]
    QuantityTooLow,

    #[error("Quantity {0} is too large")]
    QuantityTooLarge(i64),

    #[error("Discount cannot be negative")]
    NegativeDiscount,

    /// An identifier was not a valid UUID.
    #[error("Invalid {field} id: {value}")]
    InvalidId { field: &'static str, value: String },

    /// The request body could not be read.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
}

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("OrderItem not found: {0}")]
    OrderItemNotFound(OrderItemId),

    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// An error occurred in the store.
    #[error("Store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            // The record vanished between our read and our write.
            StoreError::OrderItemNotFound(id) => DomainError::OrderItemNotFound(id),
            other => DomainError::Store(other),
        }
    }
}
