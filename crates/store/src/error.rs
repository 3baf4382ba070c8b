use thiserror::Error;

use crate::OrderItemId;

/// Errors that can occur when interacting with the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An update targeted an order item that is not stored.
    #[error("Order item not found: {0}")]
    OrderItemNotFound(OrderItemId),

    /// A stored row could not be mapped back into a record.
    #[error("Invalid stored record: {0}")]
    InvalidRecord(String),

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Seed data could not be parsed.
    #[error("Seed error: {0}")]
    Seed(#[from] serde_json::Error),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
