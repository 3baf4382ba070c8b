//! Persistence for order items and the product catalog they reference.
//!
//! Two backends implement the same repository traits: an in-memory store
//! for development and tests, and a PostgreSQL store for production.

pub mod error;
pub mod memory;
pub mod postgres;
pub mod record;
pub mod repository;

pub use common::{Money, OrderItemId, ProductId};
pub use error::{Result, StoreError};
pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use record::{OrderItem, Product};
pub use repository::{OrderItemRepository, ProductRepository, ProductRepositoryExt, Store};
