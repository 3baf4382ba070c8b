//! Shared types for the order items service.

pub mod ids;
pub mod money;

pub use ids::{OrderItemId, ProductId};
pub use money::Money;
