//! Domain layer for the order items service.
//!
//! This crate provides:
//! - The total calculator shared by every order item write path
//! - Validated commands for creating, replacing, and patching order items
//! - `OrderItemService` and `ProductService` over any store backend

pub mod catalog;
pub mod error;
pub mod order_item;
pub mod pricing;

pub use catalog::ProductService;
pub use common::{Money, OrderItemId, ProductId};
pub use error::{DomainError, ValidationError};
pub use order_item::{
    CreateOrderItem, Discount, OrderItemInput, OrderItemService, PatchOrderItem, Quantity,
    ReplaceOrderItem, ResolvedOrderItem,
};
pub use pricing::compute_total;
pub use store::Product;
