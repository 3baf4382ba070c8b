//! Order items: validated inputs, resolved views, and the service.

mod commands;
mod resolved;
mod service;
mod value_objects;

pub use commands::{CreateOrderItem, OrderItemInput, PatchOrderItem, ReplaceOrderItem};
pub use resolved::ResolvedOrderItem;
pub use service::OrderItemService;
pub use value_objects::{Discount, Quantity};
