use serde::Serialize;
use store::{Money, OrderItem, OrderItemId, Product};

/// An order item with its product reference expanded into the product record.
///
/// `product` is `None` when the referenced product no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedOrderItem {
    pub id: OrderItemId,
    pub product: Option<Product>,
    pub quantity: u32,
    pub discount: Money,
    pub total: Money,
}

impl ResolvedOrderItem {
    /// Pairs a stored item with its product, if the product was found.
    pub fn new(item: OrderItem, product: Option<Product>) -> Self {
        Self {
            id: item.id,
            product,
            quantity: item.quantity,
            discount: item.discount,
            total: item.total,
        }
    }
}
