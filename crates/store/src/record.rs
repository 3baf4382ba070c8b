//! Records as they are persisted.

use serde::{Deserialize, Serialize};

use crate::{Money, OrderItemId, ProductId};

/// A catalog product. Owned by the catalog; order items only reference it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Money,
    /// Opaque reference to the product's category, if any.
    #[serde(default)]
    pub category: Option<String>,
}

impl Product {
    /// Creates a product with a fresh ID and no category.
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            price,
            category: None,
        }
    }

    /// Sets the category reference.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// A stored order item with its product held as a bare reference.
///
/// `total` is written by callers; the store never derives it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: OrderItemId,
    pub product: ProductId,
    pub quantity: u32,
    pub discount: Money,
    pub total: Money,
}
