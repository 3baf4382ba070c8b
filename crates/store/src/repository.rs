use async_trait::async_trait;

use crate::{OrderItem, OrderItemId, Product, ProductId, Result};

/// Storage for order item records.
///
/// All implementations must be thread-safe (Send + Sync).
#[async_trait]
pub trait OrderItemRepository: Send + Sync {
    /// Returns every stored order item in insertion order.
    async fn list_order_items(&self) -> Result<Vec<OrderItem>>;

    /// Retrieves one order item, or None if it is not stored.
    async fn get_order_item(&self, id: OrderItemId) -> Result<Option<OrderItem>>;

    /// Persists a new order item.
    async fn insert_order_item(&self, item: &OrderItem) -> Result<()>;

    /// Overwrites every field of an existing order item.
    ///
    /// Fails with `OrderItemNotFound` if no record has the item's ID.
    async fn update_order_item(&self, item: &OrderItem) -> Result<()>;

    /// Removes an order item, returning the removed record if it existed.
    async fn delete_order_item(&self, id: OrderItemId) -> Result<Option<OrderItem>>;
}

/// Access to the product catalog.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Returns every product in insertion order.
    async fn list_products(&self) -> Result<Vec<Product>>;

    /// Retrieves one product, or None if it does not exist.
    async fn get_product(&self, id: ProductId) -> Result<Option<Product>>;

    /// Retrieves every product whose ID is in `ids`. Unknown IDs are skipped.
    async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>>;

    /// Inserts a product, replacing any existing product with the same ID.
    async fn insert_product(&self, product: &Product) -> Result<()>;

    /// Removes a product, returning it if it existed.
    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>>;
}

/// Convenience methods available on every product repository.
#[async_trait]
pub trait ProductRepositoryExt: ProductRepository {
    /// Checks whether a product exists.
    async fn product_exists(&self, id: ProductId) -> Result<bool> {
        Ok(self.get_product(id).await?.is_some())
    }

    /// Loads a JSON array of products into the catalog.
    ///
    /// Returns the number of products inserted.
    async fn seed_from_json(&self, json: &str) -> Result<usize> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        for product in &products {
            self.insert_product(product).await?;
        }
        tracing::info!(count = products.len(), "seeded product catalog");
        Ok(products.len())
    }
}

// Blanket implementation for all ProductRepository implementations
impl<T: ProductRepository + ?Sized> ProductRepositoryExt for T {}

/// A backend that stores both order items and products.
pub trait Store: OrderItemRepository + ProductRepository + Clone + 'static {}

impl<T: OrderItemRepository + ProductRepository + Clone + 'static> Store for T {}
