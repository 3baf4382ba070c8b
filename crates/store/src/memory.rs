use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{
    OrderItem, OrderItemId, Product, ProductId, Result, StoreError,
    repository::{OrderItemRepository, ProductRepository},
};

/// In-memory store implementation for development and testing.
///
/// Records are kept in insertion order and provide the same interface as
/// the PostgreSQL implementation.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    order_items: Arc<RwLock<Vec<OrderItem>>>,
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored order items.
    pub async fn order_item_count(&self) -> usize {
        self.order_items.read().await.len()
    }
}

#[async_trait]
impl OrderItemRepository for InMemoryStore {
    async fn list_order_items(&self) -> Result<Vec<OrderItem>> {
        Ok(self.order_items.read().await.clone())
    }

    async fn get_order_item(&self, id: OrderItemId) -> Result<Option<OrderItem>> {
        let items = self.order_items.read().await;
        Ok(items.iter().find(|i| i.id == id).cloned())
    }

    async fn insert_order_item(&self, item: &OrderItem) -> Result<()> {
        self.order_items.write().await.push(item.clone());
        Ok(())
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<()> {
        let mut items = self.order_items.write().await;
        let slot = items
            .iter_mut()
            .find(|i| i.id == item.id)
            .ok_or(StoreError::OrderItemNotFound(item.id))?;
        *slot = item.clone();
        Ok(())
    }

    async fn delete_order_item(&self, id: OrderItemId) -> Result<Option<OrderItem>> {
        let mut items = self.order_items.write().await;
        Ok(items
            .iter()
            .position(|i| i.id == id)
            .map(|index| items.remove(index)))
    }
}

#[async_trait]
impl ProductRepository for InMemoryStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        Ok(self.products.read().await.clone())
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        Ok(products
            .iter()
            .filter(|p| ids.contains(&p.id))
            .cloned()
            .collect())
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        let mut products = self.products.write().await;
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(existing) => *existing = product.clone(),
            None => products.push(product.clone()),
        }
        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>> {
        let mut products = self.products.write().await;
        Ok(products
            .iter()
            .position(|p| p.id == id)
            .map(|index| products.remove(index)))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::{Money, ProductRepositoryExt};

    fn create_test_item(product: ProductId) -> OrderItem {
        OrderItem {
            id: OrderItemId::new(),
            product,
            quantity: 2,
            discount: Money::zero(),
            total: Money::new(dec!(20)),
        }
    }

    #[tokio::test]
    async fn insert_and_get_order_item() {
        let store = InMemoryStore::new();
        let item = create_test_item(ProductId::new());

        store.insert_order_item(&item).await.unwrap();

        let stored = store.get_order_item(item.id).await.unwrap();
        assert_eq!(stored, Some(item));
        assert_eq!(store.order_item_count().await, 1);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = InMemoryStore::new();
        let first = create_test_item(ProductId::new());
        let second = create_test_item(ProductId::new());
        let third = create_test_item(ProductId::new());

        for item in [&first, &second, &third] {
            store.insert_order_item(item).await.unwrap();
        }

        let ids: Vec<_> = store
            .list_order_items()
            .await
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec![first.id, second.id, third.id]);
    }

    #[tokio::test]
    async fn update_replaces_stored_fields() {
        let store = InMemoryStore::new();
        let mut item = create_test_item(ProductId::new());
        store.insert_order_item(&item).await.unwrap();

        item.quantity = 5;
        item.total = Money::new(dec!(50));
        store.update_order_item(&item).await.unwrap();

        let stored = store.get_order_item(item.id).await.unwrap().unwrap();
        assert_eq!(stored.quantity, 5);
        assert_eq!(stored.total.amount(), dec!(50));
    }

    #[tokio::test]
    async fn update_missing_item_fails() {
        let store = InMemoryStore::new();
        let item = create_test_item(ProductId::new());

        let result = store.update_order_item(&item).await;
        assert!(matches!(result, Err(StoreError::OrderItemNotFound(id)) if id == item.id));
    }

    #[tokio::test]
    async fn delete_twice_returns_none_the_second_time() {
        let store = InMemoryStore::new();
        let item = create_test_item(ProductId::new());
        store.insert_order_item(&item).await.unwrap();

        let first = store.delete_order_item(item.id).await.unwrap();
        assert_eq!(first.map(|i| i.id), Some(item.id));

        let second = store.delete_order_item(item.id).await.unwrap();
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn get_products_skips_unknown_ids() {
        let store = InMemoryStore::new();
        let widget = Product::new("Widget", Money::new(dec!(10)));
        store.insert_product(&widget).await.unwrap();

        let found = store
            .get_products(&[widget.id, ProductId::new()])
            .await
            .unwrap();
        assert_eq!(found, vec![widget]);
    }

    #[tokio::test]
    async fn insert_product_replaces_existing() {
        let store = InMemoryStore::new();
        let mut widget = Product::new("Widget", Money::new(dec!(10)));
        store.insert_product(&widget).await.unwrap();

        widget.price = Money::new(dec!(12.50));
        store.insert_product(&widget).await.unwrap();

        let products = store.list_products().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].price.amount(), dec!(12.50));
    }

    #[tokio::test]
    async fn delete_product_returns_removed_record() {
        let store = InMemoryStore::new();
        let widget = Product::new("Widget", Money::new(dec!(10)));
        store.insert_product(&widget).await.unwrap();

        let removed = store.delete_product(widget.id).await.unwrap();
        assert_eq!(removed, Some(widget.clone()));
        assert!(!store.product_exists(widget.id).await.unwrap());
    }

    #[tokio::test]
    async fn seed_from_json_loads_products() {
        let store = InMemoryStore::new();
        let json = r#"[
            {"id": "6f1c1b8e-8a55-4c1e-9a8e-3c7b1f0d2a11", "name": "Widget", "price": 10.0},
            {"id": "0a4d2f5b-1e7c-4b9a-8d3f-5e6a7b8c9d0e", "name": "Gadget", "price": 4.25, "category": "tools"}
        ]"#;

        let count = store.seed_from_json(json).await.unwrap();
        assert_eq!(count, 2);

        let products = store.list_products().await.unwrap();
        assert_eq!(products[0].name, "Widget");
        assert_eq!(products[1].price.amount(), dec!(4.25));
        assert_eq!(products[1].category.as_deref(), Some("tools"));
    }

    #[tokio::test]
    async fn seed_from_invalid_json_fails() {
        let store = InMemoryStore::new();
        let result = store.seed_from_json("{not json").await;
        assert!(matches!(result, Err(StoreError::Seed(_))));
    }
}
