//! Order item service: every write path resolves the product and recomputes
//! the total through [`compute_total`] before persisting.

use std::collections::HashMap;

use store::{OrderItem, OrderItemId, Product, ProductId, Store};

use crate::error::DomainError;
use crate::pricing::compute_total;

use super::{
    CreateOrderItem, Discount, PatchOrderItem, Quantity, ReplaceOrderItem, ResolvedOrderItem,
};

/// Service for managing order items.
///
/// Each operation is a single sequential pass: look up, compute, persist.
/// Nothing guards against a product price changing between the lookup and
/// the write.
pub struct OrderItemService<S: Store> {
    store: S,
}

impl<S: Store> OrderItemService<S> {
    /// Creates a new order item service over the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Lists every order item with its product resolved, in storage order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<ResolvedOrderItem>, DomainError> {
        let items = self.store.list_order_items().await?;

        let mut ids: Vec<ProductId> = items.iter().map(|i| i.product).collect();
        ids.sort_by_key(ProductId::as_uuid);
        ids.dedup();

        let products: HashMap<ProductId, Product> = self
            .store
            .get_products(&ids)
            .await?
            .into_iter()
            .map(|p| (p.id, p))
            .collect();

        Ok(items
            .into_iter()
            .map(|item| {
                let product = products.get(&item.product).cloned();
                ResolvedOrderItem::new(item, product)
            })
            .collect())
    }

    /// Loads one order item with its product resolved.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: OrderItemId) -> Result<ResolvedOrderItem, DomainError> {
        let item = self.load(id).await?;
        let product = self.store.get_product(item.product).await?;
        Ok(ResolvedOrderItem::new(item, product))
    }

    /// Creates an order item priced from the product's current price.
    #[tracing::instrument(skip(self))]
    pub async fn create(&self, cmd: CreateOrderItem) -> Result<ResolvedOrderItem, DomainError> {
        let product = self.resolve_product(cmd.product).await?;

        let item = priced_item(OrderItemId::new(), &product, cmd.quantity, cmd.discount);
        self.store.insert_order_item(&item).await?;

        metrics::counter!("order_items_created_total").increment(1);
        tracing::info!(order_item_id = %item.id, total = %item.total, "order item created");

        Ok(ResolvedOrderItem::new(item, Some(product)))
    }

    /// Replaces every field of an order item and recomputes its total.
    #[tracing::instrument(skip(self))]
    pub async fn replace(&self, cmd: ReplaceOrderItem) -> Result<ResolvedOrderItem, DomainError> {
        let product = self.resolve_product(cmd.product).await?;
        let existing = self.load(cmd.order_item_id).await?;

        let item = priced_item(existing.id, &product, cmd.quantity, cmd.discount);
        self.store.update_order_item(&item).await?;

        metrics::counter!("order_items_updated_total").increment(1);
        tracing::info!(order_item_id = %item.id, total = %item.total, "order item replaced");

        Ok(ResolvedOrderItem::new(item, Some(product)))
    }

    /// Applies the supplied fields, then recomputes the total from the
    /// referenced product's live price and the item's current quantity and
    /// discount, whether or not those were part of the patch.
    #[tracing::instrument(skip(self))]
    pub async fn patch(&self, cmd: PatchOrderItem) -> Result<ResolvedOrderItem, DomainError> {
        let existing = self.load(cmd.order_item_id).await?;

        let product_id = cmd.product.unwrap_or(existing.product);
        let product = self.resolve_product(product_id).await?;

        let quantity = match cmd.quantity {
            Some(quantity) => quantity,
            None => Quantity::try_from(existing.quantity)?,
        };
        let discount = match cmd.discount {
            Some(discount) => discount,
            None => Discount::try_from(existing.discount)?,
        };

        let item = priced_item(existing.id, &product, quantity, discount);
        self.store.update_order_item(&item).await?;

        metrics::counter!("order_items_updated_total").increment(1);
        tracing::info!(order_item_id = %item.id, total = %item.total, "order item patched");

        Ok(ResolvedOrderItem::new(item, Some(product)))
    }

    /// Deletes an order item.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: OrderItemId) -> Result<(), DomainError> {
        self.store
            .delete_order_item(id)
            .await?
            .ok_or(DomainError::OrderItemNotFound(id))?;

        metrics::counter!("order_items_deleted_total").increment(1);
        tracing::info!(order_item_id = %id, "order item deleted");
        Ok(())
    }

    async fn load(&self, id: OrderItemId) -> Result<OrderItem, DomainError> {
        self.store
            .get_order_item(id)
            .await?
            .ok_or(DomainError::OrderItemNotFound(id))
    }

    async fn resolve_product(&self, id: ProductId) -> Result<Product, DomainError> {
        self.store
            .get_product(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))
    }
}

fn priced_item(
    id: OrderItemId,
    product: &Product,
    quantity: Quantity,
    discount: Discount,
) -> OrderItem {
    OrderItem {
        id,
        product: product.id,
        quantity: quantity.get(),
        discount: discount.amount(),
        total: compute_total(product.price, quantity, discount),
    }
}
