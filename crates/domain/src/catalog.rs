//! Read and delete access to the product catalog.

use store::{Product, ProductId, ProductRepository};

use crate::error::DomainError;

/// Service over the product catalog that order items reference.
pub struct ProductService<S: ProductRepository> {
    store: S,
}

impl<S: ProductRepository> ProductService<S> {
    /// Creates a new product service over the given repository.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Lists every product in storage order.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, DomainError> {
        Ok(self.store.list_products().await?)
    }

    /// Loads one product.
    #[tracing::instrument(skip(self))]
    pub async fn get(&self, id: ProductId) -> Result<Product, DomainError> {
        self.store
            .get_product(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))
    }

    /// Deletes a product and returns it.
    ///
    /// Order items that reference it are left alone and resolve to no
    /// product afterwards.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: ProductId) -> Result<Product, DomainError> {
        let product = self
            .store
            .delete_product(id)
            .await?
            .ok_or(DomainError::ProductNotFound(id))?;

        tracing::info!(product_id = %id, "product deleted");
        Ok(product)
    }
}
