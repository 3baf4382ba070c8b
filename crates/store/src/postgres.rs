use async_trait::async_trait;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    Money, OrderItem, OrderItemId, Product, ProductId, Result, StoreError,
    repository::{OrderItemRepository, ProductRepository},
};

/// PostgreSQL-backed store implementation.
#[derive(Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new PostgreSQL store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_order_item(row: PgRow) -> Result<OrderItem> {
        let quantity: i32 = row.try_get("quantity")?;
        let quantity = u32::try_from(quantity)
            .map_err(|_| StoreError::InvalidRecord(format!("negative quantity {quantity}")))?;

        Ok(OrderItem {
            id: OrderItemId::from_uuid(row.try_get::<Uuid, _>("id")?),
            product: ProductId::from_uuid(row.try_get::<Uuid, _>("product_id")?),
            quantity,
            discount: Money::new(row.try_get::<Decimal, _>("discount")?),
            total: Money::new(row.try_get::<Decimal, _>("total")?),
        })
    }

    fn row_to_product(row: PgRow) -> Result<Product> {
        Ok(Product {
            id: ProductId::from_uuid(row.try_get::<Uuid, _>("id")?),
            name: row.try_get("name")?,
            price: Money::new(row.try_get::<Decimal, _>("price")?),
            category: row.try_get("category")?,
        })
    }

    fn quantity_param(item: &OrderItem) -> Result<i32> {
        i32::try_from(item.quantity)
            .map_err(|_| StoreError::InvalidRecord(format!("quantity {} too large", item.quantity)))
    }
}

#[async_trait]
impl OrderItemRepository for PostgresStore {
    async fn list_order_items(&self) -> Result<Vec<OrderItem>> {
        let rows = sqlx::query(
            r#"
            SELECT id, product_id, quantity, discount, total
            FROM order_items
            ORDER BY created_seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_order_item).collect()
    }

    async fn get_order_item(&self, id: OrderItemId) -> Result<Option<OrderItem>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, product_id, quantity, discount, total
            FROM order_items
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order_item).transpose()
    }

    async fn insert_order_item(&self, item: &OrderItem) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO order_items (id, product_id, quantity, discount, total)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(item.product.as_uuid())
        .bind(Self::quantity_param(item)?)
        .bind(item.discount.amount())
        .bind(item.total.amount())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update_order_item(&self, item: &OrderItem) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE order_items
            SET product_id = $2, quantity = $3, discount = $4, total = $5
            WHERE id = $1
            "#,
        )
        .bind(item.id.as_uuid())
        .bind(item.product.as_uuid())
        .bind(Self::quantity_param(item)?)
        .bind(item.discount.amount())
        .bind(item.total.amount())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::OrderItemNotFound(item.id));
        }
        Ok(())
    }

    async fn delete_order_item(&self, id: OrderItemId) -> Result<Option<OrderItem>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            DELETE FROM order_items
            WHERE id = $1
            RETURNING id, product_id, quantity, discount, total
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order_item).transpose()
    }
}

#[async_trait]
impl ProductRepository for PostgresStore {
    async fn list_products(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, price, category
            FROM products
            ORDER BY created_seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn get_product(&self, id: ProductId) -> Result<Option<Product>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            SELECT id, name, price, category
            FROM products
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_product).transpose()
    }

    async fn get_products(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let uuids: Vec<Uuid> = ids.iter().map(ProductId::as_uuid).collect();

        let rows = sqlx::query(
            r#"
            SELECT id, name, price, category
            FROM products
            WHERE id = ANY($1)
            ORDER BY created_seq ASC
            "#,
        )
        .bind(uuids)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Self::row_to_product).collect()
    }

    async fn insert_product(&self, product: &Product) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO products (id, name, price, category)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                price = EXCLUDED.price,
                category = EXCLUDED.category
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.name)
        .bind(product.price.amount())
        .bind(&product.category)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_product(&self, id: ProductId) -> Result<Option<Product>> {
        let row: Option<PgRow> = sqlx::query(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, name, price, category
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_product).transpose()
    }
}
