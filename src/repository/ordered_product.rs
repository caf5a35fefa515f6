use crate::{
    abstract_trait::OrderedProductRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderedProductRequest, UpdateOrderedProductRequest},
    errors::RepositoryError,
    model::{OrderedProduct as OrderedProductModel, Product as ProductModel},
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderedProductRepository {
    db: ConnectionPool,
}

impl OrderedProductRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderedProductRepositoryTrait for OrderedProductRepository {
    async fn find_all(&self) -> Result<Vec<OrderedProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, OrderedProductModel>(
            r#"
            SELECT ordered_product_id, order_id, product_id, quantity
            FROM ordered_products
            ORDER BY ordered_product_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch order lines: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderedProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderedProductModel>(
            r#"
            SELECT ordered_product_id, order_id, product_id, quantity
            FROM ordered_products
            WHERE ordered_product_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderedProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let lines = sqlx::query_as::<_, OrderedProductModel>(
            r#"
            SELECT ordered_product_id, order_id, product_id, quantity
            FROM ordered_products
            WHERE order_id = $1
            ORDER BY ordered_product_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch lines for order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(lines)
    }

    async fn find_products_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT p.product_id, p.name, p.price, p.expiration_date, p.description
            FROM ordered_products op
            JOIN products p ON p.product_id = op.product_id
            WHERE op.order_id = $1
            ORDER BY p.product_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch products for order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(products)
    }

    async fn quantity_for(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<i32>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let quantity = sqlx::query_scalar::<_, i32>(
            r#"
            SELECT quantity
            FROM ordered_products
            WHERE order_id = $1 AND product_id = $2
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(quantity)
    }

    async fn exists_for_order_product(
        &self,
        exclude_id: i32,
        order_id: i32,
        product_id: i32,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM ordered_products
                WHERE order_id = $1 AND product_id = $2 AND ordered_product_id <> $3
            )
            "#,
        )
        .bind(order_id)
        .bind(product_id)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn create(
        &self,
        req: &CreateOrderedProductRequest,
    ) -> Result<OrderedProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let line = sqlx::query_as::<_, OrderedProductModel>(
            r#"
            INSERT INTO ordered_products (order_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING ordered_product_id, order_id, product_id, quantity
            "#,
        )
        .bind(req.order_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to create line for order {} product {}: {e:?}",
                req.order_id, req.product_id
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created line ID {} (order {}, product {}, qty {})",
            line.ordered_product_id, line.order_id, line.product_id, line.quantity
        );
        Ok(line)
    }

    async fn update(
        &self,
        req: &UpdateOrderedProductRequest,
    ) -> Result<OrderedProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let line = sqlx::query_as::<_, OrderedProductModel>(
            r#"
            UPDATE ordered_products
            SET order_id = $2,
                product_id = $3,
                quantity = $4
            WHERE ordered_product_id = $1
            RETURNING ordered_product_id, order_id, product_id, quantity
            "#,
        )
        .bind(req.id)
        .bind(req.order_id)
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update line ID {}: {e:?}", req.id);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated line ID {}", line.ordered_product_id);
        Ok(line)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM ordered_products WHERE ordered_product_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete line {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted line {id}");
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM ordered_products WHERE ordered_product_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}
