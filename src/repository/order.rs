use crate::{
    abstract_trait::OrderRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateOrderRequest, UpdateOrderRequest},
    errors::RepositoryError,
    model::Order as OrderModel,
};
use async_trait::async_trait;
use chrono::Utc;
use tracing::{error, info};

#[derive(Clone)]
pub struct OrderRepository {
    db: ConnectionPool,
}

impl OrderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderRepositoryTrait for OrderRepository {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, client_id, created, total_amount, canceled
            FROM orders
            ORDER BY order_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, client_id, created, total_amount, canceled
            FROM orders
            WHERE order_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_client_id(&self, client_id: i32) -> Result<Vec<OrderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let orders = sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT order_id, client_id, created, total_amount, canceled
            FROM orders
            WHERE client_id = $1
            ORDER BY order_id
            "#,
        )
        .bind(client_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch orders for client {client_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(orders)
    }

    async fn create(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let created = req.created.unwrap_or_else(|| Utc::now().naive_utc());

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            INSERT INTO orders (client_id, created, total_amount, canceled)
            VALUES ($1, $2, $3, false)
            RETURNING order_id, client_id, created, total_amount, canceled
            "#,
        )
        .bind(req.client_id)
        .bind(created)
        .bind(req.total_amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to create order for client {}: {e:?}",
                req.client_id
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created order ID {} for client {}",
            order.order_id, order.client_id
        );
        Ok(order)
    }

    async fn update(&self, req: &UpdateOrderRequest) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        // An omitted timestamp keeps the original one.
        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET client_id = $2,
                created = COALESCE($3, created),
                total_amount = $4
            WHERE order_id = $1
            RETURNING order_id, client_id, created, total_amount, canceled
            "#,
        )
        .bind(req.id)
        .bind(req.client_id)
        .bind(req.created)
        .bind(req.total_amount)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update order ID {}: {e:?}", req.id);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated order ID {}", order.order_id);
        Ok(order)
    }

    async fn set_canceled(&self, id: i32, canceled: bool) -> Result<OrderModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let order = sqlx::query_as::<_, OrderModel>(
            r#"
            UPDATE orders
            SET canceled = $2
            WHERE order_id = $1
            RETURNING order_id, client_id, created, total_amount, canceled
            "#,
        )
        .bind(id)
        .bind(canceled)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to set canceled={canceled} on order {id}: {e:?}");
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Order {id} canceled flag set to {canceled}");
        Ok(order)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM orders WHERE order_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete order {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted order {id}");
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM orders WHERE order_id = $1)")
                .bind(id)
                .fetch_one(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}
