use crate::{
    abstract_trait::StorageRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateStorageRequest, UpdateStorageRequest},
    errors::RepositoryError,
    model::Storage as StorageModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct StorageRepository {
    db: ConnectionPool,
}

impl StorageRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl StorageRepositoryTrait for StorageRepository {
    async fn find_all(&self) -> Result<Vec<StorageModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let rows = sqlx::query_as::<_, StorageModel>(
            r#"
            SELECT storage_id, product_id, quantity
            FROM storages
            ORDER BY storage_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch stock rows: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(rows)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<StorageModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, StorageModel>(
            r#"
            SELECT storage_id, product_id, quantity
            FROM storages
            WHERE storage_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<StorageModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, StorageModel>(
            r#"
            SELECT storage_id, product_id, quantity
            FROM storages
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn quantity_by_product_id(&self, product_id: i32) -> Result<i32, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let quantity =
            sqlx::query_scalar::<_, i32>("SELECT quantity FROM storages WHERE product_id = $1")
                .bind(product_id)
                .fetch_optional(&mut *conn)
                .await
                .map_err(RepositoryError::from)?;

        Ok(quantity.unwrap_or(0))
    }

    async fn increase_quantity(
        &self,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result =
            sqlx::query("UPDATE storages SET quantity = quantity + $2 WHERE product_id = $1")
                .bind(product_id)
                .bind(quantity)
                .execute(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to increase stock for product {product_id}: {e:?}");
                    RepositoryError::from(e)
                })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("📦 Increased stock for product {product_id} by {quantity}");
        Ok(())
    }

    async fn decrease_quantity(
        &self,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result =
            sqlx::query("UPDATE storages SET quantity = quantity - $2 WHERE product_id = $1")
                .bind(product_id)
                .bind(quantity)
                .execute(&mut *conn)
                .await
                .map_err(|e| {
                    error!("❌ Failed to decrease stock for product {product_id}: {e:?}");
                    RepositoryError::from(e)
                })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("📦 Decreased stock for product {product_id} by {quantity}");
        Ok(())
    }

    async fn create(&self, req: &CreateStorageRequest) -> Result<StorageModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, StorageModel>(
            r#"
            INSERT INTO storages (product_id, quantity)
            VALUES ($1, $2)
            RETURNING storage_id, product_id, quantity
            "#,
        )
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!(
                "❌ Failed to create stock row for product {}: {e:?}",
                req.product_id
            );
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created stock row ID {} for product {}",
            row.storage_id, row.product_id
        );
        Ok(row)
    }

    async fn update(&self, req: &UpdateStorageRequest) -> Result<StorageModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let row = sqlx::query_as::<_, StorageModel>(
            r#"
            UPDATE storages
            SET product_id = $2,
                quantity = $3
            WHERE storage_id = $1
            RETURNING storage_id, product_id, quantity
            "#,
        )
        .bind(req.id)
        .bind(req.product_id)
        .bind(req.quantity)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update stock row ID {}: {e:?}", req.id);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated stock row ID {}", row.storage_id);
        Ok(row)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM storages WHERE storage_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete stock row {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted stock row {id}");
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM storages WHERE storage_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}
