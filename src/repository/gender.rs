use crate::{
    abstract_trait::GenderRepositoryTrait, config::ConnectionPool, errors::RepositoryError,
    model::Gender as GenderModel,
};
use async_trait::async_trait;
use tracing::error;

#[derive(Clone)]
pub struct GenderRepository {
    db: ConnectionPool,
}

impl GenderRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl GenderRepositoryTrait for GenderRepository {
    async fn find_all(&self) -> Result<Vec<GenderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let genders = sqlx::query_as::<_, GenderModel>(
            r#"
            SELECT gender_id, gender_type
            FROM genders
            ORDER BY gender_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch genders: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(genders)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<GenderModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, GenderModel>(
            r#"
            SELECT gender_id, gender_type
            FROM genders
            WHERE gender_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM genders WHERE gender_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}
