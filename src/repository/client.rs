use crate::{
    abstract_trait::ClientRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateClientRequest, UpdateClientRequest},
    errors::RepositoryError,
    model::Client as ClientModel,
};
use async_trait::async_trait;
use tracing::{error, info};

#[derive(Clone)]
pub struct ClientRepository {
    db: ConnectionPool,
}

impl ClientRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepositoryTrait for ClientRepository {
    async fn find_all(&self) -> Result<Vec<ClientModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let clients = sqlx::query_as::<_, ClientModel>(
            r#"
            SELECT client_id, name, street, city, country, phone_number, gender_id
            FROM clients
            ORDER BY client_id
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch clients: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(clients)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<ClientModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query_as::<_, ClientModel>(
            r#"
            SELECT client_id, name, street, city, country, phone_number, gender_id
            FROM clients
            WHERE client_id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(result)
    }

    async fn exists_by_phone(
        &self,
        exclude_id: i32,
        phone: &str,
    ) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM clients
                WHERE phone_number = $1 AND client_id <> $2
            )
            "#,
        )
        .bind(phone)
        .bind(exclude_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }

    async fn create(&self, req: &CreateClientRequest) -> Result<ClientModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let client = sqlx::query_as::<_, ClientModel>(
            r#"
            INSERT INTO clients (name, street, city, country, phone_number, gender_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING client_id, name, street, city, country, phone_number, gender_id
            "#,
        )
        .bind(&req.name)
        .bind(&req.street)
        .bind(&req.city)
        .bind(&req.country)
        .bind(&req.phone_number)
        .bind(req.gender_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to create client {}: {e:?}", req.name);
            RepositoryError::from(e)
        })?;

        info!(
            "✅ Created client ID {} ({})",
            client.client_id, client.name
        );
        Ok(client)
    }

    async fn update(&self, req: &UpdateClientRequest) -> Result<ClientModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let client = sqlx::query_as::<_, ClientModel>(
            r#"
            UPDATE clients
            SET name = $2,
                street = $3,
                city = $4,
                country = $5,
                phone_number = $6,
                gender_id = $7
            WHERE client_id = $1
            RETURNING client_id, name, street, city, country, phone_number, gender_id
            "#,
        )
        .bind(req.id)
        .bind(&req.name)
        .bind(&req.street)
        .bind(&req.city)
        .bind(&req.country)
        .bind(&req.phone_number)
        .bind(req.gender_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update client ID {}: {e:?}", req.id);
            RepositoryError::from(e)
        })?
        .ok_or(RepositoryError::NotFound)?;

        info!("🔄 Updated client ID {}", client.client_id);
        Ok(client)
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let result = sqlx::query("DELETE FROM clients WHERE client_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete client {id}: {e:?}");
                RepositoryError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        info!("🗑️ Deleted client {id}");
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM clients WHERE client_id = $1)",
        )
        .bind(id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(exists)
    }
}
