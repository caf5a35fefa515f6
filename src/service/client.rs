use crate::{
    abstract_trait::{ClientServiceTrait, DynClientRepository, DynGenderRepository},
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ClientService {
    client: DynClientRepository,
    gender: DynGenderRepository,
}

impl ClientService {
    pub fn new(client: DynClientRepository, gender: DynGenderRepository) -> Self {
        Self { client, gender }
    }

    async fn ensure_unique_phone(
        &self,
        exclude_id: i32,
        phone: Option<&str>,
    ) -> Result<(), ServiceError> {
        let Some(phone) = phone else {
            return Ok(());
        };

        if self.client.exists_by_phone(exclude_id, phone).await? {
            error!("❌ Phone number already taken: {phone}");
            return Err(RepositoryError::AlreadyExists(format!(
                "Client with phone number '{phone}' already exists!"
            ))
            .into());
        }

        Ok(())
    }
}

#[async_trait]
impl ClientServiceTrait for ClientService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ClientResponse>>, ServiceError> {
        let clients = self.client.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Clients fetched successfully".to_string(),
            data: clients.into_iter().map(ClientResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        let client = self
            .client
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No client found with id:{id}!")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client fetched successfully".to_string(),
            data: ClientResponse::from(client),
        })
    }

    async fn create(
        &self,
        req: &CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        info!("🏗️ Creating new client: {}", req.name);

        if !self.gender.exists(req.gender_id).await? {
            error!("❌ Gender not found with ID={}", req.gender_id);
            return Err(ServiceError::NotFound(format!(
                "No gender found with id:{}!",
                req.gender_id
            )));
        }

        self.ensure_unique_phone(0, req.phone_number.as_deref())
            .await?;

        let client = self.client.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client created successfully".to_string(),
            data: ClientResponse::from(client),
        })
    }

    async fn update(
        &self,
        req: &UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError> {
        info!("✏️ Updating client ID={}", req.id);

        if !self.gender.exists(req.gender_id).await? {
            error!("❌ Gender not found with ID={}", req.gender_id);
            return Err(ServiceError::NotFound(format!(
                "No gender found with id:{}!",
                req.gender_id
            )));
        }

        self.ensure_unique_phone(req.id, req.phone_number.as_deref())
            .await?;

        let client = self.client.update(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client updated successfully".to_string(),
            data: ClientResponse::from(client),
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting client ID={id}");

        self.client.delete(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client deleted successfully".to_string(),
            data: (),
        })
    }
}
