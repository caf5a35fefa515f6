use crate::{
    domain::{
        requests::{CreateClientRequest, UpdateClientRequest},
        responses::{ApiResponse, ClientResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Client as ClientModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynClientRepository = Arc<dyn ClientRepositoryTrait + Send + Sync>;
pub type DynClientService = Arc<dyn ClientServiceTrait + Send + Sync>;

#[async_trait]
pub trait ClientRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ClientModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ClientModel>, RepositoryError>;
    /// True when another client (id != `exclude_id`) already uses the number.
    async fn exists_by_phone(&self, exclude_id: i32, phone: &str)
    -> Result<bool, RepositoryError>;
    async fn create(&self, req: &CreateClientRequest) -> Result<ClientModel, RepositoryError>;
    async fn update(&self, req: &UpdateClientRequest) -> Result<ClientModel, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait ClientServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ClientResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateClientRequest,
    ) -> Result<ApiResponse<ClientResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
