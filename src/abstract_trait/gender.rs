use crate::{
    domain::responses::{ApiResponse, GenderResponse},
    errors::{RepositoryError, ServiceError},
    model::Gender as GenderModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynGenderRepository = Arc<dyn GenderRepositoryTrait + Send + Sync>;
pub type DynGenderService = Arc<dyn GenderServiceTrait + Send + Sync>;

#[async_trait]
pub trait GenderRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<GenderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<GenderModel>, RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait GenderServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<GenderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<GenderResponse>, ServiceError>;
}
