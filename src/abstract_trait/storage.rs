use crate::{
    domain::{
        requests::{CreateStorageRequest, UpdateStorageRequest},
        responses::{ApiResponse, StorageResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Storage as StorageModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynStorageRepository = Arc<dyn StorageRepositoryTrait + Send + Sync>;
pub type DynStorageService = Arc<dyn StorageServiceTrait + Send + Sync>;

#[async_trait]
pub trait StorageRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<StorageModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<StorageModel>, RepositoryError>;
    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<StorageModel>, RepositoryError>;
    /// 0 when the product has no stock row.
    async fn quantity_by_product_id(&self, product_id: i32) -> Result<i32, RepositoryError>;
    /// `NotFound` when the product has no stock row.
    async fn increase_quantity(&self, product_id: i32, quantity: i32)
    -> Result<(), RepositoryError>;
    /// `NotFound` when the product has no stock row.
    async fn decrease_quantity(&self, product_id: i32, quantity: i32)
    -> Result<(), RepositoryError>;
    async fn create(&self, req: &CreateStorageRequest) -> Result<StorageModel, RepositoryError>;
    async fn update(&self, req: &UpdateStorageRequest) -> Result<StorageModel, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait StorageServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<StorageResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<StorageResponse>, ServiceError>;
    /// Stock availability check; `NotFound` when the product is not on stock.
    async fn check_availability(&self, product_id: i32) -> Result<ApiResponse<i32>, ServiceError>;
    async fn create(
        &self,
        req: &CreateStorageRequest,
    ) -> Result<ApiResponse<StorageResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateStorageRequest,
    ) -> Result<ApiResponse<StorageResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
