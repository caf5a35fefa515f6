use crate::{
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Product as ProductModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynProductRepository = Arc<dyn ProductRepositoryTrait + Send + Sync>;
pub type DynProductService = Arc<dyn ProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<ProductModel>, RepositoryError>;
    /// True when another product (id != `exclude_id`) already uses the name.
    async fn exists_by_name(&self, exclude_id: i32, name: &str) -> Result<bool, RepositoryError>;
    async fn create(&self, req: &CreateProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn update(&self, req: &UpdateProductRequest) -> Result<ProductModel, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait ProductServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError>;
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
