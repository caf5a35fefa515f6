use crate::{
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::Order as OrderModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderRepository = Arc<dyn OrderRepositoryTrait + Send + Sync>;
pub type DynOrderService = Arc<dyn OrderServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderModel>, RepositoryError>;
    async fn find_by_client_id(&self, client_id: i32) -> Result<Vec<OrderModel>, RepositoryError>;
    async fn create(&self, req: &CreateOrderRequest) -> Result<OrderModel, RepositoryError>;
    async fn update(&self, req: &UpdateOrderRequest) -> Result<OrderModel, RepositoryError>;
    /// Flips only the cancellation flag. `NotFound` when the order is absent.
    async fn set_canceled(&self, id: i32, canceled: bool) -> Result<OrderModel, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait OrderServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn find_by_client(
        &self,
        client_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError>;
    async fn count_by_client(&self, client_id: i32) -> Result<ApiResponse<i64>, ServiceError>;
    async fn create(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn update(
        &self,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn cancel(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn uncancel(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError>;
    async fn is_canceled(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError>;
    /// Restores stock for every line of the order, then removes the order.
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
