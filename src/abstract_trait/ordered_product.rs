use crate::{
    domain::{
        requests::{CreateOrderedProductRequest, UpdateOrderedProductRequest},
        responses::{ApiResponse, OrderedProductResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
    model::{OrderedProduct as OrderedProductModel, Product as ProductModel},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderedProductRepository = Arc<dyn OrderedProductRepositoryTrait + Send + Sync>;
pub type DynOrderedProductService = Arc<dyn OrderedProductServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderedProductRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<OrderedProductModel>, RepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<OrderedProductModel>, RepositoryError>;
    async fn find_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderedProductModel>, RepositoryError>;
    async fn find_products_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<ProductModel>, RepositoryError>;
    /// Persisted quantity for one (order, product) pair. `None` when no such
    /// line exists.
    async fn quantity_for(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<i32>, RepositoryError>;
    /// True when another line (id != `exclude_id`) already holds the
    /// (order, product) pair.
    async fn exists_for_order_product(
        &self,
        exclude_id: i32,
        order_id: i32,
        product_id: i32,
    ) -> Result<bool, RepositoryError>;
    async fn create(
        &self,
        req: &CreateOrderedProductRequest,
    ) -> Result<OrderedProductModel, RepositoryError>;
    async fn update(
        &self,
        req: &UpdateOrderedProductRequest,
    ) -> Result<OrderedProductModel, RepositoryError>;
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;
    async fn exists(&self, id: i32) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait OrderedProductServiceTrait {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderedProductResponse>>, ServiceError>;
    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<OrderedProductResponse>, ServiceError>;
    async fn find_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderedProductResponse>>, ServiceError>;
    async fn find_products_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError>;
    async fn quantity_for(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<i32>, ServiceError>;
    /// Decreases stock by the requested quantity, then inserts the line.
    async fn create(
        &self,
        req: &CreateOrderedProductRequest,
    ) -> Result<ApiResponse<OrderedProductResponse>, ServiceError>;
    /// Adjusts stock by the delta between the persisted and the requested
    /// quantity, then persists the line.
    async fn update(
        &self,
        req: &UpdateOrderedProductRequest,
    ) -> Result<ApiResponse<OrderedProductResponse>, ServiceError>;
    /// Restores stock by the line quantity, then removes the line.
    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError>;
}
