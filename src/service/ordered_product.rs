use crate::{
    abstract_trait::{
        DynOrderedProductRepository, DynStorageRepository, OrderedProductServiceTrait,
    },
    domain::{
        requests::{CreateOrderedProductRequest, UpdateOrderedProductRequest},
        responses::{ApiResponse, OrderedProductResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderedProductService {
    ordered_product: DynOrderedProductRepository,
    storage: DynStorageRepository,
}

impl OrderedProductService {
    pub fn new(ordered_product: DynOrderedProductRepository, storage: DynStorageRepository) -> Self {
        Self {
            ordered_product,
            storage,
        }
    }
}

#[async_trait]
impl OrderedProductServiceTrait for OrderedProductService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderedProductResponse>>, ServiceError> {
        let lines = self.ordered_product.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order lines fetched successfully".to_string(),
            data: lines
                .into_iter()
                .map(OrderedProductResponse::from)
                .collect(),
        })
    }

    async fn find_by_id(
        &self,
        id: i32,
    ) -> Result<ApiResponse<OrderedProductResponse>, ServiceError> {
        let line = self
            .ordered_product
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No order line found with id:{id}!")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order line fetched successfully".to_string(),
            data: OrderedProductResponse::from(line),
        })
    }

    async fn find_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<OrderedProductResponse>>, ServiceError> {
        let lines = self.ordered_product.find_by_order_id(order_id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order lines fetched successfully".to_string(),
            data: lines
                .into_iter()
                .map(OrderedProductResponse::from)
                .collect(),
        })
    }

    async fn find_products_by_order(
        &self,
        order_id: i32,
    ) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self
            .ordered_product
            .find_products_by_order_id(order_id)
            .await?;

        let message = if products.is_empty() {
            format!("No products for orderId:{order_id}!")
        } else {
            "Order products fetched successfully".to_string()
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message,
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn quantity_for(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<ApiResponse<i32>, ServiceError> {
        let quantity = self
            .ordered_product
            .quantity_for(order_id, product_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No order line for orderId:{order_id} productId:{product_id}!"
                ))
            })?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Quantity fetched successfully".to_string(),
            data: quantity,
        })
    }

    async fn create(
        &self,
        req: &CreateOrderedProductRequest,
    ) -> Result<ApiResponse<OrderedProductResponse>, ServiceError> {
        info!(
            "🏗️ Adding line for order {} product {} qty {}",
            req.order_id, req.product_id, req.quantity
        );

        // Duplicate check happens before any stock mutation.
        if self
            .ordered_product
            .exists_for_order_product(0, req.order_id, req.product_id)
            .await?
        {
            error!(
                "❌ Line already exists for order {} product {}",
                req.order_id, req.product_id
            );
            return Err(RepositoryError::AlreadyExists(format!(
                "Order {} already contains product {}",
                req.order_id, req.product_id
            ))
            .into());
        }

        self.storage
            .decrease_quantity(req.product_id, req.quantity)
            .await?;

        let line = self.ordered_product.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order line created successfully".to_string(),
            data: OrderedProductResponse::from(line),
        })
    }

    async fn update(
        &self,
        req: &UpdateOrderedProductRequest,
    ) -> Result<ApiResponse<OrderedProductResponse>, ServiceError> {
        info!("✏️ Updating line ID={} to qty {}", req.id, req.quantity);

        if self
            .ordered_product
            .exists_for_order_product(req.id, req.order_id, req.product_id)
            .await?
        {
            error!(
                "❌ Another line already holds order {} product {}",
                req.order_id, req.product_id
            );
            return Err(RepositoryError::AlreadyExists(format!(
                "Order {} already contains product {}",
                req.order_id, req.product_id
            ))
            .into());
        }

        let old_quantity = self
            .ordered_product
            .quantity_for(req.order_id, req.product_id)
            .await?
            .ok_or_else(|| {
                ServiceError::NotFound(format!(
                    "No order line for orderId:{} productId:{}!",
                    req.order_id, req.product_id
                ))
            })?;

        // Stock moves by the delta only. A zero delta is a no-op increase.
        if old_quantity < req.quantity {
            self.storage
                .decrease_quantity(req.product_id, req.quantity - old_quantity)
                .await?;
        } else {
            self.storage
                .increase_quantity(req.product_id, old_quantity - req.quantity)
                .await?;
        }

        let line = self.ordered_product.update(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order line updated successfully".to_string(),
            data: OrderedProductResponse::from(line),
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting line ID={id}");

        let line = self
            .ordered_product
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No order line found with id:{id}!")))?;

        self.storage
            .increase_quantity(line.product_id, line.quantity)
            .await?;

        self.ordered_product.delete(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order line deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::{MockOrderedProductRepository, MockStorageRepository};
    use std::sync::Arc;

    fn service_with(
        lines: Arc<MockOrderedProductRepository>,
        storage: Arc<MockStorageRepository>,
    ) -> OrderedProductService {
        OrderedProductService::new(lines, storage)
    }

    fn create_req(order_id: i32, product_id: i32, quantity: i32) -> CreateOrderedProductRequest {
        CreateOrderedProductRequest {
            order_id,
            product_id,
            quantity,
        }
    }

    #[tokio::test]
    async fn create_decreases_stock_by_exactly_the_quantity() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(lines.clone(), storage.clone());

        let response = service.create(&create_req(5, 1, 2)).await.unwrap();

        assert_eq!(storage.quantity_of(1), 28);
        assert_eq!(response.data.quantity, 2);
        assert_eq!(lines.all().len(), 1);
    }

    #[tokio::test]
    async fn create_duplicate_line_fails_without_touching_stock() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(lines.clone(), storage.clone());

        service.create(&create_req(5, 1, 2)).await.unwrap();

        let err = service.create(&create_req(5, 1, 4)).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));

        assert_eq!(storage.quantity_of(1), 28);
        assert_eq!(lines.all().len(), 1);
    }

    #[tokio::test]
    async fn create_without_stock_row_reports_not_found() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(lines.clone(), storage);

        let err = service.create(&create_req(5, 9, 2)).await.unwrap_err();
        assert!(matches!(err, ServiceError::Repo(RepositoryError::NotFound)));
        assert!(lines.all().is_empty());
    }

    #[tokio::test]
    async fn edit_adjusts_stock_by_the_delta() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(lines.clone(), storage.clone());

        let created = service.create(&create_req(5, 1, 2)).await.unwrap();
        assert_eq!(storage.quantity_of(1), 28);

        // Raise 2 -> 5: stock drops by the delta of 3.
        let req = UpdateOrderedProductRequest {
            id: created.data.id,
            order_id: 5,
            product_id: 1,
            quantity: 5,
        };
        service.update(&req).await.unwrap();
        assert_eq!(storage.quantity_of(1), 25);

        // Lower 5 -> 1: stock rises by 4.
        let req = UpdateOrderedProductRequest {
            id: created.data.id,
            order_id: 5,
            product_id: 1,
            quantity: 1,
        };
        service.update(&req).await.unwrap();
        assert_eq!(storage.quantity_of(1), 29);

        // Unchanged quantity: no stock movement.
        let req = UpdateOrderedProductRequest {
            id: created.data.id,
            order_id: 5,
            product_id: 1,
            quantity: 1,
        };
        service.update(&req).await.unwrap();
        assert_eq!(storage.quantity_of(1), 29);
    }

    #[tokio::test]
    async fn edit_colliding_with_another_line_fails_without_stock_change() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());
        storage.insert_stock(1, 10);
        storage.insert_stock(2, 10);

        let service = service_with(lines.clone(), storage.clone());

        service.create(&create_req(5, 1, 2)).await.unwrap();
        let second = service.create(&create_req(5, 2, 3)).await.unwrap();

        // Try to move the second line onto product 1, already taken.
        let req = UpdateOrderedProductRequest {
            id: second.data.id,
            order_id: 5,
            product_id: 1,
            quantity: 4,
        };
        let err = service.update(&req).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));

        assert_eq!(storage.quantity_of(1), 8);
        assert_eq!(storage.quantity_of(2), 7);
    }

    #[tokio::test]
    async fn delete_restores_stock_and_removes_the_line() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(lines.clone(), storage.clone());

        let created = service.create(&create_req(5, 1, 2)).await.unwrap();
        assert_eq!(storage.quantity_of(1), 28);

        service.delete(created.data.id).await.unwrap();

        assert_eq!(storage.quantity_of(1), 30);
        assert!(lines.all().is_empty());
    }

    #[tokio::test]
    async fn delete_missing_line_is_a_not_found_no_op() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(lines, storage.clone());

        let err = service.delete(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(storage.quantity_of(1), 30);
    }

    #[tokio::test]
    async fn full_line_lifecycle_matches_the_stock_ledger() {
        // stock 30, add qty 2 -> 28, edit to 5 -> 25, delete -> 30.
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(lines, storage.clone());

        let created = service.create(&create_req(5, 1, 2)).await.unwrap();
        assert_eq!(storage.quantity_of(1), 28);

        let req = UpdateOrderedProductRequest {
            id: created.data.id,
            order_id: 5,
            product_id: 1,
            quantity: 5,
        };
        service.update(&req).await.unwrap();
        assert_eq!(storage.quantity_of(1), 25);

        service.delete(created.data.id).await.unwrap();
        assert_eq!(storage.quantity_of(1), 30);
    }

    #[tokio::test]
    async fn quantity_for_missing_pair_reports_not_found() {
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(lines, storage);

        let err = service.quantity_for(5, 1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
