use crate::{
    abstract_trait::{
        DynClientRepository, DynOrderRepository, DynOrderedProductRepository, DynStorageRepository,
        OrderServiceTrait,
    },
    domain::{
        requests::{CreateOrderRequest, UpdateOrderRequest},
        responses::{ApiResponse, OrderResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderService {
    order: DynOrderRepository,
    client: DynClientRepository,
    ordered_product: DynOrderedProductRepository,
    storage: DynStorageRepository,
}

pub struct OrderServiceDeps {
    pub order: DynOrderRepository,
    pub client: DynClientRepository,
    pub ordered_product: DynOrderedProductRepository,
    pub storage: DynStorageRepository,
}

impl OrderService {
    pub fn new(deps: OrderServiceDeps) -> Self {
        let OrderServiceDeps {
            order,
            client,
            ordered_product,
            storage,
        } = deps;

        Self {
            order,
            client,
            ordered_product,
            storage,
        }
    }
}

#[async_trait]
impl OrderServiceTrait for OrderService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.order.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Orders fetched successfully".to_string(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        let order = self
            .order
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No order found with id:{id}!")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order fetched successfully".to_string(),
            data: OrderResponse::from(order),
        })
    }

    async fn find_by_client(
        &self,
        client_id: i32,
    ) -> Result<ApiResponse<Vec<OrderResponse>>, ServiceError> {
        let orders = self.order.find_by_client_id(client_id).await?;

        if orders.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No order found for clientId:{client_id}!"
            )));
        }

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client orders fetched successfully".to_string(),
            data: orders.into_iter().map(OrderResponse::from).collect(),
        })
    }

    async fn count_by_client(&self, client_id: i32) -> Result<ApiResponse<i64>, ServiceError> {
        let orders = self.order.find_by_client_id(client_id).await?;

        if orders.is_empty() {
            return Err(ServiceError::NotFound(format!(
                "No order found for clientId:{client_id}!"
            )));
        }

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Client order count fetched successfully".to_string(),
            data: orders.len() as i64,
        })
    }

    async fn create(
        &self,
        req: &CreateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🏗️ Creating new order for client_id={}", req.client_id);

        if self.client.find_by_id(req.client_id).await?.is_none() {
            error!("❌ Client not found with ID={}", req.client_id);
            return Err(ServiceError::NotFound(format!(
                "No client found with id:{}!",
                req.client_id
            )));
        }

        let order = self.order.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order created successfully".to_string(),
            data: OrderResponse::from(order),
        })
    }

    async fn update(
        &self,
        req: &UpdateOrderRequest,
    ) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("✏️ Updating order ID={}", req.id);

        if self.client.find_by_id(req.client_id).await?.is_none() {
            error!("❌ Client not found with ID={}", req.client_id);
            return Err(ServiceError::NotFound(format!(
                "No client found with id:{}!",
                req.client_id
            )));
        }

        let order = self.order.update(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order updated successfully".to_string(),
            data: OrderResponse::from(order),
        })
    }

    async fn cancel(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🚫 Canceling order ID={id}");

        // Cancellation flips the flag only; stock is restored on delete.
        let order = self.order.set_canceled(id, true).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: format!("The order {id} was canceled successfully!"),
            data: OrderResponse::from(order),
        })
    }

    async fn uncancel(&self, id: i32) -> Result<ApiResponse<OrderResponse>, ServiceError> {
        info!("🔄 Un-canceling order ID={id}");

        let order = self.order.set_canceled(id, false).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: format!("The order {id} was uncanceled successfully!"),
            data: OrderResponse::from(order),
        })
    }

    async fn is_canceled(&self, id: i32) -> Result<ApiResponse<bool>, ServiceError> {
        let order = self
            .order
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No order found with id:{id}!")))?;

        let message = if order.canceled {
            "The order is canceled"
        } else {
            "The order is not canceled"
        };

        Ok(ApiResponse {
            status: "success".to_string(),
            message: message.to_string(),
            data: order.canceled,
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting order ID={id}");

        if self.order.find_by_id(id).await?.is_none() {
            error!("❌ Order not found with ID={id}");
            return Err(ServiceError::NotFound(format!(
                "No order found with id:{id}!"
            )));
        }

        // Restore stock line by line before removing the order. There is no
        // transaction around this loop; a failure partway through leaves the
        // stock of earlier lines already restored.
        let lines = self.ordered_product.find_by_order_id(id).await?;

        for line in &lines {
            self.storage
                .increase_quantity(line.product_id, line.quantity)
                .await?;
        }

        self.order.delete(id).await?;

        info!("✅ Order {id} deleted, stock restored for {} lines", lines.len());

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Order deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abstract_trait::OrderedProductRepositoryTrait;
    use crate::domain::requests::CreateOrderedProductRequest;
    use crate::service::mocks::{
        MockClientRepository, MockOrderRepository, MockOrderedProductRepository,
        MockStorageRepository,
    };
    use std::sync::Arc;

    fn service_with(
        order: Arc<MockOrderRepository>,
        client: Arc<MockClientRepository>,
        lines: Arc<MockOrderedProductRepository>,
        storage: Arc<MockStorageRepository>,
    ) -> OrderService {
        OrderService::new(OrderServiceDeps {
            order,
            client,
            ordered_product: lines,
            storage,
        })
    }

    #[tokio::test]
    async fn create_order_rejects_unknown_client() {
        let order = Arc::new(MockOrderRepository::default());
        let client = Arc::new(MockClientRepository::default());
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(order.clone(), client, lines, storage);

        let req = CreateOrderRequest {
            client_id: 42,
            created: None,
            total_amount: None,
        };

        let err = service.create(&req).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert!(order.all().is_empty());
    }

    #[tokio::test]
    async fn create_order_starts_uncanceled() {
        let order = Arc::new(MockOrderRepository::default());
        let client = Arc::new(MockClientRepository::with_client(1));
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(order, client, lines, storage);

        let req = CreateOrderRequest {
            client_id: 1,
            created: None,
            total_amount: Some(10.0),
        };

        let response = service.create(&req).await.unwrap();
        assert!(!response.data.canceled);
        assert_eq!(response.data.client_id, 1);
    }

    #[tokio::test]
    async fn cancel_and_uncancel_toggle_only_the_flag() {
        let order = Arc::new(MockOrderRepository::with_order(7, 1));
        let client = Arc::new(MockClientRepository::with_client(1));
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(order.clone(), client, lines, storage.clone());

        let canceled = service.cancel(7).await.unwrap();
        assert!(canceled.data.canceled);

        let uncanceled = service.uncancel(7).await.unwrap();
        assert!(!uncanceled.data.canceled);

        // No stock mutation in either direction.
        assert_eq!(storage.quantity_of(1), 30);
    }

    #[tokio::test]
    async fn cancel_missing_order_reports_not_found() {
        let order = Arc::new(MockOrderRepository::default());
        let client = Arc::new(MockClientRepository::default());
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(order, client, lines, storage);

        let err = service.cancel(99).await.unwrap_err();
        assert!(matches!(
            err,
            ServiceError::Repo(crate::errors::RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn delete_order_restores_stock_for_every_line() {
        let order = Arc::new(MockOrderRepository::with_order(7, 1));
        let client = Arc::new(MockClientRepository::with_client(1));
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());
        storage.insert_stock(1, 10);
        storage.insert_stock(2, 10);

        lines
            .create(&CreateOrderedProductRequest {
                order_id: 7,
                product_id: 1,
                quantity: 2,
            })
            .await
            .unwrap();
        lines
            .create(&CreateOrderedProductRequest {
                order_id: 7,
                product_id: 2,
                quantity: 3,
            })
            .await
            .unwrap();

        let service = service_with(order.clone(), client, lines, storage.clone());

        service.delete(7).await.unwrap();

        assert_eq!(storage.quantity_of(1), 12);
        assert_eq!(storage.quantity_of(2), 13);

        let err = service.find_by_id(7).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_missing_order_changes_no_stock() {
        let order = Arc::new(MockOrderRepository::default());
        let client = Arc::new(MockClientRepository::default());
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::with_stock(1, 30));

        let service = service_with(order, client, lines, storage.clone());

        let err = service.delete(99).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(storage.quantity_of(1), 30);
    }

    #[tokio::test]
    async fn client_orders_report_not_found_when_empty() {
        let order = Arc::new(MockOrderRepository::default());
        let client = Arc::new(MockClientRepository::with_client(1));
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(order, client, lines, storage);

        let err = service.find_by_client(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = service.count_by_client(1).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn count_by_client_counts_all_orders_regardless_of_cancellation() {
        let order = Arc::new(MockOrderRepository::with_order(1, 5));
        order.insert_order(2, 5);
        let client = Arc::new(MockClientRepository::with_client(5));
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(order, client, lines, storage);

        service.cancel(1).await.unwrap();

        let response = service.count_by_client(5).await.unwrap();
        assert_eq!(response.data, 2);
    }

    #[tokio::test]
    async fn is_canceled_reflects_the_flag() {
        let order = Arc::new(MockOrderRepository::with_order(3, 1));
        let client = Arc::new(MockClientRepository::with_client(1));
        let lines = Arc::new(MockOrderedProductRepository::default());
        let storage = Arc::new(MockStorageRepository::default());

        let service = service_with(order, client, lines, storage);

        assert!(!service.is_canceled(3).await.unwrap().data);
        service.cancel(3).await.unwrap();
        assert!(service.is_canceled(3).await.unwrap().data);
    }
}
