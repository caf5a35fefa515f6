use crate::{
    abstract_trait::{DynStorageRepository, StorageServiceTrait},
    domain::{
        requests::{CreateStorageRequest, UpdateStorageRequest},
        responses::{ApiResponse, StorageResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct StorageService {
    storage: DynStorageRepository,
}

impl StorageService {
    pub fn new(storage: DynStorageRepository) -> Self {
        Self { storage }
    }
}

#[async_trait]
impl StorageServiceTrait for StorageService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<StorageResponse>>, ServiceError> {
        let storages = self.storage.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Storages fetched successfully".to_string(),
            data: storages.into_iter().map(StorageResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<StorageResponse>, ServiceError> {
        let storage = self
            .storage
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No storage found with id:{id}!")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Storage fetched successfully".to_string(),
            data: StorageResponse::from(storage),
        })
    }

    async fn check_availability(
        &self,
        product_id: i32,
    ) -> Result<ApiResponse<i32>, ServiceError> {
        let quantity = self.storage.quantity_by_product_id(product_id).await?;

        // A missing stock row and an exhausted one read the same to callers.
        if quantity == 0 {
            return Err(ServiceError::NotFound(format!(
                "Product {product_id} is not on the stock"
            )));
        }

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Stock availability fetched successfully".to_string(),
            data: quantity,
        })
    }

    async fn create(
        &self,
        req: &CreateStorageRequest,
    ) -> Result<ApiResponse<StorageResponse>, ServiceError> {
        info!("🏗️ Creating storage row for product_id={}", req.product_id);

        let storage = self.storage.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Storage created successfully".to_string(),
            data: StorageResponse::from(storage),
        })
    }

    async fn update(
        &self,
        req: &UpdateStorageRequest,
    ) -> Result<ApiResponse<StorageResponse>, ServiceError> {
        info!("✏️ Updating storage ID={}", req.id);

        let storage = self.storage.update(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Storage updated successfully".to_string(),
            data: StorageResponse::from(storage),
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting storage ID={id}");

        self.storage.delete(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Storage deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::MockStorageRepository;
    use std::sync::Arc;

    #[tokio::test]
    async fn availability_returns_remaining_quantity() {
        let service = StorageService::new(Arc::new(MockStorageRepository::with_stock(1, 12)));

        let response = service.check_availability(1).await.unwrap();

        assert_eq!(response.data, 12);
    }

    #[tokio::test]
    async fn availability_treats_zero_stock_as_not_found() {
        let service = StorageService::new(Arc::new(MockStorageRepository::with_stock(1, 0)));

        let err = service.check_availability(1).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn availability_treats_missing_row_as_not_found() {
        let service = StorageService::new(Arc::new(MockStorageRepository::default()));

        let err = service.check_availability(9).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
