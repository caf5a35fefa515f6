use crate::{
    abstract_trait::{DynProductRepository, ProductServiceTrait},
    domain::{
        requests::{CreateProductRequest, UpdateProductRequest},
        responses::{ApiResponse, ProductResponse},
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductService {
    product: DynProductRepository,
}

impl ProductService {
    pub fn new(product: DynProductRepository) -> Self {
        Self { product }
    }
}

#[async_trait]
impl ProductServiceTrait for ProductService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<ProductResponse>>, ServiceError> {
        let products = self.product.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Products fetched successfully".to_string(),
            data: products.into_iter().map(ProductResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        let product = self
            .product
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No product found with id:{id}!")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product fetched successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn create(
        &self,
        req: &CreateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("🏗️ Creating new product: {}", req.name);

        if self.product.exists_by_name(0, &req.name).await? {
            error!("❌ Product name already taken: {}", req.name);
            return Err(RepositoryError::AlreadyExists(format!(
                "Product with name '{}' already exists!",
                req.name
            ))
            .into());
        }

        let product = self.product.create(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product created successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn update(
        &self,
        req: &UpdateProductRequest,
    ) -> Result<ApiResponse<ProductResponse>, ServiceError> {
        info!("✏️ Updating product ID={}", req.id);

        if self.product.exists_by_name(req.id, &req.name).await? {
            error!("❌ Product name already taken: {}", req.name);
            return Err(RepositoryError::AlreadyExists(format!(
                "Product with name '{}' already exists!",
                req.name
            ))
            .into());
        }

        let product = self.product.update(req).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product updated successfully".to_string(),
            data: ProductResponse::from(product),
        })
    }

    async fn delete(&self, id: i32) -> Result<ApiResponse<()>, ServiceError> {
        info!("🗑️ Deleting product ID={id}");

        self.product.delete(id).await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Product deleted successfully".to_string(),
            data: (),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::mocks::MockProductRepository;
    use std::sync::Arc;

    fn request(name: &str, price: f64) -> CreateProductRequest {
        CreateProductRequest {
            name: name.to_string(),
            price,
            expiration_date: None,
            description: None,
        }
    }

    #[tokio::test]
    async fn create_rejects_duplicate_name() {
        let repo = Arc::new(MockProductRepository::default());
        let service = ProductService::new(repo.clone());

        service.create(&request("Milk", 2.5)).await.unwrap();
        let err = service.create(&request("Milk", 3.0)).await.unwrap_err();

        assert!(matches!(
            err,
            ServiceError::Repo(RepositoryError::AlreadyExists(_))
        ));
        assert_eq!(repo.all().len(), 1);
    }

    #[tokio::test]
    async fn update_allows_keeping_own_name() {
        let repo = Arc::new(MockProductRepository::default());
        let service = ProductService::new(repo.clone());

        let created = service.create(&request("Milk", 2.5)).await.unwrap().data;

        let updated = service
            .update(&UpdateProductRequest {
                id: created.id,
                name: "Milk".to_string(),
                price: 2.8,
                expiration_date: None,
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.data.price, 2.8);
    }

    #[tokio::test]
    async fn find_missing_product_is_not_found() {
        let repo = Arc::new(MockProductRepository::default());
        let service = ProductService::new(repo);

        let err = service.find_by_id(42).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
    }
}
