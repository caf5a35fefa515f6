use crate::{
    abstract_trait::{DynGenderRepository, GenderServiceTrait},
    domain::responses::{ApiResponse, GenderResponse},
    errors::ServiceError,
};
use async_trait::async_trait;

/// Genders are seeded reference data; the service is read-only.
pub struct GenderService {
    gender: DynGenderRepository,
}

impl GenderService {
    pub fn new(gender: DynGenderRepository) -> Self {
        Self { gender }
    }
}

#[async_trait]
impl GenderServiceTrait for GenderService {
    async fn find_all(&self) -> Result<ApiResponse<Vec<GenderResponse>>, ServiceError> {
        let genders = self.gender.find_all().await?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Genders fetched successfully".to_string(),
            data: genders.into_iter().map(GenderResponse::from).collect(),
        })
    }

    async fn find_by_id(&self, id: i32) -> Result<ApiResponse<GenderResponse>, ServiceError> {
        let gender = self
            .gender
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("No gender found with id:{id}!")))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "Gender fetched successfully".to_string(),
            data: GenderResponse::from(gender),
        })
    }
}
