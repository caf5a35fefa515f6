use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreateProductRequest {
    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[serde(rename = "expiration_date")]
    pub expiration_date: Option<NaiveDate>,

    pub description: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1))]
    pub name: String,

    #[validate(range(min = 0.0))]
    pub price: f64,

    #[serde(rename = "expiration_date")]
    pub expiration_date: Option<NaiveDate>,

    pub description: Option<String>,
}
