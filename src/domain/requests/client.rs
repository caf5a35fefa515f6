use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreateClientRequest {
    #[validate(length(min = 1))]
    pub name: String,

    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,

    #[serde(rename = "phone_number")]
    pub phone_number: Option<String>,

    #[validate(range(min = 1))]
    #[serde(rename = "gender_id")]
    pub gender_id: i32,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateClientRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(length(min = 1))]
    pub name: String,

    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,

    #[serde(rename = "phone_number")]
    pub phone_number: Option<String>,

    #[validate(range(min = 1))]
    #[serde(rename = "gender_id")]
    pub gender_id: i32,
}
