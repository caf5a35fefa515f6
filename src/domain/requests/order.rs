use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "client_id")]
    pub client_id: i32,

    /// Defaults to the current timestamp when omitted.
    pub created: Option<NaiveDateTime>,

    #[serde(rename = "total_amount")]
    pub total_amount: Option<f64>,
}

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateOrderRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(range(min = 1))]
    #[serde(rename = "client_id")]
    pub client_id: i32,

    pub created: Option<NaiveDateTime>,

    #[serde(rename = "total_amount")]
    pub total_amount: Option<f64>,
}
