use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct CreateOrderedProductRequest {
    #[validate(range(min = 1))]
    #[serde(rename = "order_id")]
    pub order_id: i32,

    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}

/// `id` comes from the request path, not the body.
#[derive(Debug, Serialize, Deserialize, Validate, Clone, ToSchema)]
pub struct UpdateOrderedProductRequest {
    #[serde(default)]
    pub id: i32,

    #[validate(range(min = 1))]
    #[serde(rename = "order_id")]
    pub order_id: i32,

    #[validate(range(min = 1))]
    #[serde(rename = "product_id")]
    pub product_id: i32,

    #[validate(range(min = 1))]
    pub quantity: i32,
}
