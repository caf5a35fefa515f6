use crate::model::Order;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderResponse {
    pub id: i32,
    #[serde(rename = "client_id")]
    pub client_id: i32,
    pub created: String,
    #[serde(rename = "total_amount")]
    pub total_amount: Option<f64>,
    pub canceled: bool,
}

// model to response
impl From<Order> for OrderResponse {
    fn from(value: Order) -> Self {
        OrderResponse {
            id: value.order_id,
            client_id: value.client_id,
            created: value.created.to_string(),
            total_amount: value.total_amount,
            canceled: value.canceled,
        }
    }
}
