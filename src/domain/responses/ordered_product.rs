use crate::model::OrderedProduct;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct OrderedProductResponse {
    pub id: i32,
    #[serde(rename = "order_id")]
    pub order_id: i32,
    #[serde(rename = "product_id")]
    pub product_id: i32,
    pub quantity: i32,
}

impl From<OrderedProduct> for OrderedProductResponse {
    fn from(value: OrderedProduct) -> Self {
        OrderedProductResponse {
            id: value.ordered_product_id,
            order_id: value.order_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
