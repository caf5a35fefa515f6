use crate::model::Product;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub price: f64,
    #[serde(rename = "expiration_date")]
    pub expiration_date: Option<String>,
    pub description: Option<String>,
}

impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            price: value.price,
            expiration_date: value.expiration_date.map(|d| d.to_string()),
            description: value.description,
        }
    }
}
