use crate::model::Storage;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct StorageResponse {
    pub id: i32,
    #[serde(rename = "product_id")]
    pub product_id: i32,
    pub quantity: i32,
}

impl From<Storage> for StorageResponse {
    fn from(value: Storage) -> Self {
        StorageResponse {
            id: value.storage_id,
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
