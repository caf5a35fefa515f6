use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Quantity on hand for one product. One row per product by convention.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Storage {
    pub storage_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}
