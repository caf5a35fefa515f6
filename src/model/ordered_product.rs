use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One order line: the quantity of one product within one order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderedProduct {
    pub ordered_product_id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
}
