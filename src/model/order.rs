use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_id: i32,
    pub client_id: i32,
    pub created: NaiveDateTime,
    pub total_amount: Option<f64>,
    pub canceled: bool,
}
