use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Read-only lookup table.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Gender {
    pub gender_id: i32,
    pub gender_type: Option<String>,
}
