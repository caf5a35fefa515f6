use crate::model::Gender;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct GenderResponse {
    pub id: i32,
    #[serde(rename = "gender_type")]
    pub gender_type: Option<String>,
}

impl From<Gender> for GenderResponse {
    fn from(value: Gender) -> Self {
        GenderResponse {
            id: value.gender_id,
            gender_type: value.gender_type,
        }
    }
}
