use crate::model::Client;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ClientResponse {
    pub id: i32,
    pub name: String,
    pub street: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    #[serde(rename = "phone_number")]
    pub phone_number: Option<String>,
    #[serde(rename = "gender_id")]
    pub gender_id: i32,
}

impl From<Client> for ClientResponse {
    fn from(value: Client) -> Self {
        ClientResponse {
            id: value.client_id,
            name: value.name,
            street: value.street,
            city: value.city,
            country: value.country,
            phone_number: value.phone_number,
            gender_id: value.gender_id,
        }
    }
}
