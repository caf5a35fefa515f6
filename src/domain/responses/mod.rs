mod api;
mod client;
mod gender;
mod order;
mod ordered_product;
mod product;
mod storage;

pub use self::api::ApiResponse;
pub use self::client::ClientResponse;
pub use self::gender::GenderResponse;
pub use self::order::OrderResponse;
pub use self::ordered_product::OrderedProductResponse;
pub use self::product::ProductResponse;
pub use self::storage::StorageResponse;
