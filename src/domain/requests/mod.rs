mod client;
mod order;
mod ordered_product;
mod product;
mod storage;

pub use self::client::{CreateClientRequest, UpdateClientRequest};
pub use self::order::{CreateOrderRequest, UpdateOrderRequest};
pub use self::ordered_product::{CreateOrderedProductRequest, UpdateOrderedProductRequest};
pub use self::product::{CreateProductRequest, UpdateProductRequest};
pub use self::storage::{CreateStorageRequest, UpdateStorageRequest};
