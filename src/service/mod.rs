mod client;
mod gender;
mod order;
mod ordered_product;
mod product;
mod storage;

#[cfg(test)]
pub(crate) mod mocks;

pub use self::client::ClientService;
pub use self::gender::GenderService;
pub use self::order::{OrderService, OrderServiceDeps};
pub use self::ordered_product::OrderedProductService;
pub use self::product::ProductService;
pub use self::storage::StorageService;
