mod client;
mod gender;
mod order;
mod ordered_product;
mod product;
mod storage;

pub use self::client::ClientRepository;
pub use self::gender::GenderRepository;
pub use self::order::OrderRepository;
pub use self::ordered_product::OrderedProductRepository;
pub use self::product::ProductRepository;
pub use self::storage::StorageRepository;
