mod client;
mod gender;
mod order;
mod ordered_product;
mod product;
mod storage;

pub use self::client::Client;
pub use self::gender::Gender;
pub use self::order::Order;
pub use self::ordered_product::OrderedProduct;
pub use self::product::Product;
pub use self::storage::Storage;
