mod client;
mod gender;
mod order;
mod ordered_product;
mod product;
mod storage;

pub use self::client::{
    ClientRepositoryTrait, ClientServiceTrait, DynClientRepository, DynClientService,
};
pub use self::gender::{
    DynGenderRepository, DynGenderService, GenderRepositoryTrait, GenderServiceTrait,
};
pub use self::order::{DynOrderRepository, DynOrderService, OrderRepositoryTrait, OrderServiceTrait};
pub use self::ordered_product::{
    DynOrderedProductRepository, DynOrderedProductService, OrderedProductRepositoryTrait,
    OrderedProductServiceTrait,
};
pub use self::product::{
    DynProductRepository, DynProductService, ProductRepositoryTrait, ProductServiceTrait,
};
pub use self::storage::{
    DynStorageRepository, DynStorageService, StorageRepositoryTrait, StorageServiceTrait,
};
