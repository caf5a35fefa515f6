use crate::{
    abstract_trait::{
        DynClientService, DynGenderService, DynOrderService, DynOrderedProductService,
        DynProductService, DynStorageService,
    },
    config::ConnectionPool,
    repository::{
        ClientRepository, GenderRepository, OrderRepository, OrderedProductRepository,
        ProductRepository, StorageRepository,
    },
    service::{
        ClientService, GenderService, OrderService, OrderServiceDeps, OrderedProductService,
        ProductService, StorageService,
    },
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub client_service: DynClientService,
    pub gender_service: DynGenderService,
    pub order_service: DynOrderService,
    pub ordered_product_service: DynOrderedProductService,
    pub product_service: DynProductService,
    pub storage_service: DynStorageService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("client_service", &"ClientService")
            .field("gender_service", &"GenderService")
            .field("order_service", &"OrderService")
            .field("ordered_product_service", &"OrderedProductService")
            .field("product_service", &"ProductService")
            .field("storage_service", &"StorageService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool) -> Self {
        let client_repo = Arc::new(ClientRepository::new(pool.clone()));
        let gender_repo = Arc::new(GenderRepository::new(pool.clone()));
        let order_repo = Arc::new(OrderRepository::new(pool.clone()));
        let ordered_product_repo = Arc::new(OrderedProductRepository::new(pool.clone()));
        let product_repo = Arc::new(ProductRepository::new(pool.clone()));
        let storage_repo = Arc::new(StorageRepository::new(pool.clone()));

        let client_service: DynClientService = Arc::new(ClientService::new(
            client_repo.clone(),
            gender_repo.clone(),
        ));

        let gender_service: DynGenderService = Arc::new(GenderService::new(gender_repo.clone()));

        let order_service: DynOrderService = Arc::new(OrderService::new(OrderServiceDeps {
            order: order_repo.clone(),
            client: client_repo.clone(),
            ordered_product: ordered_product_repo.clone(),
            storage: storage_repo.clone(),
        }));

        let ordered_product_service: DynOrderedProductService = Arc::new(
            OrderedProductService::new(ordered_product_repo.clone(), storage_repo.clone()),
        );

        let product_service: DynProductService = Arc::new(ProductService::new(product_repo));

        let storage_service: DynStorageService = Arc::new(StorageService::new(storage_repo));

        Self {
            client_service,
            gender_service,
            order_service,
            ordered_product_service,
            product_service,
            storage_service,
        }
    }
}
