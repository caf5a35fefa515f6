//! In-memory repository fakes for service tests.

use crate::{
    abstract_trait::{
        ClientRepositoryTrait, GenderRepositoryTrait, OrderRepositoryTrait,
        OrderedProductRepositoryTrait, ProductRepositoryTrait, StorageRepositoryTrait,
    },
    domain::requests::{
        CreateClientRequest, CreateOrderRequest, CreateOrderedProductRequest,
        CreateProductRequest, CreateStorageRequest, UpdateClientRequest, UpdateOrderRequest,
        UpdateOrderedProductRequest, UpdateProductRequest, UpdateStorageRequest,
    },
    errors::RepositoryError,
    model::{Client, Gender, Order, OrderedProduct, Product, Storage},
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::{
    Mutex,
    atomic::{AtomicI32, Ordering},
};

#[derive(Default)]
pub struct MockOrderRepository {
    rows: Mutex<Vec<Order>>,
    next_id: AtomicI32,
}

impl MockOrderRepository {
    pub fn with_order(id: i32, client_id: i32) -> Self {
        let repo = Self::default();
        repo.insert_order(id, client_id);
        repo
    }

    pub fn insert_order(&self, id: i32, client_id: i32) {
        self.rows.lock().unwrap().push(Order {
            order_id: id,
            client_id,
            created: Utc::now().naive_utc(),
            total_amount: None,
            canceled: false,
        });
        self.next_id.fetch_max(id, Ordering::SeqCst);
    }

    pub fn all(&self) -> Vec<Order> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepositoryTrait for MockOrderRepository {
    async fn find_all(&self) -> Result<Vec<Order>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Order>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.order_id == id)
            .cloned())
    }

    async fn find_by_client_id(&self, client_id: i32) -> Result<Vec<Order>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|o| o.client_id == client_id)
            .cloned()
            .collect())
    }

    async fn create(&self, req: &CreateOrderRequest) -> Result<Order, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let order = Order {
            order_id: id,
            client_id: req.client_id,
            created: req.created.unwrap_or_else(|| Utc::now().naive_utc()),
            total_amount: req.total_amount,
            canceled: false,
        };
        self.rows.lock().unwrap().push(order.clone());
        Ok(order)
    }

    async fn update(&self, req: &UpdateOrderRequest) -> Result<Order, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let order = rows
            .iter_mut()
            .find(|o| o.order_id == req.id)
            .ok_or(RepositoryError::NotFound)?;
        order.client_id = req.client_id;
        if let Some(created) = req.created {
            order.created = created;
        }
        order.total_amount = req.total_amount;
        Ok(order.clone())
    }

    async fn set_canceled(&self, id: i32, canceled: bool) -> Result<Order, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let order = rows
            .iter_mut()
            .find(|o| o.order_id == id)
            .ok_or(RepositoryError::NotFound)?;
        order.canceled = canceled;
        Ok(order.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|o| o.order_id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|o| o.order_id == id))
    }
}

#[derive(Default)]
pub struct MockOrderedProductRepository {
    rows: Mutex<Vec<OrderedProduct>>,
    next_id: AtomicI32,
}

impl MockOrderedProductRepository {
    pub fn all(&self) -> Vec<OrderedProduct> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderedProductRepositoryTrait for MockOrderedProductRepository {
    async fn find_all(&self) -> Result<Vec<OrderedProduct>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<OrderedProduct>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.ordered_product_id == id)
            .cloned())
    }

    async fn find_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderedProduct>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.order_id == order_id)
            .cloned()
            .collect())
    }

    async fn find_products_by_order_id(
        &self,
        order_id: i32,
    ) -> Result<Vec<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|l| l.order_id == order_id)
            .map(|l| Product {
                product_id: l.product_id,
                name: format!("product-{}", l.product_id),
                price: 0.0,
                expiration_date: None,
                description: None,
            })
            .collect())
    }

    async fn quantity_for(
        &self,
        order_id: i32,
        product_id: i32,
    ) -> Result<Option<i32>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.order_id == order_id && l.product_id == product_id)
            .map(|l| l.quantity))
    }

    async fn exists_for_order_product(
        &self,
        exclude_id: i32,
        order_id: i32,
        product_id: i32,
    ) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|l| {
            l.order_id == order_id && l.product_id == product_id && l.ordered_product_id != exclude_id
        }))
    }

    async fn create(
        &self,
        req: &CreateOrderedProductRequest,
    ) -> Result<OrderedProduct, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let line = OrderedProduct {
            ordered_product_id: id,
            order_id: req.order_id,
            product_id: req.product_id,
            quantity: req.quantity,
        };
        self.rows.lock().unwrap().push(line.clone());
        Ok(line)
    }

    async fn update(
        &self,
        req: &UpdateOrderedProductRequest,
    ) -> Result<OrderedProduct, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let line = rows
            .iter_mut()
            .find(|l| l.ordered_product_id == req.id)
            .ok_or(RepositoryError::NotFound)?;
        line.order_id = req.order_id;
        line.product_id = req.product_id;
        line.quantity = req.quantity;
        Ok(line.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|l| l.ordered_product_id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|l| l.ordered_product_id == id))
    }
}

#[derive(Default)]
pub struct MockStorageRepository {
    rows: Mutex<Vec<Storage>>,
    next_id: AtomicI32,
}

impl MockStorageRepository {
    pub fn with_stock(product_id: i32, quantity: i32) -> Self {
        let repo = Self::default();
        repo.insert_stock(product_id, quantity);
        repo
    }

    pub fn insert_stock(&self, product_id: i32, quantity: i32) {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(Storage {
            storage_id: id,
            product_id,
            quantity,
        });
    }

    pub fn quantity_of(&self, product_id: i32) -> i32 {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.product_id == product_id)
            .map(|s| s.quantity)
            .unwrap_or(0)
    }
}

#[async_trait]
impl StorageRepositoryTrait for MockStorageRepository {
    async fn find_all(&self) -> Result<Vec<Storage>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Storage>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.storage_id == id)
            .cloned())
    }

    async fn find_by_product_id(
        &self,
        product_id: i32,
    ) -> Result<Option<Storage>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.product_id == product_id)
            .cloned())
    }

    async fn quantity_by_product_id(&self, product_id: i32) -> Result<i32, RepositoryError> {
        Ok(self.quantity_of(product_id))
    }

    async fn increase_quantity(
        &self,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.product_id == product_id)
            .ok_or(RepositoryError::NotFound)?;
        row.quantity += quantity;
        Ok(())
    }

    async fn decrease_quantity(
        &self,
        product_id: i32,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.product_id == product_id)
            .ok_or(RepositoryError::NotFound)?;
        row.quantity -= quantity;
        Ok(())
    }

    async fn create(&self, req: &CreateStorageRequest) -> Result<Storage, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let row = Storage {
            storage_id: id,
            product_id: req.product_id,
            quantity: req.quantity,
        };
        self.rows.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, req: &UpdateStorageRequest) -> Result<Storage, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .iter_mut()
            .find(|s| s.storage_id == req.id)
            .ok_or(RepositoryError::NotFound)?;
        row.product_id = req.product_id;
        row.quantity = req.quantity;
        Ok(row.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|s| s.storage_id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|s| s.storage_id == id))
    }
}

#[derive(Default)]
pub struct MockClientRepository {
    rows: Mutex<Vec<Client>>,
    next_id: AtomicI32,
}

impl MockClientRepository {
    pub fn with_client(id: i32) -> Self {
        let repo = Self::default();
        repo.rows.lock().unwrap().push(Client {
            client_id: id,
            name: format!("client-{id}"),
            street: None,
            city: None,
            country: None,
            phone_number: None,
            gender_id: 1,
        });
        repo.next_id.fetch_max(id, Ordering::SeqCst);
        repo
    }
}

#[async_trait]
impl ClientRepositoryTrait for MockClientRepository {
    async fn find_all(&self) -> Result<Vec<Client>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Client>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.client_id == id)
            .cloned())
    }

    async fn exists_by_phone(
        &self,
        exclude_id: i32,
        phone: &str,
    ) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|c| {
            c.client_id != exclude_id && c.phone_number.as_deref() == Some(phone)
        }))
    }

    async fn create(&self, req: &CreateClientRequest) -> Result<Client, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let client = Client {
            client_id: id,
            name: req.name.clone(),
            street: req.street.clone(),
            city: req.city.clone(),
            country: req.country.clone(),
            phone_number: req.phone_number.clone(),
            gender_id: req.gender_id,
        };
        self.rows.lock().unwrap().push(client.clone());
        Ok(client)
    }

    async fn update(&self, req: &UpdateClientRequest) -> Result<Client, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let client = rows
            .iter_mut()
            .find(|c| c.client_id == req.id)
            .ok_or(RepositoryError::NotFound)?;
        client.name = req.name.clone();
        client.street = req.street.clone();
        client.city = req.city.clone();
        client.country = req.country.clone();
        client.phone_number = req.phone_number.clone();
        client.gender_id = req.gender_id;
        Ok(client.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|c| c.client_id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|c| c.client_id == id))
    }
}

#[derive(Default)]
pub struct MockProductRepository {
    rows: Mutex<Vec<Product>>,
    next_id: AtomicI32,
}

impl MockProductRepository {
    pub fn all(&self) -> Vec<Product> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProductRepositoryTrait for MockProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.product_id == id)
            .cloned())
    }

    async fn exists_by_name(&self, exclude_id: i32, name: &str) -> Result<bool, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|p| p.product_id != exclude_id && p.name == name))
    }

    async fn create(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let product = Product {
            product_id: id,
            name: req.name.clone(),
            price: req.price,
            expiration_date: req.expiration_date,
            description: req.description.clone(),
        };
        self.rows.lock().unwrap().push(product.clone());
        Ok(product)
    }

    async fn update(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let product = rows
            .iter_mut()
            .find(|p| p.product_id == req.id)
            .ok_or(RepositoryError::NotFound)?;
        product.name = req.name.clone();
        product.price = req.price;
        product.expiration_date = req.expiration_date;
        product.description = req.description.clone();
        Ok(product.clone())
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|p| p.product_id != id);
        if rows.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|p| p.product_id == id))
    }
}

#[derive(Default)]
pub struct MockGenderRepository {
    rows: Mutex<Vec<Gender>>,
}

impl MockGenderRepository {
    pub fn with_gender(id: i32, label: &str) -> Self {
        let repo = Self::default();
        repo.rows.lock().unwrap().push(Gender {
            gender_id: id,
            gender_type: Some(label.to_string()),
        });
        repo
    }
}

#[async_trait]
impl GenderRepositoryTrait for MockGenderRepository {
    async fn find_all(&self) -> Result<Vec<Gender>, RepositoryError> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Gender>, RepositoryError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|g| g.gender_id == id)
            .cloned())
    }

    async fn exists(&self, id: i32) -> Result<bool, RepositoryError> {
        Ok(self.rows.lock().unwrap().iter().any(|g| g.gender_id == id))
    }
}
