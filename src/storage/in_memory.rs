//! In-memory store for testing and development

use crate::core::error::{DeskError, Result, StorageError};
use crate::core::service::{DataService, OrderService};
use crate::entities::{
    Customer, CustomerFields, DeliveryFilter, Order, OrderFields, Product, ProductFields,
};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Debug, Default)]
struct Tables {
    customers: BTreeMap<i64, Customer>,
    products: BTreeMap<i64, Product>,
    orders: BTreeMap<i64, Order>,
    last_customer_id: i64,
    last_product_id: i64,
    last_order_id: i64,
}

impl Tables {
    fn check_references(&self, fields: &OrderFields) -> Result<()> {
        if !self.customers.contains_key(&fields.customer_id) {
            return Err(DeskError::not_found("customer", fields.customer_id));
        }
        if !self.products.contains_key(&fields.product_id) {
            return Err(DeskError::not_found("product", fields.product_id));
        }
        Ok(())
    }

    /// Drop orders matching `predicate`, returning how many went
    fn cascade(&mut self, predicate: impl Fn(&Order) -> bool) -> usize {
        let before = self.orders.len();
        self.orders.retain(|_, order| !predicate(order));
        before - self.orders.len()
    }
}

/// In-memory store implementation
///
/// Ids are assigned from per-table counters starting at 1 and never reused.
/// All three tables sit behind one RwLock, so cascading deletes are atomic.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire read lock: {}", e),
            }
            .into()
        })
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|e| {
            StorageError::LockPoisoned {
                message: format!("Failed to acquire write lock: {}", e),
            }
            .into()
        })
    }
}

#[async_trait]
impl DataService<Customer> for InMemoryStore {
    async fn create(&self, fields: CustomerFields) -> Result<Customer> {
        let mut tables = self.write()?;
        tables.last_customer_id += 1;
        let customer = Customer::new(tables.last_customer_id, fields, Utc::now());
        tables.customers.insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn get(&self, id: i64) -> Result<Option<Customer>> {
        Ok(self.read()?.customers.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Customer>> {
        Ok(self.read()?.customers.values().cloned().collect())
    }

    async fn update(&self, id: i64, fields: CustomerFields) -> Result<Customer> {
        let mut tables = self.write()?;
        let customer = tables
            .customers
            .get_mut(&id)
            .ok_or_else(|| DeskError::not_found("customer", id))?;
        customer.apply(fields, Utc::now());
        Ok(customer.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tables = self.write()?;
        tables
            .customers
            .remove(&id)
            .ok_or_else(|| DeskError::not_found("customer", id))?;
        let removed = tables.cascade(|order| order.customer_id == id);
        tracing::debug!(customer_id = id, orders_removed = removed, "customer deleted");
        Ok(())
    }
}

#[async_trait]
impl DataService<Product> for InMemoryStore {
    async fn create(&self, fields: ProductFields) -> Result<Product> {
        let mut tables = self.write()?;
        tables.last_product_id += 1;
        let product = Product::new(tables.last_product_id, fields, Utc::now());
        tables.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn get(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.read()?.products.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Product>> {
        Ok(self.read()?.products.values().cloned().collect())
    }

    async fn update(&self, id: i64, fields: ProductFields) -> Result<Product> {
        let mut tables = self.write()?;
        let product = tables
            .products
            .get_mut(&id)
            .ok_or_else(|| DeskError::not_found("product", id))?;
        product.apply(fields, Utc::now());
        Ok(product.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut tables = self.write()?;
        tables
            .products
            .remove(&id)
            .ok_or_else(|| DeskError::not_found("product", id))?;
        let removed = tables.cascade(|order| order.product_id == id);
        tracing::debug!(product_id = id, orders_removed = removed, "product deleted");
        Ok(())
    }
}

#[async_trait]
impl DataService<Order> for InMemoryStore {
    async fn create(&self, fields: OrderFields) -> Result<Order> {
        let mut tables = self.write()?;
        tables.check_references(&fields)?;
        tables.last_order_id += 1;
        let order = Order::new(tables.last_order_id, fields);
        tables.orders.insert(order.id, order.clone());
        Ok(order)
    }

    async fn get(&self, id: i64) -> Result<Option<Order>> {
        Ok(self.read()?.orders.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Order>> {
        Ok(self.read()?.orders.values().cloned().collect())
    }

    async fn update(&self, id: i64, fields: OrderFields) -> Result<Order> {
        let mut tables = self.write()?;
        if !tables.orders.contains_key(&id) {
            return Err(DeskError::not_found("order", id));
        }
        tables.check_references(&fields)?;
        let order = tables
            .orders
            .get_mut(&id)
            .ok_or_else(|| DeskError::not_found("order", id))?;
        order.apply(fields);
        Ok(order.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.write()?
            .orders
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| DeskError::not_found("order", id))
    }
}

#[async_trait]
impl OrderService for InMemoryStore {
    async fn list_by_delivery(&self, filter: DeliveryFilter) -> Result<Vec<Order>> {
        Ok(self
            .read()?
            .orders
            .values()
            .filter(|order| filter.matches(order))
            .cloned()
            .collect())
    }

    async fn set_delivered(&self, id: i64, delivered: Option<NaiveDate>) -> Result<Order> {
        let mut tables = self.write()?;
        let order = tables
            .orders
            .get_mut(&id)
            .ok_or_else(|| DeskError::not_found("order", id))?;
        order.delivered = delivered;
        Ok(order.clone())
    }
}
