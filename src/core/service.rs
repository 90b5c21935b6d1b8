//! Store traits for entity persistence

use crate::core::entity::Entity;
use crate::core::error::Result;
use crate::entities::{Customer, DeliveryFilter, Order, Product};
use async_trait::async_trait;
use chrono::NaiveDate;

/// CRUD operations for one entity type
///
/// Implementations assign ids on create. Operations on an id that does not
/// exist fail with `EntityError::NotFound`, except `get`, which returns
/// `None` so callers decide how to surface the miss.
#[async_trait]
pub trait DataService<T: Entity>: Send + Sync {
    /// Create a new entity from validated fields
    async fn create(&self, fields: T::Fields) -> Result<T>;

    /// Get an entity by ID
    async fn get(&self, id: i64) -> Result<Option<T>>;

    /// List all entities, ordered by id
    async fn list(&self) -> Result<Vec<T>>;

    /// Replace the user-editable fields of an existing entity
    async fn update(&self, id: i64, fields: T::Fields) -> Result<T>;

    /// Delete an entity and everything that depends on it
    async fn delete(&self, id: i64) -> Result<()>;
}

/// Order-specific store operations
#[async_trait]
pub trait OrderService: DataService<Order> {
    /// List orders matching a delivery status, ordered by id
    async fn list_by_delivery(&self, filter: DeliveryFilter) -> Result<Vec<Order>>;

    /// Persist a new `delivered` value for an order
    async fn set_delivered(&self, id: i64, delivered: Option<NaiveDate>) -> Result<Order>;
}

/// A complete backend for the three tables
///
/// Deleting a customer or product must also delete the orders that
/// reference it.
pub trait Store: DataService<Customer> + DataService<Product> + OrderService {}

impl<S> Store for S where S: DataService<Customer> + DataService<Product> + OrderService {}
