//! Server host holding the state every exposure is built from

use crate::core::service::Store;
use crate::entities::{CustomerDescriptor, OrderDescriptor, ProductDescriptor};
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Transport-agnostic application state
///
/// # Example
///
/// ```rust,ignore
/// let host = Arc::new(ServerHost::new(Arc::new(InMemoryStore::new())));
/// let app = RestExposure::build_router(host, Vec::new());
/// ```
pub struct ServerHost {
    /// Backing store shared by all handlers
    pub store: Arc<dyn Store>,

    /// Entity registry for CRUD routes
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build a host with the customer, product and order descriptors registered
    pub fn new(store: Arc<dyn Store>) -> Self {
        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(CustomerDescriptor::new(store.clone())));
        entity_registry.register(Box::new(ProductDescriptor::new(store.clone())));
        entity_registry.register(Box::new(OrderDescriptor::new(store.clone())));

        Self {
            store,
            entity_registry,
        }
    }
}
