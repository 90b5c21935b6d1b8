//! Entity descriptor for Customer

use super::model::Customer;
use crate::core::service::Store;
use crate::entities::crud::{create_entity, delete_entity, get_entity, list_entities, update_entity};
use crate::server::{AppState, EntityDescriptor};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Customer entity
pub struct CustomerDescriptor {
    pub store: Arc<dyn Store>,
}

impl CustomerDescriptor {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for CustomerDescriptor {
    fn entity_type(&self) -> &str {
        "customer"
    }

    fn plural(&self) -> &str {
        "customers"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/customers",
                get(list_entities::<Customer>).post(create_entity::<Customer>),
            )
            .route(
                "/customers/{id}",
                get(get_entity::<Customer>)
                    .put(update_entity::<Customer>)
                    .delete(delete_entity::<Customer>),
            )
            .with_state(AppState::new(self.store.clone()))
    }
}
