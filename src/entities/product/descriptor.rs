//! Entity descriptor for Product

use super::model::Product;
use crate::core::service::Store;
use crate::entities::crud::{create_entity, delete_entity, get_entity, list_entities, update_entity};
use crate::server::{AppState, EntityDescriptor};
use axum::{Router, routing::get};
use std::sync::Arc;

/// Descriptor for the Product entity
pub struct ProductDescriptor {
    pub store: Arc<dyn Store>,
}

impl ProductDescriptor {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for ProductDescriptor {
    fn entity_type(&self) -> &str {
        "product"
    }

    fn plural(&self) -> &str {
        "products"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route(
                "/products",
                get(list_entities::<Product>).post(create_entity::<Product>),
            )
            .route(
                "/products/{id}",
                get(get_entity::<Product>)
                    .put(update_entity::<Product>)
                    .delete(delete_entity::<Product>),
            )
            .with_state(AppState::new(self.store.clone()))
    }
}
