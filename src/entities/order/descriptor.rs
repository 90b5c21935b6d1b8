//! Entity descriptor for Order

use super::handlers::{
    balance_sheet, create_order, delete_order, get_order, list_orders, toggle_order_delivery,
    update_order,
};
use crate::core::service::Store;
use crate::server::{AppState, EntityDescriptor};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Descriptor for the Order entity
///
/// Besides CRUD this also mounts the delivery toggle and the balance sheets.
pub struct OrderDescriptor {
    pub store: Arc<dyn Store>,
}

impl OrderDescriptor {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}

impl EntityDescriptor for OrderDescriptor {
    fn entity_type(&self) -> &str {
        "order"
    }

    fn plural(&self) -> &str {
        "orders"
    }

    fn build_routes(&self) -> Router {
        Router::new()
            .route("/orders", get(list_orders).post(create_order))
            .route(
                "/orders/{id}",
                get(get_order).put(update_order).delete(delete_order),
            )
            .route("/orders/{id}/delivery", post(toggle_order_delivery))
            .route("/balance-sheets/{scope}", get(balance_sheet))
            .with_state(AppState::new(self.store.clone()))
    }
}
