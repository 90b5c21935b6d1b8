//! Shared handler state

use crate::core::service::Store;
use std::sync::Arc;

/// State handed to every entity handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }
}
