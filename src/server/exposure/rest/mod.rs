//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an Axum `Router` carrying the health
//! check, every registered entity's routes and any custom routes.

use super::super::host::ServerHost;
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Router {
        let resources: Vec<String> = host
            .entity_registry
            .plurals()
            .into_iter()
            .map(str::to_string)
            .collect();

        let mut app = Self::health_routes(resources).merge(host.entity_registry.build_routes());

        for custom_router in custom_routes {
            app = app.merge(custom_router);
        }

        app
    }

    fn health_routes(resources: Vec<String>) -> Router {
        let resources = Arc::new(resources);
        Router::new().route(
            "/health",
            get(move || {
                let resources = resources.clone();
                async move { Self::health_check(&resources) }
            }),
        )
    }

    fn health_check(resources: &[String]) -> Json<Value> {
        Json(json!({
            "status": "ok",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
            "resources": resources,
        }))
    }
}
