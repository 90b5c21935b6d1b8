//! HTTP server assembly
//!
//! `ServerBuilder` wires a store into the customer, product and order
//! routes, adds request tracing and serves the result.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;
pub mod state;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::RestExposure;
pub use host::ServerHost;
pub use state::AppState;
