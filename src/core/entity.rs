//! Entity trait shared by customers, products and orders

use crate::core::validation::FromForm;
use serde::Serialize;
use std::fmt::Debug;

/// Base trait for all stored entities.
///
/// Every entity has a surrogate integer id assigned by the store, and is
/// created and updated from a typed field struct (`Fields`) that has passed
/// the entity's validator.
pub trait Entity: Clone + Debug + Serialize + Send + Sync + 'static {
    /// Validated input used to create or update the entity
    type Fields: FromForm + Clone + Debug + Send + Sync + 'static;

    /// The plural resource name used in URLs (e.g., "customers")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "customer")
    fn resource_name_singular() -> &'static str;

    /// Get the surrogate identifier
    fn id(&self) -> i64;
}
