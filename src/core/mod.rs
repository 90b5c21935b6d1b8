//! Core traits and types: entities, store traits, errors and validation

pub mod entity;
pub mod error;
pub mod service;
pub mod validation;

pub use entity::Entity;
pub use error::{DeskError, EntityError, Result, StorageError, ValidationError};
pub use service::{DataService, OrderService, Store};
pub use validation::{ErrorMap, FormFields, FromForm, Validated};
