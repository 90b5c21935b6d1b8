//! Product entity module

pub mod descriptor;
pub mod model;
pub mod validation;

pub use descriptor::ProductDescriptor;
pub use model::{Product, ProductFields};
pub use validation::validate_product;
