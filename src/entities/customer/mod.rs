//! Customer entity module

pub mod descriptor;
pub mod model;
pub mod validation;

pub use descriptor::CustomerDescriptor;
pub use model::{Customer, CustomerFields};
pub use validation::validate_customer;
