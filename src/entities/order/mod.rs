//! Order entity module

pub mod balance;
pub mod descriptor;
pub mod handlers;
pub mod lifecycle;
pub mod model;
pub mod validation;

pub use balance::BalanceSheet;
pub use descriptor::OrderDescriptor;
pub use lifecycle::{parse_price, toggle_delivery, total_price};
pub use model::{DeliveryFilter, Order, OrderFields, OrderView};
pub use validation::validate_order;
