//! Customers, products and the orders linking them

pub mod crud;
pub mod customer;
pub mod order;
pub mod product;

pub use customer::{Customer, CustomerDescriptor, CustomerFields, validate_customer};
pub use order::{
    BalanceSheet, DeliveryFilter, Order, OrderDescriptor, OrderFields, OrderView, validate_order,
};
pub use product::{Product, ProductDescriptor, ProductFields, validate_product};
