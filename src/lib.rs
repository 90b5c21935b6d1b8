//! # Order Desk
//!
//! A small back-office service for recording customers, products and the
//! orders that link them, tracking deliveries and summing balance sheets.
//!
//! ## Features
//!
//! - **Field validation**: every submission is checked rule by rule and
//!   rejected with an ordered field → message map
//! - **Delivery tracking**: orders toggle between pending and delivered-on-date
//! - **Balance sheets**: all / pending / delivered orders with summed totals
//! - **Cascading deletes**: removing a customer or product removes its orders
//! - **Pluggable storage**: in-memory by default, PostgreSQL behind a feature
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use order_desk::prelude::*;
//!
//! let app = ServerBuilder::new()
//!     .with_store(InMemoryStore::new())
//!     .build()?;
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        DataService, DeskError, Entity, EntityError, ErrorMap, FormFields, FromForm,
        OrderService, Result, StorageError, Store, Validated, ValidationError,
    };

    // === Entities ===
    pub use crate::entities::{
        BalanceSheet, Customer, CustomerFields, DeliveryFilter, Order, OrderFields, OrderView,
        Product, ProductFields, validate_customer, validate_order, validate_product,
    };
    pub use crate::entities::order::{parse_price, toggle_delivery, total_price};

    // === Storage ===
    pub use crate::storage::InMemoryStore;
    #[cfg(feature = "postgres")]
    pub use crate::storage::PostgresStore;

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{AppState, EntityDescriptor, EntityRegistry, ServerBuilder};
}
