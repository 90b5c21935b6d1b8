//! Typed error handling for the order desk
//!
//! Every failure that can reach a client is one of the categories below, so
//! handlers can return `Result<_, DeskError>` and let [`IntoResponse`] render
//! a JSON body with a stable error code.
//!
//! # Error Categories
//!
//! - [`EntityError`]: a referenced customer, product or order does not exist
//! - [`ValidationError`]: rejected submissions (per-field messages, bad bodies, bad ids)
//! - [`DeskError::MalformedInput`]: stored text that cannot be read as a number
//! - [`StorageError`]: store backend failures
//! - [`ConfigError`]: configuration loading failures
//!
//! # Example
//!
//! ```rust,ignore
//! match store.get(id).await? {
//!     Some(order) => Ok(order),
//!     None => Err(EntityError::NotFound { entity_type: "order".into(), id }.into()),
//! }
//! ```

use crate::core::validation::ErrorMap;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Result alias used across the crate
pub type Result<T, E = DeskError> = std::result::Result<T, E>;

/// The main error type of the order desk
#[derive(Debug, Error)]
pub enum DeskError {
    /// Entity lookups (missing ids, missing references)
    #[error(transparent)]
    Entity(#[from] EntityError),

    /// Rejected input
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A stored value could not be interpreted as a number
    #[error("Malformed value '{value}' for field '{field}': {message}")]
    MalformedInput {
        field: String,
        value: String,
        message: String,
    },

    /// Storage backend errors
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl DeskError {
    /// Build a malformed-input error for `field`
    pub fn malformed(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        DeskError::MalformedInput {
            field: field.into(),
            value: value.into(),
            message: message.into(),
        }
    }

    /// Shorthand for a missing entity
    pub fn not_found(entity_type: &str, id: i64) -> Self {
        DeskError::Entity(EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        })
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            DeskError::Entity(e) => e.status_code(),
            DeskError::Validation(e) => e.status_code(),
            DeskError::MalformedInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DeskError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DeskError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            DeskError::Entity(e) => e.error_code(),
            DeskError::Validation(e) => e.error_code(),
            DeskError::MalformedInput { .. } => "MALFORMED_INPUT",
            DeskError::Storage(_) => "STORAGE_ERROR",
            DeskError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            DeskError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id,
                }))
            }
            DeskError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            DeskError::MalformedInput { field, value, .. } => Some(serde_json::json!({
                "field": field,
                "value": value,
            })),
            _ => None,
        }
    }
}

impl IntoResponse for DeskError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to entity lookups
#[derive(Debug, Error)]
pub enum EntityError {
    /// Entity was not found
    #[error("{entity_type} with id '{id}' not found")]
    NotFound { entity_type: String, id: i64 },
}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "ENTITY_NOT_FOUND",
        }
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug, Error)]
pub enum ValidationError {
    /// One or more fields failed their rules
    #[error("Validation failed: {}", .0.summary())]
    FieldErrors(ErrorMap),

    /// The request body could not be read as a field-set
    #[error("Invalid request body: {message}")]
    InvalidBody { message: String },

    /// A path id is not an integer
    #[error("Invalid entity ID format: '{value}'")]
    InvalidId { value: String },

    /// A path or query parameter has an unsupported value
    #[error("Invalid value '{value}' for parameter '{name}'")]
    InvalidParameter { name: String, value: String },
}

impl ValidationError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ValidationError::FieldErrors(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ValidationError::InvalidBody { .. }
            | ValidationError::InvalidId { .. }
            | ValidationError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::FieldErrors(_) => "VALIDATION_ERROR",
            ValidationError::InvalidBody { .. } => "INVALID_BODY",
            ValidationError::InvalidId { .. } => "INVALID_ID",
            ValidationError::InvalidParameter { .. } => "INVALID_PARAMETER",
        }
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors related to storage backends
#[derive(Debug, Error)]
pub enum StorageError {
    /// A lock guarding in-memory tables was poisoned by a panicking writer
    #[error("Storage lock poisoned: {message}")]
    LockPoisoned { message: String },

    /// The backend rejected or failed a query
    #[error("{backend} query error: {message}")]
    Backend { backend: String, message: String },
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        StorageError::Backend {
            backend: "postgres".to_string(),
            message: err.to_string(),
        }
    }
}

#[cfg(feature = "postgres")]
impl From<sqlx::Error> for DeskError {
    fn from(err: sqlx::Error) -> Self {
        DeskError::Storage(err.into())
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration could not be parsed
    #[error("Failed to parse config '{}': {source}", .file.as_deref().unwrap_or("<inline>"))]
    Parse {
        file: Option<String>,
        #[source]
        source: serde_yaml::Error,
    },

    /// A value is present but unusable
    #[error("Invalid value '{value}' for field '{field}': {message}")]
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}
