//! Axum extractor for validated submissions
//!
//! This module provides the `Validated<T>` extractor that reads a submission
//! (JSON object or urlencoded form), runs the target type's validator and
//! conversion, and rejects the request before it reaches the handler.

use super::{FormFields, FromForm};
use crate::core::error::{DeskError, ValidationError};
use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde_json::Value;
use std::collections::HashMap;

/// Axum extractor yielding typed, validated fields
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_product(
///     State(state): State<AppState>,
///     Validated(fields): Validated<ProductFields>,
/// ) -> Result<Json<Product>, DeskError> {
///     // fields passed validate_product
/// }
/// ```
#[derive(Debug)]
pub struct Validated<T>(pub T);

fn is_urlencoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"))
}

impl<S, T> FromRequest<S> for Validated<T>
where
    S: Send + Sync,
    T: FromForm + Send,
{
    type Rejection = DeskError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let fields = if is_urlencoded(&req) {
            let Form(values): Form<HashMap<String, String>> = Form::from_request(req, state)
                .await
                .map_err(|e| ValidationError::InvalidBody {
                    message: e.body_text(),
                })?;
            FormFields::from(values)
        } else {
            let Json(body): Json<Value> = Json::from_request(req, state)
                .await
                .map_err(|e| ValidationError::InvalidBody {
                    message: e.body_text(),
                })?;
            FormFields::from_json(&body)?
        };

        match T::from_form(&fields) {
            Ok(value) => Ok(Validated(value)),
            Err(err) => {
                tracing::warn!("rejected submission: {}", err);
                Err(err.into())
            }
        }
    }
}
