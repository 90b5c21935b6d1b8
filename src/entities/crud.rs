//! Generic CRUD handlers shared by customers and products

use crate::core::entity::Entity;
use crate::core::error::{DeskError, Result, ValidationError};
use crate::core::service::{DataService, Store};
use crate::core::validation::Validated;
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::{Value, json};

/// Parse a path segment as an entity id
pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim().parse::<i64>().map_err(|_| {
        DeskError::from(ValidationError::InvalidId {
            value: raw.to_string(),
        })
    })
}

/// `{ "<plural>": [...], "count": n }`
pub fn list_body<S: serde::Serialize>(plural: &str, items: &[S]) -> Json<Value> {
    Json(json!({
        plural: items,
        "count": items.len(),
    }))
}

pub async fn list_entities<T>(State(state): State<AppState>) -> Result<Json<Value>>
where
    T: Entity,
    dyn Store: DataService<T>,
{
    let items = DataService::<T>::list(&*state.store).await?;
    Ok(list_body(T::resource_name(), &items))
}

pub async fn get_entity<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<T>>
where
    T: Entity,
    dyn Store: DataService<T>,
{
    let id = parse_id(&id)?;
    DataService::<T>::get(&*state.store, id)
        .await?
        .map(Json)
        .ok_or_else(|| DeskError::not_found(T::resource_name_singular(), id))
}

pub async fn create_entity<T>(
    State(state): State<AppState>,
    Validated(fields): Validated<T::Fields>,
) -> Result<(StatusCode, Json<T>)>
where
    T: Entity,
    dyn Store: DataService<T>,
{
    let entity = DataService::<T>::create(&*state.store, fields).await?;
    tracing::info!(
        entity = T::resource_name_singular(),
        id = entity.id(),
        "created"
    );
    Ok((StatusCode::CREATED, Json(entity)))
}

pub async fn update_entity<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(fields): Validated<T::Fields>,
) -> Result<Json<T>>
where
    T: Entity,
    dyn Store: DataService<T>,
{
    let id = parse_id(&id)?;
    let entity = DataService::<T>::update(&*state.store, id, fields).await?;
    tracing::info!(entity = T::resource_name_singular(), id, "updated");
    Ok(Json(entity))
}

pub async fn delete_entity<T>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode>
where
    T: Entity,
    dyn Store: DataService<T>,
{
    let id = parse_id(&id)?;
    DataService::<T>::delete(&*state.store, id).await?;
    tracing::info!(entity = T::resource_name_singular(), id, "deleted");
    Ok(StatusCode::NO_CONTENT)
}
