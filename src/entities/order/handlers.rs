//! Order HTTP handlers

use super::balance::BalanceSheet;
use super::lifecycle;
use super::model::{DeliveryFilter, Order, OrderFields, OrderView};
use crate::core::error::{DeskError, Result};
use crate::core::service::{DataService, OrderService, Store};
use crate::core::validation::Validated;
use crate::entities::crud::{list_body, parse_id};
use crate::entities::{Customer, Product};
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Default, Deserialize)]
pub struct OrderListQuery {
    /// `all`, `pending` or `delivered`
    pub delivery: Option<String>,
}

impl OrderListQuery {
    fn filter(&self) -> Result<DeliveryFilter> {
        match self.delivery.as_deref() {
            None | Some("") => Ok(DeliveryFilter::All),
            Some(raw) => Ok(raw.parse()?),
        }
    }
}

/// Attach totals and display names to a batch of orders
async fn present(store: &dyn Store, orders: Vec<Order>) -> Result<Vec<OrderView>> {
    if orders.is_empty() {
        return Ok(Vec::new());
    }

    let customers: HashMap<i64, String> = DataService::<Customer>::list(store)
        .await?
        .into_iter()
        .map(|c| (c.id, c.full_name()))
        .collect();
    let products: HashMap<i64, String> = DataService::<Product>::list(store)
        .await?
        .into_iter()
        .map(|p| (p.id, p.name))
        .collect();

    Ok(orders
        .into_iter()
        .map(|order| {
            let customer_name = customers.get(&order.customer_id).cloned();
            let product_name = products.get(&order.product_id).cloned();
            OrderView::new(order, customer_name, product_name)
        })
        .collect())
}

async fn present_one(store: &dyn Store, order: Order) -> Result<OrderView> {
    let customer_name = DataService::<Customer>::get(store, order.customer_id)
        .await?
        .map(|c| c.full_name());
    let product_name = DataService::<Product>::get(store, order.product_id)
        .await?
        .map(|p| p.name);
    Ok(OrderView::new(order, customer_name, product_name))
}

pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Value>> {
    let filter = query.filter()?;
    let orders = state.store.list_by_delivery(filter).await?;
    let views = present(&*state.store, orders).await?;
    Ok(list_body("orders", &views))
}

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>> {
    let id = parse_id(&id)?;
    let order = DataService::<Order>::get(&*state.store, id)
        .await?
        .ok_or_else(|| DeskError::not_found("order", id))?;
    Ok(Json(present_one(&*state.store, order).await?))
}

pub async fn create_order(
    State(state): State<AppState>,
    Validated(fields): Validated<OrderFields>,
) -> Result<(StatusCode, Json<OrderView>)> {
    let order = DataService::<Order>::create(&*state.store, fields).await?;
    tracing::info!(
        order_id = order.id,
        customer_id = order.customer_id,
        product_id = order.product_id,
        "created order"
    );
    let view = present_one(&*state.store, order).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Validated(fields): Validated<OrderFields>,
) -> Result<Json<OrderView>> {
    let id = parse_id(&id)?;
    let order = DataService::<Order>::update(&*state.store, id, fields).await?;
    tracing::info!(order_id = id, "updated order");
    Ok(Json(present_one(&*state.store, order).await?))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    let id = parse_id(&id)?;
    DataService::<Order>::delete(&*state.store, id).await?;
    tracing::info!(order_id = id, "deleted order");
    Ok(StatusCode::NO_CONTENT)
}

pub async fn toggle_order_delivery(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>> {
    let id = parse_id(&id)?;
    let order = lifecycle::toggle_delivery(&*state.store, id).await?;
    Ok(Json(present_one(&*state.store, order).await?))
}

pub async fn balance_sheet(
    State(state): State<AppState>,
    Path(scope): Path<String>,
) -> Result<Json<BalanceSheet>> {
    let scope: DeliveryFilter = scope.parse()?;
    let orders = state.store.list_by_delivery(scope).await?;
    let views = present(&*state.store, orders).await?;
    let sheet = BalanceSheet::new(scope, views);
    tracing::debug!(
        scope = %scope,
        count = sheet.count,
        total = sheet.total,
        "built balance sheet"
    );
    Ok(Json(sheet))
}
