//! Delivery toggling and price arithmetic

use super::model::Order;
use crate::core::error::{DeskError, Result};
use crate::core::service::OrderService;
use chrono::{NaiveDate, Utc};

/// Read a stored price as an integer
///
/// Surrounding whitespace is ignored and a fractional part after `.` is
/// truncated, so `" 1500.75 "` reads as 1500.
pub fn parse_price(price: &str) -> Result<i64> {
    let trimmed = price.trim();
    let (whole, fraction) = match trimmed.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (trimmed, ""),
    };

    if !fraction.chars().all(|c| c.is_ascii_digit()) {
        return Err(DeskError::malformed("price", price, "not a number"));
    }

    whole
        .parse::<i64>()
        .map_err(|_| DeskError::malformed("price", price, "not a number"))
}

impl Order {
    /// Unit price times amount
    pub fn total_price(&self) -> Result<i64> {
        parse_price(&self.price)?
            .checked_mul(i64::from(self.amount))
            .ok_or_else(|| DeskError::malformed("price", &self.price, "total overflows"))
    }

    /// Flip between pending and delivered-on-`today`
    pub fn toggle_delivery(&mut self, today: NaiveDate) {
        self.delivered = match self.delivered {
            Some(_) => None,
            None => Some(today),
        };
    }
}

/// Total price of an order
pub fn total_price(order: &Order) -> Result<i64> {
    order.total_price()
}

/// Current date in UTC
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Toggle the delivery state of a stored order and persist it
pub async fn toggle_delivery<S>(store: &S, id: i64) -> Result<Order>
where
    S: OrderService + ?Sized,
{
    let mut order = store
        .get(id)
        .await?
        .ok_or_else(|| DeskError::not_found("order", id))?;

    order.toggle_delivery(today());

    let updated = store.set_delivered(id, order.delivered).await?;
    tracing::info!(
        order_id = id,
        delivered = ?updated.delivered,
        "toggled order delivery"
    );
    Ok(updated)
}
