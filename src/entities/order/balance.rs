//! Balance sheets over the order book

use super::model::{DeliveryFilter, OrderView};
use serde::Serialize;

/// Orders of one delivery scope with their summed totals
#[derive(Debug, Clone, Serialize)]
pub struct BalanceSheet {
    pub scope: DeliveryFilter,
    pub orders: Vec<OrderView>,
    pub count: usize,
    /// Sum of every readable total price
    pub total: i64,
    /// Orders skipped from `total` because their price is malformed or
    /// adding them would overflow
    pub unpriced: usize,
}

impl BalanceSheet {
    pub fn new(scope: DeliveryFilter, orders: Vec<OrderView>) -> Self {
        let mut total: i64 = 0;
        let mut unpriced = 0;
        for view in &orders {
            match view.total_price {
                Some(price) => match total.checked_add(price) {
                    Some(sum) => total = sum,
                    None => unpriced += 1,
                },
                None => unpriced += 1,
            }
        }

        Self {
            scope,
            count: orders.len(),
            orders,
            total,
            unpriced,
        }
    }
}
