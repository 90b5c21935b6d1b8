//! Order entity model

use crate::core::entity::Entity;
use crate::core::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An order of one product by one customer
///
/// `delivered` doubles as the status flag: `None` is pending, a date is the
/// day the order was marked delivered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub observation: Option<String>,
    pub amount: i16,
    /// Unit price as submitted; read as an integer when totals are computed
    pub price: String,
    pub deadline: NaiveDate,
    pub delivered: Option<NaiveDate>,
    pub bill: Option<String>,
    pub customer_id: i64,
    pub product_id: i64,
}

/// Validated, user-editable order fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderFields {
    pub observation: Option<String>,
    pub amount: i16,
    pub price: String,
    pub deadline: NaiveDate,
    pub bill: Option<String>,
    pub customer_id: i64,
    pub product_id: i64,
}

impl Order {
    /// Build a freshly stored, pending order
    pub fn new(id: i64, fields: OrderFields) -> Self {
        Self {
            id,
            observation: fields.observation,
            amount: fields.amount,
            price: fields.price,
            deadline: fields.deadline,
            delivered: None,
            bill: fields.bill,
            customer_id: fields.customer_id,
            product_id: fields.product_id,
        }
    }

    /// Overwrite the editable fields; delivery state is left untouched
    pub fn apply(&mut self, fields: OrderFields) {
        self.observation = fields.observation;
        self.amount = fields.amount;
        self.price = fields.price;
        self.deadline = fields.deadline;
        self.bill = fields.bill;
        self.customer_id = fields.customer_id;
        self.product_id = fields.product_id;
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.delivered.is_none()
    }
}

impl Entity for Order {
    type Fields = OrderFields;

    fn resource_name() -> &'static str {
        "orders"
    }

    fn resource_name_singular() -> &'static str {
        "order"
    }

    fn id(&self) -> i64 {
        self.id
    }
}

/// Which orders a listing or balance sheet covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryFilter {
    #[default]
    All,
    /// `delivered` is unset
    Pending,
    /// `delivered` is set
    Delivered,
}

impl DeliveryFilter {
    pub fn matches(self, order: &Order) -> bool {
        match self {
            DeliveryFilter::All => true,
            DeliveryFilter::Pending => order.is_pending(),
            DeliveryFilter::Delivered => order.is_delivered(),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryFilter::All => "all",
            DeliveryFilter::Pending => "pending",
            DeliveryFilter::Delivered => "delivered",
        }
    }
}

impl fmt::Display for DeliveryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeliveryFilter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(DeliveryFilter::All),
            "pending" => Ok(DeliveryFilter::Pending),
            "delivered" => Ok(DeliveryFilter::Delivered),
            other => Err(ValidationError::InvalidParameter {
                name: "delivery".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// An order as returned to clients: the stored row, its computed total and
/// the display names of what it references
#[derive(Debug, Clone, Serialize)]
pub struct OrderView {
    #[serde(flatten)]
    pub order: Order,
    /// `None` for rows whose price was written without validation and
    /// cannot be read as a number
    pub total_price: Option<i64>,
    pub customer_name: Option<String>,
    pub product_name: Option<String>,
}

impl OrderView {
    pub fn new(order: Order, customer_name: Option<String>, product_name: Option<String>) -> Self {
        let total_price = order.total_price().ok();
        Self {
            order,
            total_price,
            customer_name,
            product_name,
        }
    }
}
