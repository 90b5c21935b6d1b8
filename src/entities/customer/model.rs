//! Customer entity model

use crate::core::entity::Entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A customer placing orders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated, user-editable customer fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: Option<String>,
    pub phone_number: String,
    pub email: Option<String>,
    pub document: Option<String>,
    pub address: Option<String>,
}

impl Customer {
    /// Build a freshly stored customer
    pub fn new(id: i64, fields: CustomerFields, now: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: fields.first_name,
            last_name: fields.last_name,
            phone_number: fields.phone_number,
            email: fields.email,
            document: fields.document,
            address: fields.address,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the editable fields in place
    pub fn apply(&mut self, fields: CustomerFields, now: DateTime<Utc>) {
        self.first_name = fields.first_name;
        self.last_name = fields.last_name;
        self.phone_number = fields.phone_number;
        self.email = fields.email;
        self.document = fields.document;
        self.address = fields.address;
        self.updated_at = now;
    }

    /// First and last name, as shown next to orders
    pub fn full_name(&self) -> String {
        match &self.last_name {
            Some(last) => format!("{} {}", self.first_name, last),
            None => self.first_name.clone(),
        }
    }
}

impl Entity for Customer {
    type Fields = CustomerFields;

    fn resource_name() -> &'static str {
        "customers"
    }

    fn resource_name_singular() -> &'static str {
        "customer"
    }

    fn id(&self) -> i64 {
        self.id
    }
}
