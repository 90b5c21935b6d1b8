//! Order field rules

use super::lifecycle::parse_price;
use super::model::OrderFields;
use crate::core::validation::validators::{
    check, max_chars, min_chars, not_placeholder, parse_integer, positive_integer,
};
use crate::core::validation::{ErrorMap, FormFields, FromForm};
use chrono::NaiveDate;

/// Placeholder option of the product select list
pub const PRODUCT_PLACEHOLDER: &str = "Lista de productos";

/// Placeholder option of the customer select list
pub const CUSTOMER_PLACEHOLDER: &str = "Lista de clientes";

/// Minimum characters of the price text (a length check, not a value check)
pub const PRICE_MIN_CHARS: usize = 4;

pub const BILL_MAX_CHARS: usize = 15;

/// Format of the `deadline` field
pub const DEADLINE_FORMAT: &str = "%Y-%m-%d";

pub const PRODUCT_MESSAGE: &str = "choose a product for the order";
pub const CUSTOMER_MESSAGE: &str = "choose a customer for the order";
pub const AMOUNT_MESSAGE: &str = "enter an amount";
pub const PRICE_MESSAGE: &str = "enter a price";
pub const PRICE_NUMBER_MESSAGE: &str = "enter the price as a number";
pub const PRICE_RANGE_MESSAGE: &str = "price times amount is too large";
pub const AMOUNT_RANGE_MESSAGE: &str = "amount is too large";
pub const DEADLINE_MESSAGE: &str = "enter a deadline as YYYY-MM-DD";
pub const BILL_MESSAGE: &str = "maximum 15 characters for the bill";

/// Validate an order submission
///
/// Every rule runs; each failing rule contributes its own entry.
pub fn validate_order(fields: &FormFields) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check(
        &mut errors,
        fields,
        "product_id",
        not_placeholder(PRODUCT_PLACEHOLDER, PRODUCT_MESSAGE),
    );
    check(
        &mut errors,
        fields,
        "customer_id",
        not_placeholder(CUSTOMER_PLACEHOLDER, CUSTOMER_MESSAGE),
    );
    check(&mut errors, fields, "amount", positive_integer(AMOUNT_MESSAGE));
    // "0000" passes: only the length of the text is checked
    check(
        &mut errors,
        fields,
        "price",
        min_chars(PRICE_MIN_CHARS, PRICE_MESSAGE),
    );
    errors
}

fn reference_id(
    fields: &FormFields,
    field: &str,
    message: &str,
    errors: &mut ErrorMap,
) -> Option<i64> {
    let id = parse_integer(fields.get(field));
    if id.is_none() {
        errors.insert(field, message);
    }
    id
}

impl FromForm for OrderFields {
    fn validate(fields: &FormFields) -> ErrorMap {
        validate_order(fields)
    }

    fn convert(fields: &FormFields) -> Result<Self, ErrorMap> {
        let mut errors = ErrorMap::new();

        let product_id = reference_id(fields, "product_id", PRODUCT_MESSAGE, &mut errors);
        let customer_id = reference_id(fields, "customer_id", CUSTOMER_MESSAGE, &mut errors);

        let amount = parse_integer(fields.get("amount")).and_then(|n| i16::try_from(n).ok());
        if amount.is_none() {
            errors.insert("amount", AMOUNT_RANGE_MESSAGE);
        }

        match parse_price(fields.get("price")) {
            Err(_) => errors.insert("price", PRICE_NUMBER_MESSAGE),
            Ok(unit) => {
                let overflows = amount.is_some_and(|n| unit.checked_mul(i64::from(n)).is_none());
                if overflows {
                    errors.insert("price", PRICE_RANGE_MESSAGE);
                }
            }
        }

        let deadline =
            NaiveDate::parse_from_str(fields.get("deadline").trim(), DEADLINE_FORMAT).ok();
        if deadline.is_none() {
            errors.insert("deadline", DEADLINE_MESSAGE);
        }

        check(
            &mut errors,
            fields,
            "bill",
            max_chars(BILL_MAX_CHARS, BILL_MESSAGE),
        );

        let (Some(product_id), Some(customer_id), Some(amount), Some(deadline)) =
            (product_id, customer_id, amount, deadline)
        else {
            return Err(errors);
        };
        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(Self {
            observation: fields.optional("observation"),
            amount,
            price: fields.get("price").to_string(),
            deadline,
            bill: fields.optional("bill"),
            customer_id,
            product_id,
        })
    }
}
