//! Customer field rules

use super::model::CustomerFields;
use crate::core::validation::validators::{check, min_chars};
use crate::core::validation::{ErrorMap, FormFields, FromForm};

/// Minimum characters accepted for `first_name`
pub const FIRST_NAME_MIN_CHARS: usize = 4;

/// Minimum characters accepted for `phone_number`
pub const PHONE_NUMBER_MIN_CHARS: usize = 6;

// Says 3 while FIRST_NAME_MIN_CHARS is 4. Kept as-is until product owners
// decide which one is right.
pub const FIRST_NAME_MESSAGE: &str = "minimum 3 characters for the username field";

pub const PHONE_NUMBER_MESSAGE: &str = "minimum 6 digits for phone number";

/// Validate a customer submission
pub fn validate_customer(fields: &FormFields) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check(
        &mut errors,
        fields,
        "first_name",
        min_chars(FIRST_NAME_MIN_CHARS, FIRST_NAME_MESSAGE),
    );
    check(
        &mut errors,
        fields,
        "phone_number",
        min_chars(PHONE_NUMBER_MIN_CHARS, PHONE_NUMBER_MESSAGE),
    );
    errors
}

impl FromForm for CustomerFields {
    fn validate(fields: &FormFields) -> ErrorMap {
        validate_customer(fields)
    }

    fn convert(fields: &FormFields) -> Result<Self, ErrorMap> {
        Ok(Self {
            first_name: fields.get("first_name").to_string(),
            last_name: fields.optional("last_name"),
            phone_number: fields.get("phone_number").to_string(),
            email: fields.optional("email"),
            document: fields.optional("document"),
            address: fields.optional("address"),
        })
    }
}
