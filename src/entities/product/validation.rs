//! Product field rules

use super::model::ProductFields;
use crate::core::validation::validators::{check, min_chars};
use crate::core::validation::{ErrorMap, FormFields, FromForm};

pub const NAME_MIN_CHARS: usize = 3;

pub const NAME_MESSAGE: &str = "minimum 3 characters for the product name";

/// Validate a product submission
pub fn validate_product(fields: &FormFields) -> ErrorMap {
    let mut errors = ErrorMap::new();
    check(
        &mut errors,
        fields,
        "name",
        min_chars(NAME_MIN_CHARS, NAME_MESSAGE),
    );
    errors
}

impl FromForm for ProductFields {
    fn validate(fields: &FormFields) -> ErrorMap {
        validate_product(fields)
    }

    fn convert(fields: &FormFields) -> Result<Self, ErrorMap> {
        Ok(Self {
            name: fields.get("name").to_string(),
            description: fields.optional("description"),
        })
    }
}
