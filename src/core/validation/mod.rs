//! Validation of submitted field-sets
//!
//! Submissions arrive as raw text fields ([`FormFields`]). Each entity has a
//! pure validator producing an [`ErrorMap`]; an empty map means the
//! submission may be persisted. [`FromForm`] ties a validator to the typed
//! field struct the store consumes, and the [`Validated`] extractor runs both
//! steps before a handler sees the payload.

pub mod extractor;
pub mod form;
pub mod validators;

pub use extractor::Validated;
pub use form::FormFields;

use crate::core::error::ValidationError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Field name → human-readable message, in rule evaluation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap(IndexMap<String, String>);

impl ErrorMap {
    pub fn new() -> Self {
        Self(IndexMap::new())
    }

    /// Record a failure for `field`. A later failure for the same field
    /// replaces the message but keeps the field's original position.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Iterate over `(field, message)` pairs in evaluation order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Field names in evaluation order
    pub fn fields(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    /// Append the entries of `other` whose field has no message yet
    pub fn merge(&mut self, other: ErrorMap) {
        for (field, message) in other.0 {
            self.0.entry(field).or_insert(message);
        }
    }

    /// One-line rendering used in log lines and error messages
    pub fn summary(&self) -> String {
        self.iter()
            .map(|(field, message)| format!("{field}: {message}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// `Ok(())` when empty, otherwise the map as a validation error
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::FieldErrors(self))
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ErrorMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Typed fields that can be built from a raw submission
///
/// `validate` applies the entity's field rules; `convert` turns the field-set
/// into the typed struct, reporting anything that cannot be read (ids, dates,
/// ranges) as further field errors.
pub trait FromForm: Sized {
    /// Apply the field rules; an empty map means valid
    fn validate(fields: &FormFields) -> ErrorMap;

    /// Build the typed value, or report every field that cannot be read
    fn convert(fields: &FormFields) -> Result<Self, ErrorMap>;

    /// Validate and convert, reporting rule and conversion errors together.
    /// A field with a rule error keeps the rule's message.
    fn from_form(fields: &FormFields) -> Result<Self, ValidationError> {
        let mut errors = Self::validate(fields);
        match Self::convert(fields) {
            Ok(value) if errors.is_empty() => Ok(value),
            Ok(_) => Err(ValidationError::FieldErrors(errors)),
            Err(further) => {
                errors.merge(further);
                Err(ValidationError::FieldErrors(errors))
            }
        }
    }
}
