//! Raw submitted field-sets

use crate::core::error::ValidationError;
use serde_json::Value;
use std::collections::HashMap;

/// A submission as raw text, keyed by field name
///
/// Lookups of absent fields yield the empty string, so validators never
/// fault on a partial submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    values: HashMap<String, String>,
}

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    /// The raw value, or `""` when the field was not submitted
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    /// Whether the field was submitted at all
    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    /// The value as an optional column: `None` when absent or blank
    pub fn optional(&self, field: &str) -> Option<String> {
        self.values
            .get(field)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    /// Read a JSON object body. Strings are kept as-is, numbers and booleans
    /// are rendered to text, nulls count as absent.
    pub fn from_json(body: &Value) -> Result<Self, ValidationError> {
        let object = body.as_object().ok_or_else(|| ValidationError::InvalidBody {
            message: "expected a JSON object of fields".to_string(),
        })?;

        let mut fields = Self::new();
        for (key, value) in object {
            match value {
                Value::Null => {}
                Value::String(s) => fields.insert(key.as_str(), s.as_str()),
                Value::Number(n) => fields.insert(key.as_str(), n.to_string()),
                Value::Bool(b) => fields.insert(key.as_str(), b.to_string()),
                Value::Array(_) | Value::Object(_) => {
                    return Err(ValidationError::InvalidBody {
                        message: format!("field '{key}' must be a scalar value"),
                    });
                }
            }
        }
        Ok(fields)
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormFields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
