//! Reusable field rules
//!
//! Each rule is a closure over one raw field value returning the rule's
//! message on failure. Entity validators compose them with [`check`].

use super::{ErrorMap, FormFields};

/// Run `rule` against `field` and record its message on failure
pub fn check<R>(errors: &mut ErrorMap, fields: &FormFields, field: &str, rule: R)
where
    R: Fn(&str) -> Result<(), String>,
{
    if let Err(message) = rule(fields.get(field)) {
        errors.insert(field, message);
    }
}

/// Rule: at least `min` characters
pub fn min_chars(
    min: usize,
    message: &'static str,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if value.chars().count() < min {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Rule: at most `max` characters
pub fn max_chars(
    max: usize,
    message: &'static str,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if value.chars().count() > max {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Rule: value is not the select-list placeholder
pub fn not_placeholder(
    placeholder: &'static str,
    message: &'static str,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| {
        if value == placeholder {
            Err(message.to_string())
        } else {
            Ok(())
        }
    }
}

/// Rule: an integer strictly greater than zero. Text that is not an
/// integer fails the rule with the same message.
pub fn positive_integer(
    message: &'static str,
) -> impl Fn(&str) -> Result<(), String> + Send + Sync + Clone {
    move |value: &str| match parse_integer(value) {
        Some(n) if n > 0 => Ok(()),
        _ => Err(message.to_string()),
    }
}

/// Integer parse that ignores surrounding whitespace and accepts a sign
pub fn parse_integer(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok()
}
