//! Field-level checks shared by the wire shapes.

use serde_json::{json, Value};

/// Require a non-empty string of at most `max` characters
pub(crate) fn check_text(details: &mut Vec<Value>, field: &str, value: &str, max: usize) {
    if value.is_empty() {
        details.push(json!({"field": field, "error": "must not be empty"}));
    } else if value.chars().count() > max {
        details.push(json!({
            "field": field,
            "error": format!("must be at most {max} characters")
        }));
    }
}

/// Require a strictly positive integer
pub(crate) fn check_positive(details: &mut Vec<Value>, field: &str, value: i64) {
    if value <= 0 {
        details.push(json!({"field": field, "error": "must be positive"}));
    }
}
