//! Helpers for reading loosely-typed JSON attributes.
//!
//! Manifest and descriptor files are hand-edited, so attributes are read from
//! raw [`Value`]s instead of failing the whole document on a type mismatch.

use serde_json::Value;

/// `false` for `null`, `false`, zero, `NaN` and the empty string.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renders any non-null value as text. Strings are returned verbatim.
pub fn label(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

/// Like [`label`], but falsy values read as absent.
pub fn truthy_label(value: &Value) -> Option<String> {
    if is_truthy(value) { label(value) } else { None }
}

/// Looks up `key` on an object; anything else has no attributes.
pub fn attr<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object().and_then(|map| map.get(key))
}

/// String entries of an array attribute. Non-strings and non-arrays are dropped.
pub fn string_list(value: &Value, key: &str) -> Vec<String> {
    attr(value, key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
