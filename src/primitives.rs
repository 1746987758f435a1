//! Value predicates shared by both validation passes.
//!
//! Form definitions arrive as untyped `serde_json::Value` trees, so every rule
//! is phrased in terms of presence, blankness and exact JSON kinds.

use serde_json::Value;

// ─── Presence ───────────────────────────────────────────────────────────────

/// Returns `true` for `null`, `false`, whitespace-only strings, and empty
/// arrays or objects. Numbers and `true` are never blank.
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(_) => false,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Inverse of [`is_blank`].
pub fn is_present(value: &Value) -> bool {
    !is_blank(value)
}

/// Anything except `null` and `false`.
///
/// An attribute "is set" when it exists and is truthy, even if it is an empty
/// string. Several rules distinguish "set but blank" from "not set".
pub fn is_truthy(value: &Value) -> bool {
    !matches!(value, Value::Null | Value::Bool(false))
}

/// Blank check for an optional attribute lookup. Absent counts as blank.
pub fn is_blank_opt(value: Option<&Value>) -> bool {
    value.is_none_or(is_blank)
}

/// Truthiness for an optional attribute lookup. Absent is not truthy.
pub fn is_truthy_opt(value: Option<&Value>) -> bool {
    value.is_some_and(is_truthy)
}

// ─── Shape ──────────────────────────────────────────────────────────────────

/// `true` only for JSON booleans. `"true"`, `1` and absence all fail.
pub fn is_strict_bool(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::Bool(_)))
}

/// Returns the items of an array with at least one entry.
pub fn non_empty_array(value: Option<&Value>) -> Option<&[Value]> {
    match value {
        Some(Value::Array(items)) if !items.is_empty() => Some(items.as_slice()),
        _ => None,
    }
}

/// Renders a value for inclusion in an error message.
///
/// Strings are emitted without quotes; everything else as compact JSON.
pub fn describe(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
