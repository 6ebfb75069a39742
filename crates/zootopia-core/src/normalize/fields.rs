//! Field extraction helpers over a raw JSON object.

use serde_json::{Map, Value};

use super::error::NormalizeError;

/// JSON type name for diagnostics.
pub(crate) fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a scalar as text. Absent/null → None; numbers and bools are stringified.
pub(crate) fn text(map: &Map<String, Value>, key: &str) -> Result<Option<String>, NormalizeError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(Value::Bool(b)) => Ok(Some(b.to_string())),
        Some(other) => Err(NormalizeError::FieldShape {
            field: key.to_string(),
            expected: "a string",
            found: kind(other),
        }),
    }
}

/// First present key wins (e.g. `most_distinctive_feature`, then `distinctive_feature`).
pub(crate) fn text_any(
    map: &Map<String, Value>,
    keys: &[&str],
) -> Result<Option<String>, NormalizeError> {
    for key in keys {
        if let Some(v) = text(map, key)? {
            return Ok(Some(v));
        }
    }
    Ok(None)
}

/// Nested object. Absent/null → None so callers fall back to an all-empty section.
pub(crate) fn object<'a>(
    map: &'a Map<String, Value>,
    key: &str,
) -> Result<Option<&'a Map<String, Value>>, NormalizeError> {
    match map.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(inner)) => Ok(Some(inner)),
        Some(other) => Err(NormalizeError::FieldShape {
            field: key.to_string(),
            expected: "an object",
            found: kind(other),
        }),
    }
}

/// Array of strings. Absent/null → empty.
pub(crate) fn string_list(
    map: &Map<String, Value>,
    key: &str,
) -> Result<Vec<String>, NormalizeError> {
    let items = match map.get(key) {
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            return Err(NormalizeError::FieldShape {
                field: key.to_string(),
                expected: "an array of strings",
                found: kind(other),
            })
        }
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(NormalizeError::FieldShape {
                field: key.to_string(),
                expected: "an array of strings",
                found: kind(other),
            }),
        })
        .collect()
}
