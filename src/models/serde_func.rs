use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::CustomError;

/// Accepts any JSON value and keeps it as text. `null` maps to `None`,
/// strings are kept verbatim, everything else is rendered as compact JSON.
pub fn deserialize_text_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// Parses `bytes` as JSON and insists on a top-level object.
pub fn object_from_slice(bytes: &[u8]) -> Result<Value, CustomError> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| CustomError::FormatError(e.to_string()))?;
    ensure_object(value)
}

pub fn ensure_object(value: Value) -> Result<Value, CustomError> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(CustomError::FormatError(format!(
            "expected a JSON object, got {}",
            kind_of(&value)
        )))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
