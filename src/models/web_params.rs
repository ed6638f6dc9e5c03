use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::serde_func::{deserialize_text_opt, ensure_object, object_from_slice};
use crate::errors::CustomError;

/// Parameters passed between an embedded web page and native code.
///
/// Every field is optional and independent of the others. Decoding ignores
/// unknown keys so that pages can add fields without breaking older apps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebJsParams {
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub chain: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,
    /// Image URL
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(deserialize_with = "deserialize_text_opt", skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WebJsParams {
    pub fn from_json(payload: &str) -> Result<Self, CustomError> {
        Self::from_slice(payload.as_bytes())
    }

    pub fn from_slice(payload: &[u8]) -> Result<Self, CustomError> {
        Self::from_value(object_from_slice(payload)?)
    }

    pub fn from_value(value: Value) -> Result<Self, CustomError> {
        serde_json::from_value(ensure_object(value)?)
            .map_err(|e| CustomError::FormatError(e.to_string()))
    }

    /// Absent fields are left out of the output.
    pub fn to_json(&self) -> Result<String, CustomError> {
        serde_json::to_string(self).map_err(|e| CustomError::FormatError(e.to_string()))
    }
}
