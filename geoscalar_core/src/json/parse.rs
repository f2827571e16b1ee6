//! Conversion from `serde_json` values into the crate's own value tree.

use super::{JsonArray, JsonObject, JsonValue};
use anyhow::{Context, Result, anyhow};

/// Parse JSON text into a `JsonValue`.
///
/// # Errors
/// Returns an error if the text is not valid JSON.
pub fn parse_json_str(json: &str) -> Result<JsonValue> {
	let value: serde_json::Value = serde_json::from_str(json).with_context(|| {
		let preview: String = json.chars().take(32).collect();
		format!("while parsing JSON '{preview}'")
	})?;
	JsonValue::from_serde(value)
}

impl JsonValue {
	/// Convert an already deserialized `serde_json::Value` into a `JsonValue`.
	///
	/// # Errors
	/// Returns an error if a number cannot be represented as `f64`.
	pub fn from_serde(value: serde_json::Value) -> Result<Self> {
		use serde_json::Value;
		Ok(match value {
			Value::Null => JsonValue::Null,
			Value::Bool(b) => JsonValue::Boolean(b),
			Value::Number(n) => JsonValue::Number(
				n.as_f64()
					.ok_or_else(|| anyhow!("number {n} is not representable as f64"))?,
			),
			Value::String(s) => JsonValue::String(s),
			Value::Array(items) => JsonValue::Array(JsonArray(
				items.into_iter().map(JsonValue::from_serde).collect::<Result<Vec<_>>>()?,
			)),
			Value::Object(map) => JsonValue::Object(
				map.into_iter()
					.map(|(key, value)| -> Result<(String, JsonValue)> { Ok((key, JsonValue::from_serde(value)?)) })
					.collect::<Result<JsonObject>>()?,
			),
		})
	}
}
