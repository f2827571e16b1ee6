use crate::GeoJsonError;
use geoscalar_core::json::{JsonArray, JsonObject, JsonValue};

/// An inline value as written in a query document.
///
/// Query languages distinguish integers from floats and have enum and variable literals, none of
/// which exist in JSON. [`LiteralValue::to_json`] folds them into the JSON model.
#[derive(Clone, Debug, PartialEq)]
pub enum LiteralValue {
	Variable(String),
	Int(i64),
	Float(f64),
	String(String),
	Boolean(bool),
	Null,
	Enum(String),
	List(Vec<LiteralValue>),
	Object(Vec<(String, LiteralValue)>),
}

impl LiteralValue {
	/// Convert the literal, including every nested list and object, into a `JsonValue`.
	///
	/// Enum literals become strings. Variables are rejected, since their values are not part of
	/// the literal. Lists and objects may nest at most `max_depth` levels.
	pub fn to_json(&self, max_depth: usize) -> Result<JsonValue, GeoJsonError> {
		self.to_json_at(0, max_depth)
	}

	fn to_json_at(&self, depth: usize, max_depth: usize) -> Result<JsonValue, GeoJsonError> {
		if matches!(self, LiteralValue::List(_) | LiteralValue::Object(_)) && depth >= max_depth {
			return Err(GeoJsonError::LiteralTooDeep { limit: max_depth });
		}
		Ok(match self {
			LiteralValue::Variable(name) => return Err(GeoJsonError::LiteralVariable { name: name.clone() }),
			LiteralValue::Int(v) => JsonValue::from(*v),
			LiteralValue::Float(v) => JsonValue::from(*v),
			LiteralValue::String(v) | LiteralValue::Enum(v) => JsonValue::from(v.clone()),
			LiteralValue::Boolean(v) => JsonValue::from(*v),
			LiteralValue::Null => JsonValue::Null,
			LiteralValue::List(items) => JsonValue::Array(JsonArray(
				items
					.iter()
					.map(|item| item.to_json_at(depth + 1, max_depth))
					.collect::<Result<Vec<_>, _>>()?,
			)),
			LiteralValue::Object(fields) => JsonValue::Object(
				fields
					.iter()
					.map(|(key, value)| -> Result<(String, JsonValue), GeoJsonError> {
						Ok((key.clone(), value.to_json_at(depth + 1, max_depth)?))
					})
					.collect::<Result<JsonObject, GeoJsonError>>()?,
			),
		})
	}
}
