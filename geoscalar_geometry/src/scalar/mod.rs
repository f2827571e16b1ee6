//! Typed GeoJSON scalars.
//!
//! Each of the nine kinds gets a named scalar that validates its input and then insists on its own
//! kind, so a field can be declared as e.g. `Polygon` and reject every other valid GeoJSON value.
//! The three entry points mirror how a query engine hands values to a custom scalar:
//! outgoing results ([`GeoJsonScalar::serialize`]), variables ([`GeoJsonScalar::parse_value`]) and
//! inline literals ([`GeoJsonScalar::parse_literal`]).

mod literal;

pub use literal::LiteralValue;

use crate::{GeoJsonError, GeoJsonKind, GeoJsonValidator, ValidationOptions};
use geoscalar_core::json::JsonValue;
use log::debug;

#[derive(Clone, Debug)]
pub struct GeoJsonScalar {
	kind: GeoJsonKind,
	validator: GeoJsonValidator,
}

impl GeoJsonScalar {
	pub fn new(kind: GeoJsonKind) -> Self {
		Self::with_options(kind, ValidationOptions::default())
	}

	pub fn with_options(kind: GeoJsonKind, options: ValidationOptions) -> Self {
		GeoJsonScalar {
			kind,
			validator: GeoJsonValidator::new(options),
		}
	}

	pub fn kind(&self) -> GeoJsonKind {
		self.kind
	}

	/// The scalar's type name, identical to the GeoJSON `type` tag it accepts.
	pub fn name(&self) -> &'static str {
		self.kind.as_str()
	}

	pub fn description(&self) -> String {
		format!("A GeoJSON {} object as defined by the GeoJSON format.", self.kind)
	}

	/// Check a value on its way out to a client.
	pub fn serialize<'a>(&self, value: &'a JsonValue) -> Result<&'a JsonValue, GeoJsonError> {
		self.check(value)
	}

	/// Check a value that arrived as a variable.
	pub fn parse_value<'a>(&self, value: &'a JsonValue) -> Result<&'a JsonValue, GeoJsonError> {
		self.check(value)
	}

	/// Rebuild a value from an inline query literal and check it.
	pub fn parse_literal(&self, literal: &LiteralValue) -> Result<JsonValue, GeoJsonError> {
		if !matches!(literal, LiteralValue::Object(_)) {
			return Err(GeoJsonError::LiteralNotObject { expected: self.kind });
		}
		let value = literal.to_json(self.validator.options().max_literal_depth())?;
		self.check(&value)?;
		Ok(value)
	}

	fn check<'a>(&self, value: &'a JsonValue) -> Result<&'a JsonValue, GeoJsonError> {
		let validated = self.validator.validate(value)?;
		match validated.expect_kind(self.kind) {
			Ok(validated) => Ok(validated.value()),
			Err(error) => {
				debug!("scalar {} rejected a {}", self.kind, validated.kind());
				Err(error)
			}
		}
	}
}

/// One scalar per GeoJSON kind, in declaration order.
pub fn scalars() -> Vec<GeoJsonScalar> {
	GeoJsonKind::ALL.into_iter().map(GeoJsonScalar::new).collect()
}

/// Schema definition language block declaring all scalars, each preceded by its description.
pub fn type_defs() -> String {
	scalars()
		.iter()
		.map(|scalar| format!("\"{}\"\nscalar {}\n", scalar.description(), scalar.name()))
		.collect::<Vec<_>>()
		.join("\n")
}
