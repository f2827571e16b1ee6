//! Turning GeoJSON text into a verdict.

use geoscalar_core::json::JsonValue;
use geoscalar_geometry::{GeoJsonError, GeoJsonKind, GeoJsonScalar, GeoJsonValidator, ValidationOptions};
use std::fmt::{Display, Formatter};

/// Result of checking one input.
#[derive(Debug, PartialEq)]
pub enum Outcome {
	Valid(GeoJsonKind),
	Invalid(GeoJsonError),
	/// The text is not JSON at all.
	Unreadable(String),
}

impl Outcome {
	pub fn is_valid(&self) -> bool {
		matches!(self, Outcome::Valid(_))
	}
}

impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Outcome::Valid(kind) => write!(f, "OK ({kind})"),
			Outcome::Invalid(error) => write!(f, "{error}"),
			Outcome::Unreadable(message) => write!(f, "invalid JSON: {message}"),
		}
	}
}

/// Validates documents, optionally insisting on one GeoJSON type.
#[derive(Clone, Debug)]
pub struct Checker {
	validator: GeoJsonValidator,
	scalar: Option<GeoJsonScalar>,
}

impl Checker {
	pub fn new(options: ValidationOptions, expect: Option<GeoJsonKind>) -> Self {
		Checker {
			validator: GeoJsonValidator::new(options),
			scalar: expect.map(|kind| GeoJsonScalar::with_options(kind, options)),
		}
	}

	pub fn check_str(&self, text: &str) -> Outcome {
		match JsonValue::parse_str(text) {
			Ok(value) => self.check_value(&value),
			Err(error) => Outcome::Unreadable(format!("{error:#}")),
		}
	}

	pub fn check_value(&self, value: &JsonValue) -> Outcome {
		let result = match &self.scalar {
			Some(scalar) => scalar.parse_value(value).map(|_| scalar.kind()),
			None => self.validator.validate(value).map(|validated| validated.kind()),
		};
		match result {
			Ok(kind) => Outcome::Valid(kind),
			Err(error) => Outcome::Invalid(error),
		}
	}
}

impl Default for Checker {
	fn default() -> Self {
		Checker::new(ValidationOptions::default(), None)
	}
}
