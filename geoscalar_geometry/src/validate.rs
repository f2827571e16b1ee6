//! Type-structure validation: dispatch on the `type` tag, descend into containers.

use crate::{GeoJsonError, GeoJsonKind, coordinates::validate_coordinates};
use geoscalar_core::json::{JsonObject, JsonValue};

/// Limits applied while validating.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidationOptions {
	/// How many containers (collections and features) may be nested inside each other.
	/// The top-level value sits at depth 0.
	pub max_depth: usize,
}

impl ValidationOptions {
	pub const DEFAULT_MAX_DEPTH: usize = 64;

	/// How many lists and objects an inline literal may nest.
	///
	/// Every container level takes an object and an array; the constant leaves room for
	/// coordinate arrays and shallow properties.
	pub fn max_literal_depth(&self) -> usize {
		self.max_depth.saturating_mul(2).saturating_add(8)
	}
}

impl Default for ValidationOptions {
	fn default() -> Self {
		ValidationOptions {
			max_depth: Self::DEFAULT_MAX_DEPTH,
		}
	}
}

/// A value that passed validation, together with its kind.
///
/// Holds a reference to the very value that was passed in; nothing is copied or normalized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Validated<'a> {
	kind: GeoJsonKind,
	value: &'a JsonValue,
}

impl<'a> Validated<'a> {
	pub fn kind(&self) -> GeoJsonKind {
		self.kind
	}

	pub fn value(&self) -> &'a JsonValue {
		self.value
	}

	/// Fail with [`GeoJsonError::TypeMismatch`] unless the value is of the `expected` kind.
	pub fn expect_kind(self, expected: GeoJsonKind) -> Result<Self, GeoJsonError> {
		if self.kind == expected {
			Ok(self)
		} else {
			Err(GeoJsonError::TypeMismatch {
				expected,
				found: self.kind,
			})
		}
	}
}

/// Validates GeoJSON values depth-first, left to right, stopping at the first violation.
///
/// The validator holds no state besides its options and can be shared between threads.
#[derive(Clone, Debug, Default)]
pub struct GeoJsonValidator {
	options: ValidationOptions,
}

impl GeoJsonValidator {
	pub fn new(options: ValidationOptions) -> Self {
		GeoJsonValidator { options }
	}

	pub fn options(&self) -> &ValidationOptions {
		&self.options
	}

	/// Validate `value` and return it unchanged.
	///
	/// Nested failures are returned exactly as they were raised by the nested member.
	pub fn validate<'a>(&self, value: &'a JsonValue) -> Result<Validated<'a>, GeoJsonError> {
		let kind = self.validate_at(value, 0)?;
		Ok(Validated { kind, value })
	}

	fn validate_at(&self, value: &JsonValue, depth: usize) -> Result<GeoJsonKind, GeoJsonError> {
		if depth > self.options.max_depth {
			return Err(GeoJsonError::NestingTooDeep {
				limit: self.options.max_depth,
			});
		}

		let JsonValue::Object(object) = value else {
			return Err(GeoJsonError::NotAnObject);
		};

		let kind = read_kind(object)?;

		match kind {
			GeoJsonKind::Point
			| GeoJsonKind::LineString
			| GeoJsonKind::Polygon
			| GeoJsonKind::MultiPoint
			| GeoJsonKind::MultiLineString
			| GeoJsonKind::MultiPolygon => {
				let coordinates = required(object, kind, "coordinates")?;
				validate_coordinates(kind, coordinates)?;
			}
			GeoJsonKind::GeometryCollection => self.validate_members(object, kind, "geometries", depth)?,
			GeoJsonKind::Feature => {
				let geometry = required(object, kind, "geometry")?;
				self.validate_at(geometry, depth + 1)?;
			}
			GeoJsonKind::FeatureCollection => self.validate_members(object, kind, "features", depth)?,
		}

		Ok(kind)
	}

	fn validate_members(
		&self,
		object: &JsonObject,
		kind: GeoJsonKind,
		field: &'static str,
		depth: usize,
	) -> Result<(), GeoJsonError> {
		let JsonValue::Array(members) = required(object, kind, field)? else {
			return Err(GeoJsonError::FieldNotArray { kind, field });
		};
		for member in members {
			self.validate_at(member, depth + 1)?;
		}
		Ok(())
	}
}

/// Validate `value` with the default options.
pub fn validate_geojson(value: &JsonValue) -> Result<Validated<'_>, GeoJsonError> {
	GeoJsonValidator::default().validate(value)
}

fn read_kind(object: &JsonObject) -> Result<GeoJsonKind, GeoJsonError> {
	match object.get("type") {
		Some(JsonValue::String(name)) => {
			GeoJsonKind::from_name(name).ok_or_else(|| GeoJsonError::UnknownType { found: name.clone() })
		}
		Some(other) => Err(GeoJsonError::UnknownType {
			found: other.stringify(),
		}),
		None => Err(GeoJsonError::UnknownType {
			found: String::from("undefined"),
		}),
	}
}

/// Look up a mandatory member.
///
/// Absent members count as missing, and so do `null`, `false`, `0`, `""` and, for geometries,
/// empty arrays.
fn required<'a>(object: &'a JsonObject, kind: GeoJsonKind, field: &'static str) -> Result<&'a JsonValue, GeoJsonError> {
	match object.get(field) {
		None | Some(JsonValue::Null | JsonValue::Boolean(false)) => Err(GeoJsonError::MissingField { kind, field }),
		Some(JsonValue::Number(n)) if *n == 0.0 || n.is_nan() => Err(GeoJsonError::MissingField { kind, field }),
		Some(JsonValue::String(text)) if text.is_empty() => Err(GeoJsonError::MissingField { kind, field }),
		Some(JsonValue::Array(array)) if array.is_empty() && kind.is_geometry() => {
			Err(GeoJsonError::MissingField { kind, field })
		}
		Some(value) => Ok(value),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ErrorKind;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	fn json(text: &str) -> JsonValue {
		JsonValue::parse_str(text).unwrap()
	}

	fn error_of(text: &str) -> GeoJsonError {
		validate_geojson(&json(text)).unwrap_err()
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[100.0,0.0]}"#, GeoJsonKind::Point)]
	#[case(r#"{"type":"Point","coordinates":[100.0,0.0,12.5]}"#, GeoJsonKind::Point)]
	#[case(r#"{"type":"MultiPoint","coordinates":[[100.0,0.0],[101.0,1.0]]}"#, GeoJsonKind::MultiPoint)]
	#[case(r#"{"type":"LineString","coordinates":[[100.0,0.0],[101.0,1.0]]}"#, GeoJsonKind::LineString)]
	#[case(
		r#"{"type":"MultiLineString","coordinates":[[[100.0,0.0],[101.0,1.0]],[[102.0,2.0],[103.0,3.0]]]}"#,
		GeoJsonKind::MultiLineString
	)]
	#[case(
		r#"{"type":"Polygon","coordinates":[[[100.0,0.0],[101.0,0.0],[101.0,1.0],[100.0,1.0],[100.0,0.0]]]}"#,
		GeoJsonKind::Polygon
	)]
	#[case(
		r#"{"type":"Polygon","coordinates":[
			[[100.0,0.0],[101.0,0.0],[101.0,1.0],[100.0,1.0],[100.0,0.0]],
			[[100.8,0.8],[100.8,0.2],[100.2,0.2],[100.2,0.8],[100.8,0.8]]
		]}"#,
		GeoJsonKind::Polygon
	)]
	#[case(
		r#"{"type":"MultiPolygon","coordinates":[[[[100,0],[101,0],[101,1],[100,0]]]]}"#,
		GeoJsonKind::MultiPolygon
	)]
	#[case(
		r#"{"type":"GeometryCollection","geometries":[
			{"type":"Point","coordinates":[100.0,0.0]},
			{"type":"LineString","coordinates":[[101.0,0.0],[102.0,1.0]]}
		]}"#,
		GeoJsonKind::GeometryCollection
	)]
	#[case(r#"{"type":"GeometryCollection","geometries":[]}"#, GeoJsonKind::GeometryCollection)]
	#[case(
		r#"{"type":"Feature","id":"f1","bbox":[0,0,1,1],"properties":{"name":"x"},"geometry":{"type":"Point","coordinates":[1,2]}}"#,
		GeoJsonKind::Feature
	)]
	#[case(r#"{"type":"FeatureCollection","features":[]}"#, GeoJsonKind::FeatureCollection)]
	fn accepts_valid_values(#[case] text: &str, #[case] kind: GeoJsonKind) {
		let value = json(text);
		let validated = validate_geojson(&value).unwrap();
		assert_eq!(validated.kind(), kind);
		assert!(std::ptr::eq(validated.value(), &value));
		assert_eq!(validated.value(), &json(text));
	}

	#[rstest]
	#[case(r#"{"type":"Point","coordinates":[125.6]}"#, "Point must have coordinates as [x, y] or [x, y, z].")]
	#[case(r#"{"type":"Point","coordinates":[[125.6,10.1]]}"#, "Point must have coordinates as [x, y] or [x, y, z].")]
	#[case(r#"{"type":"Point","coordinates":"125.6,10.1"}"#, "Point must have coordinates as [x, y] or [x, y, z].")]
	#[case(r#"{"type":"Point"}"#, "Point must include a 'coordinates' field.")]
	#[case(r#"{"type":"Point","coordinates":null}"#, "Point must include a 'coordinates' field.")]
	#[case(r#"{"type":"MultiPoint","coordinates":[]}"#, "MultiPoint must include a 'coordinates' field.")]
	#[case(
		r#"{"type":"LineString","coordinates":[[100.0,0.0]]}"#,
		"LineString must have coordinates as an array of two or more positions."
	)]
	#[case(
		r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,1],[1,1]]]}"#,
		"Each linear ring in a Polygon must have at least four positions and must be closed."
	)]
	#[case(
		r#"{"type":"Polygon","coordinates":[[[0,0],[1,0],[0,0]]]}"#,
		"Each linear ring in a Polygon must have at least four positions and must be closed."
	)]
	#[case(
		r#"{"type":"MultiPolygon","coordinates":[[[[100,0],[101,0]]]]}"#,
		"Each linear ring in a Polygon must have at least four positions and must be closed."
	)]
	#[case(r#"{"type":"Feature","properties":{}}"#, "Feature must include a 'geometry' field.")]
	#[case(r#"{"type":"Feature","geometry":null}"#, "Feature must include a 'geometry' field.")]
	#[case(r#"{"type":"Feature","geometry":false}"#, "Feature must include a 'geometry' field.")]
	#[case(r#"{"type":"Feature","geometry":""}"#, "Feature must include a 'geometry' field.")]
	#[case(r#"{"type":"Point","coordinates":0}"#, "Point must include a 'coordinates' field.")]
	#[case(r#"{"type":"FeatureCollection","features":false}"#, "FeatureCollection must include a 'features' field.")]
	#[case(r#"{"type":"Feature","geometry":true}"#, "GeoJSON must be an object.")]
	#[case(r#"{"type":"Point","coordinates":1}"#, "Point must have coordinates as [x, y] or [x, y, z].")]
	#[case(r#"{"type":"GeometryCollection"}"#, "GeometryCollection must include a 'geometries' field.")]
	#[case(
		r#"{"type":"GeometryCollection","geometries":{}}"#,
		"GeometryCollection must include a 'geometries' field with an array."
	)]
	#[case(r#"{"type":"FeatureCollection"}"#, "FeatureCollection must include a 'features' field.")]
	#[case(
		r#"{"type":"FeatureCollection","features":"none"}"#,
		"FeatureCollection must include a 'features' field with an array."
	)]
	#[case(r#"[1, 2]"#, "GeoJSON must be an object.")]
	#[case(r#"null"#, "GeoJSON must be an object.")]
	fn rejects_invalid_values(#[case] text: &str, #[case] message: &str) {
		assert_eq!(error_of(text).to_string(), message);
	}

	#[test]
	fn unknown_type_names_the_tag() {
		let error = error_of(r#"{"type":"Circle","radius":3}"#);
		assert_eq!(error.kind(), ErrorKind::UnknownType);
		let message = error.to_string();
		assert!(message.contains("Circle"), "{message}");
		for kind in GeoJsonKind::ALL {
			assert!(message.contains(kind.as_str()), "{message}");
		}
	}

	#[test]
	fn missing_or_foreign_type_tags() {
		assert_eq!(
			error_of(r#"{"coordinates":[1,2]}"#),
			GeoJsonError::UnknownType {
				found: "undefined".to_string()
			}
		);
		assert_eq!(
			error_of(r#"{"type":7,"coordinates":[1,2]}"#),
			GeoJsonError::UnknownType { found: "7".to_string() }
		);
		assert_eq!(error_of(r#"{"type":"point","coordinates":[1,2]}"#).kind(), ErrorKind::UnknownType);
	}

	#[test]
	fn nested_error_is_passed_through() {
		let error = error_of(
			r#"{"type":"GeometryCollection","geometries":[
				{"type":"Point","coordinates":[100.0,0.0]},
				{"type":"LineString","coordinates":[[101.0,0.0]]}
			]}"#,
		);
		assert_eq!(
			error,
			GeoJsonError::MalformedCoordinates {
				kind: GeoJsonKind::LineString,
				rule: "LineString must have coordinates as an array of two or more positions."
			}
		);
	}

	#[test]
	fn first_failing_feature_wins() {
		let error = error_of(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","geometry":{"type":"Point","coordinates":[1]}},
				{"type":"Feature","geometry":{"type":"Circle"}}
			]}"#,
		);
		assert_eq!(error.kind(), ErrorKind::MalformedCoordinates);
		assert_eq!(error.to_string(), "Point must have coordinates as [x, y] or [x, y, z].");
	}

	#[test]
	fn containers_nest_recursively() {
		let value = json(
			r#"{"type":"FeatureCollection","features":[
				{"type":"Feature","geometry":{"type":"GeometryCollection","geometries":[
					{"type":"GeometryCollection","geometries":[{"type":"MultiPoint","coordinates":[[1,2]]}]}
				]}}
			]}"#,
		);
		assert_eq!(validate_geojson(&value).unwrap().kind(), GeoJsonKind::FeatureCollection);
	}

	fn nested_collections(levels: usize) -> JsonValue {
		let mut value = json(r#"{"type":"Point","coordinates":[0,0]}"#);
		for _ in 0..levels {
			value = JsonValue::from(vec![
				("type", JsonValue::from("GeometryCollection")),
				("geometries", JsonValue::from(vec![value])),
			]);
		}
		value
	}

	#[test]
	fn nesting_limit() {
		let validator = GeoJsonValidator::new(ValidationOptions { max_depth: 3 });
		assert!(validator.validate(&nested_collections(3)).is_ok());
		assert_eq!(
			validator.validate(&nested_collections(4)).unwrap_err(),
			GeoJsonError::NestingTooDeep { limit: 3 }
		);
		assert_eq!(validator.options().max_depth, 3);
	}

	#[test]
	fn literal_depth_follows_container_depth() {
		assert_eq!(ValidationOptions { max_depth: 0 }.max_literal_depth(), 8);
		assert_eq!(ValidationOptions::default().max_literal_depth(), 136);
		assert_eq!(ValidationOptions { max_depth: usize::MAX }.max_literal_depth(), usize::MAX);
	}

	#[test]
	fn default_limit_allows_deep_but_finite_nesting() {
		assert!(validate_geojson(&nested_collections(ValidationOptions::DEFAULT_MAX_DEPTH)).is_ok());
		assert_eq!(
			validate_geojson(&nested_collections(ValidationOptions::DEFAULT_MAX_DEPTH + 1))
				.unwrap_err()
				.kind(),
			ErrorKind::NestingTooDeep
		);
	}

	#[test]
	fn validator_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<GeoJsonValidator>();
		assert_send_sync::<Validated<'static>>();
	}

	#[test]
	fn expect_kind() {
		let value = json(r#"{"type":"Point","coordinates":[1,2]}"#);
		let validated = validate_geojson(&value).unwrap();
		assert!(validated.expect_kind(GeoJsonKind::Point).is_ok());
		assert_eq!(
			validated.expect_kind(GeoJsonKind::Polygon).unwrap_err(),
			GeoJsonError::TypeMismatch {
				expected: GeoJsonKind::Polygon,
				found: GeoJsonKind::Point
			}
		);
	}
}
