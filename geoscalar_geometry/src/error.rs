use crate::GeoJsonKind;
use thiserror::Error;

/// Coarse classification of a [`GeoJsonError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
	/// The value is not an object, or its `type` tag is absent or unrecognized.
	UnknownType,
	/// A mandatory member (`coordinates`, `geometry`, `geometries`, `features`) is absent or empty.
	MissingRequiredField,
	/// The coordinate tree fails the depth, count or numeric-leaf rules of its kind.
	MalformedCoordinates,
	/// A polygon ring is not closed or has fewer than four positions.
	UnclosedRing,
	/// The value is valid GeoJSON, but not of the kind the caller expected.
	TypeMismatch,
	/// Containers, or the lists and objects of a literal, are nested deeper than the configured limit.
	NestingTooDeep,
	/// A query literal could not be turned into a value.
	InvalidLiteral,
}

/// The first violation found while validating a GeoJSON value.
///
/// `Display` yields the human readable rule, suitable for returning to a client as is.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeoJsonError {
	#[error("GeoJSON must be an object.")]
	NotAnObject,

	#[error("Invalid GeoJSON type: {found}. Allowed types are {allowed}.", allowed = GeoJsonKind::allowed_names())]
	UnknownType { found: String },

	#[error("{kind} must include a '{field}' field.")]
	MissingField { kind: GeoJsonKind, field: &'static str },

	#[error("{kind} must include a '{field}' field with an array.")]
	FieldNotArray { kind: GeoJsonKind, field: &'static str },

	#[error("{rule}")]
	MalformedCoordinates { kind: GeoJsonKind, rule: &'static str },

	#[error("{rule}")]
	UnclosedRing { kind: GeoJsonKind, rule: &'static str },

	#[error("Expected GeoJSON type to be '{expected}', but got '{found}'.")]
	TypeMismatch { expected: GeoJsonKind, found: GeoJsonKind },

	#[error("GeoJSON nesting exceeds the maximum depth of {limit}.")]
	NestingTooDeep { limit: usize },

	#[error("GeoJSON {expected} must be an object.")]
	LiteralNotObject { expected: GeoJsonKind },

	#[error("Variable '${name}' cannot be used inside a GeoJSON literal.")]
	LiteralVariable { name: String },

	#[error("GeoJSON literal nests lists and objects deeper than {limit} levels.")]
	LiteralTooDeep { limit: usize },
}

impl GeoJsonError {
	pub fn kind(&self) -> ErrorKind {
		use GeoJsonError::*;
		match self {
			NotAnObject | UnknownType { .. } => ErrorKind::UnknownType,
			MissingField { .. } | FieldNotArray { .. } => ErrorKind::MissingRequiredField,
			MalformedCoordinates { .. } => ErrorKind::MalformedCoordinates,
			UnclosedRing { .. } => ErrorKind::UnclosedRing,
			TypeMismatch { .. } => ErrorKind::TypeMismatch,
			NestingTooDeep { .. } | LiteralTooDeep { .. } => ErrorKind::NestingTooDeep,
			LiteralNotObject { .. } | LiteralVariable { .. } => ErrorKind::InvalidLiteral,
		}
	}
}
