//! RFC 7946 structural validation over a materialized JSON tree.
//!
//! [`validate_geojson`] checks a single GeoJSON value and returns it untouched on success.
//! [`GeoJsonScalar`] adds the expected-type check used by typed query scalars.

mod coordinates;
mod error;
mod kind;
pub mod scalar;
mod validate;

pub use coordinates::check_coordinates;
pub use error::{ErrorKind, GeoJsonError};
pub use kind::GeoJsonKind;
pub use scalar::{GeoJsonScalar, LiteralValue};
pub use validate::{GeoJsonValidator, Validated, ValidationOptions, validate_geojson};
