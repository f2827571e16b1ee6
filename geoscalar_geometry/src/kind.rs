use std::fmt::{Display, Formatter, Result};

/// The nine object kinds of RFC 7946.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GeoJsonKind {
	Point,
	LineString,
	Polygon,
	MultiPoint,
	MultiLineString,
	MultiPolygon,
	GeometryCollection,
	Feature,
	FeatureCollection,
}

impl GeoJsonKind {
	/// All kinds, in the order they are listed in error messages and schemas.
	pub const ALL: [GeoJsonKind; 9] = [
		GeoJsonKind::Point,
		GeoJsonKind::LineString,
		GeoJsonKind::Polygon,
		GeoJsonKind::MultiPoint,
		GeoJsonKind::MultiLineString,
		GeoJsonKind::MultiPolygon,
		GeoJsonKind::GeometryCollection,
		GeoJsonKind::Feature,
		GeoJsonKind::FeatureCollection,
	];

	/// Look up a kind by its exact, case-sensitive `type` tag.
	pub fn from_name(name: &str) -> Option<Self> {
		use GeoJsonKind::*;
		Some(match name {
			"Point" => Point,
			"LineString" => LineString,
			"Polygon" => Polygon,
			"MultiPoint" => MultiPoint,
			"MultiLineString" => MultiLineString,
			"MultiPolygon" => MultiPolygon,
			"GeometryCollection" => GeometryCollection,
			"Feature" => Feature,
			"FeatureCollection" => FeatureCollection,
			_ => return None,
		})
	}

	pub fn as_str(&self) -> &'static str {
		use GeoJsonKind::*;
		match self {
			Point => "Point",
			LineString => "LineString",
			Polygon => "Polygon",
			MultiPoint => "MultiPoint",
			MultiLineString => "MultiLineString",
			MultiPolygon => "MultiPolygon",
			GeometryCollection => "GeometryCollection",
			Feature => "Feature",
			FeatureCollection => "FeatureCollection",
		}
	}

	/// True for the six kinds that carry a `coordinates` member.
	pub fn is_geometry(&self) -> bool {
		!matches!(
			self,
			GeoJsonKind::GeometryCollection | GeoJsonKind::Feature | GeoJsonKind::FeatureCollection
		)
	}

	/// Comma separated list of every allowed tag.
	pub fn allowed_names() -> String {
		Self::ALL.iter().map(GeoJsonKind::as_str).collect::<Vec<_>>().join(", ")
	}
}

impl Display for GeoJsonKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> Result {
		f.write_str(self.as_str())
	}
}
