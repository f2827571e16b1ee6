//! Coordinate shape checking.
//!
//! [`check_coordinates`] is the generic recursive test. The per-kind rules live in [`RULES`] as data:
//! every geometry kind owns a list of [`Pass`]es that are applied in order, each one at a fixed
//! array level below the `coordinates` member.

use crate::{GeoJsonError, GeoJsonKind};
use geoscalar_core::json::{JsonArray, JsonValue};

/// Check that `value` is a coordinate tree of exactly `depth` array levels above the positions.
///
/// * `depth == 0`: `value` is a position, an array of at least two numbers.
/// * `depth > 0`: `value` is an array with at least `min_count` elements, each of them a tree of
///   `depth - 1` levels. With `is_ring` set, the arrays at depth 1 must also be closed linear rings
///   of at least four positions.
///
/// Never fails loudly; anything that is not an array where one is expected yields `false`.
pub fn check_coordinates(value: &JsonValue, depth: usize, min_count: usize, is_ring: bool) -> bool {
	let JsonValue::Array(array) = value else {
		return false;
	};

	if depth == 0 {
		return array.len() >= 2 && array.iter().all(JsonValue::is_number);
	}

	if array.len() < min_count {
		return false;
	}

	if depth == 1 && is_ring && !is_closed_ring(array) {
		return false;
	}

	array
		.iter()
		.all(|nested| check_coordinates(nested, depth - 1, min_count, is_ring))
}

/// First and last positions must be equal number by number, and there must be four or more.
///
/// Comparison is exact.
fn is_closed_ring(array: &JsonArray) -> bool {
	let (Some(JsonValue::Array(first)), Some(JsonValue::Array(last))) = (array.first(), array.last()) else {
		return false;
	};

	first.len() == last.len() && first.iter().zip(last.iter()).all(|(a, b)| a == b) && array.len() >= 4
}

/// What a failing [`Pass`] reports.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Violation {
	Malformed,
	Ring,
}

/// One row of the rule table.
#[derive(Clone, Copy, Debug)]
struct Pass {
	/// Array levels to descend below `coordinates` before checking.
	level: usize,
	depth: usize,
	min_count: usize,
	is_ring: bool,
	violation: Violation,
	rule: &'static str,
}

impl Pass {
	const fn shape(depth: usize, min_count: usize, rule: &'static str) -> Self {
		Pass {
			level: 0,
			depth,
			min_count,
			is_ring: false,
			violation: Violation::Malformed,
			rule,
		}
	}

	const fn members(level: usize, depth: usize, min_count: usize, rule: &'static str) -> Self {
		Pass {
			level,
			depth,
			min_count,
			is_ring: false,
			violation: Violation::Malformed,
			rule,
		}
	}

	const fn rings(level: usize) -> Self {
		Pass {
			level,
			depth: 1,
			min_count: 4,
			is_ring: true,
			violation: Violation::Ring,
			rule: RING_RULE,
		}
	}

	fn error(&self, kind: GeoJsonKind) -> GeoJsonError {
		match self.violation {
			Violation::Malformed => GeoJsonError::MalformedCoordinates { kind, rule: self.rule },
			Violation::Ring => GeoJsonError::UnclosedRing { kind, rule: self.rule },
		}
	}
}

const RING_RULE: &str = "Each linear ring in a Polygon must have at least four positions and must be closed.";
const MULTI_LINE_RULE: &str =
	"MultiLineString must have coordinates as an array of LineString coordinate arrays.";

/// The coordinate rules of the six geometry kinds.
static RULES: [(GeoJsonKind, &[Pass]); 6] = [
	(
		GeoJsonKind::Point,
		&[Pass::shape(0, 0, "Point must have coordinates as [x, y] or [x, y, z].")],
	),
	(
		GeoJsonKind::MultiPoint,
		&[Pass::shape(
			1,
			1,
			"MultiPoint must have coordinates as an array of [x, y] or [x, y, z].",
		)],
	),
	(
		GeoJsonKind::LineString,
		&[Pass::shape(
			1,
			2,
			"LineString must have coordinates as an array of two or more positions.",
		)],
	),
	(
		GeoJsonKind::MultiLineString,
		&[Pass::shape(2, 1, MULTI_LINE_RULE), Pass::members(1, 1, 2, MULTI_LINE_RULE)],
	),
	(
		GeoJsonKind::Polygon,
		&[
			Pass::shape(2, 1, "Polygon must have coordinates as an array of linear rings."),
			Pass::rings(1),
		],
	),
	(
		GeoJsonKind::MultiPolygon,
		&[
			Pass::shape(
				3,
				1,
				"MultiPolygon must have coordinates as an array of Polygon coordinate arrays.",
			),
			Pass::rings(2),
		],
	),
];

fn passes_for(kind: GeoJsonKind) -> &'static [Pass] {
	RULES
		.iter()
		.find(|(k, _)| *k == kind)
		.map(|(_, passes)| *passes)
		.unwrap_or_default()
}

/// Run every pass of `kind` over `coordinates`, reporting the first one that fails.
///
/// Kinds without coordinate rules (the containers) pass trivially.
pub(crate) fn validate_coordinates(kind: GeoJsonKind, coordinates: &JsonValue) -> Result<(), GeoJsonError> {
	for pass in passes_for(kind) {
		let ok = visit_level(coordinates, pass.level, &mut |node| {
			check_coordinates(node, pass.depth, pass.min_count, pass.is_ring)
		});
		if !ok {
			return Err(pass.error(kind));
		}
	}
	Ok(())
}

/// Call `f` on every value `level` array levels below `value`, in order, stopping at the first `false`.
fn visit_level(value: &JsonValue, level: usize, f: &mut impl FnMut(&JsonValue) -> bool) -> bool {
	if level == 0 {
		return f(value);
	}
	match value {
		JsonValue::Array(array) => array.iter().all(|nested| visit_level(nested, level - 1, f)),
		_ => false,
	}
}
