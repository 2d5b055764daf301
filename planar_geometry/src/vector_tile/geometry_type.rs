use crate::Geometry;

/// Geometry type of a vector tile feature, as stored in field 3 of a feature.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GeomType {
	#[default]
	Unknown = 0,
	Point = 1,
	LineString = 2,
	Polygon = 3,
}

impl GeomType {
	#[must_use]
	pub fn as_u64(&self) -> u64 {
		*self as u64
	}
}

impl From<u64> for GeomType {
	fn from(value: u64) -> Self {
		match value {
			1 => GeomType::Point,
			2 => GeomType::LineString,
			3 => GeomType::Polygon,
			_ => GeomType::Unknown,
		}
	}
}

impl From<&Geometry> for GeomType {
	/// Collections have no vector tile type and map to `Unknown`.
	fn from(geometry: &Geometry) -> Self {
		use Geometry::*;
		match geometry {
			Point(_) | MultiPoint(_) => GeomType::Point,
			LineString(_) | MultiLineString(_) => GeomType::LineString,
			Ring(_) | Polygon(_) | MultiPolygon(_) | Bound(_) => GeomType::Polygon,
			Collection(_) => GeomType::Unknown,
		}
	}
}
