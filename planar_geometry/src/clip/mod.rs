//! Clipping geometries to an axis-aligned [`Bound`](crate::Bound).
//!
//! Lines are clipped with Cohen–Sutherland, rings with Sutherland–Hodgman. Rings that were cut
//! open elsewhere can be closed along the bound with [`around_bound`].

mod around_bound;
mod line;
mod outcode;
mod ring;

pub use around_bound::*;
pub use line::*;
pub use outcode::{BOTTOM, LEFT, RIGHT, TOP, bit_code, bit_code_open};
pub use ring::*;

use crate::{
	Bound, CollectionGeometry, Geometry, GeometryTrait, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, PolygonGeometry,
};

/// Clips any geometry to `bound`. Returns `None` if nothing is left.
///
/// Multi geometries that keep a single member collapse to the single kind.
#[must_use]
pub fn geometry(bound: &Bound, geometry: &Geometry) -> Option<Geometry> {
	if !bound.intersects(&geometry.bound()) {
		return None;
	}
	match geometry {
		Geometry::Point(p) => Some(Geometry::Point(*p)),
		Geometry::MultiPoint(mp) => multi_point(bound, mp),
		Geometry::LineString(l) => lines_to_geometry(line_string(bound, l)),
		Geometry::MultiLineString(ml) => lines_to_geometry(multi_line_string(bound, ml)),
		Geometry::Ring(r) => ring(bound, r).map(Geometry::Ring),
		Geometry::Polygon(p) => polygon(bound, p).map(Geometry::Polygon),
		Geometry::MultiPolygon(mp) => multi_polygon(bound, mp),
		Geometry::Collection(c) => collection(bound, c),
		Geometry::Bound(b) => self::bound(bound, b).map(Geometry::Bound),
	}
}

/// Keeps the points inside `bound`, border included.
#[must_use]
pub fn multi_point(bound: &Bound, points: &MultiPointGeometry) -> Option<Geometry> {
	let mut kept: Vec<_> = points.0.iter().filter(|p| bound.contains(p.0)).copied().collect();
	match kept.len() {
		0 => None,
		1 => kept.pop().map(Geometry::Point),
		_ => Some(Geometry::MultiPoint(MultiPointGeometry(kept))),
	}
}

fn lines_to_geometry(mut lines: MultiLineStringGeometry) -> Option<Geometry> {
	match lines.0.len() {
		0 => None,
		1 => lines.0.pop().map(Geometry::LineString),
		_ => Some(Geometry::MultiLineString(lines)),
	}
}

/// Clips the outer ring and every hole. The polygon is gone if its outer ring is.
#[must_use]
pub fn polygon(bound: &Bound, polygon: &PolygonGeometry) -> Option<PolygonGeometry> {
	let outer = ring(bound, polygon.outer()?)?;
	if outer.0.is_empty() {
		return None;
	}
	let mut rings = vec![outer];
	rings.extend(
		polygon
			.holes()
			.filter_map(|hole| ring(bound, hole))
			.filter(|hole| !hole.0.is_empty()),
	);
	Some(PolygonGeometry(rings))
}

#[must_use]
pub fn multi_polygon(bound: &Bound, polygons: &MultiPolygonGeometry) -> Option<Geometry> {
	let mut kept: Vec<PolygonGeometry> = polygons.0.iter().filter_map(|p| polygon(bound, p)).collect();
	match kept.len() {
		0 => None,
		1 => kept.pop().map(Geometry::Polygon),
		_ => Some(Geometry::MultiPolygon(MultiPolygonGeometry(kept))),
	}
}

/// Clips every member; a single survivor replaces the collection.
#[must_use]
pub fn collection(bound: &Bound, collection: &CollectionGeometry) -> Option<Geometry> {
	let mut kept: Vec<Geometry> = collection.0.iter().filter_map(|g| geometry(bound, g)).collect();
	match kept.len() {
		0 => None,
		1 => kept.pop(),
		_ => Some(Geometry::Collection(CollectionGeometry(kept))),
	}
}

#[must_use]
pub fn bound(bound: &Bound, other: &Bound) -> Option<Bound> {
	let b = bound.intersection(*other);
	(!b.is_empty()).then_some(b)
}
