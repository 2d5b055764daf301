//! Closing clipped rings along the bound.
//!
//! A ring that was cut open by a clip starts and ends outside (or on the border of) the bound.
//! [`around_bound`] walks the cells around the bound from the last position to the first one,
//! adding a representative point per cell, so the result encloses the intended area with the
//! requested winding.

use super::outcode::bit_code_open;
use crate::{
	Bound, CollectionGeometry, Coordinates, Geometry, GeometryError, MultiPolygonGeometry, Orientation,
	PolygonGeometry, RingGeometry,
};
use anyhow::{Result, bail};

const NEXT_CCW: [i8; 11] = [-1, 5, 10, -1, 6, 4, 2, -1, 9, 1, 8];
const NEXT_CW: [i8; 11] = [-1, 9, 6, -1, 5, 1, 4, -1, 10, 8, 2];

/// The cell that follows `code` when walking around the bound in direction `o`.
fn next_code(o: Orientation, code: u8) -> Option<u8> {
	let table = match o {
		Orientation::Ccw => &NEXT_CCW,
		Orientation::Cw => &NEXT_CW,
		Orientation::Undefined => return None,
	};
	let next = *table.get(code as usize)?;
	u8::try_from(next).ok()
}

/// Corner for diagonal cells, edge midpoint for the others.
fn point_for(bound: &Bound, code: u8) -> Coordinates {
	let center = bound.center();
	let x = match code & 0b0011 {
		1 => bound.left(),
		2 => bound.right(),
		_ => center.x(),
	};
	let y = match code & 0b1100 {
		4 => bound.bottom(),
		8 => bound.top(),
		_ => center.y(),
	};
	Coordinates::new(x, y)
}

/// Appends points along `bound` to `ring` so that it runs from its last position around the
/// bound back to its first one, with winding `o`. The first position is appended at the end.
///
/// Both end points must lie outside the bound or on its border. If they share a cell and the
/// ring already has the requested winding, only the first position is appended.
pub fn around_bound(bound: &Bound, mut ring: RingGeometry, o: Orientation) -> Result<RingGeometry> {
	if o == Orientation::Undefined {
		bail!(GeometryError::WrapInvalidOrientation);
	}
	let (Some(&first), Some(&last)) = (ring.0.first(), ring.0.last()) else {
		return Ok(ring);
	};

	let target = bit_code_open(bound, first);
	let mut current = bit_code_open(bound, last);
	if target == 0 || current == 0 {
		bail!(GeometryError::WrapEndpointsInside);
	}

	if current != target || ring.orientation() != o {
		// at most 8 cells around a bound
		for _ in 0..8 {
			let Some(next) = next_code(o, current) else {
				bail!("unexpected cell code {current}");
			};
			current = next;
			if current == target {
				break;
			}
			ring.0.push(point_for(bound, current));
		}
	}

	ring.0.push(first);
	Ok(ring)
}

/// Wraps the outer ring with winding `o` and every hole with the opposite winding.
pub fn around_bound_polygon(bound: &Bound, polygon: PolygonGeometry, o: Orientation) -> Result<PolygonGeometry> {
	polygon
		.0
		.into_iter()
		.enumerate()
		.map(|(i, ring)| around_bound(bound, ring, if i == 0 { o } else { o.reverse() }))
		.collect()
}

pub fn around_bound_multi_polygon(
	bound: &Bound,
	multi_polygon: MultiPolygonGeometry,
	o: Orientation,
) -> Result<MultiPolygonGeometry> {
	multi_polygon
		.0
		.into_iter()
		.map(|polygon| around_bound_polygon(bound, polygon, o))
		.collect()
}

/// Wraps the areal members of `collection`. Points and lines are passed through.
pub fn around_bound_collection(
	bound: &Bound,
	collection: CollectionGeometry,
	o: Orientation,
) -> Result<CollectionGeometry> {
	collection
		.0
		.into_iter()
		.map(|g| around_bound_geometry(bound, g, o))
		.collect()
}

/// Dispatches on the geometry kind. A `Bound` is already closed and is returned unchanged.
pub fn around_bound_geometry(bound: &Bound, geometry: Geometry, o: Orientation) -> Result<Geometry> {
	Ok(match geometry {
		Geometry::Ring(r) => Geometry::Ring(around_bound(bound, r, o)?),
		Geometry::Polygon(p) => Geometry::Polygon(around_bound_polygon(bound, p, o)?),
		Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(around_bound_multi_polygon(bound, mp, o)?),
		Geometry::Collection(c) => Geometry::Collection(around_bound_collection(bound, c, o)?),
		other => other,
	})
}
