//! Sutherland–Hodgman clipping of rings.

use super::outcode::{BOTTOM, LEFT, RIGHT, TOP, bit_code, intersect};
use crate::{Bound, Coordinates, RingGeometry};
use std::mem::swap;

/// Clips `ring` to `bound`, returning `None` if nothing is left.
///
/// Parts of the ring outside the bound are replaced by runs along the bound's edges. A closed
/// input yields a closed output. An open input is not closed implicitly: its last and first
/// position are not treated as connected. An empty ring is returned unchanged.
#[must_use]
pub fn ring(bound: &Bound, ring: &RingGeometry) -> Option<RingGeometry> {
	let mut out = RingGeometry::default();
	ring_into(bound, ring, &mut out).then_some(out)
}

/// Like [`ring`], writing into `out`. Returns `false` if nothing is left, in which case `out` is
/// empty.
pub fn ring_into(bound: &Bound, ring: &RingGeometry, out: &mut RingGeometry) -> bool {
	out.0.clear();
	let (Some(&first), Some(&last)) = (ring.0.first(), ring.0.last()) else {
		return true;
	};
	let closed = first == last;

	let mut current: Vec<Coordinates> = ring.0.clone();
	let mut next: Vec<Coordinates> = std::mem::take(&mut out.0);

	for edge in [LEFT, RIGHT, BOTTOM, TOP] {
		next.clear();

		let mut prev = if closed { current[current.len() - 1] } else { current[0] };
		let mut prev_inside = bit_code(bound, prev) & edge == 0;

		for &p in &current {
			let inside = bit_code(bound, p) & edge == 0;
			if inside != prev_inside {
				next.push(intersect(bound, edge, prev, p));
			}
			if inside {
				next.push(p);
			}
			prev = p;
			prev_inside = inside;
		}

		if next.is_empty() {
			return false;
		}
		swap(&mut current, &mut next);
	}

	if closed && current.first() != current.last() {
		current.push(current[0]);
	}
	out.0 = current;
	true
}
