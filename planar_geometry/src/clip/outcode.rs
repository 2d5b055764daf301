//! Cohen–Sutherland region codes.
//!
//! ```text
//!          left  mid  right
//!     top     9     8    10
//!     mid     1     0     2
//!  bottom     5     4     6
//! ```

use crate::{Bound, Coordinates};

pub const LEFT: u8 = 1;
pub const RIGHT: u8 = 2;
pub const BOTTOM: u8 = 4;
pub const TOP: u8 = 8;

/// Region code of `p`. Points on the border are inside (code 0).
#[must_use]
pub fn bit_code(bound: &Bound, p: Coordinates) -> u8 {
	let mut code = 0;
	if p.x() < bound.left() {
		code |= LEFT;
	} else if p.x() > bound.right() {
		code |= RIGHT;
	}
	if p.y() < bound.bottom() {
		code |= BOTTOM;
	} else if p.y() > bound.top() {
		code |= TOP;
	}
	code
}

/// Region code of `p` where points on the border count as outside.
#[must_use]
pub fn bit_code_open(bound: &Bound, p: Coordinates) -> u8 {
	let mut code = 0;
	if p.x() <= bound.left() {
		code |= LEFT;
	} else if p.x() >= bound.right() {
		code |= RIGHT;
	}
	if p.y() <= bound.bottom() {
		code |= BOTTOM;
	} else if p.y() >= bound.top() {
		code |= TOP;
	}
	code
}

/// Intersection of the segment `a`–`b` with the bound edge selected by `edge`.
///
/// When several edge bits are set, top wins over bottom, bottom over right, right over left.
#[must_use]
pub fn intersect(bound: &Bound, edge: u8, a: Coordinates, b: Coordinates) -> Coordinates {
	if edge & TOP != 0 {
		Coordinates::new(a.x() + (b.x() - a.x()) * (bound.top() - a.y()) / (b.y() - a.y()), bound.top())
	} else if edge & BOTTOM != 0 {
		Coordinates::new(
			a.x() + (b.x() - a.x()) * (bound.bottom() - a.y()) / (b.y() - a.y()),
			bound.bottom(),
		)
	} else if edge & RIGHT != 0 {
		Coordinates::new(
			bound.right(),
			a.y() + (b.y() - a.y()) * (bound.right() - a.x()) / (b.x() - a.x()),
		)
	} else if edge & LEFT != 0 {
		Coordinates::new(bound.left(), a.y() + (b.y() - a.y()) * (bound.left() - a.x()) / (b.x() - a.x()))
	} else {
		a
	}
}
