//! Cohen–Sutherland clipping of line strings.

use super::outcode::{bit_code, bit_code_open, intersect};
use crate::{Bound, Coordinates, LineStringGeometry, MultiLineStringGeometry};

/// Clips `line` to `bound`. Every stretch of the line that lies inside becomes one line string of
/// the result, in input order. Points on the border are inside.
#[must_use]
pub fn line_string(bound: &Bound, line: &LineStringGeometry) -> MultiLineStringGeometry {
	let mut out = MultiLineStringGeometry::default();
	line_string_into(bound, line, &mut out);
	out
}

/// Like [`line_string`], but points on the border count as outside.
#[must_use]
pub fn line_string_open(bound: &Bound, line: &LineStringGeometry) -> MultiLineStringGeometry {
	let mut out = MultiLineStringGeometry::default();
	clip_line(bound, &line.0, bit_code_open, &mut out.0);
	out
}

/// Like [`line_string`], writing into `out`. `out` is cleared first; the allocations of its
/// lines are reused.
pub fn line_string_into(bound: &Bound, line: &LineStringGeometry, out: &mut MultiLineStringGeometry) {
	clip_line(bound, &line.0, bit_code, &mut out.0);
}

/// Clips every line of `lines` and concatenates the results.
#[must_use]
pub fn multi_line_string(bound: &Bound, lines: &MultiLineStringGeometry) -> MultiLineStringGeometry {
	let mut out = MultiLineStringGeometry::default();
	let mut buffer = MultiLineStringGeometry::default();
	for line in &lines.0 {
		line_string_into(bound, line, &mut buffer);
		out.0.append(&mut buffer.0);
	}
	out
}

fn clip_line(
	bound: &Bound,
	points: &[Coordinates],
	code_of: fn(&Bound, Coordinates) -> u8,
	out: &mut Vec<LineStringGeometry>,
) {
	let mut spare: Vec<LineStringGeometry> = std::mem::take(out);
	spare.iter_mut().for_each(|l| l.0.clear());
	spare.reverse();

	let Some(&first) = points.first() else {
		return;
	};

	let mut push = |out: &mut Vec<LineStringGeometry>, index: usize, p: Coordinates| {
		if index >= out.len() {
			out.push(spare.pop().unwrap_or_default());
		}
		out[index].0.push(p);
	};

	let last = points.len() - 1;
	let mut line_index = 0;
	let mut code_a = code_of(bound, first);

	for i in 1..points.len() {
		let mut a = points[i - 1];
		let mut b = points[i];
		let mut code_b = code_of(bound, b);
		let end_code = code_b;

		loop {
			if code_a | code_b == 0 {
				push(out, line_index, a);
				if code_b != end_code {
					// the segment leaves the bound
					push(out, line_index, b);
					if i < last {
						line_index += 1;
					}
				} else if i == last {
					push(out, line_index, b);
				}
				break;
			} else if code_a & code_b != 0 {
				break;
			} else if code_a != 0 {
				a = intersect(bound, code_a, a, b);
				code_a = code_of(bound, a);
			} else {
				b = intersect(bound, code_b, a, b);
				code_b = code_of(bound, b);
			}
		}

		code_a = end_code;
	}
}
