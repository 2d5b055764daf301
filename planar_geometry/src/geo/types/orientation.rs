/// Winding direction of a ring, derived from the sign of its signed area.
///
/// `Undefined` is reported for rings with fewer than three points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(i8)]
pub enum Orientation {
	Cw = -1,
	#[default]
	Undefined = 0,
	Ccw = 1,
}

impl Orientation {
	/// The opposite winding. `Undefined` stays `Undefined`.
	#[must_use]
	pub fn reverse(self) -> Orientation {
		match self {
			Orientation::Cw => Orientation::Ccw,
			Orientation::Ccw => Orientation::Cw,
			Orientation::Undefined => Orientation::Undefined,
		}
	}

	#[must_use]
	pub fn as_i8(self) -> i8 {
		self as i8
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reverse() {
		assert_eq!(Orientation::Cw.reverse(), Orientation::Ccw);
		assert_eq!(Orientation::Ccw.reverse(), Orientation::Cw);
		assert_eq!(Orientation::Undefined.reverse(), Orientation::Undefined);
	}

	#[test]
	fn numeric_values() {
		assert_eq!(Orientation::Ccw.as_i8(), 1);
		assert_eq!(Orientation::Cw.as_i8(), -1);
		assert_eq!(Orientation::default().as_i8(), 0);
	}
}
