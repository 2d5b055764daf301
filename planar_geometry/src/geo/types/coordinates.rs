use std::fmt::Debug;

/// A planar `(x, y)` position.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Coordinates([f64; 2]);

impl Coordinates {
	#[must_use]
	pub const fn new(x: f64, y: f64) -> Self {
		Self([x, y])
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0[0]
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0[1]
	}

	/// Euclidean distance to `other`.
	#[must_use]
	pub fn distance(&self, other: &Coordinates) -> f64 {
		(other.x() - self.x()).hypot(other.y() - self.y())
	}
}

impl<T> From<&[T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: &[T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl<T> From<[T; 2]> for Coordinates
where
	T: Copy + Into<f64>,
{
	fn from(value: [T; 2]) -> Self {
		Coordinates([value[0].into(), value[1].into()])
	}
}

impl From<&Coordinates> for Coordinates {
	fn from(value: &Coordinates) -> Self {
		*value
	}
}

impl From<(f64, f64)> for Coordinates {
	fn from(value: (f64, f64)) -> Self {
		Coordinates([value.0, value.1])
	}
}

impl From<Coordinates> for [f64; 2] {
	fn from(value: Coordinates) -> Self {
		value.0
	}
}

impl From<geo::Coord> for Coordinates {
	fn from(value: geo::Coord) -> Self {
		Coordinates([value.x, value.y])
	}
}

impl From<Coordinates> for geo::Coord {
	fn from(value: Coordinates) -> Self {
		geo::Coord {
			x: value.x(),
			y: value.y(),
		}
	}
}

impl Debug for Coordinates {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}
