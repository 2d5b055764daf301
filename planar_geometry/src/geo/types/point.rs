use super::{Bound, Coordinates, GeometryTrait, MultiPointGeometry, SingleGeometryTrait};
use std::fmt::Debug;

/// A single position.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct PointGeometry(pub Coordinates);

impl PointGeometry {
	#[must_use]
	pub fn new(c: Coordinates) -> Self {
		Self(c)
	}

	#[must_use]
	pub fn x(&self) -> f64 {
		self.0.x()
	}

	#[must_use]
	pub fn y(&self) -> f64 {
		self.0.y()
	}

	#[must_use]
	pub fn as_coord(&self) -> &Coordinates {
		&self.0
	}
}

impl GeometryTrait for PointGeometry {
	fn type_name(&self) -> &'static str {
		"Point"
	}

	fn dimensions(&self) -> u8 {
		0
	}

	fn bound(&self) -> Bound {
		Bound::from_point(self.0)
	}

	fn area(&self) -> f64 {
		0.0
	}

	fn length(&self) -> f64 {
		0.0
	}
}

impl SingleGeometryTrait<MultiPointGeometry> for PointGeometry {
	fn into_multi(self) -> MultiPointGeometry {
		MultiPointGeometry(vec![self])
	}
}

impl Debug for PointGeometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		self.0.fmt(f)
	}
}

impl<T> From<T> for PointGeometry
where
	Coordinates: From<T>,
{
	fn from(value: T) -> Self {
		Self(Coordinates::from(value))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accessors() {
		let p = PointGeometry::from(&[1, 2]);
		assert_eq!((p.x(), p.y()), (1.0, 2.0));
		assert_eq!(p.as_coord(), &Coordinates::new(1.0, 2.0));
	}

	#[test]
	fn geometry_trait() {
		let p = PointGeometry::from([3.0, 7.0]);
		assert_eq!(p.type_name(), "Point");
		assert_eq!(p.dimensions(), 0);
		assert_eq!(p.bound(), Bound::from_edges(3.0, 7.0, 3.0, 7.0));
		assert_eq!(p.area(), 0.0);
		assert_eq!(p.length(), 0.0);
	}

	#[test]
	fn into_multi() {
		let multi = PointGeometry::from(&[5, 6]).into_multi();
		assert_eq!(multi, MultiPointGeometry::from(&[[5, 6]]));
	}

	#[test]
	fn debug() {
		assert_eq!(format!("{:?}", PointGeometry::from(&[1, 2])), "[1.0, 2.0]");
	}
}
