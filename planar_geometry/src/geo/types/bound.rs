use super::{Coordinates, GeometryTrait, PolygonGeometry, RingGeometry};
use std::fmt::Debug;

/// An axis aligned rectangle given by its south-west (minimum) and north-east (maximum) corner.
///
/// A bound with `sw.x > ne.x` or `sw.y > ne.y` is *empty* and contains nothing. The *zero* bound,
/// both corners at the origin, is what empty geometries report. Containment and intersection are
/// closed: points on the border are contained, touching bounds intersect.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct Bound {
	pub sw: Coordinates,
	pub ne: Coordinates,
}

impl Bound {
	#[must_use]
	pub const fn new(sw: Coordinates, ne: Coordinates) -> Self {
		Self { sw, ne }
	}

	/// Shorthand for `Bound::new` from `left, bottom, right, top`.
	#[must_use]
	pub const fn from_edges(left: f64, bottom: f64, right: f64, top: f64) -> Self {
		Self::new(Coordinates::new(left, bottom), Coordinates::new(right, top))
	}

	/// A degenerate bound covering exactly one point.
	#[must_use]
	pub fn from_point(p: Coordinates) -> Self {
		Self::new(p, p)
	}

	/// The tight bound of `coords`, or the zero bound if there are none.
	pub fn from_coords<'a, I>(coords: I) -> Self
	where
		I: IntoIterator<Item = &'a Coordinates>,
	{
		let mut iter = coords.into_iter();
		let Some(first) = iter.next() else {
			return Bound::default();
		};
		iter.fold(Bound::from_point(*first), |b, p| b.extend(*p))
	}

	#[must_use]
	pub fn left(&self) -> f64 {
		self.sw.x()
	}

	#[must_use]
	pub fn right(&self) -> f64 {
		self.ne.x()
	}

	#[must_use]
	pub fn bottom(&self) -> f64 {
		self.sw.y()
	}

	#[must_use]
	pub fn top(&self) -> f64 {
		self.ne.y()
	}

	#[must_use]
	pub fn width(&self) -> f64 {
		self.right() - self.left()
	}

	#[must_use]
	pub fn height(&self) -> f64 {
		self.top() - self.bottom()
	}

	#[must_use]
	pub fn center(&self) -> Coordinates {
		Coordinates::new(
			(self.left() + self.right()) / 2.0,
			(self.bottom() + self.top()) / 2.0,
		)
	}

	/// Grows the bound so it contains `p`.
	#[must_use]
	pub fn extend(self, p: Coordinates) -> Self {
		if self.contains(p) {
			return self;
		}
		Self::from_edges(
			self.left().min(p.x()),
			self.bottom().min(p.y()),
			self.right().max(p.x()),
			self.top().max(p.y()),
		)
	}

	/// Grows the bound so it contains all four corners of `other`. Empty bounds are ignored.
	#[must_use]
	pub fn union(self, other: Bound) -> Self {
		if other.is_empty() {
			return self;
		}
		self
			.extend(other.sw)
			.extend(other.ne)
			.extend(Coordinates::new(other.left(), other.top()))
			.extend(Coordinates::new(other.right(), other.bottom()))
	}

	/// The overlapping area of both bounds. The result is empty if they do not intersect.
	#[must_use]
	pub fn intersection(self, other: Bound) -> Self {
		Self::from_edges(
			self.left().max(other.left()),
			self.bottom().max(other.bottom()),
			self.right().min(other.right()),
			self.top().min(other.top()),
		)
	}

	/// Moves every edge outwards by `d`.
	#[must_use]
	pub fn pad(self, d: f64) -> Self {
		Self::from_edges(self.left() - d, self.bottom() - d, self.right() + d, self.top() + d)
	}

	#[must_use]
	pub fn contains(&self, p: Coordinates) -> bool {
		p.y() >= self.bottom() && p.y() <= self.top() && p.x() >= self.left() && p.x() <= self.right()
	}

	#[must_use]
	pub fn intersects(&self, other: &Bound) -> bool {
		!(self.right() < other.left()
			|| self.left() > other.right()
			|| self.top() < other.bottom()
			|| self.bottom() > other.top())
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.left() > self.right() || self.bottom() > self.top()
	}

	#[must_use]
	pub fn is_zero(&self) -> bool {
		*self == Bound::default()
	}

	/// The closed counter-clockwise ring `sw, (right, bottom), ne, (left, top), sw`.
	#[must_use]
	pub fn to_ring(&self) -> RingGeometry {
		RingGeometry(vec![
			self.sw,
			Coordinates::new(self.right(), self.bottom()),
			self.ne,
			Coordinates::new(self.left(), self.top()),
			self.sw,
		])
	}

	#[must_use]
	pub fn to_polygon(&self) -> PolygonGeometry {
		PolygonGeometry(vec![self.to_ring()])
	}
}

impl GeometryTrait for Bound {
	fn type_name(&self) -> &'static str {
		"Polygon"
	}

	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		*self
	}

	fn area(&self) -> f64 {
		if self.is_empty() { 0.0 } else { self.width() * self.height() }
	}

	fn length(&self) -> f64 {
		if self.is_empty() {
			0.0
		} else {
			2.0 * (self.width() + self.height())
		}
	}
}

impl Debug for Bound {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Bound").field("sw", &self.sw).field("ne", &self.ne).finish()
	}
}

impl From<geo::Rect<f64>> for Bound {
	fn from(value: geo::Rect<f64>) -> Self {
		Bound::new(value.min().into(), value.max().into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn unit() -> Bound {
		Bound::from_edges(0.0, 0.0, 1.0, 1.0)
	}

	#[test]
	fn edges_and_center() {
		let b = Bound::from_edges(-1.0, -2.0, 3.0, 4.0);
		assert_eq!((b.left(), b.bottom(), b.right(), b.top()), (-1.0, -2.0, 3.0, 4.0));
		assert_eq!(b.center(), Coordinates::new(1.0, 1.0));
		assert_eq!((b.width(), b.height()), (4.0, 6.0));
	}

	#[rstest]
	#[case(0.5, 0.5, true)]
	#[case(0.0, 0.0, true)]
	#[case(1.0, 0.3, true)]
	#[case(1.0001, 0.3, false)]
	#[case(0.5, -0.1, false)]
	fn contains_is_closed(#[case] x: f64, #[case] y: f64, #[case] expected: bool) {
		assert_eq!(unit().contains(Coordinates::new(x, y)), expected);
	}

	#[test]
	fn touching_bounds_intersect() {
		assert!(unit().intersects(&Bound::from_edges(1.0, 1.0, 2.0, 2.0)));
		assert!(!unit().intersects(&Bound::from_edges(1.1, 0.0, 2.0, 1.0)));
		assert!(unit().intersects(&Bound::from_edges(0.2, 0.2, 0.3, 0.3)));
	}

	#[test]
	fn extend_and_union() {
		let b = unit().extend(Coordinates::new(2.0, -1.0));
		assert_eq!(b, Bound::from_edges(0.0, -1.0, 2.0, 1.0));
		assert_eq!(b.extend(Coordinates::new(0.5, 0.5)), b);

		let u = unit().union(Bound::from_edges(3.0, 3.0, 4.0, 5.0));
		assert_eq!(u, Bound::from_edges(0.0, 0.0, 4.0, 5.0));
		assert_eq!(unit().union(Bound::from_edges(1.0, 1.0, 0.0, 0.0)), unit());
	}

	#[test]
	fn intersection_may_be_empty() {
		let i = unit().intersection(Bound::from_edges(0.5, -1.0, 2.0, 0.5));
		assert_eq!(i, Bound::from_edges(0.5, 0.0, 1.0, 0.5));
		assert!(!i.is_empty());
		assert!(unit().intersection(Bound::from_edges(2.0, 2.0, 3.0, 3.0)).is_empty());
	}

	#[test]
	fn zero_and_empty() {
		assert!(Bound::default().is_zero());
		assert!(!Bound::default().is_empty());
		assert!(Bound::from_edges(1.0, 0.0, 0.0, 1.0).is_empty());
		assert!(!unit().is_zero());
	}

	#[test]
	fn from_coords() {
		let coords = [Coordinates::new(3.0, 1.0), Coordinates::new(-1.0, 2.0), Coordinates::new(0.0, -5.0)];
		assert_eq!(Bound::from_coords(&coords), Bound::from_edges(-1.0, -5.0, 3.0, 2.0));
		assert!(Bound::from_coords(std::iter::empty()).is_zero());
	}

	#[test]
	fn ring_is_ccw_and_closed() {
		let ring = unit().to_ring();
		assert_eq!(ring, RingGeometry::from(&[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]));
		assert_eq!(ring.orientation(), super::super::Orientation::Ccw);
		assert_eq!(unit().to_polygon().0.len(), 1);
	}

	#[test]
	fn geometry_trait() {
		let b = Bound::from_edges(0.0, 0.0, 2.0, 3.0);
		assert_eq!(b.type_name(), "Polygon");
		assert_eq!(b.dimensions(), 2);
		assert_eq!(b.area(), 6.0);
		assert_eq!(b.length(), 10.0);
	}

	#[test]
	fn pad() {
		assert_eq!(unit().pad(1.0), Bound::from_edges(-1.0, -1.0, 2.0, 2.0));
	}
}
