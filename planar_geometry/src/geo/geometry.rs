use super::*;
use std::fmt::Debug;

/// Any geometry kind.
///
/// `Ring` and `Bound` are first-class members so that clipping and decoding can return exactly
/// what they produced; the WKB and MVT encoders write both in their polygon form.
#[derive(Clone, PartialEq)]
pub enum Geometry {
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Ring(RingGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Bound(Bound),
	Collection(CollectionGeometry),
}

impl Geometry {
	pub fn new_point<T>(value: T) -> Self
	where
		Coordinates: From<T>,
	{
		Self::Point(PointGeometry(Coordinates::from(value)))
	}

	pub fn new_multi_point<T>(value: T) -> Self
	where
		MultiPointGeometry: From<T>,
	{
		Self::MultiPoint(MultiPointGeometry::from(value))
	}

	pub fn new_line_string<T>(value: T) -> Self
	where
		LineStringGeometry: From<T>,
	{
		Self::LineString(LineStringGeometry::from(value))
	}

	pub fn new_multi_line_string<T>(value: T) -> Self
	where
		MultiLineStringGeometry: From<T>,
	{
		Self::MultiLineString(MultiLineStringGeometry::from(value))
	}

	pub fn new_ring<T>(value: T) -> Self
	where
		RingGeometry: From<T>,
	{
		Self::Ring(RingGeometry::from(value))
	}

	pub fn new_polygon<T>(value: T) -> Self
	where
		PolygonGeometry: From<T>,
	{
		Self::Polygon(PolygonGeometry::from(value))
	}

	pub fn new_multi_polygon<T>(value: T) -> Self
	where
		MultiPolygonGeometry: From<T>,
	{
		Self::MultiPolygon(MultiPolygonGeometry::from(value))
	}

	/// Whether the geometry has no positions at all. A `Bound` is never empty in this sense.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		match self {
			Geometry::Point(_) | Geometry::Bound(_) => false,
			Geometry::MultiPoint(g) => g.0.is_empty(),
			Geometry::LineString(g) => g.0.is_empty(),
			Geometry::MultiLineString(g) => g.0.iter().all(|l| l.0.is_empty()),
			Geometry::Ring(g) => g.0.is_empty(),
			Geometry::Polygon(g) => g.0.iter().all(|r| r.0.is_empty()),
			Geometry::MultiPolygon(g) => g.0.iter().all(|p| p.0.iter().all(|r| r.0.is_empty())),
			Geometry::Collection(g) => g.0.iter().all(Geometry::is_empty),
		}
	}

	/// Wraps single geometries into their multi counterpart. Others are returned unchanged.
	#[must_use]
	pub fn into_multi(self) -> Self {
		match self {
			Geometry::Point(g) => Geometry::MultiPoint(g.into_multi()),
			Geometry::LineString(g) => Geometry::MultiLineString(g.into_multi()),
			Geometry::Polygon(g) => Geometry::MultiPolygon(g.into_multi()),
			other => other,
		}
	}

	fn inner(&self) -> &dyn Debug {
		match self {
			Geometry::Point(g) => g,
			Geometry::MultiPoint(g) => g,
			Geometry::LineString(g) => g,
			Geometry::MultiLineString(g) => g,
			Geometry::Ring(g) => g,
			Geometry::Polygon(g) => g,
			Geometry::MultiPolygon(g) => g,
			Geometry::Bound(g) => g,
			Geometry::Collection(g) => g,
		}
	}

	fn variant_name(&self) -> &'static str {
		match self {
			Geometry::Ring(_) => "Ring",
			Geometry::Bound(_) => "Bound",
			Geometry::Collection(_) => "Collection",
			g => g.type_name(),
		}
	}
}

impl GeometryTrait for Geometry {
	fn type_name(&self) -> &'static str {
		match self {
			Geometry::Point(g) => g.type_name(),
			Geometry::MultiPoint(g) => g.type_name(),
			Geometry::LineString(g) => g.type_name(),
			Geometry::MultiLineString(g) => g.type_name(),
			Geometry::Ring(g) => g.type_name(),
			Geometry::Polygon(g) => g.type_name(),
			Geometry::MultiPolygon(g) => g.type_name(),
			Geometry::Bound(g) => g.type_name(),
			Geometry::Collection(g) => g.type_name(),
		}
	}

	fn dimensions(&self) -> u8 {
		match self {
			Geometry::Point(g) => g.dimensions(),
			Geometry::MultiPoint(g) => g.dimensions(),
			Geometry::LineString(g) => g.dimensions(),
			Geometry::MultiLineString(g) => g.dimensions(),
			Geometry::Ring(g) => g.dimensions(),
			Geometry::Polygon(g) => g.dimensions(),
			Geometry::MultiPolygon(g) => g.dimensions(),
			Geometry::Bound(g) => g.dimensions(),
			Geometry::Collection(g) => g.dimensions(),
		}
	}

	fn bound(&self) -> Bound {
		match self {
			Geometry::Point(g) => g.bound(),
			Geometry::MultiPoint(g) => g.bound(),
			Geometry::LineString(g) => g.bound(),
			Geometry::MultiLineString(g) => g.bound(),
			Geometry::Ring(g) => g.bound(),
			Geometry::Polygon(g) => g.bound(),
			Geometry::MultiPolygon(g) => g.bound(),
			Geometry::Bound(g) => g.bound(),
			Geometry::Collection(g) => g.bound(),
		}
	}

	fn area(&self) -> f64 {
		match self {
			Geometry::Point(g) => g.area(),
			Geometry::MultiPoint(g) => g.area(),
			Geometry::LineString(g) => g.area(),
			Geometry::MultiLineString(g) => g.area(),
			Geometry::Ring(g) => g.area(),
			Geometry::Polygon(g) => g.area(),
			Geometry::MultiPolygon(g) => g.area(),
			Geometry::Bound(g) => g.area(),
			Geometry::Collection(g) => g.area(),
		}
	}

	fn length(&self) -> f64 {
		match self {
			Geometry::Point(g) => g.length(),
			Geometry::MultiPoint(g) => g.length(),
			Geometry::LineString(g) => g.length(),
			Geometry::MultiLineString(g) => g.length(),
			Geometry::Ring(g) => g.length(),
			Geometry::Polygon(g) => g.length(),
			Geometry::MultiPolygon(g) => g.length(),
			Geometry::Bound(g) => g.length(),
			Geometry::Collection(g) => g.length(),
		}
	}
}

impl Debug for Geometry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_tuple(self.variant_name()).field(self.inner()).finish()
	}
}

macro_rules! impl_from_kind {
	($($variant:ident($t:ty)),*) => {$(
		impl From<$t> for Geometry {
			fn from(value: $t) -> Self {
				Geometry::$variant(value)
			}
		}
	)*};
}

impl_from_kind!(
	Point(PointGeometry),
	MultiPoint(MultiPointGeometry),
	LineString(LineStringGeometry),
	MultiLineString(MultiLineStringGeometry),
	Ring(RingGeometry),
	Polygon(PolygonGeometry),
	MultiPolygon(MultiPolygonGeometry),
	Bound(Bound),
	Collection(CollectionGeometry)
);

impl From<&Geometry> for Geometry {
	fn from(value: &Geometry) -> Self {
		value.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Geometry::new_point([1, 2]), "Point", 0)]
	#[case(Geometry::new_multi_point(&[[1, 2]]), "MultiPoint", 0)]
	#[case(Geometry::new_line_string(&[[1, 2], [3, 4]]), "LineString", 1)]
	#[case(Geometry::new_multi_line_string(&[vec![[1, 2], [3, 4]]]), "MultiLineString", 1)]
	#[case(Geometry::new_ring(&[[0, 0], [1, 0], [1, 1], [0, 0]]), "Polygon", 2)]
	#[case(Geometry::new_polygon(&[vec![[0, 0], [1, 0], [1, 1], [0, 0]]]), "Polygon", 2)]
	#[case(Geometry::new_multi_polygon(&[vec![vec![[0, 0], [1, 0], [1, 1], [0, 0]]]]), "MultiPolygon", 2)]
	#[case(Geometry::Bound(Bound::from_edges(0.0, 0.0, 1.0, 1.0)), "Polygon", 2)]
	#[case(Geometry::Collection(CollectionGeometry::default()), "GeometryCollection", 0)]
	fn type_names_and_dimensions(#[case] g: Geometry, #[case] name: &str, #[case] dims: u8) {
		assert_eq!(g.type_name(), name);
		assert_eq!(g.dimensions(), dims);
	}

	#[test]
	fn equality_is_order_sensitive() {
		let a = Geometry::new_line_string(&[[0, 0], [1, 1]]);
		let b = Geometry::new_line_string(&[[1, 1], [0, 0]]);
		assert_ne!(a, b);
		assert_eq!(a, a.clone());
	}

	#[test]
	fn debug_names_variant() {
		let g = Geometry::new_ring(&[[0, 0], [1, 0]]);
		assert_eq!(format!("{g:?}"), "Ring([[0.0, 0.0], [1.0, 0.0]])");
		let p = Geometry::new_point([1, 2]);
		assert_eq!(format!("{p:?}"), "Point([1.0, 2.0])");
	}

	#[test]
	fn into_multi() {
		let g = Geometry::new_point([1, 2]).into_multi();
		assert_eq!(g, Geometry::new_multi_point(&[[1, 2]]));
		let ring = Geometry::new_ring(&[[0, 0], [1, 0]]);
		assert_eq!(ring.clone().into_multi(), ring);
	}

	#[test]
	fn emptiness() {
		assert!(Geometry::new_line_string(Vec::<Coordinates>::new()).is_empty());
		assert!(Geometry::new_polygon(vec![RingGeometry::default()]).is_empty());
		assert!(!Geometry::new_point([0, 0]).is_empty());
		assert!(Geometry::Collection(CollectionGeometry::default()).is_empty());
	}
}
