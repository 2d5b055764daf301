use super::{Bound, GeometryTrait, MultiPolygonGeometry, RingGeometry, SingleGeometryTrait};

/// A polygon: the first ring is the outer boundary, any further rings are holes.
///
/// Ring orientation is not enforced here; encoders that depend on it (MVT) take care of it.
#[derive(Clone, Default, PartialEq)]
pub struct PolygonGeometry(pub Vec<RingGeometry>);

impl PolygonGeometry {
	#[must_use]
	pub fn outer(&self) -> Option<&RingGeometry> {
		self.0.first()
	}

	pub fn holes(&self) -> impl Iterator<Item = &RingGeometry> {
		self.0.iter().skip(1)
	}
}

impl GeometryTrait for PolygonGeometry {
	fn type_name(&self) -> &'static str {
		"Polygon"
	}

	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		self.outer().map(RingGeometry::bound).unwrap_or_default()
	}

	fn area(&self) -> f64 {
		let Some(outer) = self.outer() else {
			return 0.0;
		};
		outer.area() - self.holes().map(RingGeometry::area).sum::<f64>()
	}

	fn length(&self) -> f64 {
		self.0.iter().map(RingGeometry::length).sum()
	}
}

impl SingleGeometryTrait<MultiPolygonGeometry> for PolygonGeometry {
	fn into_multi(self) -> MultiPolygonGeometry {
		MultiPolygonGeometry(vec![self])
	}
}

crate::impl_composite_geometry!(PolygonGeometry, RingGeometry);

impl From<geo::Polygon<f64>> for PolygonGeometry {
	fn from(value: geo::Polygon<f64>) -> Self {
		let (exterior, interiors) = value.into_inner();
		std::iter::once(exterior)
			.chain(interiors)
			.map(RingGeometry::from)
			.collect()
	}
}

impl From<PolygonGeometry> for geo::Polygon<f64> {
	fn from(value: PolygonGeometry) -> Self {
		let mut rings = value.0.into_iter().map(|ring| {
			geo::LineString::new(ring.0.into_iter().map(geo::Coord::from).collect())
		});
		let exterior = rings.next().unwrap_or_else(|| geo::LineString::new(vec![]));
		geo::Polygon::new(exterior, rings.collect())
	}
}
