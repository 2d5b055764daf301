use super::{Bound, GeometryTrait, PolygonGeometry};

/// An ordered set of polygons.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPolygonGeometry(pub Vec<PolygonGeometry>);

impl GeometryTrait for MultiPolygonGeometry {
	fn type_name(&self) -> &'static str {
		"MultiPolygon"
	}

	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		let mut polygons = self
			.0
			.iter()
			.filter(|polygon| polygon.outer().is_some_and(|ring| !ring.0.is_empty()));
		let Some(first) = polygons.next() else {
			return Bound::default();
		};
		polygons.fold(first.bound(), |b, polygon| b.union(polygon.bound()))
	}

	fn area(&self) -> f64 {
		self.0.iter().map(PolygonGeometry::area).sum()
	}

	fn length(&self) -> f64 {
		self.0.iter().map(PolygonGeometry::length).sum()
	}
}

crate::impl_composite_geometry!(MultiPolygonGeometry, PolygonGeometry);

impl From<geo::MultiPolygon<f64>> for MultiPolygonGeometry {
	fn from(value: geo::MultiPolygon<f64>) -> Self {
		value.into_iter().map(PolygonGeometry::from).collect()
	}
}
