use super::{Bound, GeometryTrait, PointGeometry};

/// An ordered set of points.
#[derive(Clone, Default, PartialEq)]
pub struct MultiPointGeometry(pub Vec<PointGeometry>);

impl GeometryTrait for MultiPointGeometry {
	fn type_name(&self) -> &'static str {
		"MultiPoint"
	}

	fn dimensions(&self) -> u8 {
		0
	}

	fn bound(&self) -> Bound {
		Bound::from_coords(self.0.iter().map(PointGeometry::as_coord))
	}

	fn area(&self) -> f64 {
		0.0
	}

	fn length(&self) -> f64 {
		0.0
	}
}

crate::impl_composite_geometry!(MultiPointGeometry, PointGeometry);
