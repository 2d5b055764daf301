use super::{Bound, GeometryTrait};
use crate::Geometry;

/// A heterogeneous, possibly nested, list of geometries.
#[derive(Clone, Default, PartialEq)]
pub struct CollectionGeometry(pub Vec<Geometry>);

impl GeometryTrait for CollectionGeometry {
	fn type_name(&self) -> &'static str {
		"GeometryCollection"
	}

	/// The highest dimension among the members, 0 when empty.
	fn dimensions(&self) -> u8 {
		self.0.iter().map(Geometry::dimensions).max().unwrap_or(0)
	}

	fn bound(&self) -> Bound {
		let mut members = self.0.iter().filter(|g| !g.is_empty());
		let Some(first) = members.next() else {
			return Bound::default();
		};
		members.fold(first.bound(), |b, g| b.union(g.bound()))
	}

	fn area(&self) -> f64 {
		self.0.iter().map(Geometry::area).sum()
	}

	fn length(&self) -> f64 {
		self.0.iter().map(Geometry::length).sum()
	}
}

crate::impl_composite_geometry!(CollectionGeometry, Geometry);
