use super::{Bound, Coordinates, GeometryTrait, MultiLineStringGeometry, SingleGeometryTrait};

/// An ordered sequence of positions connected by straight segments.
#[derive(Clone, Default, PartialEq)]
pub struct LineStringGeometry(pub Vec<Coordinates>);

impl LineStringGeometry {
	/// Reverses the order of the positions in place.
	pub fn reverse(&mut self) {
		self.0.reverse();
	}
}

impl GeometryTrait for LineStringGeometry {
	fn type_name(&self) -> &'static str {
		"LineString"
	}

	fn dimensions(&self) -> u8 {
		1
	}

	fn bound(&self) -> Bound {
		Bound::from_coords(&self.0)
	}

	fn area(&self) -> f64 {
		0.0
	}

	fn length(&self) -> f64 {
		self.0.windows(2).map(|w| w[0].distance(&w[1])).sum()
	}
}

impl SingleGeometryTrait<MultiLineStringGeometry> for LineStringGeometry {
	fn into_multi(self) -> MultiLineStringGeometry {
		MultiLineStringGeometry(vec![self])
	}
}

crate::impl_composite_geometry!(LineStringGeometry, Coordinates);

impl From<geo::LineString<f64>> for LineStringGeometry {
	fn from(value: geo::LineString<f64>) -> Self {
		value.into_iter().map(Coordinates::from).collect()
	}
}

impl From<LineStringGeometry> for geo::LineString<f64> {
	fn from(value: LineStringGeometry) -> Self {
		geo::LineString::new(value.0.into_iter().map(geo::Coord::from).collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn length_and_bound() {
		let line = LineStringGeometry::from(&[[0, 0], [3, 4], [3, 10]]);
		assert_eq!(line.length(), 11.0);
		assert_eq!(line.bound(), Bound::from_edges(0.0, 0.0, 3.0, 10.0));
		assert_eq!(line.area(), 0.0);
		assert_eq!(LineStringGeometry::new().length(), 0.0);
	}

	#[test]
	fn reverse() {
		let mut line = LineStringGeometry::from(&[[0, 0], [1, 2]]);
		line.reverse();
		assert_eq!(line, LineStringGeometry::from(&[[1, 2], [0, 0]]));
	}

	#[test]
	fn geo_round_trip() {
		let line = LineStringGeometry::from(&[[1, 2], [3, 4]]);
		let converted: geo::LineString<f64> = line.clone().into();
		assert_eq!(converted.0.len(), 2);
		assert_eq!(LineStringGeometry::from(converted), line);
	}

	#[test]
	fn into_multi() {
		let multi = LineStringGeometry::from(&[[0, 0], [1, 1]]).into_multi();
		assert_eq!(multi.len(), 1);
		assert_eq!(multi.dimensions(), 1);
	}
}
