use super::{Bound, GeometryTrait, LineStringGeometry};

/// An ordered set of line strings.
#[derive(Clone, Default, PartialEq)]
pub struct MultiLineStringGeometry(pub Vec<LineStringGeometry>);

impl GeometryTrait for MultiLineStringGeometry {
	fn type_name(&self) -> &'static str {
		"MultiLineString"
	}

	fn dimensions(&self) -> u8 {
		1
	}

	fn bound(&self) -> Bound {
		let mut lines = self.0.iter().filter(|line| !line.0.is_empty());
		let Some(first) = lines.next() else {
			return Bound::default();
		};
		lines.fold(first.bound(), |b, line| b.union(line.bound()))
	}

	fn area(&self) -> f64 {
		0.0
	}

	fn length(&self) -> f64 {
		self.0.iter().map(LineStringGeometry::length).sum()
	}
}

crate::impl_composite_geometry!(MultiLineStringGeometry, LineStringGeometry);

#[cfg(test)]
mod tests {
	use super::*;
	use crate::CompositeGeometryTrait;

	#[test]
	fn bound_and_length() {
		let mls = MultiLineStringGeometry::from(&[vec![[0, 0], [0, 2]], vec![[5, 5], [8, 9]]]);
		assert_eq!(mls.bound(), Bound::from_edges(0.0, 0.0, 8.0, 9.0));
		assert_eq!(mls.length(), 7.0);
		assert!(MultiLineStringGeometry::new().bound().is_zero());
	}

	#[test]
	fn empty_lines_do_not_widen_bound() {
		let mls = MultiLineStringGeometry::from(&[vec![[10, 10], [20, 20]], vec![]]);
		assert_eq!(mls.bound(), Bound::from_edges(10.0, 10.0, 20.0, 20.0));
		let mls = MultiLineStringGeometry::from(&[vec![], vec![[-3, 4], [-1, 6]]]);
		assert_eq!(mls.bound(), Bound::from_edges(-3.0, 4.0, -1.0, 6.0));
	}

	#[test]
	fn debug() {
		let mls = MultiLineStringGeometry::from(&[vec![[1, 2], [3, 4]]]);
		assert_eq!(format!("{mls:?}"), "[[[1.0, 2.0], [3.0, 4.0]]]");
	}
}
