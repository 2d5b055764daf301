use super::Bound;
use std::fmt::Debug;

/// Behaviour shared by every geometry kind.
pub trait GeometryTrait: Debug + Clone {
	/// The OGC type name. Rings and bounds report `"Polygon"`.
	fn type_name(&self) -> &'static str;

	/// Topological dimension: 0 for points, 1 for lines, 2 for areal kinds.
	fn dimensions(&self) -> u8;

	/// The tight bound, or the zero bound for an empty geometry.
	fn bound(&self) -> Bound;

	/// Unsigned planar area. Zero for points and lines.
	fn area(&self) -> f64;

	/// Planar length. Rings and polygons report their perimeter, points zero.
	fn length(&self) -> f64;
}

/// Geometries that have a multi counterpart, e.g. a point wraps into a multi point.
pub trait SingleGeometryTrait<Multi>: Debug + Clone {
	fn into_multi(self) -> Multi;
}

/// Geometries that are an ordered sequence of simpler items.
pub trait CompositeGeometryTrait<Item>: Debug + Clone {
	fn new() -> Self;

	fn as_vec(&self) -> &Vec<Item>;

	fn as_mut_vec(&mut self) -> &mut Vec<Item>;

	fn into_inner(self) -> Vec<Item>;

	fn iter(&self) -> std::slice::Iter<'_, Item> {
		self.as_vec().iter()
	}

	fn is_empty(&self) -> bool {
		self.as_vec().is_empty()
	}

	fn len(&self) -> usize {
		self.as_vec().len()
	}

	fn push(&mut self, item: Item) {
		self.as_mut_vec().push(item);
	}

	fn clear(&mut self) {
		self.as_mut_vec().clear();
	}

	fn first(&self) -> Option<&Item> {
		self.as_vec().first()
	}

	fn last(&self) -> Option<&Item> {
		self.as_vec().last()
	}
}
