use super::{Bound, Coordinates, GeometryTrait, Orientation};

/// A ring of positions, the boundary of an area.
///
/// Rings are usually *closed*: the last position repeats the first one. Open rings are accepted
/// as well and treated as if the closing segment were present.
#[derive(Clone, Default, PartialEq)]
pub struct RingGeometry(pub Vec<Coordinates>);

impl RingGeometry {
	/// Whether the ring is non-empty and its first and last position are equal.
	#[must_use]
	pub fn is_closed(&self) -> bool {
		!self.0.is_empty() && self.0.first() == self.0.last()
	}

	/// Appends the first position if the ring is not closed yet.
	pub fn close(&mut self) {
		let Some(&first) = self.0.first() else {
			return;
		};
		if self.0.last() != Some(&first) {
			self.0.push(first);
		}
	}

	/// Shoelace area, positive for counter-clockwise rings. The closing segment is always
	/// included, whether or not the ring repeats its first position.
	#[must_use]
	pub fn signed_area(&self) -> f64 {
		let Some(mut prev) = self.0.last() else {
			return 0.0;
		};
		let mut sum = 0.0;
		for p in &self.0 {
			sum += prev.x() * p.y() - p.x() * prev.y();
			prev = p;
		}
		sum / 2.0
	}

	/// Winding direction. Rings with zero area count as clockwise.
	#[must_use]
	pub fn orientation(&self) -> Orientation {
		if self.0.len() < 3 {
			return Orientation::Undefined;
		}
		if self.signed_area() > 0.0 {
			Orientation::Ccw
		} else {
			Orientation::Cw
		}
	}

	/// Reverses the order of the positions in place, flipping the orientation.
	pub fn reverse(&mut self) {
		self.0.reverse();
	}
}

impl GeometryTrait for RingGeometry {
	fn type_name(&self) -> &'static str {
		"Polygon"
	}

	fn dimensions(&self) -> u8 {
		2
	}

	fn bound(&self) -> Bound {
		Bound::from_coords(&self.0)
	}

	fn area(&self) -> f64 {
		self.signed_area().abs()
	}

	fn length(&self) -> f64 {
		let open: f64 = self.0.windows(2).map(|w| w[0].distance(&w[1])).sum();
		match (self.0.first(), self.0.last()) {
			(Some(first), Some(last)) => open + last.distance(first),
			_ => 0.0,
		}
	}
}

crate::impl_composite_geometry!(RingGeometry, Coordinates);

impl From<geo::LineString<f64>> for RingGeometry {
	fn from(value: geo::LineString<f64>) -> Self {
		value.into_iter().map(Coordinates::from).collect()
	}
}
