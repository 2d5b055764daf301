//! Mapbox Vector Tile (MVT) support.
//!
//! - [`encode_geometry`] and [`decode_geometry`] translate between geometries and the command
//!   streams of vector tile features.
//! - [`VectorTileLayer`] holds decoded features of one layer; the key/value tables of the wire
//!   format are handled internally.
//! - [`VectorTile`] is the top-level container of layers.

mod feature;
mod geometry;
mod geometry_type;
mod layer;
mod property_manager;
mod tile;
mod value;

pub use feature::VectorTileFeature;
pub use geometry::{decode_geometry, encode_geometry};
pub use geometry_type::GeomType;
pub use layer::VectorTileLayer;
pub use property_manager::{PropertyManager, VTLPMap};
pub use tile::VectorTile;
pub use value::GeoValuePBF;

use crate::{Bound, Geometry};

pub const DEFAULT_EXTENT: u32 = 4096;
pub const DEFAULT_VERSION: u32 = 1;

/// Reduces the detail of geometries, e.g. for lower zoom levels.
pub trait Simplifier {
	fn simplify(&self, geometry: &Geometry) -> Geometry;
}

/// The clip bound of a tile with a buffer of one tile size on every side:
/// `[-extent, 2 * extent - 1]` on both axes.
#[must_use]
pub fn buffered_bound(extent: u32) -> Bound {
	let e = f64::from(extent);
	Bound::from_edges(-e, -e, 2.0 * e - 1.0, 2.0 * e - 1.0)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn buffered_bound_of_default_extent() {
		assert_eq!(
			buffered_bound(DEFAULT_EXTENT),
			Bound::from_edges(-4096.0, -4096.0, 8191.0, 8191.0)
		);
	}
}
