use super::{Simplifier, layer::VectorTileLayer};
use crate::Bound;
use anyhow::{Context, Result};
use planar_core::{
	Blob,
	io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob},
};

/// A vector tile: a list of layers (field 3 of the `Tile` message).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTile {
	pub layers: Vec<VectorTileLayer>,
}

impl VectorTile {
	#[must_use]
	pub fn new(layers: Vec<VectorTileLayer>) -> VectorTile {
		VectorTile { layers }
	}

	pub fn from_blob(blob: &Blob) -> Result<VectorTile> {
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());

		let mut tile = VectorTile::default();
		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(3, 2) => {
					tile.layers.push(
						VectorTileLayer::read(
							reader
								.get_pbf_sub_reader()
								.context("Failed to get PBF sub-reader")?
								.as_mut(),
						)
						.context("Failed to read VectorTileLayer")?,
					);
				}
				(_, w) => reader.skip_pbf_field(w)?,
			}
		}

		Ok(tile)
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		for layer in &self.layers {
			writer.write_pbf_key(3, 2).context("Failed to write PBF key")?;
			writer
				.write_pbf_blob(&layer.to_blob().context("Failed to convert VectorTileLayer to blob")?)
				.context("Failed to write PBF blob")?;
		}

		Ok(writer.into_blob())
	}

	#[must_use]
	pub fn find_layer(&self, name: &str) -> Option<&VectorTileLayer> {
		self.layers.iter().find(|layer| layer.name == name)
	}

	pub fn find_layer_mut(&mut self, name: &str) -> Option<&mut VectorTileLayer> {
		self.layers.iter_mut().find(|layer| layer.name == name)
	}

	pub fn clip(&mut self, bound: &Bound) {
		for layer in &mut self.layers {
			layer.clip(bound);
		}
	}

	pub fn simplify(&mut self, simplifier: &dyn Simplifier) {
		for layer in &mut self.layers {
			layer.simplify(simplifier);
		}
	}

	pub fn remove_empty(&mut self, line_limit: f64, area_limit: f64) {
		for layer in &mut self.layers {
			layer.remove_empty(line_limit, area_limit);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoFeature, Geometry, vector_tile::buffered_bound};
	use pretty_assertions::assert_eq;

	fn example() -> VectorTile {
		let mut water = VectorTileLayer::new_standard("water");
		water.features = vec![GeoFeature::new(Geometry::new_polygon(&[[
			[-100, -100],
			[5000, -100],
			[5000, 5000],
			[-100, 5000],
			[-100, -100],
		]]))];
		let mut places = VectorTileLayer::new(String::from("places"), 512, 2);
		places.features = vec![
			GeoFeature::new(Geometry::new_point([10, 20])).with_id(1),
			GeoFeature::new(Geometry::new_point([-900, 20])).with_id(2),
		];
		VectorTile::new(vec![water, places])
	}

	#[test]
	fn from_to_blob() -> Result<()> {
		let tile1 = example();
		let blob = tile1.to_blob()?;
		let tile2 = VectorTile::from_blob(&blob)?;
		assert_eq!(tile1, tile2);
		assert_eq!(tile2.to_blob()?, blob);
		Ok(())
	}

	#[test]
	fn find_layer() {
		let mut tile = example();
		assert_eq!(tile.find_layer("places").map(|l| l.extent), Some(512));
		assert!(tile.find_layer("roads").is_none());
		tile.find_layer_mut("water").unwrap().features.clear();
		assert!(tile.layers[0].features.is_empty());
	}

	#[test]
	fn clip_applies_to_every_layer() {
		let mut tile = example();
		tile.clip(&buffered_bound(512));
		assert_eq!(tile.layers[0].features.len(), 1);
		assert_eq!(tile.layers[1].features.len(), 1);
		assert_eq!(tile.layers[1].features[0].id, Some(1));
	}

	#[test]
	fn empty_tile() -> Result<()> {
		let tile = VectorTile::from_blob(&Blob::new_empty())?;
		assert!(tile.layers.is_empty());
		assert!(tile.to_blob()?.is_empty());
		Ok(())
	}
}
