//! A single vector tile layer.
//!
//! The encoding follows the MVT schema:
//!  * field 1: `name` (string)
//!  * field 2: repeated `feature` (embedded message)
//!  * field 3: repeated `keys` (string)
//!  * field 4: repeated `values` (embedded message)
//!  * field 5: `extent` (varint, default 4096)
//!  * field 15: `version` (varint, default 1)

use super::{
	DEFAULT_EXTENT, DEFAULT_VERSION, Simplifier, feature::VectorTileFeature, property_manager::PropertyManager,
	value::GeoValuePBF,
};
use crate::{Bound, GeoFeature, GeoValue, GeometryTrait, clip};
use anyhow::{Context, Result, anyhow};
use byteorder::LE;
use log::debug;
use planar_core::{
	Blob,
	io::{ValueReader, ValueWriter, ValueWriterBlob},
};

/// A named layer of features in tile coordinates.
///
/// Features are held decoded. The key and value tables of the wire format are rebuilt when the
/// layer is written.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorTileLayer {
	pub name: String,
	/// MVT layer version (default 1).
	pub version: u32,
	/// Size of the tile in tile coordinates (default 4096).
	pub extent: u32,
	pub features: Vec<GeoFeature>,
}

impl VectorTileLayer {
	#[must_use]
	pub fn new(name: String, extent: u32, version: u32) -> VectorTileLayer {
		VectorTileLayer {
			name,
			version,
			extent,
			features: vec![],
		}
	}

	/// A layer with `extent = 4096` and `version = 1`.
	#[must_use]
	pub fn new_standard(name: &str) -> VectorTileLayer {
		VectorTileLayer::new(name.to_string(), DEFAULT_EXTENT, DEFAULT_VERSION)
	}

	/// Reads a layer message. Unknown fields are skipped.
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileLayer> {
		let mut extent = DEFAULT_EXTENT;
		let mut features: Vec<VectorTileFeature> = Vec::new();
		let mut name = None;
		let mut keys: Vec<String> = Vec::new();
		let mut values: Vec<GeoValue> = Vec::new();
		let mut version = DEFAULT_VERSION;

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 2) => name = Some(reader.read_pbf_string().context("Failed to read layer name")?),
				(2, 2) => features.push(
					VectorTileFeature::read(
						reader
							.get_pbf_sub_reader()
							.context("Failed to get PBF sub-reader for feature")?
							.as_mut(),
					)
					.context("Failed to read VectorTileFeature")?,
				),
				(3, 2) => keys.push(reader.read_pbf_string().context("Failed to read property key")?),
				(4, 2) => values.push(
					GeoValue::read(
						reader
							.get_pbf_sub_reader()
							.context("Failed to get PBF sub-reader for property value")?
							.as_mut(),
					)
					.context("Failed to read GeoValue")?,
				),
				(5, 0) => extent = u32::try_from(reader.read_varint().context("Failed to read extent")?)?,
				(15, 0) => version = u32::try_from(reader.read_varint().context("Failed to read version")?)?,
				(_, w) => reader.skip_pbf_field(w)?,
			}
		}

		let name = name
			.ok_or(anyhow!("Layer name is required"))
			.context("Failed to get layer name")?;

		let property_manager = PropertyManager {
			key: keys.into(),
			val: values.into(),
		};
		let features = features
			.iter()
			.map(|f| f.to_feature(&property_manager))
			.collect::<Result<Vec<GeoFeature>>>()
			.with_context(|| format!("Failed to decode features of layer '{name}'"))?;

		Ok(VectorTileLayer {
			name,
			version,
			extent,
			features,
		})
	}

	/// Serializes the layer into a protobuf message.
	///
	/// Writes name, features, key/value tables, and non-default `extent`/`version`.
	pub fn to_blob(&self) -> Result<Blob> {
		let mut property_manager = PropertyManager::from_iter(self.features.iter().map(|f| &f.properties))?;
		let features = self
			.features
			.iter()
			.map(|f| VectorTileFeature::from_feature(f.clone(), &mut property_manager))
			.collect::<Result<Vec<VectorTileFeature>>>()
			.with_context(|| format!("Failed to encode features of layer '{}'", self.name))?;

		let mut writer = ValueWriterBlob::new_le();

		writer
			.write_pbf_key(1, 2)
			.context("Failed to write PBF key for layer name")?;
		writer
			.write_pbf_string(&self.name)
			.context("Failed to write layer name")?;

		for feature in &features {
			writer
				.write_pbf_key(2, 2)
				.context("Failed to write PBF key for feature")?;
			writer
				.write_pbf_blob(&feature.to_blob().context("Failed to convert feature to blob")?)
				.context("Failed to write feature blob")?;
		}

		for key in property_manager.iter_key() {
			writer
				.write_pbf_key(3, 2)
				.context("Failed to write PBF key for property key")?;
			writer.write_pbf_string(key).context("Failed to write property key")?;
		}

		for value in property_manager.iter_val() {
			writer
				.write_pbf_key(4, 2)
				.context("Failed to write PBF key for property value")?;
			writer
				.write_pbf_blob(&value.to_blob().context("Failed to convert property value to blob")?)
				.context("Failed to write property value blob")?;
		}

		if self.extent != DEFAULT_EXTENT {
			writer
				.write_pbf_key(5, 0)
				.context("Failed to write PBF key for extent")?;
			writer
				.write_varint(u64::from(self.extent))
				.context("Failed to write extent")?;
		}

		if self.version != DEFAULT_VERSION {
			writer
				.write_pbf_key(15, 0)
				.context("Failed to write PBF key for version")?;
			writer
				.write_varint(u64::from(self.version))
				.context("Failed to write version")?;
		}

		Ok(writer.into_blob())
	}

	/// Clips every geometry to `bound` and drops the features that end up empty.
	pub fn clip(&mut self, bound: &Bound) {
		let before = self.features.len();
		self.features.retain_mut(|feature| match clip::geometry(bound, &feature.geometry) {
			Some(geometry) => {
				feature.geometry = geometry;
				true
			}
			None => false,
		});
		debug!(
			"clipped layer '{}': kept {} of {before} features",
			self.name,
			self.features.len()
		);
	}

	/// Replaces every geometry by its simplified version.
	pub fn simplify(&mut self, simplifier: &dyn Simplifier) {
		for feature in &mut self.features {
			feature.geometry = simplifier.simplify(&feature.geometry);
		}
	}

	/// Drops lines shorter than `line_limit`, areas smaller than `area_limit` and empty points.
	pub fn remove_empty(&mut self, line_limit: f64, area_limit: f64) {
		let before = self.features.len();
		self.features.retain(|feature| {
			let g = &feature.geometry;
			match g.dimensions() {
				0 => !g.is_empty(),
				1 => g.length() >= line_limit,
				_ => g.area() >= area_limit,
			}
		});
		debug!(
			"removed {} empty features from layer '{}'",
			before - self.features.len(),
			self.name
		);
	}
}
