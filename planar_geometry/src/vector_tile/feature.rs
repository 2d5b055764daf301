use super::{GeomType, decode_geometry, encode_geometry, property_manager::PropertyManager};
use crate::GeoFeature;
use anyhow::{Context, Result};
use byteorder::LE;
use planar_core::{
	Blob,
	io::{ValueReader, ValueWriter, ValueWriterBlob},
};

/// A feature as stored in a layer: tag ids into the layer tables and the raw command stream.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VectorTileFeature {
	pub id: Option<u64>,
	pub tag_ids: Vec<u32>,
	pub geom_type: GeomType,
	pub geom_data: Vec<u32>,
}

impl VectorTileFeature {
	pub fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<VectorTileFeature> {
		let mut f = VectorTileFeature::default();

		while reader.has_remaining() {
			match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 0) => f.id = Some(reader.read_varint().context("Failed to read feature ID")?),
				(2, 2) => f.tag_ids = reader.read_pbf_packed_uint32().context("Failed to read tag IDs")?,
				(3, 0) => f.geom_type = GeomType::from(reader.read_varint().context("Failed to read geometry type")?),
				(4, 2) => {
					f.geom_data = reader
						.read_pbf_packed_uint32()
						.context("Failed to read geometry data")?
				}
				(_, w) => reader.skip_pbf_field(w)?,
			}
		}

		Ok(f)
	}

	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		if let Some(id) = self.id {
			writer
				.write_pbf_key(1, 0)
				.context("Failed to write PBF key for feature ID")?;
			writer.write_varint(id).context("Failed to write feature ID")?;
		}

		if !self.tag_ids.is_empty() {
			writer
				.write_pbf_key(2, 2)
				.context("Failed to write PBF key for tag IDs")?;
			writer
				.write_pbf_packed_uint32(&self.tag_ids)
				.context("Failed to write tag IDs")?;
		}

		writer
			.write_pbf_key(3, 0)
			.context("Failed to write PBF key for geometry type")?;
		writer
			.write_varint(self.geom_type.as_u64())
			.context("Failed to write geometry type")?;

		if !self.geom_data.is_empty() {
			writer
				.write_pbf_key(4, 2)
				.context("Failed to write PBF key for geometry data")?;
			writer
				.write_pbf_packed_uint32(&self.geom_data)
				.context("Failed to write geometry data")?;
		}

		Ok(writer.into_blob())
	}

	pub fn from_feature(feature: GeoFeature, property_manager: &mut PropertyManager) -> Result<VectorTileFeature> {
		let (geom_type, geom_data) = encode_geometry(&feature.geometry).context("Failed to encode geometry")?;
		Ok(VectorTileFeature {
			id: feature.id,
			tag_ids: property_manager.encode_tag_ids(feature.properties)?,
			geom_type,
			geom_data,
		})
	}

	pub fn to_feature(&self, property_manager: &PropertyManager) -> Result<GeoFeature> {
		let geometry = decode_geometry(self.geom_type, &self.geom_data).context("Failed to decode geometry")?;
		Ok(GeoFeature {
			id: self.id,
			geometry,
			properties: property_manager.decode_tag_ids(&self.tag_ids)?,
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{GeoProperties, Geometry};
	use planar_core::io::ValueReaderSlice;
	use pretty_assertions::assert_eq;

	#[test]
	fn blob_round_trip() -> Result<()> {
		let feature = VectorTileFeature {
			id: Some(7),
			tag_ids: vec![0, 1],
			geom_type: GeomType::Point,
			geom_data: vec![9, 50, 34],
		};
		let blob = feature.to_blob()?;
		assert_eq!(
			blob.as_slice(),
			&[0x08, 7, 0x12, 2, 0, 1, 0x18, 1, 0x22, 3, 9, 50, 34]
		);
		let mut reader = ValueReaderSlice::new_le(blob.as_slice());
		assert_eq!(VectorTileFeature::read(&mut reader)?, feature);
		Ok(())
	}

	#[test]
	fn unknown_fields_are_skipped() -> Result<()> {
		let data = [0x08, 7, 0x2a, 2, 0xff, 0xff, 0x18, 2];
		let mut reader = ValueReaderSlice::new_le(&data);
		let feature = VectorTileFeature::read(&mut reader)?;
		assert_eq!(feature.id, Some(7));
		assert_eq!(feature.geom_type, GeomType::LineString);
		Ok(())
	}

	#[test]
	fn geo_feature_round_trip() -> Result<()> {
		let mut properties = GeoProperties::new();
		properties.insert("name", "road");
		let feature = GeoFeature::new(Geometry::new_line_string(&[[0, 0], [5, 5]]))
			.with_id(3)
			.with_properties(properties);

		let mut pm = PropertyManager::new();
		let vt_feature = VectorTileFeature::from_feature(feature.clone(), &mut pm)?;
		assert_eq!(vt_feature.geom_type, GeomType::LineString);
		assert_eq!(vt_feature.to_feature(&pm)?, feature);
		Ok(())
	}
}
