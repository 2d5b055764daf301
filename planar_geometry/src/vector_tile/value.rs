//! Property values in the vector tile wire format (`Tile.Value`).
//!
//! Exactly one of these fields is set per value: 1 string, 2 float, 3 double, 4 int64,
//! 5 uint64, 6 sint64, 7 bool.

use crate::{GeoValue, GeometryError};
use anyhow::{Context, Result, anyhow, bail};
use byteorder::LE;
use planar_core::{
	Blob,
	io::{ValueReader, ValueWriter, ValueWriterBlob},
};

pub trait GeoValuePBF {
	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<GeoValue>;
	fn to_blob(&self) -> Result<Blob>;
	fn into_encodable(self) -> Result<GeoValue>;
}

impl GeoValuePBF for GeoValue {
	/// Numbers of every width are read as `Double`.
	fn read(reader: &mut dyn ValueReader<'_, LE>) -> Result<GeoValue> {
		use GeoValue::*;
		let mut value: Option<GeoValue> = None;

		while reader.has_remaining() {
			value = Some(match reader.read_pbf_key().context("Failed to read PBF key")? {
				(1, 2) => String(reader.read_pbf_string().context("Failed to read string value")?),
				(2, 5) => Double(f64::from(reader.read_f32().context("Failed to read f32 value")?)),
				(3, 1) => Double(reader.read_f64().context("Failed to read f64 value")?),
				(4, 0) => Double(reader.read_varint().context("Failed to read varint for int value")? as i64 as f64),
				(5, 0) => Double(reader.read_varint().context("Failed to read varint for uint value")? as f64),
				(6, 0) => Double(reader.read_svarint().context("Failed to read svarint value")? as f64),
				(7, 0) => Bool(reader.read_varint().context("Failed to read varint for bool value")? != 0),
				(_, w) => {
					reader.skip_pbf_field(w)?;
					continue;
				}
			})
		}
		value
			.ok_or_else(|| anyhow!("No value found"))
			.context("Failed to read GeoValue")
	}

	fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_le();

		match self {
			GeoValue::String(s) => {
				writer
					.write_pbf_key(1, 2)
					.context("Failed to write PBF key for string value")?;
				writer.write_pbf_string(s).context("Failed to write string value")?;
			}
			GeoValue::Float(f) => {
				writer
					.write_pbf_key(2, 5)
					.context("Failed to write PBF key for float value")?;
				writer.write_f32(*f).context("Failed to write float value")?;
			}
			GeoValue::Double(f) => {
				writer
					.write_pbf_key(3, 1)
					.context("Failed to write PBF key for double value")?;
				writer.write_f64(*f).context("Failed to write double value")?;
			}
			GeoValue::UInt(u) => {
				writer
					.write_pbf_key(5, 0)
					.context("Failed to write PBF key for uint value")?;
				writer.write_varint(*u).context("Failed to write uint value")?;
			}
			GeoValue::Int(s) => {
				writer
					.write_pbf_key(6, 0)
					.context("Failed to write PBF key for int value")?;
				writer.write_svarint(*s).context("Failed to write int value")?;
			}
			GeoValue::Bool(b) => {
				writer
					.write_pbf_key(7, 0)
					.context("Failed to write PBF key for bool value")?;
				writer
					.write_varint(u64::from(*b))
					.context("Failed to write bool value")?;
			}
			GeoValue::Json(_) | GeoValue::Null => {
				return self.clone().into_encodable()?.to_blob();
			}
		}

		Ok(writer.into_blob())
	}

	/// Replaces values without a wire type (`Json`, `Null`) by their JSON text.
	///
	/// Serialising a `serde_json::Value` does not fail in practice, so
	/// [`GeometryError::MvtUncomparableValue`] is only a guard for serializer errors and is not
	/// expected to surface.
	fn into_encodable(self) -> Result<GeoValue> {
		let json = match self {
			GeoValue::Json(v) => v,
			GeoValue::Null => serde_json::Value::Null,
			other => return Ok(other),
		};
		match serde_json::to_string(&json) {
			Ok(text) => Ok(GeoValue::String(text)),
			Err(e) => bail!(GeometryError::MvtUncomparableValue(e.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use planar_core::io::ValueReaderSlice;
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	#[test]
	fn test_read_string() -> Result<()> {
		let data = vec![
			0x0A, // field 1, wire type 2
			0x05, b'h', b'e', b'l', b'l', b'o',
		];
		let mut reader = ValueReaderSlice::new_le(&data);
		assert_eq!(GeoValue::read(&mut reader)?, GeoValue::from("hello"));
		Ok(())
	}

	#[rstest]
	#[case::float(&[0x15, 0x00, 0x00, 0x80, 0x3F], 1.0)]
	#[case::double(&[0x19, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F], 1.0)]
	#[case::int(&[0x20, 0x96, 0x01], 150.0)]
	#[case::uint(&[0x28, 0x96, 0x01], 150.0)]
	#[case::sint(&[0x30, 0x95, 0x01], -75.0)]
	fn numbers_are_read_as_double(#[case] data: &[u8], #[case] expected: f64) -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(data);
		assert_eq!(GeoValue::read(&mut reader)?, GeoValue::Double(expected));
		Ok(())
	}

	#[test]
	fn test_read_bool() -> Result<()> {
		let mut reader = ValueReaderSlice::new_le(&[0x38, 0x01]);
		assert_eq!(GeoValue::read(&mut reader)?, GeoValue::Bool(true));
		Ok(())
	}

	#[test]
	fn empty_value_fails() {
		let mut reader = ValueReaderSlice::new_le(&[]);
		assert!(GeoValue::read(&mut reader).is_err());
	}

	#[rstest]
	#[case(GeoValue::from("hello"), &[0x0A, 0x05, b'h', b'e', b'l', b'l', b'o'])]
	#[case(GeoValue::Float(1.0), &[0x15, 0x00, 0x00, 0x80, 0x3F])]
	#[case(GeoValue::Double(1.0), &[0x19, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F])]
	#[case(GeoValue::UInt(150), &[0x28, 0x96, 0x01])]
	#[case(GeoValue::Int(75), &[0x30, 0x96, 0x01])]
	#[case(GeoValue::Bool(true), &[0x38, 0x01])]
	#[case(GeoValue::Null, &[0x0A, 0x04, b'n', b'u', b'l', b'l'])]
	fn to_blob(#[case] value: GeoValue, #[case] expected: &[u8]) -> Result<()> {
		assert_eq!(value.to_blob()?.into_vec(), expected);
		Ok(())
	}

	#[test]
	fn json_is_encoded_as_text() -> Result<()> {
		let value = GeoValue::Json(serde_json::json!([1, "a"]));
		assert_eq!(value.into_encodable()?, GeoValue::from("[1,\"a\"]"));
		assert_eq!(GeoValue::UInt(3).into_encodable()?, GeoValue::UInt(3));
		Ok(())
	}
}
