//! The [`ValueReader`] trait: typed reads on top of a byte source with a known length.

use crate::Blob;
use anyhow::{Context, Result, bail, ensure};
use byteorder::{ByteOrder, ReadBytesExt};
use log::trace;
use std::io::Read;

/// Reads numbers, varints and protobuf fields in the byte order `E`.
///
/// Implementors provide access to the raw reader, the total length and the current position.
/// Everything else is derived from those.
pub trait ValueReader<'a, E: ByteOrder + 'a> {
	fn get_reader(&mut self) -> &mut dyn Read;

	/// Total number of readable bytes.
	fn len(&self) -> u64;

	/// Current read offset, counted from the start of this reader.
	fn position(&self) -> u64;

	/// Advances the position by `length` bytes without reading them.
	fn skip(&mut self, length: u64) -> Result<()>;

	/// Returns a reader over the next `length` bytes and advances this reader past them.
	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn remaining(&self) -> u64 {
		self.len().saturating_sub(self.position())
	}

	fn has_remaining(&self) -> bool {
		self.remaining() > 0
	}

	/// Reads an unsigned LEB128 varint. Fails on varints longer than 10 bytes.
	fn read_varint(&mut self) -> Result<u64> {
		let mut value = 0u64;
		for shift in (0..70).step_by(7) {
			let byte = self.get_reader().read_u8().context("unexpected end of varint")?;
			value |= u64::from(byte & 0x7F) << shift;
			if byte & 0x80 == 0 {
				return Ok(value);
			}
		}
		bail!("varint is longer than 10 bytes")
	}

	/// Reads a zig-zag encoded signed varint.
	fn read_svarint(&mut self) -> Result<i64> {
		let value = self.read_varint()?;
		Ok((value >> 1) as i64 ^ -((value & 1) as i64))
	}

	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	fn read_u64(&mut self) -> Result<u64> {
		Ok(self.get_reader().read_u64::<E>()?)
	}

	fn read_f32(&mut self) -> Result<f32> {
		Ok(self.get_reader().read_f32::<E>()?)
	}

	fn read_f64(&mut self) -> Result<f64> {
		Ok(self.get_reader().read_f64::<E>()?)
	}

	/// Reads `length` raw bytes. The length is checked against the remaining bytes before allocating.
	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		ensure!(
			length <= self.remaining(),
			"cannot read {length} bytes, only {} remaining",
			self.remaining()
		);
		let mut buffer = vec![0u8; length as usize];
		self.get_reader().read_exact(&mut buffer)?;
		Ok(Blob::from(buffer))
	}

	/// Reads `length` bytes as UTF-8.
	fn read_string(&mut self, length: u64) -> Result<String> {
		let blob = self.read_blob(length)?;
		String::from_utf8(blob.into_vec()).context("string is not valid UTF-8")
	}

	/// Reads a protobuf field key and splits it into `(field_number, wire_type)`.
	fn read_pbf_key(&mut self) -> Result<(u32, u8)> {
		let key = self.read_varint().context("Failed to read PBF key")?;
		Ok(((key >> 3) as u32, (key & 0x07) as u8))
	}

	/// Reads a varint length prefix and returns a reader over the embedded message.
	fn get_pbf_sub_reader<'b>(&'b mut self) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		let length = self.read_varint().context("Failed to read PBF message length")?;
		self.get_sub_reader(length).context("PBF message exceeds the enclosing data")
	}

	/// Reads a packed repeated `uint32` field.
	fn read_pbf_packed_uint32(&mut self) -> Result<Vec<u32>> {
		let mut reader = self.get_pbf_sub_reader()?;
		let mut values = Vec::new();
		while reader.has_remaining() {
			let value = reader.read_varint().context("Failed to read packed uint32")?;
			values.push(u32::try_from(value).context("packed value does not fit into uint32")?);
		}
		Ok(values)
	}

	fn read_pbf_string(&mut self) -> Result<String> {
		let length = self.read_varint().context("Failed to read PBF string length")?;
		self.read_string(length)
	}

	fn read_pbf_blob(&mut self) -> Result<Blob> {
		let length = self.read_varint().context("Failed to read PBF blob length")?;
		self.read_blob(length)
	}

	/// Skips the value of a field whose key has already been read.
	fn skip_pbf_field(&mut self, wire_type: u8) -> Result<()> {
		trace!("skipping PBF field with wire type {wire_type}");
		match wire_type {
			0 => {
				self.read_varint()?;
			}
			1 => self.skip(8)?,
			2 => {
				let length = self.read_varint()?;
				self.skip(length)?;
			}
			5 => self.skip(4)?,
			_ => bail!("unsupported PBF wire type {wire_type}"),
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::super::ValueReaderSlice;
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(&[0x00], 0)]
	#[case(&[0x7F], 127)]
	#[case(&[0x80, 0x01], 128)]
	#[case(&[0xAC, 0x02], 300)]
	#[case(&[0xFF, 0xFF, 0xFF, 0xFF, 0x0F], u64::from(u32::MAX))]
	fn varints(#[case] data: &[u8], #[case] expected: u64) {
		let mut reader = ValueReaderSlice::new_le(data);
		assert_eq!(reader.read_varint().unwrap(), expected);
		assert!(!reader.has_remaining());
	}

	#[test]
	fn varint_overflow() {
		let mut reader = ValueReaderSlice::new_le(&[0xFF; 11]);
		assert!(reader.read_varint().is_err());
	}

	#[test]
	fn varint_cut_short() {
		let mut reader = ValueReaderSlice::new_le(&[0x80, 0x80]);
		assert!(reader.read_varint().is_err());
	}

	#[rstest]
	#[case(&[0x00], 0)]
	#[case(&[0x01], -1)]
	#[case(&[0x02], 1)]
	#[case(&[0x03], -2)]
	#[case(&[0x96, 0x01], 75)]
	#[case(&[0x95, 0x01], -75)]
	fn zigzag(#[case] data: &[u8], #[case] expected: i64) {
		let mut reader = ValueReaderSlice::new_le(data);
		assert_eq!(reader.read_svarint().unwrap(), expected);
	}

	#[test]
	fn fixed_width_respects_byte_order() {
		let data = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F];
		assert_eq!(ValueReaderSlice::new_le(&data).read_f64().unwrap(), 1.0);
		let data = [0x3F, 0xF0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
		assert_eq!(ValueReaderSlice::new_be(&data).read_f64().unwrap(), 1.0);
		assert_eq!(ValueReaderSlice::new_be(&[0, 0, 0, 7]).read_u32().unwrap(), 7);
		assert_eq!(ValueReaderSlice::new_le(&[7, 0, 0, 0]).read_u32().unwrap(), 7);
	}

	#[test]
	fn blob_longer_than_data() {
		let mut reader = ValueReaderSlice::new_le(&[1, 2, 3]);
		assert!(reader.read_blob(4).is_err());
		assert_eq!(reader.read_blob(3).unwrap().as_slice(), &[1, 2, 3]);
	}

	#[test]
	fn pbf_fields() {
		let data = [
			0x0A, 0x03, b'a', b'b', b'c', // field 1, string "abc"
			0x12, 0x03, 0x01, 0x96, 0x01, // field 2, packed [1, 150]
			0x1A, 0x02, 0x09, 0x08, // field 3, blob
		];
		let mut reader = ValueReaderSlice::new_le(&data);
		assert_eq!(reader.read_pbf_key().unwrap(), (1, 2));
		assert_eq!(reader.read_pbf_string().unwrap(), "abc");
		assert_eq!(reader.read_pbf_key().unwrap(), (2, 2));
		assert_eq!(reader.read_pbf_packed_uint32().unwrap(), vec![1, 150]);
		assert_eq!(reader.read_pbf_key().unwrap(), (3, 2));
		assert_eq!(reader.read_pbf_blob().unwrap().as_slice(), &[0x09, 0x08]);
		assert!(!reader.has_remaining());
	}

	#[rstest]
	#[case(0, &[0x96, 0x01, 0x2A])]
	#[case(1, &[1, 2, 3, 4, 5, 6, 7, 8, 0x2A])]
	#[case(2, &[0x02, 0xAA, 0xBB, 0x2A])]
	#[case(5, &[1, 2, 3, 4, 0x2A])]
	fn skip_fields(#[case] wire_type: u8, #[case] data: &[u8]) {
		let mut reader = ValueReaderSlice::new_le(data);
		reader.skip_pbf_field(wire_type).unwrap();
		assert_eq!(reader.read_u8().unwrap(), 0x2A);
	}

	#[test]
	fn skip_unknown_wire_type() {
		let mut reader = ValueReaderSlice::new_le(&[0, 0]);
		assert!(reader.skip_pbf_field(3).is_err());
	}
}
