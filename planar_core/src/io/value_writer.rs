//! The [`ValueWriter`] trait: typed writes in a fixed byte order.

use super::ValueWriterBlob;
use crate::Blob;
use anyhow::{Context, Result};
use byteorder::{ByteOrder, WriteBytesExt};
use std::io::Write;

/// Writes numbers, varints and protobuf fields in the byte order `E`.
pub trait ValueWriter<E: ByteOrder> {
	fn get_writer(&mut self) -> &mut dyn Write;

	/// Number of bytes written so far.
	fn position(&self) -> u64;

	fn write_varint(&mut self, mut value: u64) -> Result<()> {
		let mut buffer = [0u8; 10];
		let mut length = 0;
		loop {
			let byte = (value & 0x7F) as u8;
			value >>= 7;
			if value == 0 {
				buffer[length] = byte;
				length += 1;
				break;
			}
			buffer[length] = byte | 0x80;
			length += 1;
		}
		self.write_slice(&buffer[..length])
	}

	/// Writes a zig-zag encoded signed varint.
	fn write_svarint(&mut self, value: i64) -> Result<()> {
		self.write_varint(((value << 1) ^ (value >> 63)) as u64)
	}

	fn write_u8(&mut self, value: u8) -> Result<()> {
		Ok(self.get_writer().write_u8(value)?)
	}

	fn write_u32(&mut self, value: u32) -> Result<()> {
		Ok(self.get_writer().write_u32::<E>(value)?)
	}

	fn write_u64(&mut self, value: u64) -> Result<()> {
		Ok(self.get_writer().write_u64::<E>(value)?)
	}

	fn write_f32(&mut self, value: f32) -> Result<()> {
		Ok(self.get_writer().write_f32::<E>(value)?)
	}

	fn write_f64(&mut self, value: f64) -> Result<()> {
		Ok(self.get_writer().write_f64::<E>(value)?)
	}

	fn write_slice(&mut self, buf: &[u8]) -> Result<()> {
		Ok(self.get_writer().write_all(buf)?)
	}

	fn write_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_slice(blob.as_slice())
	}

	/// Writes a protobuf field key.
	fn write_pbf_key(&mut self, field_number: u32, wire_type: u8) -> Result<()> {
		self
			.write_varint((u64::from(field_number) << 3) | u64::from(wire_type & 0x07))
			.context("Failed to write PBF key")
	}

	/// Writes a length prefixed blob (wire type 2 payload).
	fn write_pbf_blob(&mut self, blob: &Blob) -> Result<()> {
		self.write_varint(blob.len()).context("Failed to write PBF blob length")?;
		self.write_blob(blob)
	}

	fn write_pbf_string(&mut self, text: &str) -> Result<()> {
		self
			.write_varint(text.len() as u64)
			.context("Failed to write PBF string length")?;
		self.write_slice(text.as_bytes())
	}

	/// Writes a packed repeated `uint32` payload.
	fn write_pbf_packed_uint32(&mut self, data: &[u32]) -> Result<()> {
		let mut packed = ValueWriterBlob::new_le();
		for &value in data {
			packed.write_varint(u64::from(value))?;
		}
		self
			.write_pbf_blob(&packed.into_blob())
			.context("Failed to write packed uint32")
	}
}
