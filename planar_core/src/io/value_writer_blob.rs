//! [`ValueWriterBlob`]: a [`ValueWriter`] that collects into memory.
//!
//! ```rust
//! use planar_core::io::{ValueWriter, ValueWriterBlob};
//!
//! let mut writer = ValueWriterBlob::new_be();
//! writer.write_u8(1).unwrap();
//! writer.write_u32(2).unwrap();
//! assert_eq!(writer.into_blob().into_vec(), vec![1, 0, 0, 0, 2]);
//! ```

use super::ValueWriter;
use crate::Blob;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::{io::Write, marker::PhantomData};

pub struct ValueWriterBlob<E: ByteOrder> {
	_phantom: PhantomData<E>,
	buffer: Vec<u8>,
}

impl<E: ByteOrder> ValueWriterBlob<E> {
	#[must_use]
	pub fn new() -> ValueWriterBlob<E> {
		ValueWriterBlob::with_capacity(0)
	}

	/// Creates a writer whose buffer is preallocated for `capacity` bytes.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			buffer: Vec::with_capacity(capacity),
		}
	}

	#[must_use]
	pub fn into_blob(self) -> Blob {
		Blob::from(self.buffer)
	}
}

impl ValueWriterBlob<LittleEndian> {
	#[must_use]
	pub fn new_le() -> ValueWriterBlob<LittleEndian> {
		ValueWriterBlob::new()
	}
}

impl ValueWriterBlob<BigEndian> {
	#[must_use]
	pub fn new_be() -> ValueWriterBlob<BigEndian> {
		ValueWriterBlob::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterBlob<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.buffer
	}

	fn position(&self) -> u64 {
		self.buffer.len() as u64
	}
}

impl<E: ByteOrder> Default for ValueWriterBlob<E> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn byte_order_is_applied() {
		let mut le = ValueWriterBlob::new_le();
		le.write_u32(0x0102_0304).unwrap();
		assert_eq!(le.into_blob().into_vec(), vec![4, 3, 2, 1]);

		let mut be = ValueWriterBlob::new_be();
		be.write_u32(0x0102_0304).unwrap();
		assert_eq!(be.into_blob().into_vec(), vec![1, 2, 3, 4]);
	}

	#[test]
	fn f64_encoding() {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_f64(1.0).unwrap();
		assert_eq!(
			writer.into_blob().into_vec(),
			vec![0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xF0, 0x3F]
		);
	}

	#[test]
	fn starts_empty() {
		let writer = ValueWriterBlob::<BigEndian>::with_capacity(64);
		assert_eq!(writer.position(), 0);
		assert!(writer.into_blob().is_empty());
	}
}
