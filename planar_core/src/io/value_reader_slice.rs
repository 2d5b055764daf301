//! [`ValueReaderSlice`]: a [`ValueReader`] over a borrowed byte slice.
//!
//! ```rust
//! use planar_core::io::{ValueReader, ValueReaderSlice};
//!
//! let mut reader = ValueReaderSlice::new_be(&[0x00, 0x00, 0x01, 0x00, 0x2A]);
//! assert_eq!(reader.read_u32().unwrap(), 256);
//! assert_eq!(reader.read_varint().unwrap(), 42);
//! ```

use super::ValueReader;
use anyhow::{Result, ensure};
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::{
	io::{Cursor, Read},
	marker::PhantomData,
};

pub struct ValueReaderSlice<'a, E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<&'a [u8]>,
}

impl<'a, E: ByteOrder> ValueReaderSlice<'a, E> {
	#[must_use]
	pub fn new(slice: &'a [u8]) -> ValueReaderSlice<'a, E> {
		ValueReaderSlice {
			_phantom: PhantomData,
			cursor: Cursor::new(slice),
		}
	}

	/// The bytes that have not been read yet.
	#[must_use]
	pub fn rest(&self) -> &'a [u8] {
		let data: &'a [u8] = *self.cursor.get_ref();
		&data[(self.cursor.position() as usize).min(data.len())..]
	}
}

impl<'a> ValueReaderSlice<'a, LittleEndian> {
	#[must_use]
	pub fn new_le(slice: &'a [u8]) -> ValueReaderSlice<'a, LittleEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a> ValueReaderSlice<'a, BigEndian> {
	#[must_use]
	pub fn new_be(slice: &'a [u8]) -> ValueReaderSlice<'a, BigEndian> {
		ValueReaderSlice::new(slice)
	}
}

impl<'a, E: ByteOrder + 'a> ValueReader<'a, E> for ValueReaderSlice<'a, E> {
	fn get_reader(&mut self) -> &mut dyn Read {
		&mut self.cursor
	}

	fn len(&self) -> u64 {
		self.cursor.get_ref().len() as u64
	}

	fn position(&self) -> u64 {
		self.cursor.position()
	}

	fn skip(&mut self, length: u64) -> Result<()> {
		ensure!(
			length <= self.remaining(),
			"cannot skip {length} bytes, only {} remaining",
			self.remaining()
		);
		self.cursor.set_position(self.cursor.position() + length);
		Ok(())
	}

	fn get_sub_reader<'b>(&'b mut self, length: u64) -> Result<Box<dyn ValueReader<'b, E> + 'b>>
	where
		E: 'b,
	{
		ensure!(
			length <= self.remaining(),
			"sub-reader of {length} bytes exceeds the {} remaining bytes",
			self.remaining()
		);
		let start = self.cursor.position() as usize;
		let data: &'a [u8] = *self.cursor.get_ref();
		self.cursor.set_position(self.cursor.position() + length);
		Ok(Box::new(ValueReaderSlice::<'b, E>::new(
			&data[start..start + length as usize],
		)))
	}
}
