//! Decoding WKB into [`Geometry`] values.

use super::{
	TYPE_COLLECTION, TYPE_LINE_STRING, TYPE_MULTI_LINE_STRING, TYPE_MULTI_POINT, TYPE_MULTI_POLYGON, TYPE_POINT,
	TYPE_POLYGON,
};
use crate::{
	CollectionGeometry, Coordinates, Geometry, GeometryError, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Context, Result, bail, ensure};
use byteorder::{BigEndian, ByteOrder, LittleEndian, ReadBytesExt};
use log::trace;
use std::io::{Cursor, Read};

/// Upper bound for preallocations driven by counts read from the input.
const MAX_PREALLOCATION: usize = 4096;

/// Offsets tried by [`unmarshal`]: plain WKB, then behind one or two 4 byte SRID prefixes.
const SRID_OFFSETS: [usize; 3] = [0, 4, 8];

/// Deepest nesting of multi geometries and collections the decoder accepts.
const MAX_NESTING: usize = 64;

/// Decodes a WKB geometry that spans all of `data`.
///
/// Some producers put a 4 byte SRID in front of the WKB. If decoding at the start fails, the
/// decoder skips 4 bytes and tries again, at most twice. If every attempt fails, the error of the
/// first attempt is returned.
pub fn unmarshal(data: &[u8]) -> Result<Geometry> {
	let mut first_error = None;
	for offset in SRID_OFFSETS {
		if offset > 0 {
			if offset >= data.len() {
				break;
			}
			trace!("retrying WKB decode behind a {offset} byte prefix");
		}
		match unmarshal_exact(&data[offset..]) {
			Ok(geometry) => return Ok(geometry),
			Err(err) => {
				first_error.get_or_insert(err);
			}
		}
	}
	Err(first_error.unwrap_or_else(|| GeometryError::NotWkb.into()))
}

fn unmarshal_exact(data: &[u8]) -> Result<Geometry> {
	let mut source = WkbSource::new(Cursor::new(data), Some(data.len() as u64));
	let geometry = source.read_geometry()?;
	ensure!(source.remaining == Some(0), GeometryError::NotWkb);
	Ok(geometry)
}

/// Decodes consecutive WKB geometries from a reader.
///
/// ```rust
/// use planar_geometry::{Geometry, wkb::{ByteOrder, WkbDecoder, marshal}};
///
/// let mut data = marshal(&Geometry::new_point([1, 2]), ByteOrder::LittleEndian).unwrap().into_vec();
/// data.extend(marshal(&Geometry::new_point([3, 4]), ByteOrder::BigEndian).unwrap().into_vec());
///
/// let mut decoder = WkbDecoder::new(data.as_slice());
/// assert_eq!(decoder.decode().unwrap(), Some(Geometry::new_point([1, 2])));
/// assert_eq!(decoder.decode().unwrap(), Some(Geometry::new_point([3, 4])));
/// assert_eq!(decoder.decode().unwrap(), None);
/// ```
pub struct WkbDecoder<R: Read> {
	source: WkbSource<R>,
}

impl<R: Read> WkbDecoder<R> {
	pub fn new(reader: R) -> Self {
		WkbDecoder {
			source: WkbSource::new(reader, None),
		}
	}

	/// Decodes the next geometry, or returns `None` if the reader is exhausted.
	pub fn decode(&mut self) -> Result<Option<Geometry>> {
		self.source.depth = 0;
		let mut order = [0u8; 1];
		loop {
			match self.source.reader.read(&mut order) {
				Ok(0) => return Ok(None),
				Ok(_) => break,
				Err(e) if e.kind() == std::io::ErrorKind::Interrupted => {}
				Err(e) => return Err(e.into()),
			}
		}
		self.source.read_with_order(order[0]).map(Some)
	}

	pub fn into_inner(self) -> R {
		self.source.reader
	}
}

impl<R: Read> Iterator for WkbDecoder<R> {
	type Item = Result<Geometry>;

	fn next(&mut self) -> Option<Self::Item> {
		self.decode().transpose()
	}
}

/// A reader that knows how many bytes are left, if the input length is known.
struct WkbSource<R: Read> {
	reader: R,
	remaining: Option<u64>,
	depth: usize,
}

impl<R: Read> WkbSource<R> {
	fn new(reader: R, remaining: Option<u64>) -> Self {
		WkbSource {
			reader,
			remaining,
			depth: 0,
		}
	}

	fn consume(&mut self, bytes: u64) {
		if let Some(remaining) = &mut self.remaining {
			*remaining = remaining.saturating_sub(bytes);
		}
	}

	fn read_u8(&mut self) -> Result<u8> {
		let value = self.reader.read_u8().context(GeometryError::NotWkb)?;
		self.consume(1);
		Ok(value)
	}

	fn read_u32<E: ByteOrder>(&mut self) -> Result<u32> {
		let value = self.reader.read_u32::<E>().context(GeometryError::NotWkb)?;
		self.consume(4);
		Ok(value)
	}

	fn read_coordinates<E: ByteOrder>(&mut self) -> Result<Coordinates> {
		let mut buf = [0u8; 16];
		self.reader.read_exact(&mut buf).context(GeometryError::NotWkb)?;
		self.consume(16);
		Ok(Coordinates::new(E::read_f64(&buf[0..8]), E::read_f64(&buf[8..16])))
	}

	/// Reads a count of items that take at least `item_size` bytes each.
	fn read_count<E: ByteOrder>(&mut self, item_size: u64) -> Result<usize> {
		let count = self.read_u32::<E>()?;
		if let Some(remaining) = self.remaining {
			ensure!(u64::from(count) * item_size <= remaining, GeometryError::NotWkb);
		}
		Ok(count as usize)
	}

	fn read_geometry(&mut self) -> Result<Geometry> {
		let order = self.read_u8()?;
		self.read_with_order(order)
	}

	fn read_with_order(&mut self, order: u8) -> Result<Geometry> {
		match order {
			0 => self.read_body::<BigEndian>(),
			1 => self.read_body::<LittleEndian>(),
			_ => bail!(GeometryError::NotWkb),
		}
	}

	fn read_body<E: ByteOrder>(&mut self) -> Result<Geometry> {
		let type_code = self.read_u32::<E>()?;
		trace!("reading WKB geometry of type {type_code}");
		Ok(match type_code {
			TYPE_POINT => Geometry::Point(PointGeometry(self.read_coordinates::<E>()?)),
			TYPE_LINE_STRING => Geometry::LineString(LineStringGeometry(self.read_coordinate_list::<E>()?)),
			TYPE_POLYGON => Geometry::Polygon(self.read_polygon::<E>()?),
			TYPE_MULTI_POINT => Geometry::MultiPoint(MultiPointGeometry(self.read_children::<E, _>(21, |g| match g {
				Geometry::Point(p) => Some(p),
				_ => None,
			})?)),
			TYPE_MULTI_LINE_STRING => Geometry::MultiLineString(MultiLineStringGeometry(self.read_children::<E, _>(9, |g| match g {
				Geometry::LineString(l) => Some(l),
				_ => None,
			})?)),
			TYPE_MULTI_POLYGON => Geometry::MultiPolygon(MultiPolygonGeometry(self.read_children::<E, _>(9, |g| match g {
				Geometry::Polygon(p) => Some(p),
				_ => None,
			})?)),
			TYPE_COLLECTION => Geometry::Collection(CollectionGeometry(self.read_children::<E, _>(5, Some)?)),
			other => bail!(GeometryError::UnsupportedGeometry(other)),
		})
	}

	fn read_coordinate_list<E: ByteOrder>(&mut self) -> Result<Vec<Coordinates>> {
		let count = self.read_count::<E>(16)?;
		let mut list = Vec::with_capacity(count.min(MAX_PREALLOCATION));
		for _ in 0..count {
			list.push(self.read_coordinates::<E>()?);
		}
		Ok(list)
	}

	fn read_polygon<E: ByteOrder>(&mut self) -> Result<PolygonGeometry> {
		let count = self.read_count::<E>(4)?;
		let mut rings = Vec::with_capacity(count.min(MAX_PREALLOCATION));
		for _ in 0..count {
			rings.push(RingGeometry(self.read_coordinate_list::<E>()?));
		}
		Ok(PolygonGeometry(rings))
	}

	/// Reads fully tagged children. `pick` rejects children of the wrong kind.
	fn read_children<E, T>(&mut self, item_size: u64, pick: impl Fn(Geometry) -> Option<T>) -> Result<Vec<T>>
	where
		E: ByteOrder,
	{
		let count = self.read_count::<E>(item_size)?;
		ensure!(self.depth < MAX_NESTING, GeometryError::NotWkb);
		self.depth += 1;
		let mut children = Vec::with_capacity(count.min(MAX_PREALLOCATION));
		for _ in 0..count {
			let Some(child) = pick(self.read_geometry()?) else {
				bail!(GeometryError::IncorrectGeometry);
			};
			children.push(child);
		}
		self.depth -= 1;
		Ok(children)
	}
}
