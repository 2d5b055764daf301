//! Encoding [`Geometry`] values as WKB.

use super::{
	TYPE_COLLECTION, TYPE_LINE_STRING, TYPE_MULTI_LINE_STRING, TYPE_MULTI_POINT, TYPE_MULTI_POLYGON, TYPE_POINT,
	TYPE_POLYGON,
};
use crate::{Coordinates, Geometry, RingGeometry};
use anyhow::{Context, Result};
use byteorder::{BigEndian, LittleEndian};
use planar_core::{
	Blob,
	io::{ValueWriter, ValueWriterBlob},
};

/// Byte order of an encoded geometry. Nested geometries use the order of their parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteOrder {
	BigEndian,
	#[default]
	LittleEndian,
}

impl ByteOrder {
	/// The byte order marker that starts every WKB geometry.
	#[must_use]
	pub fn marker(self) -> u8 {
		match self {
			ByteOrder::BigEndian => 0,
			ByteOrder::LittleEndian => 1,
		}
	}
}

/// Encodes `geometry` as WKB.
///
/// Rings are written as polygons with a single ring, bounds as their polygon.
pub fn marshal(geometry: &Geometry, order: ByteOrder) -> Result<Blob> {
	let capacity = geom_length(geometry);
	Ok(match order {
		ByteOrder::BigEndian => {
			let mut writer = ValueWriterBlob::<BigEndian>::with_capacity(capacity);
			marshal_into(&mut writer, geometry)?;
			writer.into_blob()
		}
		ByteOrder::LittleEndian => {
			let mut writer = ValueWriterBlob::<LittleEndian>::with_capacity(capacity);
			marshal_into(&mut writer, geometry)?;
			writer.into_blob()
		}
	})
}

/// Writes `geometry` as WKB with the byte order of `writer`.
pub fn marshal_into<E, W>(writer: &mut W, geometry: &Geometry) -> Result<()>
where
	E: WkbByteOrder,
	W: ValueWriter<E>,
{
	match geometry {
		Geometry::Point(p) => {
			write_header(writer, TYPE_POINT)?;
			write_coordinates(writer, p.0)?;
		}
		Geometry::MultiPoint(mp) => {
			write_header(writer, TYPE_MULTI_POINT)?;
			writer.write_u32(len_u32(mp.0.len())?)?;
			for p in &mp.0 {
				write_header(writer, TYPE_POINT)?;
				write_coordinates(writer, p.0)?;
			}
		}
		Geometry::LineString(l) => {
			write_header(writer, TYPE_LINE_STRING)?;
			write_coordinate_list(writer, &l.0)?;
		}
		Geometry::MultiLineString(ml) => {
			write_header(writer, TYPE_MULTI_LINE_STRING)?;
			writer.write_u32(len_u32(ml.0.len())?)?;
			for l in &ml.0 {
				write_header(writer, TYPE_LINE_STRING)?;
				write_coordinate_list(writer, &l.0)?;
			}
		}
		Geometry::Ring(r) => write_polygon(writer, std::slice::from_ref(r))?,
		Geometry::Polygon(p) => write_polygon(writer, &p.0)?,
		Geometry::MultiPolygon(mp) => {
			write_header(writer, TYPE_MULTI_POLYGON)?;
			writer.write_u32(len_u32(mp.0.len())?)?;
			for p in &mp.0 {
				write_polygon(writer, &p.0)?;
			}
		}
		Geometry::Bound(b) => write_polygon(writer, &b.to_polygon().0)?,
		Geometry::Collection(c) => {
			write_header(writer, TYPE_COLLECTION)?;
			writer.write_u32(len_u32(c.0.len())?)?;
			for g in &c.0 {
				marshal_into(writer, g)?;
			}
		}
	}
	Ok(())
}

/// The exact number of bytes [`marshal`] produces for `geometry`.
#[must_use]
pub fn geom_length(geometry: &Geometry) -> usize {
	match geometry {
		Geometry::Point(_) => 21,
		Geometry::MultiPoint(mp) => 9 + 21 * mp.0.len(),
		Geometry::LineString(l) => 9 + 16 * l.0.len(),
		Geometry::MultiLineString(ml) => 9 + ml.0.iter().map(|l| 9 + 16 * l.0.len()).sum::<usize>(),
		Geometry::Ring(r) => polygon_length(std::slice::from_ref(r)),
		Geometry::Polygon(p) => polygon_length(&p.0),
		Geometry::MultiPolygon(mp) => 9 + mp.0.iter().map(|p| polygon_length(&p.0)).sum::<usize>(),
		// a closed ring of five positions
		Geometry::Bound(_) => 93,
		Geometry::Collection(c) => 9 + c.0.iter().map(geom_length).sum::<usize>(),
	}
}

fn polygon_length(rings: &[RingGeometry]) -> usize {
	9 + rings.iter().map(|r| 4 + 16 * r.0.len()).sum::<usize>()
}

/// Connects the generic writer to the byte order marker.
pub trait WkbByteOrder: byteorder::ByteOrder {
	const ORDER: ByteOrder;
}

impl WkbByteOrder for BigEndian {
	const ORDER: ByteOrder = ByteOrder::BigEndian;
}

impl WkbByteOrder for LittleEndian {
	const ORDER: ByteOrder = ByteOrder::LittleEndian;
}

fn write_header<E: WkbByteOrder>(writer: &mut impl ValueWriter<E>, type_code: u32) -> Result<()> {
	writer.write_u8(E::ORDER.marker())?;
	writer.write_u32(type_code)
}

fn write_coordinates<E: WkbByteOrder>(writer: &mut impl ValueWriter<E>, c: Coordinates) -> Result<()> {
	writer.write_f64(c.x())?;
	writer.write_f64(c.y())
}

fn write_coordinate_list<E: WkbByteOrder>(writer: &mut impl ValueWriter<E>, list: &[Coordinates]) -> Result<()> {
	writer.write_u32(len_u32(list.len())?)?;
	for c in list {
		write_coordinates(writer, *c)?;
	}
	Ok(())
}

fn write_polygon<E: WkbByteOrder>(writer: &mut impl ValueWriter<E>, rings: &[RingGeometry]) -> Result<()> {
	write_header(writer, TYPE_POLYGON)?;
	writer.write_u32(len_u32(rings.len())?)?;
	for ring in rings {
		write_coordinate_list(writer, &ring.0)?;
	}
	Ok(())
}

fn len_u32(len: usize) -> Result<u32> {
	u32::try_from(len).with_context(|| format!("{len} elements do not fit into a WKB count"))
}
