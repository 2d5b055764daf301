//! The command stream of vector tile geometries.
//!
//! A geometry is a sequence of `u32` words. A command word holds the command id in its lowest 3
//! bits and a repeat count above. MoveTo and LineTo are followed by two zig-zag encoded deltas
//! per repetition, ClosePath has no parameters. The cursor carries over between commands.
//!
//! See <https://github.com/mapbox/vector-tile-spec/blob/master/2.1/README.md#43-geometry-encoding>

use super::GeomType;
use crate::{
	Coordinates, Geometry, GeometryError, LineStringGeometry, MultiLineStringGeometry, MultiPointGeometry,
	MultiPolygonGeometry, Orientation, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Result, bail, ensure};
use log::trace;

const MOVE_TO: u32 = 1;
const LINE_TO: u32 = 2;
const CLOSE_PATH: u32 = 7;

fn command(id: u32, count: usize) -> Result<u32> {
	let count = u32::try_from(count)?;
	ensure!(count < (1 << 29), "command count {count} is too large");
	Ok((count << 3) | id)
}

fn zigzag(n: i32) -> u32 {
	((n << 1) ^ (n >> 31)) as u32
}

fn unzigzag(n: u32) -> i32 {
	((n >> 1) as i32) ^ -((n & 1) as i32)
}

struct CommandWriter {
	data: Vec<u32>,
	x: i32,
	y: i32,
}

impl CommandWriter {
	fn new() -> Self {
		CommandWriter {
			data: Vec::new(),
			x: 0,
			y: 0,
		}
	}

	fn command(&mut self, id: u32, count: usize) -> Result<()> {
		self.data.push(command(id, count)?);
		Ok(())
	}

	/// Coordinates are truncated toward zero.
	fn point(&mut self, c: &Coordinates) {
		let x = c.x() as i32;
		let y = c.y() as i32;
		self.data.push(zigzag(x.wrapping_sub(self.x)));
		self.data.push(zigzag(y.wrapping_sub(self.y)));
		self.x = x;
		self.y = y;
	}

	fn points(&mut self, list: &[Coordinates]) {
		for c in list {
			self.point(c);
		}
	}

	fn line_string(&mut self, line: &[Coordinates]) -> Result<()> {
		let Some((first, rest)) = line.split_first() else {
			return Ok(());
		};
		self.command(MOVE_TO, 1)?;
		self.point(first);
		if !rest.is_empty() {
			self.command(LINE_TO, rest.len())?;
			self.points(rest);
		}
		Ok(())
	}

	fn ring(&mut self, ring: &RingGeometry) -> Result<()> {
		let mut list = ring.0.as_slice();
		if ring.is_closed() {
			list = &list[..list.len() - 1];
		}
		if list.is_empty() {
			return Ok(());
		}
		self.line_string(list)?;
		self.command(CLOSE_PATH, 1)
	}

	fn polygon(&mut self, polygon: &PolygonGeometry) -> Result<()> {
		for ring in &polygon.0 {
			self.ring(ring)?;
		}
		Ok(())
	}
}

/// Encodes a geometry as a vector tile command stream.
///
/// Collections can not be represented and fail with [`GeometryError::MvtUnsupported`].
/// Empty lines and rings are left out. A geometry without any positions, such as an empty
/// MultiPoint, encodes to an empty stream; [`decode_geometry`] rejects that as short data, so
/// such features should be dropped (see `VectorTileLayer::remove_empty`) before writing.
pub fn encode_geometry(geometry: &Geometry) -> Result<(GeomType, Vec<u32>)> {
	let mut writer = CommandWriter::new();
	match geometry {
		Geometry::Point(p) => {
			writer.command(MOVE_TO, 1)?;
			writer.point(&p.0);
		}
		Geometry::MultiPoint(mp) => {
			if !mp.0.is_empty() {
				writer.command(MOVE_TO, mp.0.len())?;
				for p in &mp.0 {
					writer.point(&p.0);
				}
			}
		}
		Geometry::LineString(l) => writer.line_string(&l.0)?,
		Geometry::MultiLineString(ml) => {
			for l in &ml.0 {
				writer.line_string(&l.0)?;
			}
		}
		Geometry::Ring(r) => writer.ring(r)?,
		Geometry::Polygon(p) => writer.polygon(p)?,
		Geometry::MultiPolygon(mp) => {
			for p in &mp.0 {
				writer.polygon(p)?;
			}
		}
		Geometry::Bound(b) => writer.polygon(&b.to_polygon())?,
		Geometry::Collection(_) => bail!(GeometryError::MvtUnsupported),
	}
	Ok((GeomType::from(geometry), writer.data))
}

struct CommandReader<'a> {
	data: &'a [u32],
	pos: usize,
	x: i32,
	y: i32,
}

impl<'a> CommandReader<'a> {
	fn new(data: &'a [u32]) -> Self {
		CommandReader { data, pos: 0, x: 0, y: 0 }
	}

	fn has_remaining(&self) -> bool {
		self.pos < self.data.len()
	}

	/// The next command as `(id, count)`, without consuming it.
	fn peek(&self) -> Option<(u32, usize)> {
		self.data.get(self.pos).map(|&w| (w & 0x7, (w >> 3) as usize))
	}

	/// Consumes a command with the given id and checks that its parameters are present.
	fn expect_command(&mut self, id: u32) -> Result<usize> {
		let Some((actual, count)) = self.peek() else {
			bail!(GeometryError::MvtShortData(String::from("data cut short")));
		};
		if actual != id {
			bail!(GeometryError::MvtShortData(format!(
				"expected command {id}, found {actual}"
			)));
		}
		self.pos += 1;
		if id != CLOSE_PATH && self.data.len() - self.pos < 2 * count {
			bail!(GeometryError::MvtShortData(String::from("data cut short")));
		}
		Ok(count)
	}

	fn point(&mut self) -> Coordinates {
		self.x = self.x.wrapping_add(unzigzag(self.data[self.pos]));
		self.y = self.y.wrapping_add(unzigzag(self.data[self.pos + 1]));
		self.pos += 2;
		Coordinates::new(f64::from(self.x), f64::from(self.y))
	}

	fn points(&mut self, count: usize, out: &mut Vec<Coordinates>) {
		out.reserve(count);
		for _ in 0..count {
			out.push(self.point());
		}
	}

	/// MoveTo(1) followed by an optional LineTo.
	fn line(&mut self) -> Result<Vec<Coordinates>> {
		let count = self.expect_command(MOVE_TO)?;
		if count != 1 {
			bail!(GeometryError::MvtShortData(format!(
				"line must start with a single MoveTo, found {count}"
			)));
		}
		let mut line = Vec::new();
		self.points(1, &mut line);
		if matches!(self.peek(), Some((LINE_TO, _))) {
			let count = self.expect_command(LINE_TO)?;
			self.points(count, &mut line);
		}
		Ok(line)
	}
}

/// Decodes a vector tile command stream of the given type.
///
/// Points and lines become multi geometries if there is more than one. Polygon rings are grouped
/// by winding: a counter-clockwise ring starts a new polygon, a clockwise ring is a hole of the
/// current one. The first ring always starts a polygon.
pub fn decode_geometry(geom_type: GeomType, data: &[u32]) -> Result<Geometry> {
	if data.len() < 3 {
		bail!(GeometryError::MvtShortData(format!(
			"geometry needs at least 3 words, found {}",
			data.len()
		)));
	}
	let mut reader = CommandReader::new(data);

	match geom_type {
		GeomType::Point => {
			let count = reader.expect_command(MOVE_TO)?;
			let mut points = Vec::new();
			reader.points(count, &mut points);
			ensure!(
				!reader.has_remaining(),
				GeometryError::MvtShortData(String::from("unexpected data after points"))
			);
			Ok(if points.len() == 1 {
				Geometry::Point(PointGeometry(points[0]))
			} else {
				Geometry::MultiPoint(points.into_iter().map(PointGeometry).collect::<MultiPointGeometry>())
			})
		}
		GeomType::LineString => {
			let mut lines = Vec::new();
			while reader.has_remaining() {
				lines.push(LineStringGeometry(reader.line()?));
			}
			Ok(if lines.len() == 1 {
				Geometry::LineString(lines.remove(0))
			} else {
				Geometry::MultiLineString(MultiLineStringGeometry(lines))
			})
		}
		GeomType::Polygon => {
			let mut polygons: Vec<PolygonGeometry> = Vec::new();
			while reader.has_remaining() {
				let mut ring = RingGeometry(reader.line()?);
				if matches!(reader.peek(), Some((CLOSE_PATH, _))) {
					let count = reader.expect_command(CLOSE_PATH)?;
					if count != 1 {
						bail!(GeometryError::MvtShortData(format!(
							"ClosePath must have a count of 1, found {count}"
						)));
					}
					ring.close();
				}

				let orientation = ring.orientation();
				if orientation != Orientation::Ccw && ring.signed_area() == 0.0 {
					trace!("ring without area in vector tile geometry");
				}
				match polygons.last_mut() {
					Some(polygon) if orientation != Orientation::Ccw => polygon.0.push(ring),
					_ => polygons.push(PolygonGeometry(vec![ring])),
				}
			}
			Ok(if polygons.len() == 1 {
				Geometry::Polygon(polygons.remove(0))
			} else {
				Geometry::MultiPolygon(MultiPolygonGeometry(polygons))
			})
		}
		GeomType::Unknown => bail!(GeometryError::MvtUnknownGeometryType(geom_type.as_u64())),
	}
}
