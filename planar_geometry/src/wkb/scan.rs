//! Typed scanning of WKB values handed out by database drivers.
//!
//! Every geometry kind implements [`WkbScan`]. Scanning into a kind accepts a few neighbouring
//! kinds that carry the same shape, e.g. a multi point with a single point scans into a
//! [`PointGeometry`].

use super::unmarshal;
use crate::{
	Bound, CollectionGeometry, Geometry, GeometryError, GeometryTrait, LineStringGeometry, MultiLineStringGeometry,
	MultiPointGeometry, MultiPolygonGeometry, PointGeometry, PolygonGeometry, RingGeometry,
};
use anyhow::{Result, bail, ensure};
use log::trace;

/// Length of a point behind a 4 byte SRID prefix.
const SRID_POINT_LENGTH: usize = 25;
/// Length of a plain WKB point.
const POINT_LENGTH: usize = 21;

/// A column value as a database driver returns it.
#[derive(Clone, Debug, PartialEq)]
pub enum ScanValue<'a> {
	Bytes(&'a [u8]),
	Text(&'a str),
	Int(i64),
	Float(f64),
	Null,
}

impl<'a> From<&'a [u8]> for ScanValue<'a> {
	fn from(value: &'a [u8]) -> Self {
		ScanValue::Bytes(value)
	}
}

impl<'a> ScanValue<'a> {
	fn bytes(&self) -> Result<&'a [u8]> {
		match self {
			ScanValue::Bytes(data) => Ok(*data),
			_ => bail!(GeometryError::UnsupportedDataType),
		}
	}
}

/// Decodes a value into a specific geometry kind.
pub trait WkbScan: Sized {
	fn scan(value: &ScanValue) -> Result<Self>;
}

impl WkbScan for Geometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		unmarshal(value.bytes()?)
	}
}

impl WkbScan for PointGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		let mut data = value.bytes()?;
		if data.len() == SRID_POINT_LENGTH {
			trace!("dropping the SRID in front of a point");
			data = &data[4..];
		}
		ensure!(data.len() >= POINT_LENGTH, GeometryError::NotWkb);
		match unmarshal(data)? {
			Geometry::Point(p) => Ok(p),
			Geometry::MultiPoint(mp) if mp.0.len() == 1 => Ok(mp.0[0]),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for MultiPointGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		match Geometry::scan(value)? {
			Geometry::MultiPoint(mp) => Ok(mp),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for LineStringGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		match Geometry::scan(value)? {
			Geometry::LineString(l) => Ok(l),
			Geometry::MultiLineString(mut ml) if ml.0.len() == 1 => Ok(ml.0.remove(0)),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for MultiLineStringGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		match Geometry::scan(value)? {
			Geometry::MultiLineString(ml) => Ok(ml),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for RingGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		let polygon = match Geometry::scan(value)? {
			Geometry::Polygon(p) => p,
			Geometry::MultiPolygon(mut mp) if mp.0.len() == 1 => mp.0.remove(0),
			_ => bail!(GeometryError::IncorrectGeometry),
		};
		let mut rings = polygon.0;
		ensure!(rings.len() == 1, GeometryError::IncorrectGeometry);
		Ok(rings.remove(0))
	}
}

impl WkbScan for PolygonGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		match Geometry::scan(value)? {
			Geometry::Polygon(p) => Ok(p),
			Geometry::MultiPolygon(mut mp) if mp.0.len() == 1 => Ok(mp.0.remove(0)),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for MultiPolygonGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		match Geometry::scan(value)? {
			Geometry::MultiPolygon(mp) => Ok(mp),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for CollectionGeometry {
	fn scan(value: &ScanValue) -> Result<Self> {
		match Geometry::scan(value)? {
			Geometry::Collection(c) => Ok(c),
			_ => bail!(GeometryError::IncorrectGeometry),
		}
	}
}

impl WkbScan for Bound {
	fn scan(value: &ScanValue) -> Result<Self> {
		Ok(Geometry::scan(value)?.bound())
	}
}

/// A scan target that also tracks whether the value was `NULL`.
///
/// ```rust
/// use planar_geometry::{PointGeometry, wkb::{GeometryScanner, ScanValue}};
///
/// let mut scanner = GeometryScanner::<PointGeometry>::default();
/// scanner.scan(&ScanValue::Null).unwrap();
/// assert!(!scanner.valid);
/// assert!(scanner.value.is_none());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GeometryScanner<T> {
	pub value: Option<T>,
	pub valid: bool,
}

impl<T> Default for GeometryScanner<T> {
	fn default() -> Self {
		GeometryScanner {
			value: None,
			valid: false,
		}
	}
}

impl<T: WkbScan> GeometryScanner<T> {
	/// Decodes `value` into the slot. `NULL` clears the slot and marks it invalid.
	pub fn scan(&mut self, value: &ScanValue) -> Result<()> {
		if matches!(value, ScanValue::Null) {
			self.value = None;
			self.valid = false;
			return Ok(());
		}
		self.value = Some(T::scan(value)?);
		self.valid = true;
		Ok(())
	}
}
