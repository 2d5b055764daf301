//! Well-Known Binary (OGC 1.1, two dimensional).
//!
//! Every geometry starts with a byte order marker (0 big endian, 1 little endian) and a `u32`
//! type code, followed by the payload. Members of multi geometries and collections carry their
//! own marker and type code.

mod read;
mod scan;
mod write;

pub use read::{WkbDecoder, unmarshal};
pub use scan::{GeometryScanner, ScanValue, WkbScan};
pub use write::{ByteOrder, WkbByteOrder, geom_length, marshal, marshal_into};

pub const TYPE_POINT: u32 = 1;
pub const TYPE_LINE_STRING: u32 = 2;
pub const TYPE_POLYGON: u32 = 3;
pub const TYPE_MULTI_POINT: u32 = 4;
pub const TYPE_MULTI_LINE_STRING: u32 = 5;
pub const TYPE_MULTI_POLYGON: u32 = 6;
pub const TYPE_COLLECTION: u32 = 7;
