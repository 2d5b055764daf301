// Concrete geometry kinds and the traits they share.

mod bound;
mod collection;
mod coordinates;
mod linestring;
mod macros;
mod multi_linestring;
mod multi_point;
mod multi_polygon;
mod orientation;
mod point;
mod polygon;
mod ring;
mod traits;

pub use bound::*;
pub use collection::*;
pub use coordinates::*;
pub use linestring::*;
pub use multi_linestring::*;
pub use multi_point::*;
pub use multi_polygon::*;
pub use orientation::*;
pub use point::*;
pub use polygon::*;
pub use ring::*;
pub use traits::*;
