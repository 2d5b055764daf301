//! Planar 2D geometry: a value model for points, lines, rings, polygons and their collections,
//! a Well-Known Binary codec, a rectangle clipping engine, and the Mapbox Vector Tile codec.

pub mod clip;
mod error;
mod geo;
pub mod vector_tile;
pub mod wkb;

pub use error::*;
pub use geo::*;
