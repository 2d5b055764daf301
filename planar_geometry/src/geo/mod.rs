//! The geometry value model.
//!
//! Every geometry kind is a plain value type: `Clone`, structurally comparable with `==`, and
//! free of shared ownership. [`Geometry`] is the sum type over all of them; the individual kinds
//! live in [`types`](self) and share [`GeometryTrait`].

mod feature;
mod geometry;
mod properties;
mod types;
mod value;

pub use feature::*;
pub use geometry::*;
pub use properties::*;
pub use types::*;
pub use value::*;
