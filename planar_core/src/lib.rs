//! Byte-level building blocks shared by the planar crates: an owned byte buffer ([`Blob`]) and
//! byte-order aware value readers and writers with the protobuf primitives used by vector tiles.

pub mod io;

pub mod types;

pub use types::Blob;
