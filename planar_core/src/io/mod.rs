//! Byte-order aware value readers and writers.
//!
//! [`ValueReader`] and [`ValueWriter`] carry the byte order as a type parameter (`byteorder::LE`
//! or `byteorder::BE`) and provide fixed-width numbers, varints and the protobuf field helpers
//! used by the vector tile codec. [`ValueReaderSlice`] reads from a borrowed byte slice,
//! [`ValueWriterBlob`] collects its output into a [`Blob`](crate::Blob).

mod value_reader;
mod value_reader_slice;
mod value_writer;
mod value_writer_blob;

pub use value_reader::*;
pub use value_reader_slice::*;
pub use value_writer::*;
pub use value_writer_blob::*;
