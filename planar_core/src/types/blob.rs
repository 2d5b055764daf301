//! [`Blob`]: an owned byte buffer with a compact debug representation.
//!
//! Encoders in this workspace hand their output back as a `Blob`; decoders accept `&[u8]`, so a
//! `Blob` is passed on with [`Blob::as_slice`].
//!
//! ```rust
//! use planar_core::Blob;
//!
//! let blob = Blob::from(vec![0x01, 0x02, 0x03]);
//! assert_eq!(blob.len(), 3);
//! assert_eq!(blob.as_hex(), "01 02 03");
//! ```

use std::fmt::Debug;

/// An owned sequence of bytes.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(Vec<u8>);

impl Blob {
	/// Creates an empty `Blob`.
	#[must_use]
	pub fn new_empty() -> Blob {
		Blob(Vec::new())
	}

	/// Creates an empty `Blob` that can hold `capacity` bytes without reallocating.
	#[must_use]
	pub fn with_capacity(capacity: usize) -> Blob {
		Blob(Vec::with_capacity(capacity))
	}

	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.0
	}

	pub fn as_mut_vec(&mut self) -> &mut Vec<u8> {
		&mut self.0
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.0
	}

	/// Number of bytes, as `u64` to match the varint length prefixes written for it.
	#[must_use]
	pub fn len(&self) -> u64 {
		self.0.len() as u64
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Space separated lowercase hex, e.g. `"01 ff"`.
	#[must_use]
	pub fn as_hex(&self) -> String {
		self.0.iter().map(|b| format!("{b:02x}")).collect::<Vec<_>>().join(" ")
	}
}

impl From<Vec<u8>> for Blob {
	fn from(value: Vec<u8>) -> Self {
		Blob(value)
	}
}

impl From<&[u8]> for Blob {
	fn from(value: &[u8]) -> Self {
		Blob(value.to_vec())
	}
}

impl<const N: usize> From<&[u8; N]> for Blob {
	fn from(value: &[u8; N]) -> Self {
		Blob(value.to_vec())
	}
}

impl AsRef<[u8]> for Blob {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl Debug for Blob {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		const MAX: usize = 32;
		if self.0.len() <= MAX {
			write!(f, "Blob({}: {})", self.0.len(), self.as_hex())
		} else {
			let head = Blob::from(&self.0[..MAX]);
			write!(f, "Blob({}: {} ...)", self.0.len(), head.as_hex())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_blob() {
		let blob = Blob::new_empty();
		assert!(blob.is_empty());
		assert_eq!(blob.len(), 0);
		assert_eq!(blob.as_hex(), "");
	}

	#[test]
	fn conversions_keep_bytes() {
		let bytes = [0xde, 0xad, 0xbe, 0xef];
		assert_eq!(Blob::from(&bytes).as_slice(), &bytes);
		assert_eq!(Blob::from(&bytes[1..3]).into_vec(), vec![0xad, 0xbe]);
		assert_eq!(Blob::from(bytes.to_vec()).as_ref(), &bytes);
	}

	#[test]
	fn debug_is_truncated() {
		assert_eq!(format!("{:?}", Blob::from(&[1, 2, 255])), "Blob(3: 01 02 ff)");
		let long = Blob::from(vec![0u8; 40]);
		let text = format!("{long:?}");
		assert!(text.starts_with("Blob(40: 00 00"));
		assert!(text.ends_with(" ...)"));
	}

	#[test]
	fn with_capacity_is_empty() {
		let mut blob = Blob::with_capacity(16);
		assert!(blob.is_empty());
		blob.as_mut_vec().push(7);
		assert_eq!(blob.as_slice(), &[7]);
	}
}
