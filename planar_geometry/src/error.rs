//! Error kinds raised by the codecs and the clipping engine.
//!
//! Fallible functions return [`anyhow::Result`]. When a failure belongs to one of the kinds below,
//! the [`GeometryError`] is the root of the error chain and can be recovered with
//! [`GeometryError::find`].

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
	#[error("unsupported data type for a geometry scan")]
	UnsupportedDataType,

	#[error("not WKB data")]
	NotWkb,

	#[error("incorrect geometry type")]
	IncorrectGeometry,

	#[error("unsupported WKB geometry type {0}")]
	UnsupportedGeometry(u32),

	#[error("geometry collections are not supported")]
	MvtUnsupported,

	#[error("mvt: {0}")]
	MvtShortData(String),

	#[error("mvt: unknown geometry type {0}")]
	MvtUnknownGeometryType(u64),

	#[error("mvt: value can not be encoded: {0}")]
	MvtUncomparableValue(String),

	#[error("wrap: first or last point is inside the bound")]
	WrapEndpointsInside,

	#[error("wrap: orientation must be clockwise or counter-clockwise")]
	WrapInvalidOrientation,
}

impl GeometryError {
	/// Returns the `GeometryError` attached to `err`, either as context or in its chain of causes.
	#[must_use]
	pub fn find(err: &anyhow::Error) -> Option<&GeometryError> {
		err
			.downcast_ref::<GeometryError>()
			.or_else(|| err.chain().find_map(|e| e.downcast_ref::<GeometryError>()))
	}

	/// Whether `err` carries exactly this kind.
	#[must_use]
	pub fn is(&self, err: &anyhow::Error) -> bool {
		GeometryError::find(err) == Some(self)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use anyhow::{Context, Result, bail};

	fn failing() -> Result<()> {
		bail!(GeometryError::NotWkb)
	}

	#[test]
	fn found_through_context() {
		let err = failing().context("while decoding").unwrap_err();
		assert_eq!(GeometryError::find(&err), Some(&GeometryError::NotWkb));
		assert!(GeometryError::NotWkb.is(&err));
		assert!(!GeometryError::IncorrectGeometry.is(&err));
	}

	#[test]
	fn found_as_context() {
		let err = Err::<(), _>(std::io::Error::other("eof"))
			.context(GeometryError::NotWkb)
			.unwrap_err();
		assert!(GeometryError::NotWkb.is(&err));
	}

	#[test]
	fn plain_errors_have_no_kind() {
		let err = anyhow::anyhow!("something else");
		assert_eq!(GeometryError::find(&err), None);
	}

	#[test]
	fn messages() {
		assert_eq!(GeometryError::MvtUnknownGeometryType(9).to_string(), "mvt: unknown geometry type 9");
		assert_eq!(
			GeometryError::MvtShortData(String::from("data cut short")).to_string(),
			"mvt: data cut short"
		);
	}
}
