use super::{GeoProperties, Geometry};

/// A geometry together with an optional id and its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoFeature {
	pub id: Option<u64>,
	pub geometry: Geometry,
	pub properties: GeoProperties,
}

impl GeoFeature {
	#[must_use]
	pub fn new(geometry: Geometry) -> Self {
		Self {
			id: None,
			geometry,
			properties: GeoProperties::new(),
		}
	}

	#[must_use]
	pub fn with_id(mut self, id: u64) -> Self {
		self.id = Some(id);
		self
	}

	#[must_use]
	pub fn with_properties(mut self, properties: GeoProperties) -> Self {
		self.properties = properties;
		self
	}
}
