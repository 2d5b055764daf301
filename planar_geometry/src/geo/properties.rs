use super::GeoValue;
use std::{
	collections::{BTreeMap, btree_map},
	fmt::Debug,
};

/// Feature properties, kept sorted by key.
#[derive(Clone, Default, PartialEq)]
pub struct GeoProperties(BTreeMap<String, GeoValue>);

impl GeoProperties {
	#[must_use]
	pub fn new() -> GeoProperties {
		GeoProperties(BTreeMap::new())
	}

	pub fn insert<T>(&mut self, key: &str, value: T)
	where
		GeoValue: From<T>,
	{
		self.0.insert(key.to_string(), GeoValue::from(value));
	}

	pub fn remove(&mut self, key: &str) -> Option<GeoValue> {
		self.0.remove(key)
	}

	#[must_use]
	pub fn get(&self, key: &str) -> Option<&GeoValue> {
		self.0.get(key)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> btree_map::Iter<'_, String, GeoValue> {
		self.0.iter()
	}
}

impl IntoIterator for GeoProperties {
	type Item = (String, GeoValue);
	type IntoIter = btree_map::IntoIter<String, GeoValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.into_iter()
	}
}

impl FromIterator<(String, GeoValue)> for GeoProperties {
	fn from_iter<I: IntoIterator<Item = (String, GeoValue)>>(iter: I) -> Self {
		GeoProperties(iter.into_iter().collect())
	}
}

impl<T> From<Vec<(&str, T)>> for GeoProperties
where
	GeoValue: From<T>,
{
	fn from(value: Vec<(&str, T)>) -> Self {
		value
			.into_iter()
			.map(|(k, v)| (k.to_string(), GeoValue::from(v)))
			.collect()
	}
}

impl Debug for GeoProperties {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_map().entries(self.0.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_get_remove() {
		let mut p = GeoProperties::new();
		assert!(p.is_empty());
		p.insert("name", "Berlin");
		p.insert("population", 3_600_000u64);
		assert_eq!(p.len(), 2);
		assert_eq!(p.get("name"), Some(&GeoValue::from("Berlin")));
		assert_eq!(p.remove("name"), Some(GeoValue::from("Berlin")));
		assert_eq!(p.get("name"), None);
	}

	#[test]
	fn sorted_by_key() {
		let p = GeoProperties::from(vec![("b", 2u64), ("a", 1u64)]);
		let keys: Vec<&String> = p.iter().map(|(k, _)| k).collect();
		assert_eq!(keys, ["a", "b"]);
		assert_eq!(format!("{p:?}"), r#"{"a": UInt(1), "b": UInt(2)}"#);
	}
}
