use super::value::GeoValuePBF;
use crate::{GeoProperties, GeoValue};
use anyhow::{Context, Result, anyhow, ensure};
use std::{collections::HashMap, fmt::Debug, hash::Hash};

/// An indexed list without duplicates: the key or value table of a layer.
#[derive(Clone, PartialEq)]
pub struct VTLPMap<T>
where
	T: Clone + Eq + Hash,
{
	pub list: Vec<T>,
	pub map: HashMap<T, u32>,
}

impl<T> VTLPMap<T>
where
	T: Clone + Debug + Eq + Hash,
{
	/// Builds the table from a decoded list. Later duplicates resolve to their first index.
	pub fn new(list: Vec<T>) -> VTLPMap<T> {
		let mut map = HashMap::with_capacity(list.len());
		for (i, e) in list.iter().enumerate() {
			#[allow(clippy::cast_possible_truncation)]
			map.entry(e.clone()).or_insert(i as u32);
		}
		VTLPMap { list, map }
	}

	pub fn add(&mut self, entry: T) -> u32 {
		if let Some(index) = self.map.get(&entry) {
			return *index;
		}
		#[allow(clippy::cast_possible_truncation)]
		let index = self.list.len() as u32;
		self.map.insert(entry.clone(), index);
		self.list.push(entry);
		index
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
		self.list.iter()
	}

	pub fn get(&self, id: u32) -> Result<&T> {
		self
			.list
			.get(id as usize)
			.ok_or_else(|| anyhow!("id '{id:?}' not found"))
	}

	pub fn len(&self) -> usize {
		self.list.len()
	}

	pub fn is_empty(&self) -> bool {
		self.list.is_empty()
	}
}

impl<T: Clone + Debug + Eq + Hash> Default for VTLPMap<T> {
	fn default() -> VTLPMap<T> {
		VTLPMap::new(vec![])
	}
}

impl<T> From<Vec<T>> for VTLPMap<T>
where
	T: Clone + Debug + Eq + Hash,
{
	fn from(list: Vec<T>) -> Self {
		VTLPMap::new(list)
	}
}

impl<T> Debug for VTLPMap<T>
where
	T: Clone + Debug + Eq + Hash,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_list().entries(&self.list).finish()
	}
}

/// The key and value tables of a layer. Features reference them by index through tag ids.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyManager {
	pub key: VTLPMap<String>,
	pub val: VTLPMap<GeoValue>,
}

impl PropertyManager {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn add_key(&mut self, key: String) -> u32 {
		self.key.add(key)
	}

	pub fn add_val(&mut self, value: GeoValue) -> u32 {
		self.val.add(value)
	}

	pub fn iter_key(&self) -> impl Iterator<Item = &String> + '_ {
		self.key.iter()
	}

	pub fn iter_val(&self) -> impl Iterator<Item = &GeoValue> + '_ {
		self.val.iter()
	}

	/// Builds tables for `properties`, ordering keys and values by how often they are used.
	pub fn from_iter<'a, I>(properties: I) -> Result<Self>
	where
		I: IntoIterator<Item = &'a GeoProperties>,
	{
		let mut key_map: HashMap<String, u32> = HashMap::new();
		let mut val_map: HashMap<GeoValue, u32> = HashMap::new();

		for properties in properties {
			for (k, v) in properties.iter() {
				*key_map.entry(k.clone()).or_insert(0) += 1;
				*val_map.entry(v.clone().into_encodable()?).or_insert(0) += 1;
			}
		}

		fn make_lookup<T>(map: HashMap<T, u32>) -> VTLPMap<T>
		where
			T: Clone + Debug + Eq + Hash + Ord,
		{
			let mut vec: Vec<(T, u32)> = map.into_iter().collect();
			vec.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
			VTLPMap::new(vec.into_iter().map(|(v, _)| v).collect())
		}

		Ok(Self {
			key: make_lookup(key_map),
			val: make_lookup(val_map),
		})
	}

	/// Converts properties into alternating key and value indices, extending the tables as needed.
	pub fn encode_tag_ids(&mut self, properties: GeoProperties) -> Result<Vec<u32>> {
		let mut tag_ids: Vec<u32> = Vec::with_capacity(properties.len() * 2);

		for (key, val) in properties {
			tag_ids.push(self.key.add(key));
			tag_ids.push(self.val.add(val.into_encodable()?));
		}

		Ok(tag_ids)
	}

	pub fn decode_tag_ids(&self, tag_ids: &[u32]) -> Result<GeoProperties> {
		ensure!(tag_ids.len().is_multiple_of(2), "Tag IDs must be even");
		let mut properties = GeoProperties::new();

		for pair in tag_ids.chunks_exact(2) {
			properties.insert(
				self.key.get(pair[0]).context("Failed to get property key")?,
				self.val.get(pair[1]).context("Failed to get property value")?.clone(),
			);
		}
		Ok(properties)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	fn props(list: Vec<(&str, GeoValue)>) -> GeoProperties {
		GeoProperties::from(list)
	}

	#[test]
	fn map_deduplicates() {
		let mut map = VTLPMap::default();
		assert_eq!(map.add("a".to_string()), 0);
		assert_eq!(map.add("b".to_string()), 1);
		assert_eq!(map.add("a".to_string()), 0);
		assert_eq!(map.len(), 2);
		assert_eq!(map.get(1).unwrap(), "b");
		assert!(map.get(2).is_err());
	}

	#[test]
	fn tag_ids_round_trip() -> Result<()> {
		let mut pm = PropertyManager::new();
		let a = props(vec![("name", GeoValue::from("x")), ("rank", GeoValue::Double(2.0))]);
		let b = props(vec![("name", GeoValue::from("y")), ("rank", GeoValue::Double(2.0))]);

		let ids_a = pm.encode_tag_ids(a.clone())?;
		let ids_b = pm.encode_tag_ids(b.clone())?;
		assert_eq!(ids_a, vec![0, 0, 1, 1]);
		assert_eq!(ids_b, vec![0, 2, 1, 1]);

		assert_eq!(pm.decode_tag_ids(&ids_a)?, a);
		assert_eq!(pm.decode_tag_ids(&ids_b)?, b);
		Ok(())
	}

	#[test]
	fn json_and_null_become_strings() -> Result<()> {
		let mut pm = PropertyManager::new();
		let ids = pm.encode_tag_ids(props(vec![
			("list", GeoValue::Json(serde_json::json!([1, 2]))),
			("none", GeoValue::Null),
		]))?;
		assert_eq!(
			pm.decode_tag_ids(&ids)?,
			props(vec![("list", GeoValue::from("[1,2]")), ("none", GeoValue::from("null"))])
		);
		Ok(())
	}

	#[test]
	fn from_iter_orders_by_frequency() -> Result<()> {
		let list = [
			props(vec![("a", GeoValue::UInt(1)), ("b", GeoValue::UInt(2))]),
			props(vec![("b", GeoValue::UInt(2))]),
		];
		let pm = PropertyManager::from_iter(list.iter())?;
		assert_eq!(pm.iter_key().collect::<Vec<_>>(), vec!["b", "a"]);
		assert_eq!(pm.iter_val().collect::<Vec<_>>(), vec![&GeoValue::UInt(2), &GeoValue::UInt(1)]);
		Ok(())
	}

	#[test]
	fn odd_tag_ids_fail() {
		assert!(PropertyManager::new().decode_tag_ids(&[0]).is_err());
	}
}
