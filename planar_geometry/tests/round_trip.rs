//! Round trips through the WKB and vector tile codecs for a range of geometries.

use anyhow::Result;
use planar_geometry::{
	vector_tile::{VectorTile, VectorTileLayer, decode_geometry, encode_geometry},
	wkb::{ByteOrder, geom_length, marshal, unmarshal},
	*,
};
use pretty_assertions::assert_eq;

fn init_logger() {
	let _ = env_logger::builder().is_test(true).try_init();
}

fn geometries() -> Vec<Geometry> {
	vec![
		Geometry::new_point([3, -4]),
		Geometry::new_multi_point(&[[0, 0], [10, 10], [-5, 20]]),
		Geometry::new_line_string(&[[0, 0], [100, 0], [100, 100]]),
		Geometry::new_multi_line_string(&[vec![[0, 0], [5, 5]], vec![[10, 10], [20, 20], [30, 10]]]),
		Geometry::new_polygon(&[
			vec![[0, 0], [100, 0], [100, 100], [0, 100], [0, 0]],
			vec![[10, 10], [10, 20], [20, 20], [20, 10], [10, 10]],
		]),
		Geometry::new_multi_polygon(&[
			vec![vec![[0, 0], [10, 0], [10, 10], [0, 10], [0, 0]]],
			vec![
				vec![[20, 0], [40, 0], [40, 20], [20, 20], [20, 0]],
				vec![[25, 5], [25, 15], [35, 15], [35, 5], [25, 5]],
			],
		]),
	]
}

#[test]
fn wkb_round_trip_in_both_byte_orders() -> Result<()> {
	init_logger();
	let mut all = geometries();
	all.push(Geometry::Collection(CollectionGeometry(geometries())));
	for g in all {
		for order in [ByteOrder::LittleEndian, ByteOrder::BigEndian] {
			let blob = marshal(&g, order)?;
			assert_eq!(blob.len() as usize, geom_length(&g));
			assert_eq!(unmarshal(blob.as_slice())?, g);
		}
	}
	Ok(())
}

#[test]
fn mvt_round_trip() -> Result<()> {
	init_logger();
	for g in geometries() {
		let (geom_type, data) = encode_geometry(&g)?;
		assert_eq!(decode_geometry(geom_type, &data)?, g);
	}
	Ok(())
}

#[test]
fn wkb_into_vector_tile_and_back() -> Result<()> {
	init_logger();
	let mut layer = VectorTileLayer::new_standard("shapes");
	for (i, g) in geometries().into_iter().enumerate() {
		let wkb = marshal(&g, ByteOrder::BigEndian)?;
		let mut properties = GeoProperties::new();
		properties.insert("index", i as u64);
		properties.insert("kind", g.type_name());
		layer
			.features
			.push(GeoFeature::new(unmarshal(wkb.as_slice())?).with_id(i as u64).with_properties(properties));
	}

	let tile = VectorTile::from_blob(&VectorTile::new(vec![layer.clone()]).to_blob()?)?;
	let decoded = &tile.layers[0];
	assert_eq!(decoded.features.len(), layer.features.len());
	for (a, b) in decoded.features.iter().zip(&layer.features) {
		assert_eq!(a.geometry, b.geometry);
		assert_eq!(a.id, b.id);
		// numbers come back as doubles
		assert_eq!(a.properties.get("kind"), b.properties.get("kind"));
		assert_eq!(
			a.properties.get("index").and_then(GeoValue::as_f64),
			b.properties.get("index").and_then(GeoValue::as_f64)
		);
	}
	Ok(())
}
