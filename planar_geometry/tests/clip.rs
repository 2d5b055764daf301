//! Clipping properties that hold across geometry kinds.

use planar_geometry::{clip, *};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn bound() -> Bound {
	Bound::from_edges(0.0, 0.0, 30.0, 30.0)
}

#[rstest]
#[case(Geometry::new_multi_point(&[[-5, 5], [5, 5], [35, 35], [15, 30]]))]
#[case(Geometry::new_line_string(&[[-10, -10], [40, 40], [40, 0], [-10, 15]]))]
#[case(Geometry::new_multi_line_string(&[vec![[-10, 5], [50, 5]], vec![[5, -10], [5, 50]]]))]
#[case(Geometry::new_ring(&[[-10, -10], [20, -10], [20, 40], [-10, 40], [-10, -10]]))]
#[case(Geometry::new_polygon(&[
	vec![[10, -20], [50, 10], [10, 50], [-30, 10], [10, -20]],
	vec![[5, 5], [5, 15], [15, 15], [15, 5], [5, 5]],
]))]
#[case(Geometry::Bound(Bound::from_edges(-5.0, 10.0, 45.0, 20.0)))]
fn clipped_bound_lies_inside(#[case] g: Geometry) {
	let clipped = clip::geometry(&bound(), &g).expect("geometry overlaps the bound");
	let b = clipped.bound();
	assert!(bound().contains(b.sw), "{b:?}");
	assert!(bound().contains(b.ne), "{b:?}");
}

#[rstest]
#[case([0, 0])]
#[case([30, 30])]
#[case([12, 30])]
#[case([17, 3])]
fn degenerate_segment_inside(#[case] p: [i32; 2]) {
	let line = LineStringGeometry::from(&[p, p]);
	assert_eq!(
		clip::line_string(&bound(), &line),
		MultiLineStringGeometry(vec![line.clone()])
	);
}

#[test]
fn clip_then_close_around_bound() {
	// a C shape that leaves through the right edge twice
	let line = LineStringGeometry::from(&[[40, 25], [10, 25], [10, 5], [40, 5]]);
	let parts = clip::line_string_open(&bound(), &line);
	assert_eq!(parts.0.len(), 1);

	let ring = RingGeometry(line.0.clone());
	let wrapped = clip::around_bound(&bound(), ring.clone(), Orientation::Ccw).unwrap();
	assert_eq!(&wrapped.0[..ring.0.len()], &ring.0[..]);
	assert_eq!(wrapped.0.last(), ring.0.first());
	assert_eq!(wrapped.orientation(), Orientation::Ccw);
	assert!(wrapped.is_closed());
}

#[test]
fn around_bound_in_both_directions() {
	let ring = RingGeometry::from(&[[15, 40], [15, 15], [40, 15]]);
	for o in [Orientation::Ccw, Orientation::Cw] {
		let wrapped = clip::around_bound(&bound(), ring.clone(), o).unwrap();
		assert_eq!(&wrapped.0[..3], &ring.0[..]);
		assert_eq!(wrapped.0.last(), ring.0.first());
		assert_eq!(wrapped.orientation(), o);
	}
}
