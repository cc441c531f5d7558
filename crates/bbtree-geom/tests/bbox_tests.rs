// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Integration tests for bounding-box construction, union, and containment.

use bbtree_geom::{BoundingBox, GeomError, Point, DEFAULT_TOLERANCE};
use proptest::prelude::*;

fn unit_cube() -> BoundingBox<3> {
    BoundingBox::new(Point::new([0.0; 3]), Point::new([1.0; 3])).expect("unit cube")
}

#[test]
fn containment_is_inclusive_on_faces() {
    let b = unit_cube();
    assert!(b.contains(&Point::new([0.0, 0.5, 1.0]), 0.0));
    assert!(b.contains(&Point::new([1.0, 1.0, 1.0]), 0.0));
    assert!(!b.contains(&Point::new([1.0 + 1e-9, 0.5, 0.5]), 0.0));
}

#[test]
fn tolerance_widens_every_face() {
    let b = unit_cube();
    let outside = Point::new([-1e-10, 0.5, 1.0 + 1e-10]);
    assert!(!b.contains(&outside, DEFAULT_TOLERANCE));
    assert!(b.contains(&outside, 1e-9));
}

#[test]
fn nan_point_is_never_contained() {
    let b = unit_cube();
    assert!(!b.contains(&Point::new([f64::NAN, 0.5, 0.5]), 1.0));
}

#[test]
fn constructor_rejects_bad_corners() {
    let err = BoundingBox::new(Point::new([0.0, 2.0]), Point::new([1.0, 1.0]))
        .expect_err("inverted corners");
    assert_eq!(
        err,
        GeomError::Inverted {
            axis: 1,
            min: 2.0,
            max: 1.0
        }
    );

    let err = BoundingBox::from_points(&[Point::new([0.0]), Point::new([f64::INFINITY])])
        .expect_err("infinite coordinate");
    assert!(matches!(err, GeomError::NonFinite { axis: 0, .. }));

    assert_eq!(BoundingBox::<2>::from_points(&[]), Err(GeomError::Empty));
}

#[test]
fn from_points_is_tight() {
    let b = BoundingBox::from_points(&[
        Point::new([0.0, 1.0]),
        Point::new([2.0, -1.0]),
        Point::new([1.0, 0.0]),
    ])
    .expect("finite points");
    assert_eq!(b.min().to_array(), [0.0, -1.0]);
    assert_eq!(b.max().to_array(), [2.0, 1.0]);
    assert_eq!(b.centroid().to_array(), [1.0, 0.0]);
    assert_eq!(b.longest_axis(), 0);
}

#[test]
fn single_point_box_is_degenerate() {
    let p = Point::new([0.25, 0.75]);
    let b = BoundingBox::from_point(p).expect("finite point");
    assert_eq!(b.extent(0), 0.0);
    assert_eq!(b.extent(1), 0.0);
    assert!(b.contains(&p, 0.0));
}

fn arb_box() -> impl Strategy<Value = BoundingBox<3>> {
    let coord = -1.0e3f64..1.0e3;
    (
        prop::array::uniform3(coord.clone()),
        prop::array::uniform3(coord),
    )
        .prop_map(|(a, b)| {
            let min = core::array::from_fn(|i| a[i].min(b[i]));
            let max = core::array::from_fn(|i| a[i].max(b[i]));
            BoundingBox::new(Point::new(min), Point::new(max)).expect("ordered corners")
        })
}

proptest! {
    #[test]
    fn union_contains_both_operands(a in arb_box(), b in arb_box()) {
        let u = a.union(&b);
        prop_assert!(u.contains_box(&a, 0.0));
        prop_assert!(u.contains_box(&b, 0.0));
        prop_assert_eq!(u, b.union(&a));
    }

    #[test]
    fn union_is_associative(a in arb_box(), b in arb_box(), c in arb_box()) {
        prop_assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn centroid_lies_inside(a in arb_box()) {
        prop_assert!(a.contains(&a.centroid(), 0.0));
    }
}
