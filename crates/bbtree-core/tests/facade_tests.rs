// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]
//! Facade lifecycle: dispatch, rebuild, error states, and tolerance config.

use bbtree_core::{BoundingBoxTree, DimTree, ErrorKind, TreeConfig, TreeError};
use bbtree_mesh::{unit_cube, unit_interval, unit_square, SimplexMesh};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn find_before_build_is_uninitialized() {
    let facade = BoundingBoxTree::new();
    assert!(!facade.is_built());
    assert!(facade.snapshot().is_none());
    let err = facade.find(&[0.0, 0.0]).expect_err("no tree yet");
    assert!(matches!(err, TreeError::Uninitialized));
    assert_eq!(err.kind(), ErrorKind::UninitializedState);
}

#[test]
fn empty_mesh_yields_empty_results() {
    init_tracing();
    let mesh = SimplexMesh::new(2, 2, vec![], vec![]).expect("empty mesh");
    let mut facade = BoundingBoxTree::new();
    facade.build(&mesh).expect("empty build succeeds");
    assert!(facade.is_built());
    assert_eq!(facade.find(&[0.5, 0.5]).expect("built"), Vec::<usize>::new());
}

#[test]
fn build_dispatches_on_geometric_dimension() {
    let mut facade = BoundingBoxTree::new();

    facade.build(&unit_interval(4).expect("mesh")).expect("build");
    let snap = facade.snapshot().expect("built");
    assert!(matches!(*snap, DimTree::D1(_)));
    assert_eq!(snap.geometric_dimension(), 1);

    facade.build(&unit_square(2, 2).expect("mesh")).expect("build");
    let snap = facade.snapshot().expect("built");
    assert!(matches!(*snap, DimTree::D2(_)));
    assert_eq!(snap.entity_count(), 8);
    assert_eq!(snap.node_count(), 15);

    facade.build(&unit_cube(1, 1, 1).expect("mesh")).expect("build");
    let snap = facade.snapshot().expect("built");
    assert!(matches!(*snap, DimTree::D3(_)));
    assert_eq!(snap.entity_dimension(), 3);
    assert_eq!(snap.depth(), 3);
}

#[test]
fn build_defaults_to_cells_and_accepts_lower_dimensions() {
    init_tracing();
    let mesh = unit_square(2, 2).expect("mesh");
    let mut facade = BoundingBoxTree::new();

    facade.build(&mesh).expect("cells");
    let cells = facade.find(&[0.5, 0.5]).expect("built");
    assert!(!cells.is_empty());
    assert!(cells.iter().all(|&c| c < mesh.num_cells()));

    facade.build_for_dimension(&mesh, 0).expect("vertices");
    assert_eq!(facade.find(&[0.5, 0.5]).expect("built"), vec![4]);
    assert!(facade.find(&[0.25, 0.25]).expect("built").is_empty());
}

#[test]
fn failed_build_keeps_previous_tree() {
    init_tracing();
    let mesh = unit_square(2, 2).expect("mesh");
    let mut facade = BoundingBoxTree::new();
    facade.build_for_dimension(&mesh, 0).expect("vertices");
    let before = facade.snapshot().expect("built");

    let err = facade
        .build_for_dimension(&mesh, 3)
        .expect_err("dimension above tdim");
    assert!(matches!(
        err,
        TreeError::DimensionOutOfRange {
            requested: 3,
            topological: 2
        }
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);

    let broken =
        SimplexMesh::new(2, 2, vec![0.0, 0.0, 1.0, 0.0, f64::NAN, 1.0], vec![0, 1, 2])
            .expect("mesh accepts NaN");
    let err = facade.build(&broken).expect_err("NaN vertex");
    assert_eq!(err.kind(), ErrorKind::InvalidGeometry);

    let after = facade.snapshot().expect("still built");
    assert!(std::sync::Arc::ptr_eq(&before, &after));
    assert_eq!(facade.find(&[0.5, 0.5]).expect("built"), vec![4]);
}

#[test]
fn extreme_but_finite_coordinates_build() {
    let mesh = SimplexMesh::new(1, 0, vec![f64::MAX, 0.0], vec![0, 1]).expect("two points");
    let mut facade = BoundingBoxTree::new();
    facade.build(&mesh).expect("finite coordinates are well formed");
    assert_eq!(facade.find(&[f64::MAX]).expect("built"), vec![0]);
    assert_eq!(facade.find(&[0.0]).expect("built"), vec![1]);

    let span = SimplexMesh::new(1, 1, vec![-f64::MAX, f64::MAX], vec![0, 1])
        .expect("one segment");
    facade.build(&span).expect("full-range segment");
    assert_eq!(facade.find(&[0.0]).expect("built"), vec![0]);
}

#[test]
fn point_must_match_geometric_dimension() {
    let mut facade = BoundingBoxTree::new();
    facade.build(&unit_cube(1, 1, 1).expect("mesh")).expect("build");
    let err = facade.find(&[0.5, 0.5]).expect_err("2D point on 3D tree");
    assert!(matches!(
        err,
        TreeError::PointDimension {
            expected: 3,
            got: 2
        }
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn far_point_misses_at_the_root() {
    let mut facade = BoundingBoxTree::new();
    facade.build(&unit_cube(2, 2, 2).expect("mesh")).expect("build");
    let (found, stats) = facade.find_with_stats(&[-3.0, 0.5, 0.5]).expect("built");
    assert!(found.is_empty());
    assert_eq!(stats.nodes_visited, 1);
    assert_eq!(stats.leaves_visited, 0);
}

#[test]
fn configured_tolerance_is_applied_to_queries() {
    let mesh = unit_interval(1).expect("mesh");

    let mut strict = BoundingBoxTree::new();
    strict.build_for_dimension(&mesh, 0).expect("vertices");
    assert!(strict.find(&[1.05]).expect("built").is_empty());

    let mut loose = BoundingBoxTree::with_config(TreeConfig { tolerance: 0.1 }).expect("valid");
    assert_eq!(loose.config().tolerance, 0.1);
    loose.build_for_dimension(&mesh, 0).expect("vertices");
    assert_eq!(loose.find(&[1.05]).expect("built"), vec![1]);
}

#[test]
fn invalid_tolerance_is_rejected() {
    for tolerance in [-1.0, f64::NAN, f64::INFINITY] {
        let err = BoundingBoxTree::with_config(TreeConfig { tolerance }).expect_err("rejected");
        assert!(matches!(err, TreeError::Config(_)));
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}
