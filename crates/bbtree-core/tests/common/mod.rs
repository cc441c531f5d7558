// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(dead_code)]

use bbtree_core::{BoundingBox, Node, Point, Tree};

/// Degenerate boxes and matching centroids for a list of points.
pub fn point_entities<const K: usize>(
    points: &[[f64; K]],
) -> (Vec<BoundingBox<K>>, Vec<Point<K>>) {
    let centroids: Vec<Point<K>> = points.iter().map(|&p| Point::new(p)).collect();
    let boxes = centroids
        .iter()
        .map(|&p| BoundingBox::from_point(p).expect("finite point"))
        .collect();
    (boxes, centroids)
}

/// Asserts every structural invariant of a built tree against the leaf boxes
/// it was built from.
pub fn assert_tree_invariants<const K: usize>(tree: &Tree<K>, boxes: &[BoundingBox<K>]) {
    let n = boxes.len();
    assert_eq!(tree.entity_count(), n);
    if n == 0 {
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), 0);
        assert_eq!(tree.root(), None);
        return;
    }
    assert_eq!(tree.node_count(), 2 * n - 1, "arena must hold 2n-1 nodes");
    assert_eq!(tree.root(), Some(tree.node_count() - 1), "root is allocated last");

    let mut seen = vec![0usize; n];
    for (index, node) in tree.nodes().iter().enumerate() {
        match node {
            Node::Leaf { bbox, entity } => {
                seen[*entity] += 1;
                assert_eq!(*bbox, boxes[*entity], "leaf box must be the entity box");
            }
            Node::Internal {
                bbox,
                children: [left, right],
            } => {
                assert!(*left < index && *right < index, "children precede parent");
                let l = tree.nodes()[*left].bbox();
                let r = tree.nodes()[*right].bbox();
                assert_eq!(*bbox, l.union(r), "internal box must tightly bound children");
                assert!(bbox.contains_box(l, 0.0) && bbox.contains_box(r, 0.0));
            }
        }
    }
    assert!(seen.iter().all(|&c| c == 1), "every entity indexed by exactly one leaf");
}

/// `ceil(log2(n))` for `n >= 1`.
pub fn ceil_log2(n: usize) -> usize {
    let mut depth = 0;
    while (1usize << depth) < n {
        depth += 1;
    }
    depth
}
