// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use bbtree_geom::Point;
use tracing::trace;

use crate::{Node, Tree};

/// Traversal counters collected by [`Tree::find_with_stats`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct QueryStats {
    /// Nodes whose box was tested.
    pub nodes_visited: usize,
    /// Leaves whose box was tested.
    pub leaves_visited: usize,
}

impl<const K: usize> Tree<K> {
    /// Entities whose box contains `point` within `tolerance`.
    ///
    /// Candidates are emitted in pre-order (parent before children, left
    /// before right). The result may contain entities that do not actually
    /// contain `point`; it never omits one whose box does.
    pub fn find(&self, point: &Point<K>, tolerance: f64) -> Vec<usize> {
        self.find_with_stats(point, tolerance).0
    }

    /// Like [`find`](Self::find), also reporting how much of the tree was
    /// touched.
    pub fn find_with_stats(&self, point: &Point<K>, tolerance: f64) -> (Vec<usize>, QueryStats) {
        let mut found = Vec::new();
        let mut stats = QueryStats::default();
        let Some(root) = self.root else {
            return (found, stats);
        };

        let mut stack = vec![root];
        while let Some(index) = stack.pop() {
            stats.nodes_visited += 1;
            match &self.nodes[index] {
                Node::Leaf { bbox, entity } => {
                    stats.leaves_visited += 1;
                    if bbox.contains(point, tolerance) {
                        found.push(*entity);
                    }
                }
                Node::Internal {
                    bbox,
                    children: [left, right],
                } => {
                    // A miss here prunes the subtree: every descendant box is
                    // inside this one.
                    if bbox.contains(point, tolerance) {
                        stack.push(*right);
                        stack.push(*left);
                    }
                }
            }
        }

        trace!(
            candidates = found.len(),
            nodes_visited = stats.nodes_visited,
            leaves_visited = stats.leaves_visited,
            "bounding box tree query"
        );
        (found, stats)
    }
}
