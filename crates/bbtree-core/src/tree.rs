// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use bbtree_geom::BoundingBox;

/// One slot of the tree arena.
///
/// Children are referenced by arena index and are always allocated before
/// their parent, so following child links strictly decreases the index and
/// the structure cannot contain a cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum Node<const K: usize> {
    /// Indexes exactly one entity.
    Leaf {
        /// Tight box around the entity's vertices.
        bbox: BoundingBox<K>,
        /// Local entity index in the mesh's numbering.
        entity: usize,
    },
    /// Joins two subtrees.
    Internal {
        /// Union of both children's boxes.
        bbox: BoundingBox<K>,
        /// Arena indices of the left and right child.
        children: [usize; 2],
    },
}

impl<const K: usize> Node<K> {
    /// Box stored at this node.
    pub fn bbox(&self) -> &BoundingBox<K> {
        match self {
            Self::Leaf { bbox, .. } | Self::Internal { bbox, .. } => bbox,
        }
    }

    /// Returns `true` for leaf nodes.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }
}

/// Immutable bounding box tree over `entity_count` entities in `K` dimensions.
///
/// Invariants:
/// - `entity_count == 0`: empty arena, no root.
/// - `entity_count == 1`: a single leaf which is also the root.
/// - otherwise the arena holds `2 * entity_count - 1` nodes and `root` is the
///   last slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<const K: usize> {
    pub(crate) nodes: Vec<Node<K>>,
    pub(crate) root: Option<usize>,
    pub(crate) entity_dimension: usize,
    pub(crate) entity_count: usize,
}

impl<const K: usize> Tree<K> {
    /// A tree indexing no entities.
    pub fn empty(entity_dimension: usize) -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
            entity_dimension,
            entity_count: 0,
        }
    }

    /// The arena, in allocation order.
    pub fn nodes(&self) -> &[Node<K>] {
        &self.nodes
    }

    /// Node at arena index `index`.
    pub fn node(&self, index: usize) -> Option<&Node<K>> {
        self.nodes.get(index)
    }

    /// Arena index of the root, or `None` for an empty tree.
    pub fn root(&self) -> Option<usize> {
        self.root
    }

    /// Box enclosing every indexed entity.
    pub fn root_box(&self) -> Option<&BoundingBox<K>> {
        self.root.and_then(|r| self.nodes.get(r)).map(Node::bbox)
    }

    /// Number of arena slots.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of indexed entities.
    pub fn entity_count(&self) -> usize {
        self.entity_count
    }

    /// Topological dimension of the indexed entities.
    pub fn entity_dimension(&self) -> usize {
        self.entity_dimension
    }

    /// Dimension of the coordinate space.
    pub const fn geometric_dimension(&self) -> usize {
        K
    }

    /// Returns `true` if the tree indexes no entities.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Longest root-to-leaf path, counted in edges. Zero for empty and
    /// single-leaf trees.
    pub fn depth(&self) -> usize {
        let Some(root) = self.root else {
            return 0;
        };
        let mut deepest = 0;
        let mut stack = vec![(root, 0usize)];
        while let Some((index, depth)) = stack.pop() {
            match self.nodes.get(index) {
                Some(Node::Internal { children, .. }) => {
                    stack.extend(children.iter().map(|&c| (c, depth + 1)));
                }
                Some(Node::Leaf { .. }) => deepest = deepest.max(depth),
                None => {}
            }
        }
        deepest
    }
}
