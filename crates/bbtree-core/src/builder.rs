// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use bbtree_geom::{BoundingBox, Point, MAX_DIMENSION};
use bbtree_mesh::EntityGeometry;
use tracing::{debug, instrument};

use crate::{Node, Tree, TreeError};

/// Builds a tree over entities `0..boxes.len()`.
///
/// `boxes[i]` is the leaf box of entity `i` and `centroids[i]` its split key.
/// At every level the working set is split along the longest axis of its
/// union box into halves of `ceil(n/2)` and `floor(n/2)` entities by median
/// centroid; equal centroids are ordered by entity index, so identical input
/// always produces an identical tree.
///
/// Fails with [`TreeError::LengthMismatch`] if the two collections differ in
/// length and with [`TreeError::InvalidGeometry`] on a non-finite centroid.
#[instrument(level = "debug", skip_all, fields(gdim = K, entities = boxes.len()))]
pub fn build<const K: usize>(
    entity_dimension: usize,
    boxes: &[BoundingBox<K>],
    centroids: &[Point<K>],
) -> Result<Tree<K>, TreeError> {
    if !(1..=MAX_DIMENSION).contains(&K) {
        return Err(TreeError::UnsupportedGeometricDimension(K));
    }
    if boxes.len() != centroids.len() {
        return Err(TreeError::LengthMismatch {
            boxes: boxes.len(),
            centroids: centroids.len(),
        });
    }
    for (entity, centroid) in centroids.iter().enumerate() {
        centroid
            .check_finite()
            .map_err(|source| TreeError::InvalidGeometry { entity, source })?;
    }

    let n = boxes.len();
    if n == 0 {
        debug!("built empty tree");
        return Ok(Tree::empty(entity_dimension));
    }

    let mut arena = Arena {
        boxes,
        centroids,
        nodes: Vec::with_capacity(2 * n - 1),
    };
    let mut working: Vec<usize> = (0..n).collect();
    let root = arena.build_range(&mut working);

    let tree = Tree {
        nodes: arena.nodes,
        root: Some(root),
        entity_dimension,
        entity_count: n,
    };
    debug!(
        nodes = tree.node_count(),
        depth = tree.depth(),
        "built bounding box tree"
    );
    Ok(tree)
}

struct Arena<'a, const K: usize> {
    boxes: &'a [BoundingBox<K>],
    centroids: &'a [Point<K>],
    nodes: Vec<Node<K>>,
}

impl<const K: usize> Arena<'_, K> {
    /// Builds the subtree over `entities` and returns its arena index.
    /// `entities` must not be empty.
    fn build_range(&mut self, entities: &mut [usize]) -> usize {
        debug_assert!(!entities.is_empty());
        if let [entity] = *entities {
            return self.push(Node::Leaf {
                bbox: self.boxes[entity],
                entity,
            });
        }

        let bounds = entities[1..]
            .iter()
            .fold(self.boxes[entities[0]], |acc, &e| acc.union(&self.boxes[e]));
        let axis = bounds.longest_axis();

        let mid = entities.len().div_ceil(2);
        let centroids = self.centroids;
        entities.select_nth_unstable_by(mid - 1, |&a, &b| {
            centroids[a]
                .coord(axis)
                .total_cmp(&centroids[b].coord(axis))
                .then(a.cmp(&b))
        });
        let (left, right) = entities.split_at_mut(mid);

        let left = self.build_range(left);
        let right = self.build_range(right);
        let bbox = self.nodes[left].bbox().union(self.nodes[right].bbox());
        self.push(Node::Internal {
            bbox,
            children: [left, right],
        })
    }

    fn push(&mut self, node: Node<K>) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }
}

/// Computes the leaf box and split key of every entity of dimension
/// `dimension`.
///
/// The box of an entity is the union of its vertices' degenerate boxes; the
/// split key is that box's centroid.
pub fn entity_bounds<const K: usize, M>(
    mesh: &M,
    dimension: usize,
) -> Result<(Vec<BoundingBox<K>>, Vec<Point<K>>), TreeError>
where
    M: EntityGeometry + ?Sized,
{
    let n = mesh.num_entities(dimension);
    let mut boxes = Vec::with_capacity(n);
    let mut centroids = Vec::with_capacity(n);
    let mut points = Vec::new();
    for entity in 0..n {
        let coords = mesh
            .entity_coordinates(dimension, entity)
            .ok_or(TreeError::MissingEntity {
                dim: dimension,
                index: entity,
            })?;
        points.clear();
        for c in coords {
            let p = Point::from_slice(c).ok_or(TreeError::PointDimension {
                expected: K,
                got: c.len(),
            })?;
            points.push(p);
        }
        let bbox = BoundingBox::from_points(&points)
            .map_err(|source| TreeError::InvalidGeometry { entity, source })?;
        centroids.push(bbox.centroid());
        boxes.push(bbox);
    }
    Ok((boxes, centroids))
}

impl<const K: usize> Tree<K> {
    /// Builds a tree over the entities of dimension `dimension` of `mesh`.
    ///
    /// Fails with [`TreeError::DimensionOutOfRange`] if `dimension` exceeds
    /// the mesh's topological dimension and with
    /// [`TreeError::PointDimension`] if the mesh's geometric dimension is not
    /// `K`.
    pub fn from_mesh<M>(mesh: &M, dimension: usize) -> Result<Self, TreeError>
    where
        M: EntityGeometry + ?Sized,
    {
        let topological = mesh.topological_dimension();
        if dimension > topological {
            return Err(TreeError::DimensionOutOfRange {
                requested: dimension,
                topological,
            });
        }
        let gdim = mesh.geometric_dimension();
        if gdim != K {
            return Err(TreeError::PointDimension {
                expected: K,
                got: gdim,
            });
        }
        let (boxes, centroids) = entity_bounds::<K, M>(mesh, dimension)?;
        build(dimension, &boxes, &centroids)
    }
}
