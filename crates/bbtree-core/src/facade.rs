// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use std::sync::Arc;

use bbtree_geom::Point;
use bbtree_mesh::EntityGeometry;
use tracing::{debug, instrument, warn};

use crate::{QueryStats, Tree, TreeConfig, TreeError};

/// A tree tagged with its geometric dimension.
#[derive(Debug, Clone, PartialEq)]
pub enum DimTree {
    /// Entities on a line.
    D1(Tree<1>),
    /// Entities in the plane.
    D2(Tree<2>),
    /// Entities in space.
    D3(Tree<3>),
}

macro_rules! dispatch {
    ($self:expr, $tree:ident => $body:expr) => {
        match $self {
            DimTree::D1($tree) => $body,
            DimTree::D2($tree) => $body,
            DimTree::D3($tree) => $body,
        }
    };
}

impl DimTree {
    /// Builds the variant matching the mesh's geometric dimension.
    pub fn from_mesh<M>(mesh: &M, dimension: usize) -> Result<Self, TreeError>
    where
        M: EntityGeometry + ?Sized,
    {
        match mesh.geometric_dimension() {
            1 => Tree::from_mesh(mesh, dimension).map(Self::D1),
            2 => Tree::from_mesh(mesh, dimension).map(Self::D2),
            3 => Tree::from_mesh(mesh, dimension).map(Self::D3),
            other => Err(TreeError::UnsupportedGeometricDimension(other)),
        }
    }

    /// Dimension of the coordinate space.
    pub fn geometric_dimension(&self) -> usize {
        dispatch!(self, t => t.geometric_dimension())
    }

    /// Topological dimension of the indexed entities.
    pub fn entity_dimension(&self) -> usize {
        dispatch!(self, t => t.entity_dimension())
    }

    /// Number of indexed entities.
    pub fn entity_count(&self) -> usize {
        dispatch!(self, t => t.entity_count())
    }

    /// Number of arena slots.
    pub fn node_count(&self) -> usize {
        dispatch!(self, t => t.node_count())
    }

    /// Longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        dispatch!(self, t => t.depth())
    }

    /// Candidate entities for `point`, which must have exactly
    /// [`geometric_dimension`](Self::geometric_dimension) coordinates.
    pub fn find(&self, point: &[f64], tolerance: f64) -> Result<Vec<usize>, TreeError> {
        self.find_with_stats(point, tolerance).map(|(found, _)| found)
    }

    /// Like [`find`](Self::find), also reporting traversal counters.
    pub fn find_with_stats(
        &self,
        point: &[f64],
        tolerance: f64,
    ) -> Result<(Vec<usize>, QueryStats), TreeError> {
        dispatch!(self, t => {
            let p = Point::from_slice(point).ok_or(TreeError::PointDimension {
                expected: t.geometric_dimension(),
                got: point.len(),
            })?;
            Ok(t.find_with_stats(&p, tolerance))
        })
    }
}

/// Dimension-dispatching entry point owning at most one tree.
///
/// `build` replaces the current tree wholesale, and only after the new tree
/// is complete; a failed build keeps the previous tree. Readers that need a
/// tree to outlive a rebuild take a [`snapshot`](Self::snapshot).
#[derive(Debug, Default)]
pub struct BoundingBoxTree {
    config: TreeConfig,
    tree: Option<Arc<DimTree>>,
}

impl BoundingBoxTree {
    /// An unbuilt facade with the default tolerance.
    pub fn new() -> Self {
        Self::default()
    }

    /// An unbuilt facade using `config`.
    pub fn with_config(config: TreeConfig) -> Result<Self, TreeError> {
        config.validate()?;
        Ok(Self { config, tree: None })
    }

    /// Active configuration.
    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    /// Builds over the mesh's cells.
    pub fn build<M>(&mut self, mesh: &M) -> Result<(), TreeError>
    where
        M: EntityGeometry + ?Sized,
    {
        self.build_for_dimension(mesh, mesh.topological_dimension())
    }

    /// Builds over the mesh's entities of topological dimension `dimension`.
    #[instrument(level = "debug", skip(self, mesh), fields(gdim = mesh.geometric_dimension()))]
    pub fn build_for_dimension<M>(&mut self, mesh: &M, dimension: usize) -> Result<(), TreeError>
    where
        M: EntityGeometry + ?Sized,
    {
        match DimTree::from_mesh(mesh, dimension) {
            Ok(tree) => {
                debug!(
                    entities = tree.entity_count(),
                    nodes = tree.node_count(),
                    depth = tree.depth(),
                    "installed bounding box tree"
                );
                self.tree = Some(Arc::new(tree));
                Ok(())
            }
            Err(err) => {
                warn!(%err, "bounding box tree build rejected; previous tree kept");
                Err(err)
            }
        }
    }

    /// Local indices of entities whose box contains `point`.
    ///
    /// Fails with [`TreeError::Uninitialized`] before the first successful
    /// build. A tree built over zero entities answers with an empty vector.
    pub fn find(&self, point: &[f64]) -> Result<Vec<usize>, TreeError> {
        self.current()?.find(point, self.config.tolerance)
    }

    /// Like [`find`](Self::find), also reporting traversal counters.
    pub fn find_with_stats(&self, point: &[f64]) -> Result<(Vec<usize>, QueryStats), TreeError> {
        self.current()?.find_with_stats(point, self.config.tolerance)
    }

    /// Shared handle to the current tree, if any.
    ///
    /// The handle keeps its tree alive across later rebuilds of this facade.
    pub fn snapshot(&self) -> Option<Arc<DimTree>> {
        self.tree.clone()
    }

    /// Returns `true` once a build has succeeded.
    pub fn is_built(&self) -> bool {
        self.tree.is_some()
    }

    fn current(&self) -> Result<&DimTree, TreeError> {
        self.tree.as_deref().ok_or(TreeError::Uninitialized)
    }
}
