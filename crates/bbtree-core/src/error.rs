// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use bbtree_geom::GeomError;
use thiserror::Error;

use crate::config::ConfigError;

/// Coarse classification of [`TreeError`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller supplied arguments the tree cannot accept.
    InvalidInput,
    /// Entity geometry contained NaN or infinite coordinates.
    InvalidGeometry,
    /// The facade was queried before a successful build.
    UninitializedState,
}

/// Errors returned by tree construction and queries.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Requested entity dimension exceeds the mesh's topological dimension.
    #[error("entity dimension {requested} exceeds mesh topological dimension {topological}")]
    DimensionOutOfRange {
        /// Requested entity dimension.
        requested: usize,
        /// Topological dimension of the mesh.
        topological: usize,
    },
    /// Box and centroid collections have different lengths.
    #[error("{boxes} entity boxes but {centroids} centroids")]
    LengthMismatch {
        /// Number of boxes supplied.
        boxes: usize,
        /// Number of centroids supplied.
        centroids: usize,
    },
    /// A point or vertex has the wrong number of coordinates.
    #[error("expected {expected} coordinates, got {got}")]
    PointDimension {
        /// Geometric dimension of the tree.
        expected: usize,
        /// Number of coordinates supplied.
        got: usize,
    },
    /// Geometric dimension outside `1..=3`.
    #[error("unsupported geometric dimension {0}")]
    UnsupportedGeometricDimension(usize),
    /// The mesh reported an entity count it could not back with vertices.
    #[error("mesh has no entity {index} of dimension {dim}")]
    MissingEntity {
        /// Entity dimension.
        dim: usize,
        /// Entity index.
        index: usize,
    },
    /// An entity's coordinates could not be bounded.
    #[error("entity {entity} has invalid geometry: {source}")]
    InvalidGeometry {
        /// Local index of the offending entity.
        entity: usize,
        /// Underlying geometry failure.
        #[source]
        source: GeomError,
    },
    /// Query issued before any successful build.
    #[error("bounding box tree queried before build")]
    Uninitialized,
    /// Tolerance configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TreeError {
    /// Maps the error onto its [`ErrorKind`].
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidGeometry { .. } => ErrorKind::InvalidGeometry,
            Self::Uninitialized => ErrorKind::UninitializedState,
            Self::DimensionOutOfRange { .. }
            | Self::LengthMismatch { .. }
            | Self::PointDimension { .. }
            | Self::UnsupportedGeometricDimension(_)
            | Self::MissingEntity { .. }
            | Self::Config(_) => ErrorKind::InvalidInput,
        }
    }
}
