// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors raised while assembling or generating a mesh.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MeshError {
    /// Geometric dimension outside `1..=3`.
    #[error("unsupported geometric dimension {0} (expected 1, 2 or 3)")]
    InvalidGeometricDimension(usize),
    /// Topological dimension larger than the geometric dimension.
    #[error("topological dimension {tdim} exceeds geometric dimension {gdim}")]
    InvalidTopologicalDimension {
        /// Requested topological dimension.
        tdim: usize,
        /// Geometric dimension of the mesh.
        gdim: usize,
    },
    /// Flat coordinate buffer is not a whole number of points.
    #[error("coordinate buffer of length {len} is not a multiple of {gdim}")]
    CoordinateLength {
        /// Buffer length.
        len: usize,
        /// Geometric dimension.
        gdim: usize,
    },
    /// Flat cell buffer is not a whole number of cells.
    #[error("cell buffer of length {len} is not a multiple of {width}")]
    CellLength {
        /// Buffer length.
        len: usize,
        /// Vertices per cell.
        width: usize,
    },
    /// A cell references a vertex that does not exist.
    #[error("cell {cell} references vertex {vertex} but the mesh has {num_vertices} vertices")]
    VertexOutOfRange {
        /// Offending cell index.
        cell: usize,
        /// Offending vertex index.
        vertex: usize,
        /// Number of vertices in the mesh.
        num_vertices: usize,
    },
    /// A structured generator was asked for zero subdivisions along an axis.
    #[error("number of subdivisions along {axis} must be at least 1")]
    InvalidResolution {
        /// Axis name (`x`, `y` or `z`).
        axis: &'static str,
    },
}
