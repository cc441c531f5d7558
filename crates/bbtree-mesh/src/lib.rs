// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Mesh-side inputs for the bounding-box tree.
//!
//! The tree only needs one thing from a mesh: for a topological dimension
//! `d`, the coordinates of the vertices of each local entity of that
//! dimension. That contract is the [`EntityGeometry`] trait. This crate also
//! ships a small simplex mesh ([`SimplexMesh`]) and structured generators for
//! the unit interval, square, and cube so the tree can be exercised without
//! an external mesh library.

mod error;
/// Structured simplex meshes of the unit interval, square, and cube.
pub mod generation;
mod geometry;
mod simplex;

pub use error::MeshError;
pub use generation::{unit_cube, unit_interval, unit_square};
pub use geometry::EntityGeometry;
pub use simplex::SimplexMesh;
