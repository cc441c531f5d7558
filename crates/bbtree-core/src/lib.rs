// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! bbtree-core: axis-aligned bounding box tree over mesh entities.
//!
//! The tree indexes the entities of one topological dimension of a mesh
//! (vertices, edges, facets or cells) and answers "which entities might
//! contain this point" in logarithmic time. Answers are candidates: the tree
//! never reports a false negative, but an entity whose box contains the point
//! need not contain the point itself.
//!
//! Layers:
//! - [`build`] turns per-entity boxes and centroids into an immutable
//!   [`Tree`] stored in a flat arena.
//! - [`Tree::find`] prunes the arena top-down and returns candidate indices.
//! - [`BoundingBoxTree`] picks `Tree<1>`, `Tree<2>` or `Tree<3>` from the
//!   mesh's geometric dimension and owns the current tree behind an `Arc`.

mod builder;
/// Tolerance configuration and JSON-backed config storage.
pub mod config;
mod error;
mod facade;
mod query;
mod tree;

pub use bbtree_geom::{BoundingBox, Point, DEFAULT_TOLERANCE};
pub use builder::{build, entity_bounds};
pub use config::{ConfigError, ConfigService, ConfigStore, DirConfigStore, TreeConfig};
pub use error::{ErrorKind, TreeError};
pub use facade::{BoundingBoxTree, DimTree};
pub use query::QueryStats;
pub use tree::{Node, Tree};
