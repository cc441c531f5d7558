// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![doc = r"Geometry primitives for mesh bounding-box trees.

This crate provides:
- Fixed-dimension points (`Point<K>`) in 1, 2 or 3 dimensions.
- Axis-aligned bounding boxes (`BoundingBox<K>`) with union and
  tolerance-aware containment.

Design notes:
- Dimension is a const generic; there is no per-dimension type hierarchy.
- Coordinates are `f64` throughout. Boxes reject non-finite coordinates at
  construction so a corrupt value never leaks into a union.
- Containment is inclusive on faces and widened by a caller-supplied
  tolerance; use the same tolerance for construction checks and queries.
"]

mod error;
/// Foundational geometric types.
pub mod types;

pub use error::GeomError;
pub use types::bbox::BoundingBox;
pub use types::point::Point;

/// Default tolerance used to absorb round-off at box faces.
///
/// Absolute and applied per face. Coordinates far from unit magnitude need a
/// larger value.
pub const DEFAULT_TOLERANCE: f64 = 3.0e-16;

/// Largest supported geometric dimension.
pub const MAX_DIMENSION: usize = 3;
