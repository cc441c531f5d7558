// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Core geometry types used by the tree (point, bounding box).
//!
//! Containment semantics are inclusive on faces so that points lying on a
//! shared face between two entities are reported for both.

#[doc = "Axis-aligned bounding boxes."]
pub mod bbox;
#[doc = "Points in 1, 2 or 3 dimensional space."]
pub mod point;
