// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::{GeomError, Point};

/// Axis-aligned bounding box in `K`-dimensional space.
///
/// Invariants:
/// - Every coordinate of both corners is finite.
/// - `min[i] <= max[i]` on every axis. Zero extent is valid (a single point
///   yields a degenerate box).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoundingBox<const K: usize> {
    min: Point<K>,
    max: Point<K>,
}

impl<const K: usize> BoundingBox<K> {
    /// Constructs a box from its minimum and maximum corners.
    ///
    /// Fails with [`GeomError::NonFinite`] if any coordinate is NaN or infinite
    /// and with [`GeomError::Inverted`] if `min` exceeds `max` on some axis.
    pub fn new(min: Point<K>, max: Point<K>) -> Result<Self, GeomError> {
        min.check_finite()?;
        max.check_finite()?;
        for axis in 0..K {
            let (lo, hi) = (min.coord(axis), max.coord(axis));
            if lo > hi {
                return Err(GeomError::Inverted {
                    axis,
                    min: lo,
                    max: hi,
                });
            }
        }
        Ok(Self { min, max })
    }

    /// Degenerate box around a single point.
    pub fn from_point(point: Point<K>) -> Result<Self, GeomError> {
        point.check_finite()?;
        Ok(Self {
            min: point,
            max: point,
        })
    }

    /// Builds the minimal box containing all `points`.
    pub fn from_points(points: &[Point<K>]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::Empty)?;
        let mut bbox = Self::from_point(*first)?;
        for p in rest {
            bbox = bbox.union(&Self::from_point(*p)?);
        }
        Ok(bbox)
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Point<K> {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Point<K> {
        self.max
    }

    /// Returns the union of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        let (a, b) = (self.min.to_array(), self.max.to_array());
        let (c, d) = (other.min.to_array(), other.max.to_array());
        Self {
            min: Point::new(core::array::from_fn(|axis| a[axis].min(c[axis]))),
            max: Point::new(core::array::from_fn(|axis| b[axis].max(d[axis]))),
        }
    }

    /// Returns `true` if `point` lies inside the box widened by `tolerance`.
    ///
    /// Inclusive on faces: `min[i] - tolerance <= p[i] <= max[i] + tolerance`
    /// must hold on every axis. A NaN coordinate is never contained.
    pub fn contains(&self, point: &Point<K>, tolerance: f64) -> bool {
        (0..K).all(|axis| {
            let p = point.coord(axis);
            self.min.coord(axis) - tolerance <= p && p <= self.max.coord(axis) + tolerance
        })
    }

    /// Returns `true` if `other` lies inside this box widened by `tolerance`.
    pub fn contains_box(&self, other: &Self, tolerance: f64) -> bool {
        self.contains(&other.min, tolerance) && self.contains(&other.max, tolerance)
    }

    /// Midpoint of the box on every axis.
    ///
    /// Halves each corner before adding, so boxes spanning most of the `f64`
    /// range still have a finite centroid.
    pub fn centroid(&self) -> Point<K> {
        let (a, b) = (self.min.to_array(), self.max.to_array());
        Point::new(core::array::from_fn(|axis| 0.5 * a[axis] + 0.5 * b[axis]))
    }

    /// Extent (`max - min`) along `axis`.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max.coord(axis) - self.min.coord(axis)
    }

    /// Axis of greatest extent. Ties resolve to the lowest axis index.
    pub fn longest_axis(&self) -> usize {
        let mut best = 0;
        for axis in 1..K {
            if self.extent(axis) > self.extent(best) {
                best = axis;
            }
        }
        best
    }

    /// Inflates the box by a uniform margin `m` on every axis.
    ///
    /// Negative or non-finite margins leave the box unchanged. Fails with
    /// [`GeomError::NonFinite`] if a widened corner overflows.
    pub fn inflate(&self, m: f64) -> Result<Self, GeomError> {
        if !(m.is_finite() && m > 0.0) {
            return Ok(*self);
        }
        Self::new(
            Point::new(self.min.to_array().map(|c| c - m)),
            Point::new(self.max.to_array().map(|c| c + m)),
        )
    }
}
