// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::GeomError;

/// A point in `K`-dimensional space.
///
/// Points are plain values; no finiteness check happens on construction.
/// Use [`Point::check_finite`] where a non-finite coordinate must be rejected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point<const K: usize> {
    data: [f64; K],
}

impl<const K: usize> Point<K> {
    /// Creates a point from its coordinates.
    pub const fn new(data: [f64; K]) -> Self {
        Self { data }
    }

    /// The origin.
    pub const fn origin() -> Self {
        Self { data: [0.0; K] }
    }

    /// Builds a point from a slice of exactly `K` coordinates.
    ///
    /// Returns `None` when the slice length differs from `K`.
    pub fn from_slice(coords: &[f64]) -> Option<Self> {
        let data: [f64; K] = coords.try_into().ok()?;
        Some(Self { data })
    }

    /// Returns the coordinates as an array.
    pub fn to_array(self) -> [f64; K] {
        self.data
    }

    /// Returns the coordinates as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Returns the coordinate along `axis`.
    ///
    /// `axis` must be less than `K`.
    pub fn coord(&self, axis: usize) -> f64 {
        self.data[axis]
    }

    /// Returns `true` when every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.data.iter().all(|c| c.is_finite())
    }

    /// Fails with [`GeomError::NonFinite`] on the first NaN or infinite coordinate.
    pub fn check_finite(&self) -> Result<(), GeomError> {
        match self.data.iter().position(|c| !c.is_finite()) {
            Some(axis) => Err(GeomError::NonFinite {
                axis,
                value: self.data[axis],
            }),
            None => Ok(()),
        }
    }
}

impl<const K: usize> From<[f64; K]> for Point<K> {
    fn from(data: [f64; K]) -> Self {
        Self::new(data)
    }
}
