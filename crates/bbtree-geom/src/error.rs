// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Errors raised while constructing geometric primitives.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GeomError {
    /// A coordinate was NaN or infinite.
    #[error("non-finite coordinate {value} on axis {axis}")]
    NonFinite {
        /// Axis of the offending coordinate.
        axis: usize,
        /// The rejected value.
        value: f64,
    },
    /// `min` exceeded `max` on some axis.
    #[error("inverted box on axis {axis}: min {min} > max {max}")]
    Inverted {
        /// Axis on which the corners are inverted.
        axis: usize,
        /// Minimum corner coordinate.
        min: f64,
        /// Maximum corner coordinate.
        max: f64,
    },
    /// A box was requested from an empty point set.
    #[error("cannot bound an empty point set")]
    Empty,
}
