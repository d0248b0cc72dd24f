//! Error types for kdsampler.

use thiserror::Error;

/// Errors raised when runtime-sized input is handed to a fixed-dimensional tree.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum KdTreeError {
    /// A point or range list does not have one entry per dimension.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch {
        /// Dimensionality of the tree.
        expected: usize,
        /// Length of the input.
        got: usize,
    },

    /// A range is inverted or has a non-finite bound.
    #[error("invalid range on axis {axis}: [{min}, {max}]")]
    InvalidRange {
        /// Axis of the offending range.
        axis: usize,
        /// Lower bound as given.
        min: f64,
        /// Upper bound as given.
        max: f64,
    },

    /// A point coordinate is NaN or infinite.
    #[error("coordinate on axis {axis} must be finite, got {value}")]
    NonFiniteCoordinate {
        /// Axis of the offending coordinate.
        axis: usize,
        /// Coordinate as given.
        value: f64,
    },

    /// The value is NaN or infinite.
    #[error("value must be finite, got {0}")]
    NonFiniteValue(f64),
}

/// Result type alias for tree operations.
pub type Result<T> = std::result::Result<T, KdTreeError>;
