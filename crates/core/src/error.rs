//! Error types for grid construction.

use thiserror::Error;

/// Errors reported when a grid cannot be built.
///
/// Both are deterministic input-validation failures; retrying with the same
/// arguments fails the same way.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    /// Rows or cols below 1 (or ragged row data).
    #[error("invalid grid dimensions {rows}x{cols}: both must be at least 1")]
    InvalidDimension { rows: usize, cols: usize },

    /// Lit probability outside [0, 1] or not a number.
    #[error("invalid lit probability {value}: must be within [0, 1]")]
    InvalidProbability { value: f64 },
}
