//! Error types for gauss-sim
//!
//! Only precondition violations are errors. Zero coordinates hitting a
//! singular map are ordinary values (maps send 0 to 0), and degenerate
//! orbits are reported only by the experiment driver that resamples them.

use thiserror::Error;

/// Result type alias for gauss-sim operations
pub type Result<T> = std::result::Result<T, GaussError>;

/// Errors that can occur in gauss-sim operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaussError {
    /// Vector or matrix dimensions do not fit together
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Dimension required by the operation
        expected: usize,
        /// Dimension supplied
        actual: usize,
    },

    /// Rows of different length passed to a matrix constructor
    #[error("Ragged matrix rows: row {row} has {actual} entries, expected {expected}")]
    RaggedRows {
        /// Offending row index
        row: usize,
        /// Length of the first row
        expected: usize,
        /// Length of the offending row
        actual: usize,
    },

    /// Numerical integration requested with no sub-intervals
    #[error("Number of partitions must be positive")]
    ZeroPartitions,

    /// Orbit statistic requested over zero iterations
    #[error("Orbit depth must be positive")]
    ZeroDepth,

    /// Averaging requested over zero experiments
    #[error("Number of experiments must be positive")]
    ZeroExperiments,

    /// Frequency requested over an empty orbit
    #[error("Orbit is empty")]
    EmptyOrbit,

    /// Reconstruction requested from no digits
    #[error("Digit expansion is empty")]
    EmptyExpansion,

    /// Every sampled orbit collapsed into the absorbing state
    #[error("No non-degenerate orbit found after {attempts} attempts")]
    DegenerateOrbit {
        /// Number of orbits sampled
        attempts: usize,
    },

    /// Experiment configuration rejected by validation
    #[error("Invalid experiment configuration: {0}")]
    InvalidConfig(String),
}
