//! # gauss-sim
//!
//! Generalized Gauss Transformations on the n-Torus: Orbits,
//! Continued-Fraction Digits and Empirical Invariant Measures
//!
//! ## Theoretical Framework
//!
//! The classical Gauss map `x ↦ {1/x}` on [0, 1) generates the continued
//! fraction of `x`: the integer parts thrown away at each step are the
//! partial quotients. Replacing `1/x` by an arbitrary coordinate map
//! `T: ℝⁿ → ℝⁿ` and reading the result modulo 1 gives a
//! *generalized Gauss transformation* (GGT) on the torus (ℝ/ℤ)ⁿ:
//!
//!   T̂(x) = T(x) mod 1,    digitₖ = ⌊T(T̂ᵏ x)⌋
//!
//! ### Methodology
//!
//! 1. **Orbits**: iterate T̂ from an initial point
//!
//! 2. **Digits**: record ⌊T(xₖ)⌋ along the orbit; with an inverse map the
//!    point is recovered by the backward recurrence y ← T⁻¹(y + dₖ)
//!
//! 3. **Invariant measures**: by Birkhoff's ergodic theorem the fraction of
//!    orbit points inside a box converges to the box's invariant measure,
//!    which can be checked against a candidate density with the built-in
//!    midpoint-rule integral
//!
//! ## Key Result
//!
//! For the Gauss map the visit frequency of [0, a] tends to the
//! Gauss-Kuzmin value
//!
//!   μ([0, a]) = log₂(1 + a)
//!
//! and digit expansions reconstruct points with error shrinking like the
//! inverse square of the convergent denominators.

pub mod algebra;
pub mod dynamics;
pub mod error;
pub mod experiment;
pub mod util;

// Re-exports from algebra
pub use algebra::{
    // Scalar capability
    Natural,
    Scalar,
    ScalarGroup,
    reciprocal,
    // Matrices and torus points
    Matrix,
    Torus,
};

// Re-exports from dynamics
pub use dynamics::{
    CoordinateMap,
    Ggt,
    ReconstructGgt,
    Transformation,
};

// Re-exports from error
pub use error::{GaussError, Result};

// Re-exports from experiment
pub use experiment::{
    DensityProfile,
    ExperimentConfig,
    density_grid,
    density_profile,
    random_orbit_frequency_grid,
    sample_orbit,
};
