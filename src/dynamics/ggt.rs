//! Generalized Gauss Transformation
//!
//! Wraps an arbitrary coordinate map `T: ℝᴺ → ℝᴺ` and exposes the induced
//! torus dynamics through [`Transformation`]. The classical Gauss map
//! `x ↦ {1/x}` is the case `N = 1`, `T(x) = 1/x`.

use std::fmt;

use super::traits::Transformation;
use crate::algebra::Scalar;

/// Owned coordinate map `ℝᴺ → ℝᴺ`
pub type CoordinateMap<R, const N: usize> = Box<dyn Fn([R; N]) -> [R; N] + Send + Sync>;

/// Generalized Gauss transformation
pub struct Ggt<R: Scalar, const N: usize> {
    original: CoordinateMap<R, N>,
}

impl<R: Scalar, const N: usize> Ggt<R, N> {
    /// Take ownership of the coordinate map
    ///
    /// The map must send a zero coordinate to zero wherever it is singular
    /// there (see [`reciprocal`](crate::algebra::reciprocal)).
    pub fn new<F>(original: F) -> Self
    where
        F: Fn([R; N]) -> [R; N] + Send + Sync + 'static,
    {
        Self {
            original: Box::new(original),
        }
    }
}

impl<R: Scalar, const N: usize> Transformation<R, N> for Ggt<R, N> {
    fn apply_coordinates(&self, coordinates: [R; N]) -> [R; N] {
        (self.original)(coordinates)
    }
}

impl<R: Scalar, const N: usize> fmt::Debug for Ggt<R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ggt").field("dim", &N).finish_non_exhaustive()
    }
}
