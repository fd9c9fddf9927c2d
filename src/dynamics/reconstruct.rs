//! Reconstruction: from digit expansions back to points
//!
//! A [`ReconstructGgt`] is a [`Ggt`] together with the algebraic inverse of
//! its coordinate map. Given digits `d₀, d₁, …, d_{k-1}` (earliest first, as
//! produced by `continued_fraction`), the point is approximated by the
//! backward recurrence
//!
//!   y ← 0;  for j = k-1 … 0:  y ← T⁻¹(y + dⱼ)
//!
//! which for `T(x) = 1/x` is the usual evaluation of a continued-fraction
//! convergent from the tail.
//!
//! ## Contract
//!
//! The inverse is taken on trust. Nothing checks `T⁻¹ ∘ T = id`; a wrong
//! inverse gives wrong numbers that look perfectly reasonable. How fast the
//! reconstruction converges as the depth grows depends entirely on how
//! strongly `T⁻¹` contracts.

use std::fmt;

use super::ggt::{CoordinateMap, Ggt};
use super::traits::Transformation;
use crate::algebra::{add_digits, Natural, Scalar, Torus};
use crate::error::{GaussError, Result};

/// Gauss transformation with a caller-supplied inverse
pub struct ReconstructGgt<R: Scalar, const N: usize> {
    ggt: Ggt<R, N>,
    inverse: CoordinateMap<R, N>,
}

impl<R: Scalar, const N: usize> ReconstructGgt<R, N> {
    /// Build from a forward coordinate map and its inverse
    pub fn new<F, G>(original: F, inverse: G) -> Self
    where
        F: Fn([R; N]) -> [R; N] + Send + Sync + 'static,
        G: Fn([R; N]) -> [R; N] + Send + Sync + 'static,
    {
        Self::from_ggt(Ggt::new(original), inverse)
    }

    /// Attach an inverse to an existing transformation
    pub fn from_ggt<G>(ggt: Ggt<R, N>, inverse: G) -> Self
    where
        G: Fn([R; N]) -> [R; N] + Send + Sync + 'static,
    {
        Self {
            ggt,
            inverse: Box::new(inverse),
        }
    }

    /// The forward transformation
    pub fn ggt(&self) -> &Ggt<R, N> {
        &self.ggt
    }

    /// The inverse coordinate map
    pub fn apply_inverse(&self, coordinates: [R; N]) -> [R; N] {
        (self.inverse)(coordinates)
    }

    /// Approximate point encoded by `expansion` (earliest digit first)
    pub fn reconstruct(&self, expansion: &[[Natural; N]]) -> Result<[R; N]> {
        if expansion.is_empty() {
            return Err(GaussError::EmptyExpansion);
        }

        Ok(expansion
            .iter()
            .rev()
            .fold([R::zero(); N], |acc, digits| {
                self.apply_inverse(add_digits(acc, digits))
            }))
    }

    /// Expand `point` to `depth` digits, then reconstruct
    pub fn reconstruct_point(&self, point: Torus<R, N>, depth: usize) -> Result<[R; N]> {
        let expansion = self.continued_fraction(point, depth);
        self.reconstruct(&expansion)
    }
}

impl<R: Scalar, const N: usize> Transformation<R, N> for ReconstructGgt<R, N> {
    fn apply_coordinates(&self, coordinates: [R; N]) -> [R; N] {
        self.ggt.apply_coordinates(coordinates)
    }
}

impl<R: Scalar, const N: usize> fmt::Debug for ReconstructGgt<R, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReconstructGgt")
            .field("ggt", &self.ggt)
            .finish_non_exhaustive()
    }
}
