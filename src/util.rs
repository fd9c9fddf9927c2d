//! Column extraction for plotting collaborators

use crate::algebra::{Natural, Scalar, Torus};

/// The `i`-th coordinate of every point, in orbit order
///
/// Panics if `i >= N`.
pub fn extract_coordinate<R: Scalar, const N: usize>(orbit: &[Torus<R, N>], i: usize) -> Vec<R> {
    orbit.iter().map(|x| x[i]).collect()
}

/// The `i`-th component of every digit vector
///
/// Panics if `i >= N`.
pub fn extract_digit<const N: usize>(digits: &[[Natural; N]], i: usize) -> Vec<Natural> {
    digits.iter().map(|d| d[i]).collect()
}
