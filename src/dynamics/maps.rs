//! Standard Transformations
//!
//! Factory functions for the maps the experiments study. Each call builds a
//! fresh, independently owned instance.
//!
//! | Factory                                  | Coordinate map                          |
//! |------------------------------------------|-----------------------------------------|
//! | [`normal_gauss_transformation`]          | x ↦ 1/x                                 |
//! | [`alpha_gauss_transformation`]           | x ↦ α/x                                 |
//! | [`power_gauss_transformation`]           | x ↦ x^(-p)                              |
//! | [`multidimensional_gauss_transformation`]| (x, y) ↦ (x^(-p) y^(-q), x^(-r) y^(-s)) |
//! | [`skew_gauss_transformation`]            | (x, y) ↦ (1/(xy), 1/y)                  |
//!
//! Every map sends a zero coordinate (or a zero product, for the 2-D maps)
//! to zero.

use super::ggt::Ggt;
use super::reconstruct::ReconstructGgt;
use crate::algebra::reciprocal;

/// Classical Gauss map x ↦ {1/x}
pub fn normal_gauss_transformation() -> Ggt<f64, 1> {
    Ggt::new(reciprocal::<f64, 1>)
}

/// Classical Gauss map with its inverse, for continued-fraction round trips
pub fn reconstruct_normal_gauss() -> ReconstructGgt<f64, 1> {
    ReconstructGgt::new(reciprocal::<f64, 1>, reciprocal::<f64, 1>)
}

fn alpha_over(alpha: f64) -> impl Fn([f64; 1]) -> [f64; 1] + Send + Sync + 'static {
    move |x| {
        if x[0] == 0.0 {
            [0.0]
        } else {
            [alpha / x[0]]
        }
    }
}

/// α-Gauss map x ↦ {α/x}
pub fn alpha_gauss_transformation(alpha: f64) -> Ggt<f64, 1> {
    Ggt::new(alpha_over(alpha))
}

/// α-Gauss map with inverse y ↦ α/y
///
/// Reconstruction only contracts when every digit is at least 1, i.e. for
/// α ≥ 1. For α < 1 the interval (α, 1) is invariant with digit 0 and the
/// expansion carries no information there.
pub fn reconstruct_alpha_gauss(alpha: f64) -> ReconstructGgt<f64, 1> {
    ReconstructGgt::new(alpha_over(alpha), alpha_over(alpha))
}

/// Density 1 / (ln(1 + 1/α) (x + α)) on [0, 1)
///
/// For α = 1 this is the Gauss measure 1 / (ln 2 (1 + x)).
pub fn gauss_measure_pdf(x: f64, alpha: f64) -> f64 {
    1.0 / ((1.0 + 1.0 / alpha).ln() * (x + alpha))
}

/// Power map x ↦ {x^(-p)}
pub fn power_gauss_transformation(p: f64) -> Ggt<f64, 1> {
    Ggt::new(move |x: [f64; 1]| {
        if x[0] == 0.0 {
            [0.0]
        } else {
            [x[0].powf(-p)]
        }
    })
}

/// Two-dimensional power map
///
/// (x, y) ↦ ({x^(-p) y^(-q)}, {x^(-r) y^(-s)}), zero when `x y = 0`.
pub fn multidimensional_gauss_transformation(p: f64, q: f64, r: f64, s: f64) -> Ggt<f64, 2> {
    Ggt::new(move |x: [f64; 2]| {
        if x[0] * x[1] == 0.0 {
            return [0.0, 0.0];
        }
        [
            1.0 / (x[0].powf(p) * x[1].powf(q)),
            1.0 / (x[0].powf(r) * x[1].powf(s)),
        ]
    })
}

/// Skew Gauss map (x, y) ↦ ({1/(xy)}, {1/y}) with inverse (u, v) ↦ (v/u, 1/v)
pub fn skew_gauss_transformation() -> ReconstructGgt<f64, 2> {
    ReconstructGgt::new(
        |x: [f64; 2]| reciprocal([x[0] * x[1], x[1]]),
        |u: [f64; 2]| {
            [
                if u[0] == 0.0 { 0.0 } else { u[1] / u[0] },
                if u[1] == 0.0 { 0.0 } else { 1.0 / u[1] },
            ]
        },
    )
}
