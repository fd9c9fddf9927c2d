//! Algebra Module: the domain every transformation lives on
//!
//! - **Scalar**: capability contract for coordinate types
//! - **Matrix**: small dense matrices (toral homomorphisms, density grids)
//! - **Torus**: (ℝ/ℤ)ⁿ with wrap-aware boxes, measure and integral

mod matrix;
mod scalar;
mod torus;

pub use matrix::Matrix;
pub use scalar::{add_digits, floor_array, reciprocal, Natural, Scalar, ScalarGroup};
pub use torus::Torus;
