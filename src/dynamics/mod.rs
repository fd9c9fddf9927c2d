//! Dynamics Module: Generalized Gauss Transformations
//!
//! A generalized Gauss transformation (GGT) takes any coordinate map
//! `T: ℝᴺ → ℝᴺ` and reads it on the torus:
//!
//!   T̂(x) = T(x) mod 1
//!
//! The integer parts discarded by the reduction are the digits of a
//! continued-fraction-like expansion, and visit frequencies along orbits
//! estimate the invariant measure (Birkhoff's ergodic theorem).
//!
//! - **Transformation**: trait carrying orbits, digits and frequencies
//! - **Ggt**: owns a coordinate map
//! - **ReconstructGgt**: adds an inverse and rebuilds points from digits
//! - **maps**: the standard transformations used by the experiments

pub mod maps;
mod ggt;
mod reconstruct;
mod traits;

pub use ggt::{CoordinateMap, Ggt};
pub use reconstruct::ReconstructGgt;
pub use traits::Transformation;
