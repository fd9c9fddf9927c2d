//! Experiment Module: estimating invariant densities from orbits
//!
//! The driver side of the simulator. Where the core never retries, this
//! module resamples degenerate orbits (bounded), spreads independent cell
//! evaluations across threads, and averages over experiments.
//!
//! - **config**: `ExperimentConfig` with defaults and validation
//! - **sampling**: degeneracy check and bounded-redo orbit sampling
//! - **density**: 1-D profiles, 2-D grids, random-orbit frequency grids

mod config;
mod density;
mod sampling;

pub use config::ExperimentConfig;
pub use density::{
    density_grid, density_profile, grid_cell, interval_cell, random_orbit_frequency_grid,
    DensityProfile,
};
pub use sampling::{is_degenerate, sample_orbit};
