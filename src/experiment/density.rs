//! Empirical Invariant Densities
//!
//! Estimates the invariant density of a transformation by cutting the
//! torus into equal cells and measuring how often orbits visit each one.
//!
//! ## Parallelism
//!
//! Orbit generation is inherently sequential, but once an orbit exists the
//! cells are independent: each cell is one rayon task that returns its own
//! value, so no two tasks write the same slot. Per-experiment results are
//! then merged on the calling thread and divided by the experiment count.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, info};

use super::config::ExperimentConfig;
use super::sampling::sample_orbit;
use crate::algebra::{Matrix, Torus};
use crate::dynamics::Transformation;
use crate::error::{GaussError, Result};

/// Density estimate on [0, 1)
#[derive(Debug, Clone)]
pub struct DensityProfile {
    /// Cell midpoints
    pub midpoints: Vec<f64>,
    /// Visit frequency divided by cell width
    pub density: Vec<f64>,
}

/// Corners of the `k`-th of `partitions` cells on the circle
///
/// Corners are unadjusted so the last cell ends on 1 rather than 0.
pub fn interval_cell(k: usize, partitions: usize) -> (Torus<f64, 1>, Torus<f64, 1>) {
    let n = partitions as f64;
    (
        Torus::unadjusted([k as f64 / n]),
        Torus::unadjusted([(k + 1) as f64 / n]),
    )
}

/// Corners of cell `(i, j)` of the `partitions × partitions` grid
///
/// `i` indexes the first coordinate, `j` the second.
pub fn grid_cell(i: usize, j: usize, partitions: usize) -> (Torus<f64, 2>, Torus<f64, 2>) {
    let n = partitions as f64;
    (
        Torus::unadjusted([i as f64 / n, j as f64 / n]),
        Torus::unadjusted([(i + 1) as f64 / n, (j + 1) as f64 / n]),
    )
}

/// Density of a one-dimensional transformation
pub fn density_profile<T, G>(
    transformation: &T,
    config: &ExperimentConfig,
    rng: &mut G,
) -> Result<DensityProfile>
where
    T: Transformation<f64, 1> + Sync,
    G: Rng + ?Sized,
{
    config.validate()?;

    let n = config.partitions;
    let width = config.cell_width();
    let mut sum = vec![0.0; n];

    info!(
        partitions = n,
        iterations = config.iterations(),
        experiments = config.experiments,
        "estimating 1-D density"
    );

    for experiment in 0..config.experiments {
        let orbit = sample_orbit(transformation, config.iterations(), config.max_redo_attempts, rng)?;

        let cells = (0..n)
            .into_par_iter()
            .map(|k| {
                let (bl, tr) = interval_cell(k, n);
                transformation
                    .frequency_in_orbit(&bl, &tr, &orbit)
                    .map(|f| f / width)
            })
            .collect::<Result<Vec<f64>>>()?;

        for (s, c) in sum.iter_mut().zip(cells) {
            *s += c;
        }
        debug!(experiment, "experiment merged");
    }

    let experiments = config.experiments as f64;
    Ok(DensityProfile {
        midpoints: (0..n).map(|k| (k as f64 + 0.5) * width).collect(),
        density: sum.into_iter().map(|s| s / experiments).collect(),
    })
}

/// Density of a two-dimensional transformation on a `partitions²` grid
///
/// Entry `(i, j)` is the density on cell [i/n, (i+1)/n] × [j/n, (j+1)/n].
pub fn density_grid<T, G>(
    transformation: &T,
    config: &ExperimentConfig,
    rng: &mut G,
) -> Result<Matrix<f64>>
where
    T: Transformation<f64, 2> + Sync,
    G: Rng + ?Sized,
{
    config.validate()?;

    let n = config.partitions;
    let scale = (n * n) as f64;
    let mut sum = Matrix::zeros(n, n);

    info!(
        partitions = n,
        iterations = config.iterations(),
        experiments = config.experiments,
        "estimating 2-D density"
    );

    for experiment in 0..config.experiments {
        let orbit = sample_orbit(transformation, config.iterations(), config.max_redo_attempts, rng)?;

        let cells = (0..n * n)
            .into_par_iter()
            .map(|idx| {
                let (bl, tr) = grid_cell(idx / n, idx % n, n);
                transformation
                    .frequency_in_orbit(&bl, &tr, &orbit)
                    .map(|f| f * scale)
            })
            .collect::<Result<Vec<f64>>>()?;

        sum.accumulate(&cells_to_matrix(cells, n))?;
        debug!(experiment, "experiment merged");
    }

    sum.divide_by(config.experiments as f64);
    Ok(sum)
}

/// Frequencies of random orbits over every grid cell
///
/// Each cell runs `frequency_of_random_orbits` with its own generator,
/// seeded from `rng` before the parallel section so the result does not
/// depend on scheduling.
pub fn random_orbit_frequency_grid<T, G>(
    transformation: &T,
    partitions: usize,
    iterations: usize,
    experiments: usize,
    rng: &mut G,
) -> Result<Matrix<f64>>
where
    T: Transformation<f64, 2> + Sync,
    G: Rng + ?Sized,
{
    if partitions == 0 {
        return Err(GaussError::ZeroPartitions);
    }

    let seeds: Vec<u64> = (0..partitions * partitions).map(|_| rng.random()).collect();

    let cells = seeds
        .into_par_iter()
        .enumerate()
        .map(|(idx, seed)| {
            let (bl, tr) = grid_cell(idx / partitions, idx % partitions, partitions);
            let mut cell_rng = StdRng::seed_from_u64(seed);
            transformation.frequency_of_random_orbits(&bl, &tr, iterations, experiments, &mut cell_rng)
        })
        .collect::<Result<Vec<f64>>>()?;

    Ok(cells_to_matrix(cells, partitions))
}

fn cells_to_matrix(cells: Vec<f64>, n: usize) -> Matrix<f64> {
    let mut m = Matrix::zeros(n, n);
    for (idx, value) in cells.into_iter().enumerate() {
        m[(idx / n, idx % n)] = value;
    }
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::maps::{gauss_measure_pdf, normal_gauss_transformation, skew_gauss_transformation};

    fn small_config() -> ExperimentConfig {
        ExperimentConfig {
            partitions: 10,
            iteration_rate: 2000,
            experiments: 4,
            max_redo_attempts: 100,
        }
    }

    #[test]
    fn test_cells_cover_domain() {
        let (bl, tr) = interval_cell(9, 10);
        assert!((bl[0] - 0.9).abs() < 1e-15);
        assert_eq!(tr[0], 1.0);

        let (bl, tr) = grid_cell(0, 4, 5);
        assert_eq!(bl.coordinates(), &[0.0, 0.8]);
        assert_eq!(tr.coordinates(), &[0.2, 1.0]);
    }

    #[test]
    fn test_gauss_density_profile() {
        let mut rng = StdRng::seed_from_u64(42);
        let config = small_config();
        let profile = density_profile(&normal_gauss_transformation(), &config, &mut rng).unwrap();

        assert_eq!(profile.midpoints.len(), 10);
        assert!((profile.midpoints[0] - 0.05).abs() < 1e-15);

        for (x, d) in profile.midpoints.iter().zip(&profile.density) {
            let expected = gauss_measure_pdf(*x, 1.0);
            assert!((d - expected).abs() < 0.1, "x = {}: {} vs {}", x, d, expected);
        }

        let mass: f64 = profile.density.iter().sum::<f64>() * config.cell_width();
        assert!(mass >= 1.0 - 1e-9 && mass < 1.01, "mass = {}", mass);
    }

    #[test]
    fn test_density_grid_mass() {
        let mut rng = StdRng::seed_from_u64(5);
        let config = ExperimentConfig {
            partitions: 5,
            iteration_rate: 200,
            experiments: 2,
            max_redo_attempts: 100,
        };
        let grid = density_grid(&skew_gauss_transformation(), &config, &mut rng).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (5, 5));

        let mass: f64 = grid.as_array().iter().sum::<f64>() / 25.0;
        assert!(mass >= 1.0 - 1e-9 && mass < 1.05, "mass = {}", mass);
        assert!(grid.as_array().iter().all(|&d| d >= 0.0));
    }

    #[test]
    fn test_random_orbit_frequency_grid() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid = random_orbit_frequency_grid(&skew_gauss_transformation(), 3, 300, 5, &mut rng).unwrap();

        // every cell draws its own orbits, so the total is only close to 1
        let total: f64 = grid.as_array().iter().sum();
        assert!((total - 1.0).abs() < 0.15, "total = {}", total);
        assert!(grid.as_array().iter().all(|&f| (0.0..=1.0).contains(&f)));

        let mut again = StdRng::seed_from_u64(9);
        let repeat = random_orbit_frequency_grid(&skew_gauss_transformation(), 3, 300, 5, &mut again).unwrap();
        assert_eq!(grid, repeat);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let config = ExperimentConfig {
            partitions: 0,
            ..small_config()
        };
        assert!(matches!(
            density_profile(&normal_gauss_transformation(), &config, &mut rng),
            Err(GaussError::InvalidConfig(_))
        ));
        assert_eq!(
            random_orbit_frequency_grid(&skew_gauss_transformation(), 0, 10, 1, &mut rng),
            Err(GaussError::ZeroPartitions)
        );
    }
}
