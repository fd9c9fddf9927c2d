//! Ergodic Check: Birkhoff averages of the skew Gauss map
//!
//! Experiment : look for an ergodic measure of (x, y) ↦ ({1/(xy)}, {1/y})
//! Assume     : such a measure exists
//! Method     : measure each grid rectangle by averaging visit frequencies
//!              of random orbits (Birkhoff ergodic theorem)

use gauss_sim::dynamics::maps::skew_gauss_transformation;
use gauss_sim::{random_orbit_frequency_grid, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let partitions = 10;
    let iterations = 1000;
    let experiments = 100;

    println!("Experiment : verify whether an ergodic measure exists");
    println!("Assume     : there exists some ergodic measure");
    println!("Method     : calculate measure of rectangles by Birkhoff ergodic theorem");
    println!();

    // 42 keeps runs comparable
    let mut rng = StdRng::seed_from_u64(42);
    let gt = skew_gauss_transformation();
    let freq = random_orbit_frequency_grid(&gt, partitions, iterations, experiments, &mut rng)?;

    let n = partitions as f64;
    let mut total = 0.0;
    for i in 0..partitions {
        for j in 0..partitions {
            let f = freq[(i, j)];
            total += f;
            println!(
                "rectangle [{:.1}, {:.1}]x[{:.1}, {:.1}]: {:.6}",
                i as f64 / n,
                (i + 1) as f64 / n,
                j as f64 / n,
                (j + 1) as f64 / n,
                f
            );
        }
    }

    println!("\nTotal mass: {:.6}", total);
    Ok(())
}
