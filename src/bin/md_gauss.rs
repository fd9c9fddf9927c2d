//! Multidimensional Gauss: density of a 2-D power map
//!
//!   (x, y) ↦ ({x^(-p) y^(-q)}, {x^(-r) y^(-s)})
//!
//! Estimates the invariant density on a grid and prints it row by row
//! (rows follow x, columns follow y), ready for a colour-map plot.

use gauss_sim::dynamics::maps::multidimensional_gauss_transformation;
use gauss_sim::{density_grid, ExperimentConfig, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    // Exponents
    let (p, q, r, s) = (0.52, 0.48, 0.45, 0.55);

    let config = ExperimentConfig {
        partitions: 50,
        iteration_rate: 2000,
        experiments: 10,
        ..ExperimentConfig::default()
    };

    println!(
        "# p = {:.4} q = {:.4} r = {:.4} s = {:.4}, {}x{} cells, orbit length {}, {} experiments",
        p,
        q,
        r,
        s,
        config.partitions,
        config.partitions,
        config.iterations(),
        config.experiments
    );

    let mut rng = StdRng::from_os_rng();
    let ggt = multidimensional_gauss_transformation(p, q, r, s);
    let density = density_grid(&ggt, &config, &mut rng)?;

    for row in density.as_array().rows() {
        let line: Vec<String> = row.iter().map(|d| format!("{:.5}", d)).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
