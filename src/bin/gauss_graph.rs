//! Gauss Graph: tabulate the classical Gauss map
//!
//! Prints `x  T(x)` for x on a uniform grid of [0, 1), where T is the lifted
//! map x ↦ {1/x}. Pipe into any plotting tool to see the familiar
//! hyperbolic branches.

use gauss_sim::dynamics::maps::normal_gauss_transformation;
use gauss_sim::{Torus, Transformation};

fn main() {
    let n_samples = 10_000;
    let gauss = normal_gauss_transformation();

    println!("# x\tT_1(x)");
    for i in 0..n_samples {
        let x = Torus::new([i as f64 / n_samples as f64]);
        let y = gauss.apply(&x);
        println!("{:.8}\t{:.8}", x[0], y[0]);
    }
}
