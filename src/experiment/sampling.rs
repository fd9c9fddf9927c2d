//! Orbit sampling with bounded redo
//!
//! Reciprocal-type maps send 0 to 0, so a floating-point orbit that hits a
//! zero coordinate stays there and piles all its remaining mass onto one
//! cell. Such orbits are thrown away and a fresh initial point is drawn, up
//! to a fixed number of attempts.

use rand::Rng;
use tracing::{debug, warn};

use crate::algebra::{Scalar, Torus};
use crate::dynamics::Transformation;
use crate::error::{GaussError, Result};

/// An orbit is degenerate when it is empty or its last point has a zero
/// coordinate
pub fn is_degenerate<R: Scalar, const N: usize>(orbit: &[Torus<R, N>]) -> bool {
    match orbit.last() {
        None => true,
        Some(last) => last.coordinates().iter().any(|&c| c == R::zero()),
    }
}

/// Draw uniform initial points until one yields a non-degenerate orbit
pub fn sample_orbit<R, const N: usize, T, G>(
    transformation: &T,
    iterations: usize,
    max_attempts: usize,
    rng: &mut G,
) -> Result<Vec<Torus<R, N>>>
where
    R: Scalar,
    T: Transformation<R, N>,
    G: Rng + ?Sized,
{
    if iterations == 0 {
        return Err(GaussError::ZeroDepth);
    }

    for attempt in 1..=max_attempts {
        let orbit = transformation.orbit(Torus::uniform(rng), iterations);
        if !is_degenerate(&orbit) {
            return Ok(orbit);
        }
        debug!(attempt, iterations, "orbit collapsed onto a zero coordinate, redrawing");
    }

    warn!(attempts = max_attempts, "no non-degenerate orbit found");
    Err(GaussError::DegenerateOrbit {
        attempts: max_attempts,
    })
}
