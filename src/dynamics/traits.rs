//! Transformation Trait: one coordinate map, every derived statistic
//!
//! Anything that can apply a coordinate map `T: ℝᴺ → ℝᴺ` gets the induced
//! torus dynamics for free:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   Transformation Trait                       │
//! ├─────────────────────────────────────────────────────────────┤
//! │  + apply_coordinates()  - T on raw coordinates (required)    │
//! │  + apply()              - lifted map T̂ on the torus          │
//! │  + orbit(x, n)          - x, T̂x, …, T̂ⁿ⁻¹x                    │
//! │  + continued_fraction() - ⌊T(xₖ)⌋ along the orbit            │
//! │  + frequency_in_orbit() - Birkhoff average of a box          │
//! │  + frequency_of_orbit() - same, orbit generated on the fly   │
//! │  + frequency_of_random_orbits() - averaged over seeds        │
//! └─────────────────────────────────────────────────────────────┘
//! ```

use rand::Rng;

use crate::algebra::{floor_array, Natural, Scalar, Torus};
use crate::error::{GaussError, Result};

/// A self-map of (ℝ/ℤ)ᴺ induced by a coordinate map
pub trait Transformation<R: Scalar, const N: usize> {
    /// The original (unlifted) coordinate map
    ///
    /// Maps singular at zero must send zero to zero; nothing upstream
    /// perturbs a zero coordinate.
    fn apply_coordinates(&self, coordinates: [R; N]) -> [R; N];

    /// The lifted map: apply `T`, then reduce onto the torus
    fn apply(&self, point: &Torus<R, N>) -> Torus<R, N> {
        Torus::new(self.apply_coordinates(*point.coordinates()))
    }

    /// `[x₀, T̂(x₀), …, T̂ⁿ⁻¹(x₀)]`, exactly `iterations` points
    ///
    /// `initial` is stored as given (flag and coordinates untouched); every
    /// later point is reduced.
    fn orbit(&self, initial: Torus<R, N>, iterations: usize) -> Vec<Torus<R, N>> {
        let mut orbit = Vec::with_capacity(iterations);
        let mut current = initial;

        for k in 0..iterations {
            if k > 0 {
                current = self.apply(&current);
            }
            orbit.push(current);
        }

        orbit
    }

    /// First `depth` digit vectors of the expansion of `point`
    ///
    /// Digit `k` is `⌊T(xₖ)⌋` taken component-wise on the raw coordinates of
    /// the `k`-th orbit point. For `T(x) = 1/x` these are the classical
    /// continued-fraction partial quotients. Once an orbit reaches a zero
    /// coordinate it stays there and the matching digits are 0.
    fn continued_fraction(&self, point: Torus<R, N>, depth: usize) -> Vec<[Natural; N]> {
        self.orbit(point, depth)
            .iter()
            .map(|x| floor_array(self.apply_coordinates(*x.coordinates())))
            .collect()
    }

    /// Fraction of `orbit` inside the box with corners `bl`, `tr`
    ///
    /// Membership is closed and wrap-aware (see [`Torus::in_box`]), the same
    /// box convention [`Torus::measure`] uses, so the result estimates the
    /// invariant measure of that box.
    fn frequency_in_orbit(
        &self,
        bl: &Torus<R, N>,
        tr: &Torus<R, N>,
        orbit: &[Torus<R, N>],
    ) -> Result<f64> {
        if orbit.is_empty() {
            return Err(GaussError::EmptyOrbit);
        }

        let visits = orbit.iter().filter(|x| x.in_box(bl, tr)).count();
        Ok(visits as f64 / orbit.len() as f64)
    }

    /// Birkhoff average of the box along the orbit of `initial`
    fn frequency_of_orbit(
        &self,
        bl: &Torus<R, N>,
        tr: &Torus<R, N>,
        initial: Torus<R, N>,
        depth: usize,
    ) -> Result<f64> {
        if depth == 0 {
            return Err(GaussError::ZeroDepth);
        }

        self.frequency_in_orbit(bl, tr, &self.orbit(initial, depth))
    }

    /// [`frequency_of_orbit`](Self::frequency_of_orbit) averaged over
    /// `experiments` orbits started at independent uniform points
    fn frequency_of_random_orbits<G: Rng + ?Sized>(
        &self,
        bl: &Torus<R, N>,
        tr: &Torus<R, N>,
        depth: usize,
        experiments: usize,
        rng: &mut G,
    ) -> Result<f64> {
        if experiments == 0 {
            return Err(GaussError::ZeroExperiments);
        }

        let mut sum = 0.0;
        for _ in 0..experiments {
            let initial = Torus::uniform(rng);
            sum += self.frequency_of_orbit(bl, tr, initial, depth)?;
        }

        Ok(sum / experiments as f64)
    }
}
