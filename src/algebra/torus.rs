//! Torus Points: the group (ℝ/ℤ)ⁿ
//!
//! A [`Torus`] point carries `N` coordinates and a `no_adjust` flag.
//!
//! - `no_adjust == false`: every coordinate is reduced into [0, 1) after
//!   construction and after every group operation.
//! - `no_adjust == true`: coordinates are stored verbatim. This is how a
//!   rectangle corner sitting exactly on the upper boundary (`1.0`) is
//!   kept from collapsing onto `0.0`.
//!
//! Boxes on the torus are described by two diagonal corners `a`, `b`.
//! Along each axis the box runs from `a[i]` up to `b[i]`, wrapping through
//! `1 ≡ 0` when `a[i] > b[i]`.

use rand::Rng;
use std::ops::{Add, AddAssign, Index, Mul, MulAssign, Sub, SubAssign};

use super::matrix::Matrix;
use super::scalar::{reciprocal, Natural, Scalar, ScalarGroup};
use crate::error::{GaussError, Result};

/// Point of the n-dimensional torus (ℝ/ℤ)ᴺ
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Torus<R: Scalar, const N: usize> {
    coordinates: [R; N],
    no_adjust: bool,
}

impl<R: Scalar, const N: usize> Default for Torus<R, N> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<R: Scalar, const N: usize> From<[R; N]> for Torus<R, N> {
    fn from(coordinates: [R; N]) -> Self {
        Self::new(coordinates)
    }
}

impl<R: Scalar, const N: usize> Torus<R, N> {
    /// Point with every coordinate reduced into [0, 1)
    pub fn new(coordinates: [R; N]) -> Self {
        let mut t = Self {
            coordinates,
            no_adjust: false,
        };
        t.adjust();
        t
    }

    /// Point whose coordinates are stored verbatim, now and after arithmetic
    pub fn unadjusted(coordinates: [R; N]) -> Self {
        Self {
            coordinates,
            no_adjust: true,
        }
    }

    /// The identity element
    pub fn origin() -> Self {
        Self::new([R::zero(); N])
    }

    /// Independent uniform coordinates in [0, 1)
    pub fn uniform<G: Rng + ?Sized>(rng: &mut G) -> Self {
        let mut coordinates = [R::zero(); N];
        for c in coordinates.iter_mut() {
            *c = R::from_f64(rng.random::<f64>());
        }
        Self::new(coordinates)
    }

    /// Raw coordinates
    pub fn coordinates(&self) -> &[R; N] {
        &self.coordinates
    }

    /// Overwrite coordinate `i`, reducing it unless `no_adjust` is set
    pub fn set(&mut self, i: usize, value: R) {
        self.coordinates[i] = if self.no_adjust { value } else { value.mod1() };
    }

    /// Whether reduction is suppressed
    pub fn no_adjust(&self) -> bool {
        self.no_adjust
    }

    /// Dimension of the torus
    pub const fn dim(&self) -> usize {
        N
    }

    fn adjust(&mut self) {
        if self.no_adjust {
            return;
        }
        for c in self.coordinates.iter_mut() {
            *c = c.mod1();
        }
    }

    fn reduced(mut self) -> Self {
        self.adjust();
        self
    }

    /// Component-wise reciprocal of the raw coordinates (1/0 := 0)
    pub fn reciprocal(&self) -> [R; N] {
        reciprocal(self.coordinates)
    }

    /// Parallel shift by `d` along every axis
    pub fn shift(mut self, d: R) -> Self {
        for c in self.coordinates.iter_mut() {
            *c = *c + d;
        }
        self.reduced()
    }

    /// Parallel shift by `-d` along every axis
    pub fn unshift(mut self, d: R) -> Self {
        for c in self.coordinates.iter_mut() {
            *c = *c - d;
        }
        self.reduced()
    }

    /// Toral homomorphism: integer `M × N` matrix acting on this point
    ///
    /// The image is always reduced, whatever the flag of `self`.
    pub fn apply_homomorphism<const M: usize>(&self, matrix: &Matrix<i64>) -> Result<Torus<R, M>> {
        if matrix.rows() != M {
            return Err(GaussError::DimensionMismatch {
                expected: M,
                actual: matrix.rows(),
            });
        }
        if matrix.cols() != N {
            return Err(GaussError::DimensionMismatch {
                expected: N,
                actual: matrix.cols(),
            });
        }

        let mut image = [R::zero(); M];
        for (i, out) in image.iter_mut().enumerate() {
            for (j, &x) in self.coordinates.iter().enumerate() {
                *out = *out + R::from_i64(matrix[(i, j)]) * x;
            }
        }

        Ok(Torus::new(image))
    }

    /// Closed, wrap-aware box membership
    ///
    /// On axis `i`, if `bl[i] <= tr[i]` the coordinate must lie in
    /// `[bl[i], tr[i]]`; otherwise the box wraps and the coordinate must lie
    /// in `[bl[i], 1) ∪ [0, tr[i]]`. Corners are reduced exactly as in
    /// [`measure`](Self::measure), so both describe the same box.
    pub fn in_box(&self, bl: &Self, tr: &Self) -> bool {
        let bl = bl.reduced();
        let tr = tr.reduced();
        (0..N).all(|i| {
            let (lo, hi, x) = (bl.coordinates[i], tr.coordinates[i], self.coordinates[i]);
            if lo <= hi {
                lo <= x && x <= hi
            } else {
                lo <= x || x <= hi
            }
        })
    }

    /// Lebesgue measure of the box with diagonal corners `a`, `b`
    ///
    /// Each corner is reduced first unless its own `no_adjust` flag is set,
    /// so `measure(0, 1)` with an unadjusted upper corner is the full torus.
    /// Not symmetric: swapping the corners selects the complementary arc on
    /// every axis.
    pub fn measure(a: &Self, b: &Self) -> R {
        let a = a.reduced();
        let b = b.reduced();

        (0..N).fold(R::one(), |area, i| area * axis_extent(a[i], b[i]))
    }

    /// Midpoint-rule integral of `integrand` over the box `[a, b]`
    ///
    /// Each axis of the (possibly wrapping) box is cut into `partitions`
    /// equal pieces, so `partitions^N` evaluations are made. Meant for
    /// validating measures, not for throughput.
    pub fn integral<F>(integrand: F, a: &Self, b: &Self, partitions: usize) -> Result<R>
    where
        F: Fn(&Self) -> R,
    {
        if partitions == 0 {
            return Err(GaussError::ZeroPartitions);
        }

        let a = a.reduced();
        let b = b.reduced();
        let n = R::from_natural(partitions as Natural);
        let two = R::from_i64(2);

        let mut step = [R::zero(); N];
        for (i, s) in step.iter_mut().enumerate() {
            *s = axis_extent(a[i], b[i]) / n;
        }

        let mut index = [0usize; N];
        let mut value = R::zero();

        loop {
            let mut bl = [R::zero(); N];
            let mut tr = [R::zero(); N];
            let mut mid = [R::zero(); N];
            for i in 0..N {
                let k = R::from_natural(index[i] as Natural);
                bl[i] = (a[i] + step[i] * k).mod1();
                // upper corner stays unreduced so a piece ending on 1 keeps its width
                tr[i] = bl[i] + step[i];
                mid[i] = (bl[i] + step[i] / two).mod1();
            }

            let area = Self::measure(&Self::unadjusted(bl), &Self::unadjusted(tr));
            value = value + integrand(&Self::new(mid)) * area;

            // odometer over the partition indices
            let mut axis = 0;
            loop {
                if axis == N {
                    return Ok(value);
                }
                index[axis] += 1;
                if index[axis] < partitions {
                    break;
                }
                index[axis] = 0;
                axis += 1;
            }
        }
    }
}

/// Length of the arc from `lo` up to `hi` on ℝ/ℤ
fn axis_extent<R: ScalarGroup>(lo: R, hi: R) -> R {
    if lo <= hi {
        hi - lo
    } else {
        hi + R::one() - lo
    }
}

impl<R: Scalar, const N: usize> Index<usize> for Torus<R, N> {
    type Output = R;

    fn index(&self, i: usize) -> &R {
        &self.coordinates[i]
    }
}

impl<R: Scalar, const N: usize> AddAssign for Torus<R, N> {
    fn add_assign(&mut self, rhs: Self) {
        for (c, &d) in self.coordinates.iter_mut().zip(rhs.coordinates.iter()) {
            *c = *c + d;
        }
        self.adjust();
    }
}

impl<R: Scalar, const N: usize> SubAssign for Torus<R, N> {
    fn sub_assign(&mut self, rhs: Self) {
        for (c, &d) in self.coordinates.iter_mut().zip(rhs.coordinates.iter()) {
            *c = *c - d;
        }
        self.adjust();
    }
}

impl<R: Scalar, const N: usize> MulAssign<i64> for Torus<R, N> {
    fn mul_assign(&mut self, m: i64) {
        let m = R::from_i64(m);
        for c in self.coordinates.iter_mut() {
            *c = *c * m;
        }
        self.adjust();
    }
}

impl<R: Scalar, const N: usize> Add for Torus<R, N> {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<R: Scalar, const N: usize> Sub for Torus<R, N> {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<R: Scalar, const N: usize> Mul<i64> for Torus<R, N> {
    type Output = Self;

    fn mul(mut self, m: i64) -> Self {
        self *= m;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_construction_and_flag() {
        let t = Torus::new([1.25, -0.25]);
        assert_eq!(t.coordinates(), &[0.25, 0.75]);
        assert!(!t.no_adjust());

        let corner = Torus::unadjusted([1.0, 0.5]);
        assert_eq!(corner[0], 1.0);
        assert_eq!(corner.dim(), 2);
        assert_eq!(corner.reciprocal(), [1.0, 2.0]);
        assert_eq!(Torus::new([0.0]).reciprocal(), [0.0]);
        assert_eq!(Torus::<f64, 3>::default(), Torus::origin());
    }

    #[test]
    fn test_uniform_points_in_domain() {
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let t = Torus::<f64, 3>::uniform(&mut rng);
            assert!(t.coordinates().iter().all(|&x| (0.0..1.0).contains(&x)));
        }
    }

    #[test]
    fn test_group_operations_wrap() {
        let a = Torus::new([0.75, 0.5]);
        let b = Torus::new([0.5, 0.25]);

        let sum = a + b;
        assert_eq!(sum.coordinates(), &[0.25, 0.75]);

        let diff = b - a;
        assert_eq!(diff.coordinates(), &[0.75, 0.75]);

        let tripled = Torus::new([0.375]) * 3;
        assert_eq!(tripled[0], 0.125);

        let shifted = a.shift(0.5).unshift(0.25);
        assert_eq!(shifted.coordinates(), &[0.0, 0.75]);
    }

    #[test]
    fn test_unadjusted_arithmetic_is_verbatim() {
        let corner = Torus::unadjusted([0.75]);
        let moved = corner + Torus::new([0.5]);
        assert_eq!(moved[0], 1.25);
        assert!(moved.no_adjust());
    }

    #[test]
    fn test_identity_homomorphism() {
        let x = Torus::new([0.3, 0.7]);
        let y: Torus<f64, 2> = x.apply_homomorphism(&Matrix::identity(2)).unwrap();
        assert_eq!(y, x);
    }

    #[test]
    fn test_cat_map_homomorphism() {
        let cat = Matrix::from_rows(vec![vec![2, 1], vec![1, 1]]).unwrap();
        let x = Torus::new([0.5, 0.25]);
        let y: Torus<f64, 2> = x.apply_homomorphism(&cat).unwrap();
        assert_eq!(y.coordinates(), &[0.25, 0.75]);

        // projection onto the first axis
        let proj = Matrix::from_rows(vec![vec![1, 0]]).unwrap();
        let p: Torus<f64, 1> = x.apply_homomorphism(&proj).unwrap();
        assert_eq!(p[0], 0.5);

        let bad: Result<Torus<f64, 2>> = x.apply_homomorphism(&proj);
        assert!(matches!(bad, Err(GaussError::DimensionMismatch { .. })));
    }

    #[test]
    fn test_measure_edge_cases() {
        let a = Torus::new([0.3]);
        assert_eq!(Torus::measure(&a, &a), 0.0);

        let b = Torus::new([0.8]);
        assert!(close(Torus::measure(&a, &b), 0.5));
        assert!(close(Torus::measure(&b, &a), 0.5));

        let c = Torus::new([0.2]);
        assert!(close(Torus::measure(&b, &c), 0.4));
        assert!(close(Torus::measure(&c, &b), 0.6));

        let full = Torus::measure(&Torus::unadjusted([0.0]), &Torus::unadjusted([1.0]));
        assert_eq!(full, 1.0);

        // an adjusted corner at 1 collapses onto 0
        assert_eq!(Torus::measure(&Torus::new([0.0]), &Torus::new([1.0])), 0.0);

        for i in 0..20 {
            for j in 0..20 {
                let m = Torus::measure(&Torus::new([i as f64 / 20.0]), &Torus::new([j as f64 / 20.0]));
                assert!((0.0..=1.0).contains(&m));
            }
        }
    }

    #[test]
    fn test_measure_product() {
        let bl = Torus::new([0.25, 0.75]);
        let tr = Torus::new([0.75, 0.25]);
        assert!(close(Torus::measure(&bl, &tr), 0.25));
    }

    #[test]
    fn test_in_box_wraps() {
        let bl = Torus::new([0.75]);
        let tr = Torus::new([0.25]);
        assert!(Torus::new([0.9]).in_box(&bl, &tr));
        assert!(Torus::new([0.1]).in_box(&bl, &tr));
        assert!(Torus::new([0.25]).in_box(&bl, &tr));
        assert!(!Torus::new([0.5]).in_box(&bl, &tr));

        let lo = Torus::unadjusted([0.0, 0.5]);
        let hi = Torus::unadjusted([0.5, 1.0]);
        assert!(Torus::new([0.5, 0.99]).in_box(&lo, &hi));
        assert!(!Torus::new([0.6, 0.99]).in_box(&lo, &hi));
    }

    #[test]
    fn test_set_keeps_coordinates_reduced() {
        let mut t = Torus::new([0.5, 0.5]);
        t.set(0, 1.5);
        t.set(1, -0.25);
        assert_eq!(t.coordinates(), &[0.5, 0.75]);

        let mut corner = Torus::unadjusted([0.0]);
        corner.set(0, 1.0);
        assert_eq!(corner[0], 1.0);
    }

    #[test]
    fn test_in_box_agrees_with_measure() {
        let mut bl = Torus::new([0.0]);
        bl.set(0, 1.25);
        let tr = Torus::new([0.5]);

        assert!(close(Torus::measure(&bl, &tr), 0.25));
        assert!(!Torus::new([0.1]).in_box(&bl, &tr));
        assert!(Torus::new([0.25]).in_box(&bl, &tr));
        assert!(Torus::new([0.4]).in_box(&bl, &tr));

        let top = Torus::unadjusted([1.0]);
        assert_eq!(Torus::measure(&Torus::new([0.0]), &top), 1.0);
        assert!(Torus::new([0.99]).in_box(&Torus::new([0.0]), &top));
    }

    #[test]
    fn test_integral_of_constant_over_full_torus() {
        let a = Torus::unadjusted([0.0, 0.0]);
        let b = Torus::unadjusted([1.0, 1.0]);
        let v = Torus::integral(|_| 1.0, &a, &b, 8).unwrap();
        assert!(close(v, 1.0), "got {}", v);
    }

    #[test]
    fn test_integral_linear_is_exact() {
        let a = Torus::unadjusted([0.0]);
        let b = Torus::unadjusted([1.0]);
        let v = Torus::integral(|t| t[0], &a, &b, 10).unwrap();
        assert!(close(v, 0.5), "got {}", v);
    }

    #[test]
    fn test_integral_over_wrapping_box() {
        let a = Torus::new([0.75]);
        let b = Torus::new([0.25]);
        let area = Torus::integral(|_| 1.0, &a, &b, 4).unwrap();
        assert!(close(area, 0.5));

        let first_moment = Torus::integral(|t| t[0], &a, &b, 4).unwrap();
        assert!(close(first_moment, 0.25), "got {}", first_moment);
    }

    #[test]
    fn test_integral_of_gauss_density() {
        let a = Torus::unadjusted([0.0]);
        let b = Torus::unadjusted([1.0]);
        let v = Torus::integral(|t| 1.0 / (std::f64::consts::LN_2 * (1.0 + t[0])), &a, &b, 200).unwrap();
        assert!((v - 1.0).abs() < 1e-5, "got {}", v);
    }

    #[test]
    fn test_integral_zero_partitions() {
        let a = Torus::new([0.0]);
        assert_eq!(
            Torus::integral(|_| 1.0, &a, &a, 0),
            Err(GaussError::ZeroPartitions)
        );
    }
}
