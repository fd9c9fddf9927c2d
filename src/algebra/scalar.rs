//! Scalar Capability: the numeric contract behind every torus coordinate
//!
//! Two layers, mirroring the subgroup/field split of ℤ ⊂ ℝ:
//!
//! - [`ScalarGroup`]: arithmetic, integer and `f64` conversion, `mod1`
//!   reduction onto [0, 1) and a natural-number floor. Integers qualify
//!   (their `mod1` is always 0), which is what integer matrices need.
//! - [`Scalar`]: a `ScalarGroup` that can also be built from an `f64`.
//!   Torus coordinates and transformations are generic over this.

use std::fmt::Debug;
use std::ops::{Add, Div, Mul, Sub};

/// Continued-fraction digit
///
/// Unbounded in principle; fixed at 64 bits here. Floors saturate at both
/// ends (negative values give 0, huge values give `u64::MAX`).
pub type Natural = u64;

/// Subgroup-of-ℝ capability set
pub trait ScalarGroup:
    Copy
    + Debug
    + PartialOrd
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
{
    /// Additive identity
    fn zero() -> Self;

    /// Multiplicative identity
    fn one() -> Self;

    /// Conversion from a machine integer
    fn from_i64(value: i64) -> Self;

    /// Conversion from a continued-fraction digit
    fn from_natural(value: Natural) -> Self;

    /// Conversion to `f64`
    fn to_f64(self) -> f64;

    /// Canonical representative in [0, 1)
    ///
    /// Idempotent: `x.mod1().mod1() == x.mod1()`.
    fn mod1(self) -> Self;

    /// Natural-number floor
    fn floor_natural(self) -> Natural;
}

/// Real-number capability set: a subgroup that also accepts `f64` values
pub trait Scalar: ScalarGroup {
    /// Conversion from `f64`
    fn from_f64(value: f64) -> Self;
}

macro_rules! impl_float_scalar {
    ($t:ty) => {
        impl ScalarGroup for $t {
            #[inline]
            fn zero() -> Self {
                0.0
            }

            #[inline]
            fn one() -> Self {
                1.0
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $t
            }

            #[inline]
            fn from_natural(value: Natural) -> Self {
                value as $t
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn mod1(self) -> Self {
                let r = self - self.floor();
                // -1e-20 - floor(-1e-20) rounds to exactly 1.0
                if r >= 1.0 {
                    0.0
                } else {
                    r
                }
            }

            #[inline]
            fn floor_natural(self) -> Natural {
                // `as` saturates and maps NaN to 0
                self.floor() as Natural
            }
        }

        impl Scalar for $t {
            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }
        }
    };
}

macro_rules! impl_integer_group {
    ($t:ty) => {
        impl ScalarGroup for $t {
            #[inline]
            fn zero() -> Self {
                0
            }

            #[inline]
            fn one() -> Self {
                1
            }

            #[inline]
            fn from_i64(value: i64) -> Self {
                value as $t
            }

            #[inline]
            fn from_natural(value: Natural) -> Self {
                <$t>::try_from(value).unwrap_or(<$t>::MAX)
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn mod1(self) -> Self {
                0
            }

            #[inline]
            fn floor_natural(self) -> Natural {
                Natural::try_from(self).unwrap_or(0)
            }
        }
    };
}

impl_float_scalar!(f64);
impl_float_scalar!(f32);
impl_integer_group!(i64);
impl_integer_group!(i32);

/// Component-wise natural floor
pub fn floor_array<G: ScalarGroup, const N: usize>(values: [G; N]) -> [Natural; N] {
    values.map(G::floor_natural)
}

/// Component-wise reciprocal with the absorbing-state convention 1/0 := 0
pub fn reciprocal<G: ScalarGroup, const N: usize>(values: [G; N]) -> [G; N] {
    values.map(|x| if x == G::zero() { G::zero() } else { G::one() / x })
}

/// Add a digit vector to a coordinate vector
pub fn add_digits<G: ScalarGroup, const N: usize>(
    values: [G; N],
    digits: &[Natural; N],
) -> [G; N] {
    let mut out = values;
    for (x, &d) in out.iter_mut().zip(digits.iter()) {
        *x = *x + G::from_natural(d);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mod1_idempotent_and_in_unit_interval() {
        let samples: &[f64] = &[-3.75, -1.0, -1e-20, 0.0, 0.25, 0.999_999, 1.0, 2.5, 17.125, 1e9 + 0.5];
        for &x in samples {
            let once = x.mod1();
            assert!((0.0..1.0).contains(&once), "mod1({}) = {}", x, once);
            assert_eq!(once.mod1(), once);
        }
        assert_eq!((-3.75f64).mod1(), 0.25);
        assert_eq!(2.5f32.mod1(), 0.5);
    }

    #[test]
    fn test_integer_group() {
        assert_eq!(7i64.mod1(), 0);
        assert_eq!(7i64.floor_natural(), 7);
        assert_eq!((-3i32).floor_natural(), 0);
        assert_eq!(i32::from_natural(u64::MAX), i32::MAX);
    }

    #[test]
    fn test_floor_saturates() {
        assert_eq!(2.9f64.floor_natural(), 2);
        assert_eq!((-0.5f64).floor_natural(), 0);
        assert_eq!(f64::INFINITY.floor_natural(), u64::MAX);
        assert_eq!(f64::NAN.floor_natural(), 0);
    }

    #[test]
    fn test_reciprocal_zero_convention() {
        let r = reciprocal([0.0, 0.5, 4.0]);
        assert_eq!(r, [0.0, 2.0, 0.25]);
    }

    #[test]
    fn test_array_helpers() {
        assert_eq!(floor_array([1.5, 0.2, 3.0]), [1, 0, 3]);
        assert_eq!(add_digits([0.25, 0.5], &[2, 0]), [2.25, 0.5]);
    }
}
