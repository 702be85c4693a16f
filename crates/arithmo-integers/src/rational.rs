//! Arbitrary precision rational numbers.
//!
//! This module provides exact rational arithmetic, including lossless
//! conversion from finite `f64` values for exact error measurement.

use dashu::base::{Abs, UnsignedAbs};
use dashu::rational::RBig;
use num_traits::{Float, One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::Integer;

/// An arbitrary precision rational number.
///
/// Rationals are always stored in lowest terms with a positive denominator.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rational(RBig);

impl Rational {
    /// Creates a new rational from numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn new(numerator: Integer, denominator: Integer) -> Self {
        assert!(!denominator.is_zero(), "denominator cannot be zero");
        let flip = denominator.is_negative();
        let r = RBig::from_parts(
            numerator.into_inner(),
            denominator.into_inner().unsigned_abs(),
        );
        Self(if flip { -r } else { r })
    }

    /// Creates a rational from an integer (denominator = 1).
    #[must_use]
    pub fn from_integer(n: Integer) -> Self {
        Self(RBig::from(n.into_inner()))
    }

    /// Creates a rational from i64 numerator and denominator.
    ///
    /// # Panics
    ///
    /// Panics if the denominator is zero.
    #[must_use]
    pub fn from_i64(numerator: i64, denominator: i64) -> Self {
        Self::new(Integer::new(numerator), Integer::new(denominator))
    }

    /// Converts a finite `f64` to the exact rational it represents.
    ///
    /// Every finite double is a dyadic rational `m * 2^e`; the conversion
    /// is lossless. Returns `None` for infinities and NaN.
    #[must_use]
    pub fn from_f64(x: f64) -> Option<Self> {
        if !x.is_finite() {
            return None;
        }
        let (mantissa, exponent, sign) = Float::integer_decode(x);
        let mut m = Integer::from(mantissa);
        if sign < 0 {
            m = -m;
        }
        if exponent >= 0 {
            Some(Self::from_integer(m << exponent.unsigned_abs() as usize))
        } else {
            Some(Self::new(
                m,
                Integer::one() << exponent.unsigned_abs() as usize,
            ))
        }
    }

    /// Approximates this rational as an `f64`, truncating toward zero.
    ///
    /// Values beyond the double range become infinite; values too small
    /// to represent become zero.
    #[must_use]
    pub fn to_f64(&self) -> f64 {
        if self.is_zero() {
            return 0.0;
        }
        let sign = f64::from(self.signum());
        let num = self.numerator().abs();
        let den = self.denominator();

        // Scale the quotient to roughly 64 significant bits, convert the
        // integer part exactly, then restore the binary exponent.
        let e = num.bit_len() as i64 - den.bit_len() as i64 - 64;
        if e > 2048 {
            return sign * f64::INFINITY;
        }
        if e < -2048 {
            return 0.0;
        }
        let q = if e >= 0 {
            num / (den << e.unsigned_abs() as usize)
        } else {
            (num << e.unsigned_abs() as usize) / den
        };
        // q has at most 66 bits, so it fits a u128.
        let q = q.to_u128().unwrap_or(u128::MAX);
        sign * (q as f64) * (e as f64).exp2()
    }

    /// Returns the numerator.
    #[must_use]
    pub fn numerator(&self) -> Integer {
        Integer::from(self.0.numerator().clone())
    }

    /// Returns the denominator. Always positive.
    #[must_use]
    pub fn denominator(&self) -> Integer {
        Integer::from(dashu::integer::IBig::from(self.0.denominator().clone()))
    }

    /// Returns true if this rational is an integer.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        *self.0.denominator() == dashu::integer::UBig::ONE
    }

    /// Converts to an integer if the denominator is 1.
    #[must_use]
    pub fn to_integer(&self) -> Option<Integer> {
        if self.is_integer() {
            Some(self.numerator())
        } else {
            None
        }
    }

    /// Returns the absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self(self.0.clone().abs())
    }

    /// Returns the reciprocal (1/x).
    ///
    /// # Panics
    ///
    /// Panics if the rational is zero.
    #[must_use]
    pub fn recip(&self) -> Self {
        assert!(!self.is_zero(), "cannot take reciprocal of zero");
        Self(RBig::ONE / self.0.clone())
    }

    /// Returns the sign: -1, 0, or 1.
    #[must_use]
    pub fn signum(&self) -> i8 {
        if self.0.is_zero() {
            0
        } else if self.0 > RBig::ZERO {
            1
        } else {
            -1
        }
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(RBig::ZERO)
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(RBig::ONE)
    }

    fn is_one(&self) -> bool {
        self.0 == RBig::ONE
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({})", self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Rational {
    type Output = Rational;

    fn add(self, rhs: Self) -> Self::Output {
        Rational(&self.0 + &rhs.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Rational {
    type Output = Rational;

    fn sub(self, rhs: Self) -> Self::Output {
        Rational(&self.0 - &rhs.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Rational {
    type Output = Rational;

    fn mul(self, rhs: Self) -> Self::Output {
        Rational(&self.0 * &rhs.0)
    }
}

impl Div for Rational {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Self(self.0 / rhs.0)
    }
}

impl Div for &Rational {
    type Output = Rational;

    fn div(self, rhs: Self) -> Self::Output {
        Rational(&self.0 / &rhs.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl From<Integer> for Rational {
    fn from(value: Integer) -> Self {
        Self::from_integer(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(Integer::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_terms() {
        let r = Rational::from_i64(6, 4);
        assert_eq!(r.numerator().to_i64(), Some(3));
        assert_eq!(r.denominator().to_i64(), Some(2));
    }

    #[test]
    fn test_negative_denominator() {
        let r = Rational::from_i64(1, -2);
        assert_eq!(r.numerator().to_i64(), Some(-1));
        assert_eq!(r.denominator().to_i64(), Some(2));
    }

    #[test]
    fn test_from_f64_exact() {
        let r = Rational::from_f64(0.5).unwrap();
        assert_eq!(r, Rational::from_i64(1, 2));

        let r = Rational::from_f64(-3.25).unwrap();
        assert_eq!(r, Rational::from_i64(-13, 4));

        assert_eq!(Rational::from_f64(f64::INFINITY), None);
        assert_eq!(Rational::from_f64(f64::NAN), None);
    }

    #[test]
    fn test_to_f64_round_trip() {
        for x in [0.0, 1.0, -1.0, 0.5, 1234.5, -0.0078125, 1e100, -1e-100] {
            let r = Rational::from_f64(x).unwrap();
            assert_eq!(r.to_f64(), x, "round trip failed for {x}");
        }
    }

    #[test]
    fn test_arithmetic() {
        let a = Rational::from_i64(1, 3);
        let b = Rational::from_i64(1, 6);
        assert_eq!(&a + &b, Rational::from_i64(1, 2));
        assert_eq!(&a - &b, Rational::from_i64(1, 6));
        assert_eq!(&a * &b, Rational::from_i64(1, 18));
        assert_eq!(&a / &b, Rational::from_i64(2, 1));
    }
}
