//! Non-negative arbitrary precision integers.
//!
//! Number-theory entry points take `Natural` rather than `Integer` so the
//! non-negativity contract is enforced once, at construction, instead of
//! being re-asserted inside every routine.

use num_traits::{One, Zero};
use std::fmt;
use std::ops::{Add, Mul, Rem};

use crate::{ArithmeticError, Integer};

/// A non-negative arbitrary precision integer.
///
/// The invariant `self >= 0` holds for every constructed value.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Natural(Integer);

impl Natural {
    /// Validates a signed integer as a natural number.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NegativeInput`] if `value` is negative.
    pub fn new(value: Integer) -> Result<Self, ArithmeticError> {
        if value.is_negative() {
            return Err(ArithmeticError::NegativeInput {
                operation: "Natural::new",
                value,
            });
        }
        Ok(Self(value))
    }

    /// The natural number zero.
    #[must_use]
    pub fn zero() -> Self {
        Self(Integer::zero())
    }

    /// The natural number one.
    #[must_use]
    pub fn one() -> Self {
        Self(Integer::one())
    }

    /// Wraps an integer already known to be non-negative.
    ///
    /// Used by kernel internals whose arithmetic cannot produce a
    /// negative value (modular reduction, gcd, exponentiation).
    pub(crate) fn from_nonnegative(value: Integer) -> Self {
        debug_assert!(!value.is_negative());
        Self(value)
    }

    /// Returns true if this is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Returns true if this is one.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    /// Returns true if this natural is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.0.is_even()
    }

    /// Returns the number of bits in the binary representation.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.0.bit_len()
    }

    /// Greatest common divisor.
    #[must_use]
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    /// Computes self^exp.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        Self(self.0.pow(exp))
    }

    /// Borrows the underlying signed integer.
    #[must_use]
    pub fn as_integer(&self) -> &Integer {
        &self.0
    }

    /// Converts into the underlying signed integer.
    #[must_use]
    pub fn into_integer(self) -> Integer {
        self.0
    }

    /// Attempts to convert to a u64.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }

    /// Quotient and remainder of division.
    ///
    /// # Panics
    ///
    /// Panics if `other` is zero.
    #[must_use]
    pub fn div_rem(&self, other: &Self) -> (Self, Self) {
        let (q, r) = self.0.div_rem(&other.0);
        (Self(q), Self(r))
    }

    /// Returns true if `self` divides `other` exactly.
    ///
    /// # Panics
    ///
    /// Panics if `self` is zero.
    #[must_use]
    pub fn divides(&self, other: &Self) -> bool {
        (&other.0 % &self.0).is_zero()
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({})", self.0)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Naturals are closed under addition and multiplication; subtraction and
// division of naturals go through `Integer`.
impl Add for Natural {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Natural {
    type Output = Natural;

    fn add(self, rhs: Self) -> Self::Output {
        Natural(&self.0 + &rhs.0)
    }
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Natural {
    type Output = Natural;

    fn mul(self, rhs: Self) -> Self::Output {
        Natural(&self.0 * &rhs.0)
    }
}

impl Rem for &Natural {
    type Output = Natural;

    fn rem(self, rhs: Self) -> Self::Output {
        Natural(&self.0 % &rhs.0)
    }
}

impl From<u64> for Natural {
    fn from(value: u64) -> Self {
        Self(Integer::from(value))
    }
}

impl From<u32> for Natural {
    fn from(value: u32) -> Self {
        Self(Integer::from(value))
    }
}

impl TryFrom<Integer> for Natural {
    type Error = ArithmeticError;

    fn try_from(value: Integer) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_negative() {
        assert!(Natural::new(Integer::new(-1)).is_err());
        assert!(Natural::new(Integer::new(0)).is_ok());
        assert!(Natural::new(Integer::new(42)).is_ok());
    }

    #[test]
    fn test_closed_ops() {
        let a = Natural::from(6u64);
        let b = Natural::from(4u64);
        assert_eq!((&a + &b).to_u64(), Some(10));
        assert_eq!((&a * &b).to_u64(), Some(24));
        assert_eq!(a.gcd(&b).to_u64(), Some(2));
    }

    #[test]
    fn test_divides() {
        let three = Natural::from(3u64);
        assert!(three.divides(&Natural::from(12u64)));
        assert!(!three.divides(&Natural::from(13u64)));
    }
}
