//! Modular arithmetic contexts.
//!
//! A [`Modulus`] is a value object binding a fixed positive modulus `n`
//! and exposing arithmetic whose results are always reduced into
//! `[0, n)`. It is passed explicitly to whatever needs it; nothing here
//! is global or scoped.

use num_traits::{One, Zero};
use std::fmt;

use crate::euclid::modular_inverse;
use crate::{ArithmeticError, Integer, Natural};

/// A modular arithmetic context with a fixed positive modulus.
///
/// All operations accept arbitrary signed representatives and return the
/// canonical residue in `[0, n)`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Modulus {
    n: Natural,
}

impl Modulus {
    /// Creates a context for arithmetic modulo `n`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonPositiveModulus`] if `n` is zero.
    pub fn new(n: Natural) -> Result<Self, ArithmeticError> {
        if n.is_zero() {
            return Err(ArithmeticError::NonPositiveModulus {
                operation: "Modulus::new",
                modulus: n.into_integer(),
            });
        }
        Ok(Self { n })
    }

    /// Creates a context from a machine-word modulus.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::NonPositiveModulus`] if `n` is zero.
    pub fn from_u64(n: u64) -> Result<Self, ArithmeticError> {
        Self::new(Natural::from(n))
    }

    /// Returns the modulus.
    #[must_use]
    pub fn modulus(&self) -> &Natural {
        &self.n
    }

    /// Reduces a signed integer into the canonical range `[0, n)`.
    #[must_use]
    pub fn reduce(&self, a: &Integer) -> Natural {
        let mut r = a % self.n.as_integer();
        if r.is_negative() {
            r = r + self.n.as_integer();
        }
        Natural::from_nonnegative(r)
    }

    /// Modular addition.
    #[must_use]
    pub fn add(&self, a: &Integer, b: &Integer) -> Natural {
        self.reduce(&(a + b))
    }

    /// Modular subtraction.
    #[must_use]
    pub fn sub(&self, a: &Integer, b: &Integer) -> Natural {
        self.reduce(&(a - b))
    }

    /// Modular multiplication.
    #[must_use]
    pub fn mul(&self, a: &Integer, b: &Integer) -> Natural {
        self.reduce(&(a * b))
    }

    /// Modular exponentiation by binary square-and-multiply.
    #[must_use]
    pub fn pow(&self, base: &Integer, exp: &Natural) -> Natural {
        let mut result = self.reduce(&Integer::one()).into_integer();
        let mut base = self.reduce(base).into_integer();
        let mut e = exp.clone().into_integer();

        while !e.is_zero() {
            if !e.is_even() {
                result = self.reduce(&(&result * &base)).into_integer();
            }
            base = self.reduce(&(&base * &base)).into_integer();
            e = e >> 1;
        }
        Natural::from_nonnegative(result)
    }

    /// Modular inverse.
    ///
    /// Returns `None` if `gcd(a, n) != 1`.
    #[must_use]
    pub fn inv(&self, a: &Integer) -> Option<Natural> {
        modular_inverse(a, &self.n)
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({})", self.n)
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mod {}", self.n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Integer {
        Integer::new(v)
    }

    #[test]
    fn test_rejects_zero_modulus() {
        assert!(Modulus::from_u64(0).is_err());
    }

    #[test]
    fn test_reduce_negative() {
        let m = Modulus::from_u64(7).unwrap();
        assert_eq!(m.reduce(&int(-3)).to_u64(), Some(4));
        assert_eq!(m.reduce(&int(10)).to_u64(), Some(3));
    }

    #[test]
    fn test_basic_ops() {
        let m = Modulus::from_u64(7).unwrap();
        assert_eq!(m.add(&int(5), &int(4)).to_u64(), Some(2));
        assert_eq!(m.sub(&int(2), &int(4)).to_u64(), Some(5));
        assert_eq!(m.mul(&int(5), &int(4)).to_u64(), Some(6));
    }

    #[test]
    fn test_pow() {
        let m = Modulus::from_u64(7).unwrap();
        assert_eq!(m.pow(&int(3), &Natural::from(0u64)).to_u64(), Some(1));
        assert_eq!(m.pow(&int(3), &Natural::from(2u64)).to_u64(), Some(2));
        // Fermat's little theorem: a^(p-1) = 1 mod p.
        assert_eq!(m.pow(&int(3), &Natural::from(6u64)).to_u64(), Some(1));
    }

    #[test]
    fn test_pow_modulus_one() {
        let m = Modulus::from_u64(1).unwrap();
        assert!(m.pow(&int(5), &Natural::from(3u64)).is_zero());
    }

    #[test]
    fn test_inv() {
        let m = Modulus::from_u64(7).unwrap();
        assert_eq!(m.inv(&int(3)).unwrap().to_u64(), Some(5));
        let m9 = Modulus::from_u64(9).unwrap();
        assert_eq!(m9.inv(&int(6)), None);
    }
}
