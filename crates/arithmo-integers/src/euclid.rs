//! The exact arithmetic kernel: gcd-derived routines.
//!
//! Bezout coefficients via the extended Euclidean algorithm, modular
//! inverses, coprimality checks and Chinese remaindering. These are the
//! services the primality and factorization layers build on.

use num_traits::{One, Zero};

use crate::{ArithmeticError, Integer, Natural};

/// Returns true if `a` divides `b` exactly.
///
/// # Panics
///
/// Panics if `a` is zero.
#[must_use]
pub fn divides(a: &Integer, b: &Integer) -> bool {
    assert!(!a.is_zero(), "divides: divisor cannot be zero");
    (b % a).is_zero()
}

/// Computes Bezout coefficients `(u, v)` with `a*u + b*v = gcd(a, b)`.
///
/// The returned combination always equals the non-negative gcd, for any
/// signs of `a` and `b`.
#[must_use]
pub fn bezout_binary(a: &Integer, b: &Integer) -> (Integer, Integer) {
    // Extended Euclidean algorithm, iterative.
    let mut old_r = a.clone();
    let mut r = b.clone();
    let mut old_u = Integer::one();
    let mut u = Integer::zero();
    let mut old_v = Integer::zero();
    let mut v = Integer::one();

    while !r.is_zero() {
        let (q, rem) = old_r.div_rem(&r);
        old_r = std::mem::replace(&mut r, rem);
        let next_u = old_u - Integer::clone(&q) * &u;
        old_u = std::mem::replace(&mut u, next_u);
        let next_v = old_v - q * &v;
        old_v = std::mem::replace(&mut v, next_v);
    }

    // old_r is +-gcd; flip the coefficients if it came out negative.
    if old_r.is_negative() {
        (-old_u, -old_v)
    } else {
        (old_u, old_v)
    }
}

/// Computes the gcd of all values together with coefficients `u_i` such
/// that `sum(a_i * u_i) = gcd(a_1, ..., a_k)`.
///
/// Folds left-to-right: each pairwise Bezout step scales every
/// already-computed coefficient by the new `u` of the running gcd.
/// Returns `None` for an empty slice.
#[must_use]
pub fn bezout(values: &[Integer]) -> Option<(Integer, Vec<Integer>)> {
    let (first, rest) = values.split_first()?;
    let mut g = first.clone();
    let mut coeffs = vec![Integer::one()];

    for a in rest {
        let (u, v) = bezout_binary(&g, a);
        for c in &mut coeffs {
            *c = Integer::clone(c) * &u;
        }
        coeffs.push(v.clone());
        g = g * u + a.clone() * v;
    }

    if g.is_negative() {
        coeffs = coeffs.into_iter().map(|c| -c).collect();
        g = -g;
    }
    Some((g, coeffs))
}

/// Returns true if `gcd(a, b) = 1`.
#[must_use]
pub fn coprime(a: &Integer, b: &Integer) -> bool {
    a.gcd(b).is_one()
}

/// Returns true if the values are pairwise coprime.
///
/// Checks the first element against every later one, then repeats on the
/// tail, so the cost is quadratic in the number of values.
#[must_use]
pub fn pairwise_coprime(values: &[Integer]) -> bool {
    let mut tail = values;
    while let Some((head, rest)) = tail.split_first() {
        if rest.iter().any(|b| !coprime(head, b)) {
            return false;
        }
        tail = rest;
    }
    true
}

/// Computes the inverse of `a` modulo `n`: the `b` in `[0, n)` with
/// `a*b = 1 (mod n)`.
///
/// Returns `None` if no inverse exists, i.e. `gcd(a, n) != 1`.
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn modular_inverse(a: &Integer, n: &Natural) -> Option<Natural> {
    assert!(!n.is_zero(), "modular_inverse: modulus cannot be zero");
    let n_int = n.as_integer();
    let (u, _) = bezout_binary(a, n_int);
    if a.gcd(n_int).is_one() {
        let mut b = u % n_int.clone();
        if b.is_negative() {
            b = b + n_int;
        }
        Some(Natural::from_nonnegative(b))
    } else {
        None
    }
}

/// Solves a system of congruences `x = a_i (mod n_i)` by the Chinese
/// remainder theorem, returning the unique solution in `[0, prod(n_i))`.
///
/// The moduli must be pairwise coprime; this is the caller's contract and
/// is not verified here.
///
/// # Errors
///
/// Returns [`ArithmeticError::ResidueCountMismatch`] if the slices have
/// different lengths.
///
/// # Panics
///
/// Panics if a modulus is zero or the moduli are not pairwise coprime.
pub fn solve_chinese(
    residues: &[Integer],
    moduli: &[Natural],
) -> Result<Natural, ArithmeticError> {
    if residues.len() != moduli.len() {
        return Err(ArithmeticError::ResidueCountMismatch {
            residues: residues.len(),
            moduli: moduli.len(),
        });
    }

    let n = moduli
        .iter()
        .fold(Natural::one(), |acc, m| &acc * m)
        .into_integer();

    let mut sum = Integer::zero();
    for (a, m) in residues.iter().zip(moduli) {
        let c = &n / m.as_integer();
        let d = modular_inverse(&c, m)
            .expect("solve_chinese: moduli must be pairwise coprime");
        sum = sum + a.clone() * c * d.into_integer();
    }

    let mut x = sum % n.clone();
    if x.is_negative() {
        x = x + &n;
    }
    Ok(Natural::from_nonnegative(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int(v: i64) -> Integer {
        Integer::new(v)
    }

    fn nat(v: u64) -> Natural {
        Natural::from(v)
    }

    #[test]
    fn test_divides() {
        assert!(divides(&int(3), &int(12)));
        assert!(!divides(&int(5), &int(12)));
        assert!(divides(&int(-3), &int(12)));
    }

    #[test]
    fn test_bezout_binary() {
        let (u, v) = bezout_binary(&int(240), &int(46));
        assert_eq!(int(240) * u + int(46) * v, int(2));

        let (u, v) = bezout_binary(&int(-240), &int(46));
        assert_eq!(int(-240) * u + int(46) * v, int(2));
    }

    #[test]
    fn test_bezout_nary() {
        let values = [int(6), int(10), int(15)];
        let (g, coeffs) = bezout(&values).unwrap();
        assert_eq!(g, int(1));
        let combo: Integer = values
            .iter()
            .zip(&coeffs)
            .map(|(a, u)| a * u)
            .fold(int(0), |acc, x| acc + x);
        assert_eq!(combo, g);

        assert!(bezout(&[]).is_none());
    }

    #[test]
    fn test_coprimality() {
        assert!(coprime(&int(8), &int(9)));
        assert!(!coprime(&int(8), &int(10)));
        assert!(pairwise_coprime(&[int(3), int(5), int(7)]));
        assert!(!pairwise_coprime(&[int(3), int(5), int(6)]));
        assert!(pairwise_coprime(&[]));
    }

    #[test]
    fn test_modular_inverse() {
        let b = modular_inverse(&int(3), &nat(7)).unwrap();
        assert_eq!(b.to_u64(), Some(5));

        assert_eq!(modular_inverse(&int(6), &nat(9)), None);

        // Negative representative of the same residue class.
        let b = modular_inverse(&int(-4), &nat(7)).unwrap();
        assert_eq!((int(-4) * b.into_integer() % int(7) + int(7)) % int(7), int(1));
    }

    #[test]
    fn test_solve_chinese() {
        let x = solve_chinese(
            &[int(2), int(3), int(2)],
            &[nat(3), nat(5), nat(7)],
        )
        .unwrap();
        assert_eq!(x.to_u64(), Some(23));
    }

    #[test]
    fn test_solve_chinese_mismatch() {
        let err = solve_chinese(&[int(1)], &[nat(3), nat(5)]).unwrap_err();
        assert_eq!(
            err,
            ArithmeticError::ResidueCountMismatch {
                residues: 1,
                moduli: 2
            }
        );
    }

    #[test]
    fn test_solve_chinese_empty() {
        let x = solve_chinese(&[], &[]).unwrap();
        assert!(x.is_zero());
    }
}
