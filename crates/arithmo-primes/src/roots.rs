//! Integer roots and dividing powers.
//!
//! `integer_root` computes floor n-th roots by a bit-length-seeded
//! Newton iteration; `max_dividing_power` finds the exact power of a
//! base dividing a number via a doubling bracket.

use arithmo_integers::{Integer, Natural};
use num_traits::One;

use crate::error::PrimeError;

/// Floor square root by Newton iteration seeded above the root.
fn isqrt(x: &Integer) -> Integer {
    if x.is_one() {
        return Integer::one();
    }
    // Seed at 2^ceil(bits/2) >= sqrt(x); the iteration descends
    // monotonically until it stabilizes.
    let mut r = Integer::one() << (x.bit_len() / 2 + 1);
    loop {
        let t = (&r + &(x / &r)) >> 1;
        if t >= r {
            break;
        }
        r = t;
    }
    while (&r * &r) > *x {
        r = r - Integer::one();
    }
    r
}

/// Floor y-th root by Newton iteration seeded above the root.
fn nth_root(x: &Integer, y: u32) -> Integer {
    let mut r = Integer::one() << (x.bit_len() / y as usize + 1);
    let y_int = Integer::from(y);
    let y_minus_1 = Integer::from(y - 1);
    loop {
        let rp = r.pow(y - 1);
        let t = (&r * &y_minus_1 + &(x / &rp)) / &y_int;
        if t >= r {
            break;
        }
        r = t;
    }
    // Truncated division can land one off either side of the floor root.
    while r.pow(y) > *x {
        r = r - Integer::one();
    }
    loop {
        let next = &r + &Integer::one();
        if next.pow(y) > *x {
            break;
        }
        r = next;
    }
    r
}

/// Returns the largest `r` with `r^y <= x`.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroRootExponent`] if `y` is zero.
pub fn integer_root(x: &Natural, y: u32) -> Result<Natural, PrimeError> {
    if y == 0 {
        return Err(PrimeError::ZeroRootExponent);
    }
    if y == 1 || x.is_zero() || x.is_one() {
        return Ok(x.clone());
    }
    let r = if y == 2 {
        isqrt(x.as_integer())
    } else {
        nth_root(x.as_integer(), y)
    };
    Ok(Natural::new(r).expect("floor root of a natural is natural"))
}

/// Returns `(r, x - r^y)` where `r` is the floor y-th root of `x`.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroRootExponent`] if `y` is zero.
pub fn integer_root_remainder(x: &Natural, y: u32) -> Result<(Natural, Natural), PrimeError> {
    let r = integer_root(x, y)?;
    let rem = x.as_integer() - &r.pow(y).into_integer();
    Ok((r, Natural::new(rem).expect("floor root power never exceeds x")))
}

/// Returns the largest `m` with `p^m` dividing `n`.
///
/// Brackets the answer by repeatedly squaring the current power, then
/// finishes with a naive linear count on the remaining cofactor.
///
/// `max_dividing_power(1, n)` returns 1 by convention, mirroring the
/// historical behavior of this routine; mathematically every power of 1
/// divides every `n`, so treat the value as arbitrary.
///
/// # Errors
///
/// Returns [`PrimeError::ZeroInput`] if `p` or `n` is zero.
pub fn max_dividing_power(p: &Natural, n: &Natural) -> Result<u32, PrimeError> {
    if p.is_zero() {
        return Err(PrimeError::ZeroInput {
            operation: "max_dividing_power",
            value: p.clone(),
        });
    }
    if n.is_zero() {
        return Err(PrimeError::ZeroInput {
            operation: "max_dividing_power",
            value: n.clone(),
        });
    }
    if p.is_one() {
        return Ok(1);
    }

    let mut total = 0u32;
    let mut m = n.clone();
    while p.divides(&m) {
        // Double the exponent while the squared power still divides.
        let mut e = 1u32;
        let mut pe = p.clone();
        loop {
            let sq = &pe * &pe;
            if sq.divides(&m) {
                pe = sq;
                e *= 2;
            } else {
                break;
            }
        }
        let (q, _) = m.div_rem(&pe);
        m = q;
        total += e;
    }
    Ok(total)
}
