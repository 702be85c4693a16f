//! Absolute and relative error measurement.
//!
//! Finite operands are compared exactly in rational arithmetic, so the
//! measurement itself introduces no rounding beyond the final
//! conversion back to `f64`. Non-finite operands follow explicit
//! conventions: equal infinities measure zero error, NaN propagates,
//! and everything else involving an infinity measures infinite error.

use arithmo_integers::Rational;

/// The absolute error `|x - r|` of an approximation `x` against a
/// reference `r`.
///
/// Equal operands (including equal infinities) measure 0; any NaN
/// operand yields NaN; a single infinity (or two opposite ones) yields
/// +inf. Finite operands are measured exactly.
#[must_use]
pub fn absolute_error(x: f64, r: f64) -> f64 {
    if x.is_nan() || r.is_nan() {
        return f64::NAN;
    }
    if x == r {
        return 0.0;
    }
    match (Rational::from_f64(x), Rational::from_f64(r)) {
        (Some(xq), Some(rq)) => (&xq - &rq).abs().to_f64(),
        // x != r with at least one infinite operand.
        _ => f64::INFINITY,
    }
}

/// The relative error `|x - r| / |r|` of an approximation `x` against a
/// reference `r`.
///
/// Follows the same infinity/NaN conventions as [`absolute_error`].
/// The reference `r = 0` is special-cased to avoid the exact division
/// by zero: the error is 0 if `x` is also 0, +inf otherwise.
#[must_use]
pub fn relative_error(x: f64, r: f64) -> f64 {
    if x.is_nan() || r.is_nan() {
        return f64::NAN;
    }
    if x == r {
        return 0.0;
    }
    if r == 0.0 {
        return f64::INFINITY;
    }
    match (Rational::from_f64(x), Rational::from_f64(r)) {
        (Some(xq), Some(rq)) => {
            let diff = (&xq - &rq).abs();
            (&diff / &rq.abs()).to_f64()
        }
        _ => f64::INFINITY,
    }
}
