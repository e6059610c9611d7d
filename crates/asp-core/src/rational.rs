//! Exact rational numbers and conversion from `f64`.
//!
//! Index rounding is only well defined if the product `time * rate` is
//! computed exactly, so every float entering the library is converted once,
//! at the edge, into a [`Rational`].  Two conversions are offered:
//!
//! * [`exact_rational`] returns the binary value the float actually holds
//!   (`0.1` becomes `3602879701896397 / 36028797018963968`).
//! * [`simplest_rational`] returns the smallest-denominator fraction that
//!   rounds back to the same float (`0.1` becomes `1 / 10`).  This is what a
//!   caller writing `0.1` or `1.0 / 3.0` meant.

use num_rational::Ratio;
use num_traits::float::FloatCore;

/// Exact rational number over `i128`.
pub type Rational = Ratio<i128>;

/// Largest integer that `f64` represents exactly, so that `p as f64 / q as f64`
/// is a correctly rounded division.
const F64_EXACT_INT: i128 = 1 << 53;

/// The exact value of a finite `f64` as a [`Rational`].
///
/// Returns `None` for non-finite input, and for magnitudes whose numerator or
/// denominator would not fit in `i128` (roughly outside `[1e-38, 1e38]`).
pub fn exact_rational(x: f64) -> Option<Rational> {
    if !x.is_finite() {
        return None;
    }
    if x == 0.0 {
        return Some(Rational::from_integer(0));
    }
    // x = sign * mantissa * 2^exponent
    let (mantissa, exponent, sign) = FloatCore::integer_decode(x);

    let value = if exponent >= 0 {
        // mantissa < 2^53, keep the product below 2^126
        if exponent > 73 {
            return None;
        }
        Rational::from_integer(i128::from(mantissa) << exponent)
    } else {
        let shift = u32::from(exponent.unsigned_abs());
        let trailing = mantissa.trailing_zeros().min(shift);
        let shift = shift - trailing;
        if shift > 126 {
            return None;
        }
        Rational::new(i128::from(mantissa >> trailing), 1_i128 << shift)
    };
    Some(if sign < 0 { -value } else { value })
}

/// The smallest-denominator rational that rounds to exactly `x` as an `f64`.
///
/// The candidates are the continued-fraction convergents of the exact value
/// of `x`; the first one whose correctly rounded quotient equals `x` wins.
/// When no convergent with numerator and denominator below `2^53` matches,
/// the exact binary value is returned instead.
///
/// # Example
/// ```
/// use asp_core::{simplest_rational, Rational};
/// assert_eq!(simplest_rational(0.1), Some(Rational::new(1, 10)));
/// assert_eq!(simplest_rational(1.0 / 3.0), Some(Rational::new(1, 3)));
/// assert_eq!(simplest_rational(f64::NAN), None);
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn simplest_rational(x: f64) -> Option<Rational> {
    let exact = exact_rational(x)?;
    if exact.is_integer() {
        return Some(exact);
    }
    let target = x.abs();
    let mut n = exact.numer().abs();
    let mut d = *exact.denom();
    let (mut p0, mut q0, mut p1, mut q1) = (0_i128, 1_i128, 1_i128, 0_i128);
    while d != 0 {
        let a = n / d;
        let (Some(p2), Some(q2)) = (
            a.checked_mul(p1).and_then(|v| v.checked_add(p0)),
            a.checked_mul(q1).and_then(|v| v.checked_add(q0)),
        ) else {
            break;
        };
        if p2 > F64_EXACT_INT || q2 > F64_EXACT_INT {
            break;
        }
        if q2 != 0 && (p2 as f64) / (q2 as f64) == target {
            let value = Rational::new(p2, q2);
            return Some(if x < 0.0 { -value } else { value });
        }
        (p0, q0, p1, q1) = (p1, q1, p2, q2);
        (n, d) = (d, n - a * d);
    }
    Some(exact)
}
