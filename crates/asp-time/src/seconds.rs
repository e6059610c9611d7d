//! `Seconds` — an exact rational count of seconds.
//!
//! Continuous times enter the library as `Seconds` so that the product with a
//! [`SampleRate`](crate::SampleRate) can be floored or ceiled without any
//! floating-point error.

use asp_core::errors::{Error, Result};
use asp_core::{simplest_rational, Nanos, Rational};
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, Signed, Zero};

const NANOS_PER_SEC: i128 = 1_000_000_000;

/// A signed, exact, rational number of seconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seconds(Rational);

impl Seconds {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Zero seconds.
    pub fn zero() -> Self {
        Self(Rational::zero())
    }

    /// Wrap an exact rational.
    pub fn from_rational(value: Rational) -> Self {
        Self(value)
    }

    /// `numer / denom` seconds.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if `denom == 0`.
    pub fn from_ratio(numer: i128, denom: i128) -> Result<Self> {
        if denom == 0 {
            return Err(Error::AmbiguousRounding(format!(
                "time {numer}/0 s has a zero denominator"
            )));
        }
        Ok(Self(Rational::new(numer, denom)))
    }

    /// Whole seconds.
    pub fn from_secs(secs: i64) -> Self {
        Self(Rational::from_integer(i128::from(secs)))
    }

    /// Milliseconds.
    pub fn from_millis(millis: i64) -> Self {
        Self(Rational::new(i128::from(millis), 1_000))
    }

    /// Microseconds.
    pub fn from_micros(micros: i64) -> Self {
        Self(Rational::new(i128::from(micros), 1_000_000))
    }

    /// Nanoseconds.
    pub fn from_nanos(nanos: Nanos) -> Self {
        Self(Rational::new(i128::from(nanos), NANOS_PER_SEC))
    }

    /// Convert a float count of seconds.
    ///
    /// The float is read as the simplest fraction that rounds to it, so
    /// `0.1` is exactly one tenth of a second.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] for NaN, infinities, or values too
    /// large or too small to hold exactly.
    pub fn try_from_secs_f64(secs: f64) -> Result<Self> {
        simplest_rational(secs).map(Self).ok_or_else(|| {
            Error::AmbiguousRounding(format!("time {secs} s has no exact rational value"))
        })
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The exact rational value.
    pub fn as_rational(&self) -> Rational {
        self.0
    }

    /// Lossy conversion to a float.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_secs_f64(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }

    /// Whether the value is strictly below zero.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Round to the nearest nanosecond, ties away from zero.
    ///
    /// Returns `None` if the result does not fit in an `i64`.
    pub fn to_nanos_rounded(&self) -> Option<Nanos> {
        let scaled = CheckedMul::checked_mul(&self.0, &Rational::from_integer(NANOS_PER_SEC))?;
        i64::try_from(scaled.round().to_integer()).ok()
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// `self + rhs`, or `None` on overflow.
    pub fn checked_add(&self, rhs: Seconds) -> Option<Seconds> {
        CheckedAdd::checked_add(&self.0, &rhs.0).map(Self)
    }

    /// `self - rhs`, or `None` on overflow.
    pub fn checked_sub(&self, rhs: Seconds) -> Option<Seconds> {
        CheckedSub::checked_sub(&self.0, &rhs.0).map(Self)
    }
}

impl From<std::time::Duration> for Seconds {
    fn from(d: std::time::Duration) -> Self {
        let nanos = i128::from(d.as_secs()) * NANOS_PER_SEC + i128::from(d.subsec_nanos());
        Self(Rational::new(nanos, NANOS_PER_SEC))
    }
}

impl From<Rational> for Seconds {
    fn from(value: Rational) -> Self {
        Self(value)
    }
}

impl TryFrom<f64> for Seconds {
    type Error = Error;

    fn try_from(secs: f64) -> Result<Self> {
        Self::try_from_secs_f64(secs)
    }
}

impl std::ops::Neg for Seconds {
    type Output = Self;
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::fmt::Display for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.is_integer() {
            write!(f, "{}s", self.0.numer())
        } else {
            write!(f, "{}s", self.as_secs_f64())
        }
    }
}

impl std::fmt::Debug for Seconds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Seconds({})", self.0)
    }
}
