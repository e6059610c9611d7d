//! `SampleRate` — samples per second as an exact rational.
//!
//! A uniformly sampled signal places sample `i` (1-based) at time
//! `(i - 1) / rate`.  Keeping the rate rational means that time-to-index
//! conversion never depends on how a float happened to round.

use crate::seconds::Seconds;
use asp_core::errors::{Error, Result};
use asp_core::{simplest_rational, Index, Rational};
use num_traits::{CheckedMul, Signed};

/// A strictly positive sampling frequency in hertz.
///
/// Invariant: the reduced numerator and denominator both fit in an `i64`, so
/// `index / rate` is always computable in `i128` without overflow.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Rational", into = "Rational"))]
pub struct SampleRate(Rational);

impl SampleRate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a sample rate from a float number of hertz.
    ///
    /// The float is read as the simplest fraction that rounds to it: `0.1`
    /// is one sample every ten seconds, `1.0 / 3.0` is exactly a third of a
    /// hertz.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `hz` is not finite or not positive.
    pub fn new(hz: f64) -> Result<Self> {
        let Some(value) = simplest_rational(hz) else {
            return Err(Error::InvalidSpan(format!(
                "sample rate {hz} Hz is not a finite, representable number"
            )));
        };
        Self::from_rational(value)
    }

    /// Create an integer sample rate.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `hz == 0`.
    pub fn from_hz(hz: u64) -> Result<Self> {
        Self::from_rational(Rational::from_integer(i128::from(hz)))
    }

    /// Create the sample rate `numer / denom` Hz.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `denom == 0` or the ratio is not
    /// positive.
    pub fn from_ratio(numer: i64, denom: i64) -> Result<Self> {
        if denom == 0 {
            return Err(Error::InvalidSpan(format!(
                "sample rate {numer}/0 Hz has a zero denominator"
            )));
        }
        Self::from_rational(Rational::new(i128::from(numer), i128::from(denom)))
    }

    /// Wrap an exact rational.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `value <= 0`, or if its reduced
    /// numerator or denominator does not fit in an `i64`.
    pub fn from_rational(value: Rational) -> Result<Self> {
        if !value.is_positive() {
            return Err(Error::InvalidSpan(format!(
                "sample rate must be positive, got {value} Hz"
            )));
        }
        let fits = |v: &i128| i64::try_from(*v).is_ok();
        if !fits(value.numer()) || !fits(value.denom()) {
            return Err(Error::InvalidSpan(format!(
                "sample rate {value} Hz is outside the supported range"
            )));
        }
        Ok(Self(value))
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The exact rate in hertz.
    pub fn as_ratio(&self) -> Rational {
        self.0
    }

    /// Lossy conversion to a float number of hertz.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_hz_f64(&self) -> f64 {
        *self.0.numer() as f64 / *self.0.denom() as f64
    }

    /// Whether the rate is a whole number of hertz.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    /// Time between two consecutive samples.
    pub fn period(&self) -> Seconds {
        Seconds::from_rational(self.0.recip())
    }

    // ── Conversions ──────────────────────────────────────────────────────────

    /// `t * rate`: the (fractional) number of sample periods in `t`.
    ///
    /// Returns `None` on `i128` overflow.
    pub fn samples_in(&self, t: Seconds) -> Option<Rational> {
        t.as_rational().checked_mul(&self.0)
    }

    /// `n / rate`: the duration of `n` sample periods.
    pub fn time_of(&self, n: Index) -> Seconds {
        self.time_of_wide(i128::from(n))
    }

    /// `(index - 1) / rate`: the time at which the 1-based sample `index`
    /// occurs.
    pub fn time_of_sample(&self, index: Index) -> Seconds {
        self.time_of_wide(i128::from(index) - 1)
    }

    fn time_of_wide(&self, n: i128) -> Seconds {
        // |n| <= 2^63 and denom < 2^63, so the product fits in i128.
        Seconds::from_rational(Rational::new(n * self.0.denom(), *self.0.numer()))
    }
}

impl TryFrom<f64> for SampleRate {
    type Error = Error;

    fn try_from(hz: f64) -> Result<Self> {
        Self::new(hz)
    }
}

impl TryFrom<Rational> for SampleRate {
    type Error = Error;

    fn try_from(value: Rational) -> Result<Self> {
        Self::from_rational(value)
    }
}

impl From<SampleRate> for Rational {
    fn from(rate: SampleRate) -> Self {
        rate.0
    }
}

impl std::fmt::Display for SampleRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

impl std::fmt::Debug for SampleRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SampleRate({})", self.0)
    }
}
