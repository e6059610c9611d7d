//! `AlignedSpan` — an inclusive sample-index range at a sample rate.
//!
//! # Index / time correspondence
//! Sample `i` (1-based) at rate `r` occurs at `(i - 1) / r` and occupies the
//! half-open interval `[(i - 1) / r, i / r)`.  An aligned span over indices
//! `first..=last` therefore covers the continuous interval
//! `[(first - 1) / r, last / r)`:
//!
//! ```text
//! Index       1   [2    3]    4     5
//! Time (s)    0   [1    2     3)    4
//! ```
//!
//! Rounding happens once, when the span is built from a continuous interval;
//! afterwards the span holds integers only.

use crate::continuous::ContinuousSpan;
use crate::index_conversion::{start_index_from_time, stop_index_from_time};
use crate::rounding::{ConstantSamplesRoundingMode, EndpointRoundingMode, RoundingPolicy};
use crate::sampling::n_samples;
use asp_core::errors::{Error, Result};
use asp_core::{ensure, Index};
use asp_time::{SampleRate, Seconds, TimeSpan};
use std::ops::{Range, RangeInclusive};

/// An inclusive range of 1-based sample indices paired with a sample rate.
///
/// Invariant: `last_index >= first_index - 1`; equality denotes an empty span
/// of zero samples positioned just before `first_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "AlignedSpanFields"))]
pub struct AlignedSpan {
    sample_rate: SampleRate,
    first_index: Index,
    last_index: Index,
}

impl AlignedSpan {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Construct a span directly from a sample rate and inclusive indices.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `last_index < first_index - 1`, or if
    /// the sample count does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use asp_spans::AlignedSpan;
    /// use asp_time::{SampleRate, Seconds};
    ///
    /// let span = AlignedSpan::new(SampleRate::from_hz(1).unwrap(), 2, 3).unwrap();
    /// assert_eq!(span.n_samples(), 2);
    /// assert_eq!(span.start_time(), Seconds::from_secs(1));
    /// assert_eq!(span.stop_time(), Seconds::from_secs(3));
    /// ```
    pub fn new(sample_rate: SampleRate, first_index: Index, last_index: Index) -> Result<Self> {
        ensure!(
            i128::from(last_index) >= i128::from(first_index) - 1,
            InvalidSpan,
            "last index {last_index} is before first index {first_index} minus one"
        );
        ensure!(
            last_index
                .checked_sub(first_index)
                .and_then(|d| d.checked_add(1))
                .is_some(),
            InvalidSpan,
            "span {first_index}..={last_index} holds more samples than an i64 counts"
        );
        Ok(Self {
            sample_rate,
            first_index,
            last_index,
        })
    }

    /// Like [`new`](Self::new), with the rate given as a float number of hertz.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `hz` is not a finite positive rate or
    /// the indices are invalid.
    pub fn from_hz(hz: f64, first_index: Index, last_index: Index) -> Result<Self> {
        Self::new(SampleRate::new(hz)?, first_index, last_index)
    }

    /// Align a continuous span by rounding each endpoint independently.
    ///
    /// With [`ROUND_INWARD`](crate::ROUND_INWARD) every resulting sample lies
    /// inside `span`; with [`ROUND_SPAN_DOWN`](crate::ROUND_SPAN_DOWN) the
    /// result matches the conventional "index from time" rule.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if an endpoint cannot be resolved,
    /// and [`Error::InvalidSpan`] if the rounded endpoints of a span with
    /// positive length cross.  A zero-length span always aligns, to an empty
    /// span at its start index when its endpoints would cross.
    ///
    /// # Example
    /// ```
    /// use asp_spans::{AlignedSpan, ROUND_INWARD, ROUND_SPAN_DOWN};
    /// use asp_time::{SampleRate, TimeSpan};
    ///
    /// let rate = SampleRate::from_hz(1).unwrap();
    /// let ts = TimeSpan::from_millis(1500, 2500).unwrap();
    /// assert_eq!(AlignedSpan::from_span(rate, &ts, ROUND_INWARD).unwrap().indices(), 3..=3);
    /// assert_eq!(AlignedSpan::from_span(rate, &ts, ROUND_SPAN_DOWN).unwrap().indices(), 2..=3);
    /// ```
    pub fn from_span<S>(sample_rate: SampleRate, span: &S, mode: EndpointRoundingMode) -> Result<Self>
    where
        S: ContinuousSpan + ?Sized,
    {
        let first_index = start_index_from_time(sample_rate, span, mode.start)?;
        let last_index = stop_index_from_time(sample_rate, span, mode.stop)?;
        if last_index < first_index - 1 && span.duration()? == Seconds::zero() {
            tracing::trace!(
                %sample_rate,
                first_index,
                last_index,
                "zero-length span rounds to crossed indices, aligning to an empty span"
            );
            return Self::new(sample_rate, first_index, first_index - 1);
        }
        Self::new(sample_rate, first_index, last_index)
    }

    /// Align a continuous span by rounding its start and taking
    /// [`n_samples`] of its duration.
    ///
    /// Two spans with the same duration at the same rate produce the same
    /// number of samples, wherever they start.  Only the start and the
    /// duration of `span` are consulted, never its stop.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if the start cannot be resolved,
    /// and [`Error::InvalidSpan`] for a negative duration.
    pub fn from_span_constant_samples<S>(
        sample_rate: SampleRate,
        span: &S,
        mode: ConstantSamplesRoundingMode,
    ) -> Result<Self>
    where
        S: ContinuousSpan + ?Sized,
    {
        let first_index = start_index_from_time(sample_rate, span, mode.start)?;
        let count = n_samples(sample_rate, span.duration()?)?;
        let last_index = first_index.checked_add(count - 1).ok_or_else(|| {
            Error::AmbiguousRounding(format!(
                "{count} samples from index {first_index} run past the last representable index"
            ))
        })?;
        Self::new(sample_rate, first_index, last_index)
    }

    /// Align a continuous span under either kind of rounding policy.
    ///
    /// # Errors
    /// See [`from_span`](Self::from_span) and
    /// [`from_span_constant_samples`](Self::from_span_constant_samples).
    pub fn aligned<S>(sample_rate: SampleRate, span: &S, policy: impl Into<RoundingPolicy>) -> Result<Self>
    where
        S: ContinuousSpan + ?Sized,
    {
        let policy: RoundingPolicy = policy.into();
        match policy {
            RoundingPolicy::Endpoints(mode) => Self::from_span(sample_rate, span, mode),
            RoundingPolicy::ConstantSamples(mode) => {
                Self::from_span_constant_samples(sample_rate, span, mode)
            }
        }
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// The sample rate.
    pub fn sample_rate(&self) -> SampleRate {
        self.sample_rate
    }

    /// First (inclusive) 1-based index.
    pub fn first_index(&self) -> Index {
        self.first_index
    }

    /// Last (inclusive) 1-based index.
    pub fn last_index(&self) -> Index {
        self.last_index
    }

    /// Number of samples, `last_index - first_index + 1`.
    pub fn n_samples(&self) -> Index {
        self.last_index - self.first_index + 1
    }

    /// Whether the span holds no samples.
    pub fn is_empty(&self) -> bool {
        self.last_index < self.first_index
    }

    /// The inclusive 1-based indices, for indexing an external sample store.
    pub fn indices(&self) -> RangeInclusive<Index> {
        self.first_index..=self.last_index
    }

    /// The same samples as a 0-based half-open range, for slicing a buffer
    /// whose first element is sample 1.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `first_index < 1`.
    pub fn zero_based_range(&self) -> Result<Range<usize>> {
        let start = self
            .first_index
            .checked_sub(1)
            .and_then(|i| usize::try_from(i).ok());
        let stop = usize::try_from(self.last_index).ok();
        match (start, stop) {
            (Some(start), Some(stop)) => Ok(start..stop),
            _ => Err(Error::InvalidSpan(format!(
                "{self} has no 0-based position"
            ))),
        }
    }

    // ── Continuous time ──────────────────────────────────────────────────────

    /// Time of the first sample, `(first_index - 1) / rate` (inclusive).
    pub fn start_time(&self) -> Seconds {
        self.sample_rate.time_of_sample(self.first_index)
    }

    /// Time the sample after the span would occur, `last_index / rate`
    /// (exclusive).
    pub fn stop_time(&self) -> Seconds {
        self.sample_rate.time_of(self.last_index)
    }

    /// `n_samples / rate`.
    pub fn duration(&self) -> Seconds {
        self.sample_rate.time_of(self.n_samples())
    }

    /// The exact continuous interval `[start_time, stop_time)`.
    pub fn time_range(&self) -> Range<Seconds> {
        self.start_time()..self.stop_time()
    }

    /// The continuous interval as a nanosecond [`TimeSpan`].
    ///
    /// Endpoints that are not whole nanoseconds (e.g. at 3 Hz) are rounded to
    /// the nearest one, so re-aligning the result is exact only when the
    /// sample period divides evenly into nanoseconds.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if an endpoint does not fit in `i64`
    /// nanoseconds.
    pub fn to_time_span(&self) -> Result<TimeSpan> {
        TimeSpan::new(self.start_time(), self.stop_time())
    }
}

impl ContinuousSpan for AlignedSpan {
    fn start(&self) -> Result<Seconds> {
        Ok(self.start_time())
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(self.stop_time())
    }

    fn duration(&self) -> Result<Seconds> {
        Ok(AlignedSpan::duration(self))
    }
}

impl std::fmt::Display for AlignedSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "AlignedSpan({}, {}, {})",
            self.sample_rate, self.first_index, self.last_index
        )
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct AlignedSpanFields {
    sample_rate: SampleRate,
    first_index: Index,
    last_index: Index,
}

#[cfg(feature = "serde")]
impl TryFrom<AlignedSpanFields> for AlignedSpan {
    type Error = Error;

    fn try_from(fields: AlignedSpanFields) -> Result<Self> {
        Self::new(fields.sample_rate, fields.first_index, fields.last_index)
    }
}
