//! Sample-count arithmetic.

use asp_core::errors::{Error, Result};
use asp_core::{ensure, Index};
use asp_time::{SampleRate, Seconds};

/// The minimal number of samples any interval of length `duration` contains
/// at `sample_rate`: `floor(duration * sample_rate)`.
///
/// An interval of that length holds either this many samples or one more,
/// depending on its phase against the sample grid.  The floor is what
/// [`AlignedSpan::from_span_constant_samples`](crate::AlignedSpan::from_span_constant_samples)
/// and duration-sized windows use, so every call site agrees.
///
/// # Errors
/// Returns [`Error::InvalidSpan`] for a negative duration and
/// [`Error::AmbiguousRounding`] if the count is out of range.
///
/// # Example
/// ```
/// use asp_spans::n_samples;
/// use asp_time::{SampleRate, Seconds};
///
/// let rate = SampleRate::from_hz(128).unwrap();
/// assert_eq!(n_samples(rate, Seconds::from_secs(2)), Ok(256));
/// assert_eq!(n_samples(rate, Seconds::from_millis(10)), Ok(1));
/// ```
pub fn n_samples(sample_rate: SampleRate, duration: Seconds) -> Result<Index> {
    ensure!(
        !duration.is_negative(),
        InvalidSpan,
        "duration {duration} is negative"
    );
    sample_rate
        .samples_in(duration)
        .and_then(|count| i64::try_from(count.floor().to_integer()).ok())
        .ok_or_else(|| {
            Error::AmbiguousRounding(format!(
                "sample count of {duration} at {sample_rate} is out of range"
            ))
        })
}
