//! Time-to-index conversion with boundary correction.
//!
//! With `x = t * rate` computed exactly:
//!
//! | endpoint | mode   | index                                   |
//! |----------|--------|-----------------------------------------|
//! | start    | `Down` | `floor(x) + 1`                          |
//! | start    | `Up`   | `ceil(x) + 1`, `+ 1` if open and `x` whole |
//! | stop     | `Down` | `floor(x) + 1`, `- 1` if open and `x` whole |
//! | stop     | `Up`   | `ceil(x) + 1`                           |
//!
//! The corrections keep a rounded-inward sample from landing on an endpoint
//! the span excludes.  Because `x` is an exact rational, "whole" is an integer
//! test, not a float comparison.  This module is the only place the
//! correction happens; everything downstream is integer arithmetic.

use crate::continuous::{ContinuousSpan, Endpoint};
use crate::rounding::RoundingMode;
use asp_core::errors::{Error, Result};
use asp_core::{fail, Index};
use asp_time::{SampleRate, Seconds};

/// The 1-based index `t` rounds to, and whether `t` sits exactly on a sample.
///
/// # Errors
/// Returns [`Error::AmbiguousRounding`] if `t` is negative or the result is
/// out of range.
pub fn index_and_exactness(
    sample_rate: SampleRate,
    t: Seconds,
    mode: RoundingMode,
) -> Result<(Index, bool)> {
    if t.is_negative() {
        fail!(
            AmbiguousRounding,
            "time {t} precedes the first sample at 0s"
        );
    }
    let Some(position) = sample_rate.samples_in(t) else {
        fail!(
            AmbiguousRounding,
            "time {t} at {sample_rate} overflows exact arithmetic"
        );
    };
    let index = i64::try_from(mode.apply(position).to_integer())
        .ok()
        .and_then(|i| i.checked_add(1))
        .ok_or_else(|| {
            Error::AmbiguousRounding(format!(
                "time {t} at {sample_rate} is beyond the last representable index"
            ))
        })?;
    Ok((index, position.is_integer()))
}

/// Index of the sample a span starting at `t` begins with.
///
/// # Errors
/// See [`index_and_exactness`].
pub fn start_index(
    sample_rate: SampleRate,
    t: Seconds,
    bound: Endpoint,
    mode: RoundingMode,
) -> Result<Index> {
    let (index, exact) = index_and_exactness(sample_rate, t, mode)?;
    if mode == RoundingMode::Up && bound == Endpoint::Open && exact {
        tracing::trace!(%t, %sample_rate, index, "open start on a sample, moving one sample later");
        return index.checked_add(1).ok_or_else(|| {
            Error::AmbiguousRounding(format!("start {t} is beyond the last representable index"))
        });
    }
    Ok(index)
}

/// Index of the sample a span stopping at `t` ends with.
///
/// # Errors
/// See [`index_and_exactness`].
pub fn stop_index(
    sample_rate: SampleRate,
    t: Seconds,
    bound: Endpoint,
    mode: RoundingMode,
) -> Result<Index> {
    let (index, exact) = index_and_exactness(sample_rate, t, mode)?;
    if mode == RoundingMode::Down && bound == Endpoint::Open && exact {
        tracing::trace!(%t, %sample_rate, index, "open stop on a sample, moving one sample earlier");
        return Ok(index - 1);
    }
    Ok(index)
}

/// The index `mode` assigns to the start of `span`.
///
/// Dispatches to [`ContinuousSpan::start_index_from_time`], so span types
/// that override it are honoured.
///
/// # Errors
/// Returns [`Error::AmbiguousRounding`] if the start cannot be resolved to an
/// index.
pub fn start_index_from_time<S>(sample_rate: SampleRate, span: &S, mode: RoundingMode) -> Result<Index>
where
    S: ContinuousSpan + ?Sized,
{
    span.start_index_from_time(sample_rate, mode)
}

/// The index `mode` assigns to the stop of `span`.
///
/// # Errors
/// Returns [`Error::AmbiguousRounding`] if the stop cannot be resolved to an
/// index.
pub fn stop_index_from_time<S>(sample_rate: SampleRate, span: &S, mode: RoundingMode) -> Result<Index>
where
    S: ContinuousSpan + ?Sized,
{
    span.stop_index_from_time(sample_rate, mode)
}
