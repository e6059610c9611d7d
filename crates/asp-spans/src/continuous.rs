//! `ContinuousSpan` — the capability set a continuous interval must offer.
//!
//! Any type describing an interval of time can be aligned to samples as long
//! as it can report its start and stop as exact [`Seconds`].  The provided
//! methods derive the duration and the rounded endpoint indices from those;
//! a type with a cheaper or more specific answer may override them.

use crate::index_conversion;
use crate::rounding::RoundingMode;
use asp_core::errors::{Error, Result};
use asp_core::Index;
use asp_time::{SampleRate, Seconds, TimeSpan};
use std::ops::{Range, RangeInclusive};
use std::time::Duration;

/// Whether an interval endpoint includes the instant it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// The endpoint instant belongs to the interval.
    Closed,
    /// The endpoint instant is excluded from the interval.
    Open,
}

/// A continuous-time interval that can be aligned to a sample grid.
///
/// Implementors supply [`start`](Self::start) and [`stop`](Self::stop); by
/// default the interval is closed at its start and open at its stop, which is
/// the convention of [`TimeSpan`] and `Range`.
pub trait ContinuousSpan {
    /// Start of the interval.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if the start has no exact value.
    fn start(&self) -> Result<Seconds>;

    /// Stop of the interval.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if the stop has no exact value.
    fn stop(&self) -> Result<Seconds>;

    /// Length of the interval, `stop - start`.
    ///
    /// # Errors
    /// Propagates endpoint errors; returns [`Error::AmbiguousRounding`] on
    /// overflow.
    fn duration(&self) -> Result<Seconds> {
        let (start, stop) = (self.start()?, self.stop()?);
        stop.checked_sub(start).ok_or_else(|| {
            Error::AmbiguousRounding(format!("duration of [{start}, {stop}) overflows"))
        })
    }

    /// Openness of the start endpoint.
    fn start_bound(&self) -> Endpoint {
        Endpoint::Closed
    }

    /// Openness of the stop endpoint.
    fn stop_bound(&self) -> Endpoint {
        Endpoint::Open
    }

    /// The index `mode` assigns to the start of this span.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if the start cannot be resolved.
    fn start_index_from_time(&self, sample_rate: SampleRate, mode: RoundingMode) -> Result<Index> {
        index_conversion::start_index(sample_rate, self.start()?, self.start_bound(), mode)
    }

    /// The index `mode` assigns to the stop of this span.
    ///
    /// # Errors
    /// Returns [`Error::AmbiguousRounding`] if the stop cannot be resolved.
    fn stop_index_from_time(&self, sample_rate: SampleRate, mode: RoundingMode) -> Result<Index> {
        index_conversion::stop_index(sample_rate, self.stop()?, self.stop_bound(), mode)
    }
}

impl ContinuousSpan for TimeSpan {
    fn start(&self) -> Result<Seconds> {
        Ok(TimeSpan::start(self))
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(TimeSpan::stop(self))
    }

    fn duration(&self) -> Result<Seconds> {
        Ok(TimeSpan::duration(self))
    }
}

impl ContinuousSpan for Range<Seconds> {
    fn start(&self) -> Result<Seconds> {
        Ok(self.start)
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(self.end)
    }
}

impl ContinuousSpan for RangeInclusive<Seconds> {
    fn start(&self) -> Result<Seconds> {
        Ok(*RangeInclusive::start(self))
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(*self.end())
    }

    fn stop_bound(&self) -> Endpoint {
        Endpoint::Closed
    }
}

impl ContinuousSpan for Range<Duration> {
    fn start(&self) -> Result<Seconds> {
        Ok(Seconds::from(self.start))
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(Seconds::from(self.end))
    }
}

/// Float seconds; each endpoint is read as the simplest fraction that rounds
/// to it, and non-finite endpoints are rejected.
impl ContinuousSpan for Range<f64> {
    fn start(&self) -> Result<Seconds> {
        Seconds::try_from_secs_f64(self.start)
    }

    fn stop(&self) -> Result<Seconds> {
        Seconds::try_from_secs_f64(self.end)
    }
}
