//! # asp-time
//!
//! Exact continuous-time value types: rational [`Seconds`], rational
//! [`SampleRate`], and the nanosecond-resolution [`TimeSpan`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `SampleRate` — samples per second as an exact rational.
pub mod sample_rate;

/// `Seconds` — an exact rational count of seconds.
pub mod seconds;

/// `TimeSpan` — a closed-open interval of nanoseconds.
pub mod time_span;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use sample_rate::SampleRate;
pub use seconds::Seconds;
pub use time_span::TimeSpan;
