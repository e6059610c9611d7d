//! # asp-spans
//!
//! Aligned sample spans: the rounding rules that map a continuous time
//! interval onto an inclusive range of 1-based sample indices, the inverse
//! mapping back to time, and the windowing iterators built on top.
//!
//! Data flows bottom-up: [`rounding`] modes drive [`index_conversion`], which
//! drives [`AlignedSpan`] construction, which drives [`windowing`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `AlignedSpan` — an inclusive sample-index range at a sample rate.
pub mod aligned_span;

/// `ContinuousSpan` — the capability set a continuous interval must offer.
pub mod continuous;

/// Time-to-index conversion with boundary correction.
pub mod index_conversion;

/// Rounding modes for span endpoints.
pub mod rounding;

/// Sample-count arithmetic.
pub mod sampling;

/// Tiling and sliding-window iterators over an `AlignedSpan`.
pub mod windowing;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use aligned_span::AlignedSpan;
pub use continuous::{ContinuousSpan, Endpoint};
pub use index_conversion::{start_index_from_time, stop_index_from_time};
pub use rounding::{
    ConstantSamplesRoundingMode, EndpointRoundingMode, RoundingMode, RoundingPolicy,
    ROUND_INWARD, ROUND_SPAN_DOWN,
};
pub use sampling::n_samples;
pub use windowing::{
    consecutive_overlapping_subspans, consecutive_subspans, ConsecutiveOverlappingSubspans,
    ConsecutiveSubspans, Window,
};
