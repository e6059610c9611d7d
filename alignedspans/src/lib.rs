//! # alignedspans
//!
//! Exact conversion between continuous time spans and inclusive ranges of
//! 1-based sample indices, with the windowing that signal-slicing code
//! builds on top.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `asp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! alignedspans = "0.1"
//! ```
//!
//! ```rust
//! use alignedspans::{consecutive_subspans, AlignedSpan, SampleRate, TimeSpan, ROUND_INWARD};
//!
//! let rate = SampleRate::from_hz(256).unwrap();
//! let event = TimeSpan::from_millis(1_000, 5_000).unwrap();
//! let span = AlignedSpan::from_span(rate, &event, ROUND_INWARD).unwrap();
//! assert_eq!(span.indices(), 257..=1280);
//! assert_eq!(span.n_samples(), 1024);
//!
//! let epochs: Vec<_> = consecutive_subspans(&span, 256, true).unwrap().collect();
//! assert_eq!(epochs.len(), 4);
//! assert_eq!(epochs[3].stop_time(), event.stop());
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use asp_core as core;

/// Exact seconds, sample rates, and nanosecond time spans.
pub use asp_time as time;

/// Aligned spans, rounding policies, and windowing.
pub use asp_spans as spans;

pub use asp_core::errors::{Error, Result};
pub use asp_core::Index;
pub use asp_spans::{
    consecutive_overlapping_subspans, consecutive_subspans, n_samples, AlignedSpan,
    ConstantSamplesRoundingMode, ContinuousSpan, EndpointRoundingMode, RoundingMode,
    RoundingPolicy, Window, ROUND_INWARD, ROUND_SPAN_DOWN,
};
pub use asp_time::{SampleRate, Seconds, TimeSpan};
