//! Rounding modes for span endpoints.
//!
//! A continuous endpoint `t` at rate `r` falls at the fractional sample
//! position `t * r`.  A [`RoundingMode`] picks the neighbouring whole
//! position; the span-level modes say which rule applies to which endpoint.

use asp_core::Rational;

/// How a fractional sample position is turned into a whole one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingMode {
    /// Round towards negative infinity (the sample at or before `t`).
    Down,
    /// Round towards positive infinity (the sample at or after `t`).
    Up,
}

impl RoundingMode {
    /// Round `value` to an integer-valued rational.
    pub fn apply(self, value: Rational) -> Rational {
        match self {
            RoundingMode::Down => value.floor(),
            RoundingMode::Up => value.ceil(),
        }
    }
}

impl std::fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoundingMode::Down => write!(f, "RoundDown"),
            RoundingMode::Up => write!(f, "RoundUp"),
        }
    }
}

/// Independent rounding rules for the start and the stop of a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndpointRoundingMode {
    /// Rule for the start endpoint.
    pub start: RoundingMode,
    /// Rule for the stop endpoint.
    pub stop: RoundingMode,
}

impl EndpointRoundingMode {
    /// Combine a start rule and a stop rule.
    pub const fn new(start: RoundingMode, stop: RoundingMode) -> Self {
        Self { start, stop }
    }
}

/// Round the start up and the stop down: the largest index range whose
/// samples all lie inside the continuous span.
///
/// At 1 Hz, `[1.5 s, 2.5 s)` contains only the sample at 2 s, so the result
/// is indices `3..=3`.
pub const ROUND_INWARD: EndpointRoundingMode =
    EndpointRoundingMode::new(RoundingMode::Up, RoundingMode::Down);

/// Round both endpoints down, the conventional "index from time" rule.
///
/// At 1 Hz, `[1.5 s, 2.5 s)` rounds to 1 s and 2 s, so the result is indices
/// `2..=3`.
pub const ROUND_SPAN_DOWN: EndpointRoundingMode =
    EndpointRoundingMode::new(RoundingMode::Down, RoundingMode::Down);

/// Round only the start; the stop follows from the span's duration.
///
/// Spans of equal duration at the same rate always produce the same number of
/// samples under this mode, whatever their phase relative to the sample grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstantSamplesRoundingMode {
    /// Rule for the start endpoint.
    pub start: RoundingMode,
}

impl ConstantSamplesRoundingMode {
    /// Use `start` for the start endpoint.
    pub const fn new(start: RoundingMode) -> Self {
        Self { start }
    }
}

/// Either kind of span rounding policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundingPolicy {
    /// Round each endpoint independently.
    Endpoints(EndpointRoundingMode),
    /// Round the start and derive the stop from the duration.
    ConstantSamples(ConstantSamplesRoundingMode),
}

impl From<EndpointRoundingMode> for RoundingPolicy {
    fn from(mode: EndpointRoundingMode) -> Self {
        RoundingPolicy::Endpoints(mode)
    }
}

impl From<ConstantSamplesRoundingMode> for RoundingPolicy {
    fn from(mode: ConstantSamplesRoundingMode) -> Self {
        RoundingPolicy::ConstantSamples(mode)
    }
}
