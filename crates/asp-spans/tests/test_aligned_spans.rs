//! Integration tests for aligning continuous spans to sample indices.
//!
//! Exercises `AlignedSpan` construction under both kinds of rounding policy,
//! the conversion back to continuous time, and custom `ContinuousSpan`
//! implementors.

use approx::assert_abs_diff_eq;
use asp_core::errors::{Error, Result};
use asp_spans::rounding::RoundingMode;
use asp_spans::{
    AlignedSpan, ConstantSamplesRoundingMode, ContinuousSpan, Endpoint, EndpointRoundingMode,
    RoundingPolicy, ROUND_INWARD, ROUND_SPAN_DOWN,
};
use asp_time::{SampleRate, Seconds, TimeSpan};

fn hz(rate: u64) -> SampleRate {
    SampleRate::from_hz(rate).unwrap()
}

fn secs(millis: i64) -> Seconds {
    Seconds::from_millis(millis)
}

#[test]
fn half_second_phase_at_one_hertz() {
    let ts = TimeSpan::from_millis(1500, 2500).unwrap();
    let inward = AlignedSpan::from_span(hz(1), &ts, ROUND_INWARD).unwrap();
    let down = AlignedSpan::from_span(hz(1), &ts, ROUND_SPAN_DOWN).unwrap();
    assert_eq!(inward.indices(), 3..=3);
    assert_eq!(down.indices(), 2..=3);
}

#[test]
fn two_samples_cover_one_to_three_seconds() {
    let span = AlignedSpan::new(hz(1), 2, 3).unwrap();
    assert_eq!(span.zero_based_range().unwrap(), 1..3);
    assert_eq!(span.time_range(), secs(1000)..secs(3000));
    assert_eq!(span.duration(), secs(2000));
    assert_eq!(span.to_time_span().unwrap(), TimeSpan::from_millis(1000, 3000).unwrap());
}

#[test]
fn every_policy_combination() {
    // [0.25 s, 1.75 s) at 2 Hz: samples at 0, 0.5, 1.0, 1.5, 2.0 s
    let span = secs(250)..secs(1750);
    let cases = [
        (RoundingMode::Up, RoundingMode::Down, 2..=4),
        (RoundingMode::Up, RoundingMode::Up, 2..=5),
        (RoundingMode::Down, RoundingMode::Down, 1..=4),
        (RoundingMode::Down, RoundingMode::Up, 1..=5),
    ];
    for (start, stop, expected) in cases {
        let mode = EndpointRoundingMode::new(start, stop);
        let aligned = AlignedSpan::from_span(hz(2), &span, mode).unwrap();
        assert_eq!(aligned.indices(), expected, "{start}/{stop}");
    }
}

#[test]
fn inward_drops_partially_covered_samples() {
    // [0.3 s, 0.9 s) at 10 Hz: samples 4..=9 sit at 0.3 .. 0.8 s
    let span = 0.3..0.9;
    let aligned = AlignedSpan::from_span(hz(10), &span, ROUND_INWARD).unwrap();
    assert_eq!(aligned.indices(), 4..=9);
    assert_eq!(aligned.time_range(), secs(300)..secs(900));
}

#[test]
fn constant_samples_ignores_phase() {
    let mode = ConstantSamplesRoundingMode::new(RoundingMode::Up);
    let a = AlignedSpan::from_span_constant_samples(hz(4), &(secs(0)..secs(1100)), mode).unwrap();
    let b = AlignedSpan::from_span_constant_samples(hz(4), &(secs(100)..secs(1200)), mode).unwrap();
    assert_eq!(a.n_samples(), 4);
    assert_eq!(b.n_samples(), 4);
    assert_eq!(a.indices(), 1..=4);
    assert_eq!(b.indices(), 2..=5);

    // Endpoint rounding of the same spans disagrees on the count.
    let c = AlignedSpan::from_span(hz(4), &(secs(0)..secs(1100)), ROUND_INWARD).unwrap();
    let d = AlignedSpan::from_span(hz(4), &(secs(100)..secs(1200)), ROUND_INWARD).unwrap();
    assert_ne!(c.n_samples(), d.n_samples());
}

#[test]
fn policies_through_aligned() {
    let span = secs(1500)..secs(2500);
    assert_eq!(
        AlignedSpan::aligned(hz(1), &span, ROUND_INWARD).unwrap(),
        AlignedSpan::from_span(hz(1), &span, ROUND_INWARD).unwrap()
    );
    let constant = ConstantSamplesRoundingMode::new(RoundingMode::Down);
    assert_eq!(
        AlignedSpan::aligned(hz(1), &span, constant).unwrap().indices(),
        2..=2
    );
}

#[test]
fn aligned_spans_round_trip() {
    for rate in [hz(1), hz(3), hz(250), SampleRate::new(0.1).unwrap()] {
        for (first, last) in [(1, 1), (7, 19), (4, 3), (1000, 1999)] {
            let span = AlignedSpan::new(rate, first, last).unwrap();
            let range = span.time_range();
            assert_eq!(AlignedSpan::from_span(rate, &range, ROUND_INWARD).unwrap(), span);
            assert_eq!(AlignedSpan::from_span(rate, &range, ROUND_SPAN_DOWN).unwrap(), span);
            assert_eq!(AlignedSpan::from_span(rate, &span, ROUND_INWARD).unwrap(), span);
        }
    }
}

#[test]
fn invalid_inputs() {
    assert!(matches!(
        AlignedSpan::from_hz(0.0, 1, 2),
        Err(Error::InvalidSpan(_))
    ));
    assert!(matches!(
        AlignedSpan::from_hz(f64::NAN, 1, 2),
        Err(Error::InvalidSpan(_))
    ));
    assert!(matches!(
        AlignedSpan::from_span(hz(1), &(f64::NAN..1.0), ROUND_INWARD),
        Err(Error::AmbiguousRounding(_))
    ));
    assert!(matches!(
        AlignedSpan::from_span(hz(1), &(-1.0..1.0), ROUND_INWARD),
        Err(Error::AmbiguousRounding(_))
    ));
    let backwards = secs(3000)..secs(1000);
    assert!(matches!(
        AlignedSpan::from_span_constant_samples(
            hz(1),
            &backwards,
            ConstantSamplesRoundingMode::new(RoundingMode::Down)
        ),
        Err(Error::InvalidSpan(_))
    ));
}

/// A span described by a centre and a half-width, in milliseconds.
struct Centred {
    centre_ms: i64,
    half_width_ms: i64,
}

impl ContinuousSpan for Centred {
    fn start(&self) -> Result<Seconds> {
        Ok(secs(self.centre_ms - self.half_width_ms))
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(secs(self.centre_ms + self.half_width_ms))
    }
}

#[test]
fn custom_continuous_spans() {
    let span = Centred {
        centre_ms: 2000,
        half_width_ms: 500,
    };
    assert_eq!(span.duration(), Ok(secs(1000)));
    let aligned = AlignedSpan::from_span(hz(10), &span, ROUND_INWARD).unwrap();
    assert_eq!(aligned.indices(), 16..=25);
    assert_abs_diff_eq!(aligned.start_time().as_secs_f64(), 1.5);
    assert_abs_diff_eq!(aligned.stop_time().as_secs_f64(), 2.5);

    let dyn_span: &dyn ContinuousSpan = &span;
    assert_eq!(
        AlignedSpan::from_span(hz(10), dyn_span, ROUND_SPAN_DOWN).unwrap(),
        aligned
    );
}

#[test]
fn instant_on_a_sample_is_an_empty_span() {
    let instant = TimeSpan::at(secs(2000)).unwrap();
    let policies = [
        RoundingPolicy::from(ROUND_INWARD),
        RoundingPolicy::from(ROUND_SPAN_DOWN),
        RoundingPolicy::from(ConstantSamplesRoundingMode::new(RoundingMode::Up)),
        RoundingPolicy::from(ConstantSamplesRoundingMode::new(RoundingMode::Down)),
    ];
    for policy in policies {
        let aligned = AlignedSpan::aligned(hz(1), &instant, policy).unwrap();
        assert_eq!(aligned.n_samples(), 0, "{policy:?}");
        assert_eq!(aligned.indices(), 3..=2, "{policy:?}");
        assert_eq!(aligned.start_time(), secs(2000));
    }
}

/// An instant that excludes itself, `(t, t)`.
struct ExcludedInstant(Seconds);

impl ContinuousSpan for ExcludedInstant {
    fn start(&self) -> Result<Seconds> {
        Ok(self.0)
    }

    fn stop(&self) -> Result<Seconds> {
        Ok(self.0)
    }

    fn start_bound(&self) -> Endpoint {
        Endpoint::Open
    }
}

#[test]
fn open_instant_on_a_sample_is_an_empty_span() {
    let instant = ExcludedInstant(secs(2000));
    let inward = AlignedSpan::from_span(hz(1), &instant, ROUND_INWARD).unwrap();
    assert!(inward.is_empty());
    assert_eq!(inward.first_index(), 4);

    // Between samples nothing crosses.
    let between = ExcludedInstant(secs(2500));
    let inward = AlignedSpan::from_span(hz(1), &between, ROUND_INWARD).unwrap();
    assert_eq!(inward.indices(), 4..=3);
}
