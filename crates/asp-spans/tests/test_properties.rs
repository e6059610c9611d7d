//! Property tests for alignment and windowing.

use asp_spans::rounding::RoundingMode;
use asp_spans::{
    consecutive_overlapping_subspans, consecutive_subspans, n_samples, AlignedSpan,
    ConstantSamplesRoundingMode, ROUND_INWARD, ROUND_SPAN_DOWN,
};
use asp_time::{SampleRate, Seconds};
use proptest::prelude::*;

fn rates() -> impl Strategy<Value = SampleRate> {
    prop_oneof![
        (1u64..50_000).prop_map(|hz| SampleRate::from_hz(hz).unwrap()),
        (1i64..50_000, 1i64..1_000).prop_map(|(n, d)| SampleRate::from_ratio(n, d).unwrap()),
    ]
}

fn aligned() -> impl Strategy<Value = AlignedSpan> {
    (rates(), 1i64..1_000_000, 0i64..10_000)
        .prop_map(|(rate, first, len)| AlignedSpan::new(rate, first, first + len - 1).unwrap())
}

proptest! {
    #[test]
    fn sample_count_matches_indices(span in aligned()) {
        prop_assert_eq!(span.n_samples(), span.last_index() - span.first_index() + 1);
        prop_assert_eq!(span.indices().count() as i64, span.n_samples());
        prop_assert_eq!(n_samples(span.sample_rate(), span.duration()), Ok(span.n_samples()));
    }

    #[test]
    fn endpoint_policies_round_trip(span in aligned()) {
        let range = span.time_range();
        let rate = span.sample_rate();
        prop_assert_eq!(AlignedSpan::from_span(rate, &range, ROUND_INWARD), Ok(span));
        prop_assert_eq!(AlignedSpan::from_span(rate, &range, ROUND_SPAN_DOWN), Ok(span));
    }

    #[test]
    fn constant_samples_depend_only_on_duration(
        rate in rates(),
        duration_us in 0i64..5_000_000,
        a_us in 0i64..10_000_000,
        b_us in 0i64..10_000_000,
        up in any::<bool>(),
    ) {
        let mode = ConstantSamplesRoundingMode::new(if up { RoundingMode::Up } else { RoundingMode::Down });
        let d = Seconds::from_micros(duration_us);
        let at = |start_us: i64| {
            let start = Seconds::from_micros(start_us);
            let stop = start.checked_add(d).unwrap();
            AlignedSpan::from_span_constant_samples(rate, &(start..stop), mode).unwrap()
        };
        let (a, b) = (at(a_us), at(b_us));
        prop_assert_eq!(a.n_samples(), b.n_samples());
        prop_assert_eq!(Ok(a.n_samples()), n_samples(rate, d));
    }

    #[test]
    fn inward_is_contained_and_down_contains(
        rate in rates(),
        start_us in 0i64..10_000_000,
        len_us in 0i64..5_000_000,
    ) {
        let start = Seconds::from_micros(start_us);
        let stop = Seconds::from_micros(start_us + len_us);
        let inward = AlignedSpan::from_span(rate, &(start..stop), ROUND_INWARD).unwrap();
        if !inward.is_empty() {
            prop_assert!(inward.start_time() >= start);
            prop_assert!(inward.sample_rate().time_of_sample(inward.last_index()) < stop);
        }
        let down = AlignedSpan::from_span(rate, &(start..stop), ROUND_SPAN_DOWN).unwrap();
        prop_assert!(down.start_time() <= start);
    }

    #[test]
    fn tiling_covers_every_index_once(span in aligned(), window in 1i64..500) {
        let mut next = span.first_index();
        for sub in consecutive_subspans(&span, window, true).unwrap() {
            prop_assert_eq!(sub.first_index(), next);
            prop_assert!(sub.n_samples() >= 1 && sub.n_samples() <= window);
            next = sub.last_index() + 1;
        }
        prop_assert_eq!(next, span.last_index() + 1);
    }

    #[test]
    fn tiling_without_remainder_keeps_full_windows(span in aligned(), window in 1i64..500) {
        let it = consecutive_subspans(&span, window, false).unwrap();
        let total: i64 = it.clone().map(|s| s.n_samples()).sum();
        prop_assert_eq!(total, span.n_samples() / window * window);
        prop_assert_eq!(total + it.uncovered_samples(), span.n_samples());
        prop_assert!(it.clone().all(|s| s.n_samples() == window));
    }

    #[test]
    fn sliding_windows_step_by_the_hop(span in aligned(), window in 1i64..500, hop in 1i64..500) {
        let it = consecutive_overlapping_subspans(&span, window, hop).unwrap();
        let windows: Vec<_> = it.clone().collect();
        prop_assert_eq!(windows.len(), it.len());
        for pair in windows.windows(2) {
            prop_assert_eq!(pair[1].first_index() - pair[0].first_index(), hop);
        }
        for w in &windows {
            prop_assert_eq!(w.n_samples(), window);
            prop_assert!(w.last_index() <= span.last_index());
        }
        if let Some(last) = windows.last() {
            prop_assert!(last.last_index() + hop > span.last_index());
        }
    }
}
