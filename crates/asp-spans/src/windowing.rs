//! Tiling and sliding-window iterators over an `AlignedSpan`.
//!
//! Both iterators are cursors over window ordinals: window `k` is computed
//! from `k` alone, so they are cheap to clone (restart), iterate from either
//! end, and support random access through `get`.

use crate::aligned_span::AlignedSpan;
use crate::sampling::n_samples;
use asp_core::errors::{Error, Result};
use asp_core::{ensure, Index};
use asp_time::{SampleRate, Seconds};
use std::iter::FusedIterator;

/// A window or hop size, in samples or as a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Window {
    /// An exact number of samples.
    Samples(Index),
    /// A duration, resolved against the span's sample rate.
    Duration(Seconds),
}

impl Window {
    /// Resolve a window size: durations take [`n_samples`] (the floor).
    fn window_samples(self, sample_rate: SampleRate) -> Result<Index> {
        let samples = match self {
            Window::Samples(n) => n,
            Window::Duration(d) => {
                ensure!(!d.is_negative(), InvalidWindow, "window of {d} is negative");
                n_samples(sample_rate, d)?
            }
        };
        ensure!(
            samples > 0,
            InvalidWindow,
            "window of {self} at {sample_rate} resolves to {samples} samples"
        );
        Ok(samples)
    }

    /// Resolve a hop size: durations round to the nearest whole sample.
    fn hop_samples(self, sample_rate: SampleRate) -> Result<Index> {
        let samples = match self {
            Window::Samples(n) => n,
            Window::Duration(d) => {
                ensure!(!d.is_negative(), InvalidWindow, "hop of {d} is negative");
                let exact = sample_rate.samples_in(d).ok_or_else(|| {
                    Error::AmbiguousRounding(format!("hop of {d} at {sample_rate} overflows"))
                })?;
                let rounded = i64::try_from(exact.round().to_integer()).map_err(|_| {
                    Error::AmbiguousRounding(format!("hop of {d} at {sample_rate} is out of range"))
                })?;
                if !exact.is_integer() {
                    tracing::debug!(
                        hop = %d,
                        %sample_rate,
                        hop_samples = rounded,
                        "hop is not a whole number of samples, rounding to nearest"
                    );
                }
                rounded
            }
        };
        ensure!(
            samples > 0,
            InvalidWindow,
            "hop of {self} at {sample_rate} resolves to {samples} samples"
        );
        Ok(samples)
    }
}

impl From<Index> for Window {
    fn from(n: Index) -> Self {
        Window::Samples(n)
    }
}

impl From<i32> for Window {
    fn from(n: i32) -> Self {
        Window::Samples(Index::from(n))
    }
}

impl From<u32> for Window {
    fn from(n: u32) -> Self {
        Window::Samples(Index::from(n))
    }
}

impl From<Seconds> for Window {
    fn from(d: Seconds) -> Self {
        Window::Duration(d)
    }
}

impl From<std::time::Duration> for Window {
    fn from(d: std::time::Duration) -> Self {
        Window::Duration(Seconds::from(d))
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Window::Samples(n) => write!(f, "{n} samples"),
            Window::Duration(d) => write!(f, "{d}"),
        }
    }
}

// ── Cursor ────────────────────────────────────────────────────────────────────

/// Remaining window ordinals `front..back`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    front: Index,
    back: Index,
}

impl Cursor {
    fn new(count: Index) -> Self {
        Self {
            front: 0,
            back: count,
        }
    }

    fn next(&mut self) -> Option<Index> {
        (self.front < self.back).then(|| {
            self.front += 1;
            self.front - 1
        })
    }

    fn next_back(&mut self) -> Option<Index> {
        (self.front < self.back).then(|| {
            self.back -= 1;
            self.back
        })
    }

    fn nth(&mut self, n: usize) -> Option<Index> {
        let skip = Index::try_from(n).unwrap_or(Index::MAX);
        self.front = self.front.saturating_add(skip).min(self.back);
        self.next()
    }

    fn len(&self) -> usize {
        usize::try_from(self.back - self.front).unwrap_or(usize::MAX)
    }
}

// ── Tiling ────────────────────────────────────────────────────────────────────

/// Consecutive, non-overlapping windows tiling an [`AlignedSpan`].
///
/// Created by [`consecutive_subspans`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsecutiveSubspans {
    span: AlignedSpan,
    window_samples: Index,
    count: Index,
    uncovered: Index,
    cursor: Cursor,
}

impl ConsecutiveSubspans {
    /// Samples per full window.
    pub fn window_samples(&self) -> Index {
        self.window_samples
    }

    /// Samples of the parent span covered by no window (always zero when the
    /// short final window is kept).
    pub fn uncovered_samples(&self) -> Index {
        self.uncovered
    }

    /// The `k`-th window (0-based) of the full sequence, independent of how far
    /// this iterator has advanced.
    pub fn get(&self, k: usize) -> Option<AlignedSpan> {
        let k = Index::try_from(k).ok()?;
        (k < self.count).then(|| self.window(k))
    }

    fn window(&self, k: Index) -> AlignedSpan {
        let first = self.span.first_index() + k * self.window_samples;
        let last = self
            .span
            .last_index()
            .min(first.saturating_add(self.window_samples - 1));
        span_unchecked(self.span.sample_rate(), first, last)
    }
}

impl Iterator for ConsecutiveSubspans {
    type Item = AlignedSpan;

    fn next(&mut self) -> Option<AlignedSpan> {
        self.cursor.next().map(|k| self.window(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.len();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<AlignedSpan> {
        self.cursor.nth(n).map(|k| self.window(k))
    }
}

impl DoubleEndedIterator for ConsecutiveSubspans {
    fn next_back(&mut self) -> Option<AlignedSpan> {
        self.cursor.next_back().map(|k| self.window(k))
    }
}

impl ExactSizeIterator for ConsecutiveSubspans {}

impl FusedIterator for ConsecutiveSubspans {}

/// Partition `span` into consecutive windows of `window` samples each.
///
/// `window` is a sample count or a duration; durations resolve through
/// [`n_samples`], i.e. the floor of `duration * rate`.
///
/// With `keep_last = true` there are `ceil(n / w)` windows covering every
/// index of `span` exactly once, the last holding `n mod w` samples (or a full
/// window when that is zero).  With `keep_last = false` there are
/// `floor(n / w)` full windows and any trailing remainder is left uncovered.
///
/// # Errors
/// Returns [`Error::InvalidWindow`] if the window resolves to fewer than one
/// sample.
///
/// # Example
/// ```
/// use asp_spans::{consecutive_subspans, AlignedSpan};
/// use asp_time::SampleRate;
///
/// let span = AlignedSpan::new(SampleRate::from_hz(1).unwrap(), 1, 10).unwrap();
/// let sizes: Vec<_> = consecutive_subspans(&span, 3, true)
///     .unwrap()
///     .map(|s| s.n_samples())
///     .collect();
/// assert_eq!(sizes, [3, 3, 3, 1]);
/// ```
pub fn consecutive_subspans(
    span: &AlignedSpan,
    window: impl Into<Window>,
    keep_last: bool,
) -> Result<ConsecutiveSubspans> {
    let window: Window = window.into();
    let window_samples = window.window_samples(span.sample_rate())?;
    let total = span.n_samples();
    let full = total / window_samples;
    let remainder = total % window_samples;
    let (count, uncovered) = match (keep_last, remainder) {
        (_, 0) => (full, 0),
        (true, _) => (full + 1, 0),
        (false, _) => (full, remainder),
    };
    if uncovered != 0 {
        tracing::debug!(%span, window_samples, dropped = uncovered, "trailing samples left uncovered");
    }
    Ok(ConsecutiveSubspans {
        span: *span,
        window_samples,
        count,
        uncovered,
        cursor: Cursor::new(count),
    })
}

// ── Sliding windows ───────────────────────────────────────────────────────────

/// Fixed-size windows advancing by a hop over an [`AlignedSpan`].
///
/// Created by [`consecutive_overlapping_subspans`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsecutiveOverlappingSubspans {
    span: AlignedSpan,
    window_samples: Index,
    hop_samples: Index,
    count: Index,
    cursor: Cursor,
}

impl ConsecutiveOverlappingSubspans {
    /// Samples per window.
    pub fn window_samples(&self) -> Index {
        self.window_samples
    }

    /// Samples between the starts of consecutive windows.
    pub fn hop_samples(&self) -> Index {
        self.hop_samples
    }

    /// The hop as a duration, recomputed from [`hop_samples`](Self::hop_samples)
    /// so it reflects any rounding of the requested hop.
    pub fn hop_duration(&self) -> Seconds {
        self.span.sample_rate().time_of(self.hop_samples)
    }

    /// The `k`-th window (0-based) of the full sequence, independent of how far
    /// this iterator has advanced.
    pub fn get(&self, k: usize) -> Option<AlignedSpan> {
        let k = Index::try_from(k).ok()?;
        (k < self.count).then(|| self.window(k))
    }

    fn window(&self, k: Index) -> AlignedSpan {
        let first = self.span.first_index() + k * self.hop_samples;
        span_unchecked(
            self.span.sample_rate(),
            first,
            first + self.window_samples - 1,
        )
    }
}

impl Iterator for ConsecutiveOverlappingSubspans {
    type Item = AlignedSpan;

    fn next(&mut self) -> Option<AlignedSpan> {
        self.cursor.next().map(|k| self.window(k))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.cursor.len();
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<AlignedSpan> {
        self.cursor.nth(n).map(|k| self.window(k))
    }
}

impl DoubleEndedIterator for ConsecutiveOverlappingSubspans {
    fn next_back(&mut self) -> Option<AlignedSpan> {
        self.cursor.next_back().map(|k| self.window(k))
    }
}

impl ExactSizeIterator for ConsecutiveOverlappingSubspans {}

impl FusedIterator for ConsecutiveOverlappingSubspans {}

/// Slide a window of `window` samples across `span`, advancing `hop` samples
/// each step, while a full window still fits.
///
/// Window durations resolve through [`n_samples`] (floor).  A hop duration
/// that is not a whole number of samples is rounded to the nearest one, so
/// every window and every hop is identical in samples;
/// [`hop_duration`](ConsecutiveOverlappingSubspans::hop_duration) reports the
/// hop actually used.  Trailing samples that cannot fill a window are dropped,
/// as with [`consecutive_subspans`] and `keep_last = false`.
///
/// # Errors
/// Returns [`Error::InvalidWindow`] if the window or the hop resolves to fewer
/// than one sample.
///
/// # Example
/// ```
/// use asp_spans::{consecutive_overlapping_subspans, AlignedSpan};
/// use asp_time::SampleRate;
///
/// let span = AlignedSpan::new(SampleRate::from_hz(1).unwrap(), 1, 10).unwrap();
/// let starts: Vec<_> = consecutive_overlapping_subspans(&span, 4, 2)
///     .unwrap()
///     .map(|s| s.first_index())
///     .collect();
/// assert_eq!(starts, [1, 3, 5, 7]);
/// ```
pub fn consecutive_overlapping_subspans(
    span: &AlignedSpan,
    window: impl Into<Window>,
    hop: impl Into<Window>,
) -> Result<ConsecutiveOverlappingSubspans> {
    let sample_rate = span.sample_rate();
    let (window, hop): (Window, Window) = (window.into(), hop.into());
    let window_samples = window.window_samples(sample_rate)?;
    let hop_samples = hop.hop_samples(sample_rate)?;
    let total = span.n_samples();
    let count = if total < window_samples {
        0
    } else {
        (total - window_samples) / hop_samples + 1
    };
    let covered_until = if count == 0 {
        0
    } else {
        (count - 1) * hop_samples + window_samples
    };
    if covered_until < total {
        tracing::debug!(
            %span,
            window_samples,
            hop_samples,
            dropped = total - covered_until,
            "trailing samples do not fill a window"
        );
    }
    Ok(ConsecutiveOverlappingSubspans {
        span: *span,
        window_samples,
        hop_samples,
        count,
        cursor: Cursor::new(count),
    })
}

/// Build a window whose indices are known to satisfy the span invariant.
fn span_unchecked(sample_rate: SampleRate, first_index: Index, last_index: Index) -> AlignedSpan {
    AlignedSpan::new(sample_rate, first_index, last_index)
        .unwrap_or_else(|err| unreachable!("window {first_index}..={last_index}: {err}"))
}
