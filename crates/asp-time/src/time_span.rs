//! `TimeSpan` — a closed-open interval of nanoseconds.
//!
//! This is the everyday continuous span used by recordings: `[start, stop)`
//! with integer-nanosecond endpoints.  Nanoseconds are exact rationals, so a
//! `TimeSpan` converts to [`Seconds`] without loss; the reverse direction
//! rounds to the nearest nanosecond.

use crate::seconds::Seconds;
use asp_core::errors::{Error, Result};
use asp_core::{Nanos, Rational};

const NANOS_PER_MILLI: i64 = 1_000_000;
const NANOS_PER_SEC: i64 = 1_000_000_000;

/// A closed-open interval `[start, stop)` in nanoseconds.
///
/// Invariant: `start <= stop`.  A span with `start == stop` is an instant.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TimeSpanFields"))]
pub struct TimeSpan {
    start: Nanos,
    stop: Nanos,
}

impl TimeSpan {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a span from nanosecond endpoints.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `stop < start`.
    pub fn from_nanos(start: Nanos, stop: Nanos) -> Result<Self> {
        if stop < start {
            return Err(Error::InvalidSpan(format!(
                "time span stop ({stop} ns) precedes its start ({start} ns)"
            )));
        }
        Ok(Self { start, stop })
    }

    /// Create a span from millisecond endpoints.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `stop < start` or the endpoints
    /// overflow nanoseconds.
    pub fn from_millis(start: i64, stop: i64) -> Result<Self> {
        let to_nanos = |ms: i64| {
            ms.checked_mul(NANOS_PER_MILLI).ok_or_else(|| {
                Error::InvalidSpan(format!("{ms} ms does not fit in nanoseconds"))
            })
        };
        Self::from_nanos(to_nanos(start)?, to_nanos(stop)?)
    }

    /// Create a span from exact second endpoints, each rounded to the nearest
    /// nanosecond.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `stop < start` or an endpoint does
    /// not fit in nanoseconds.
    pub fn new(start: Seconds, stop: Seconds) -> Result<Self> {
        let to_nanos = |t: Seconds| {
            t.to_nanos_rounded().ok_or_else(|| {
                Error::InvalidSpan(format!("{t} does not fit in nanoseconds"))
            })
        };
        Self::from_nanos(to_nanos(start)?, to_nanos(stop)?)
    }

    /// A zero-length span at `t`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if `t` does not fit in nanoseconds.
    pub fn at(t: Seconds) -> Result<Self> {
        Self::new(t, t)
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Inclusive start in nanoseconds.
    pub fn start_nanos(&self) -> Nanos {
        self.start
    }

    /// Exclusive stop in nanoseconds.
    pub fn stop_nanos(&self) -> Nanos {
        self.stop
    }

    /// Inclusive start.
    pub fn start(&self) -> Seconds {
        Seconds::from_nanos(self.start)
    }

    /// Exclusive stop.
    pub fn stop(&self) -> Seconds {
        Seconds::from_nanos(self.stop)
    }

    /// `stop - start`.
    pub fn duration(&self) -> Seconds {
        let nanos = i128::from(self.stop) - i128::from(self.start);
        Seconds::from_rational(Rational::new(nanos, i128::from(NANOS_PER_SEC)))
    }

    /// Whether `start == stop`.
    pub fn is_instant(&self) -> bool {
        self.start == self.stop
    }

    // ── Relations ────────────────────────────────────────────────────────────

    /// Whether `t` lies in `[start, stop)`.
    pub fn contains(&self, t: Seconds) -> bool {
        self.start() <= t && t < self.stop()
    }

    /// Whether the two spans share any instant.
    ///
    /// Zero-length spans overlap a span that contains their instant.
    pub fn overlaps(&self, other: &TimeSpan) -> bool {
        match (self.is_instant(), other.is_instant()) {
            (true, true) => self.start == other.start,
            (true, false) => other.contains_nanos(self.start),
            (false, true) => self.contains_nanos(other.start),
            (false, false) => self.start.max(other.start) < self.stop.min(other.stop),
        }
    }

    fn contains_nanos(&self, t: Nanos) -> bool {
        self.start <= t && t < self.stop
    }

    /// Shift both endpoints by `by` nanoseconds.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSpan`] if an endpoint overflows.
    pub fn translate(&self, by: Nanos) -> Result<Self> {
        match (self.start.checked_add(by), self.stop.checked_add(by)) {
            (Some(start), Some(stop)) => Ok(Self { start, stop }),
            _ => Err(Error::InvalidSpan(format!(
                "translating {self} by {by} ns overflows"
            ))),
        }
    }
}

/// Format nanoseconds as `HH:MM:SS.nnnnnnnnn`.
fn fmt_nanos(f: &mut std::fmt::Formatter<'_>, nanos: Nanos) -> std::fmt::Result {
    let sign = if nanos < 0 { "-" } else { "" };
    let total = nanos.unsigned_abs();
    let per_sec = NANOS_PER_SEC.unsigned_abs();
    let (secs, sub) = (total / per_sec, total % per_sec);
    write!(
        f,
        "{sign}{:02}:{:02}:{:02}.{sub:09}",
        secs / 3600,
        (secs / 60) % 60,
        secs % 60
    )
}

impl std::fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("TimeSpan(")?;
        fmt_nanos(f, self.start)?;
        f.write_str(", ")?;
        fmt_nanos(f, self.stop)?;
        f.write_str(")")
    }
}

impl std::fmt::Debug for TimeSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TimeSpan({}ns, {}ns)", self.start, self.stop)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TimeSpanFields {
    start: Nanos,
    stop: Nanos,
}

#[cfg(feature = "serde")]
impl TryFrom<TimeSpanFields> for TimeSpan {
    type Error = Error;

    fn try_from(fields: TimeSpanFields) -> Result<Self> {
        Self::from_nanos(fields.start, fields.stop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(start: i64, stop: i64) -> TimeSpan {
        TimeSpan::from_nanos(start * NANOS_PER_SEC, stop * NANOS_PER_SEC).unwrap()
    }

    #[test]
    fn construction_and_accessors() {
        let ts = TimeSpan::from_millis(1500, 3500).unwrap();
        assert_eq!(ts.start_nanos(), 1_500_000_000);
        assert_eq!(ts.stop(), Seconds::from_millis(3500));
        assert_eq!(ts.duration(), Seconds::from_secs(2));
        assert!(!ts.is_instant());
        assert!(TimeSpan::at(Seconds::from_secs(1)).unwrap().is_instant());
    }

    #[test]
    fn inverted_span_is_rejected() {
        assert!(matches!(
            TimeSpan::from_nanos(10, 9),
            Err(Error::InvalidSpan(_))
        ));
        assert!(TimeSpan::from_millis(i64::MAX, i64::MAX).is_err());
    }

    #[test]
    fn rational_endpoints_round_to_nanoseconds() {
        let third = Seconds::from_ratio(1, 3).unwrap();
        let ts = TimeSpan::new(third, Seconds::from_secs(1)).unwrap();
        assert_eq!(ts.start_nanos(), 333_333_333);
        assert_eq!(ts.stop_nanos(), 1_000_000_000);
    }

    #[test]
    fn containment_is_closed_open() {
        let ts = secs(1, 3);
        assert!(ts.contains(Seconds::from_secs(1)));
        assert!(ts.contains(Seconds::from_millis(2999)));
        assert!(!ts.contains(Seconds::from_secs(3)));
    }

    #[test]
    fn overlaps() {
        let a = secs(0, 2);
        let b = secs(1, 3);
        let c = secs(2, 4);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
        assert!(secs(1, 1).overlaps(&a));
        assert!(!secs(2, 2).overlaps(&a));
    }

    #[test]
    fn translate() {
        let ts = secs(1, 2).translate(NANOS_PER_SEC).unwrap();
        assert_eq!(ts, secs(2, 3));
        assert!(ts.translate(i64::MAX).is_err());
    }

    #[test]
    fn display() {
        let ts = TimeSpan::from_millis(1500, 3_723_250).unwrap();
        assert_eq!(
            ts.to_string(),
            "TimeSpan(00:00:01.500000000, 01:02:03.250000000)"
        );
    }
}
