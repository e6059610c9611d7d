//! Error types for alignedspans.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  The [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) macros name the error kind explicitly so call sites
//! read as the precondition they check.

use thiserror::Error;

/// The top-level error type used throughout alignedspans.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A span could not be constructed: non-positive or non-finite sample
    /// rate, `last_index < first_index - 1`, a negative duration, or an
    /// inverted time span.
    #[error("invalid span: {0}")]
    InvalidSpan(String),

    /// A window or hop size resolved to a non-positive number of samples.
    #[error("invalid window: {0}")]
    InvalidWindow(String),

    /// A continuous time could not be resolved to a sample index (non-finite
    /// or negative time, or exact arithmetic out of range).
    #[error("ambiguous rounding: {0}")]
    AmbiguousRounding(String),
}

/// Shorthand `Result` type used throughout alignedspans.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$kind(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use asp_core::{ensure, errors::Error};
/// fn positive(x: i64) -> asp_core::errors::Result<i64> {
///     ensure!(x > 0, InvalidWindow, "window must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(3).is_ok());
/// assert!(matches!(positive(0), Err(Error::InvalidWindow(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return `Err(Error::$kind(...))` immediately.
///
/// # Example
/// ```
/// use asp_core::{fail, errors::Error};
/// fn always_err() -> asp_core::errors::Result<()> {
///     fail!(AmbiguousRounding, "time is {}", f64::NAN);
/// }
/// assert!(matches!(always_err(), Err(Error::AmbiguousRounding(_))));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}
