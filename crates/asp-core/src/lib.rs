//! # asp-core
//!
//! Core types and error definitions shared by the `alignedspans` crates.
//!
//! This crate provides the primitive type aliases, the error hierarchy with
//! its `ensure!` / `fail!` macros, and the exact float-to-rational conversion
//! that every time and rate value passes through before any rounding happens.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Exact rational numbers and conversion from `f64`.
pub mod rational;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// A 1-based sample index (or a signed sample count).
pub type Index = i64;

/// Nanosecond count, the resolution of `asp_time::TimeSpan`.
pub type Nanos = i64;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use rational::{exact_rational, simplest_rational, Rational};
