//! statistical_tests::errors — shared error types and Python bridges.
//!
//! Purpose
//! -------
//! Provide error enums and result aliases for statistical test routines,
//! together with a conversion layer to Python exceptions for PyO3-based
//! bindings. This keeps test-specific validation and runtime failures
//! localized while exposing a clean error surface to both Rust and Python.
//!
//! Key behaviors
//! -------------
//! - Define [`GCResult`] and [`GCError`] as the canonical result and error
//!   types for the Granger-causality test and its validation helpers.
//! - Attach human-readable `Display` messages to each error variant so that
//!   diagnostics and logs are meaningful without additional context.
//! - Convert estimation failures bubbling up from the shared least-squares
//!   layer ([`VARError`]) into test-level errors via `From`.
//! - Implement `From<GCError> for PyErr` to surface Rust-side failures as
//!   `ValueError` to Python callers.
//!
//! Invariants & assumptions
//! ------------------------
//! - Test modules which use this error type validate their inputs (lengths,
//!   finiteness, lag orders) and return [`GCResult<T>`] instead of
//!   panicking.
//! - `GCError` values are small, cheap to clone, and suitable for use in
//!   both unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This module is focused on statistical-test errors; model-specific
//!   error types live in their own `errors` modules under the relevant
//!   subtrees.
//! - Error messages are phrased in terms of domain constraints (e.g.,
//!   "series must have equal length") rather than low-level details.
//!
//! Downstream usage
//! ----------------
//! - The Granger test module and its input validation helpers return
//!   [`GCResult<T>`] to propagate failures cleanly to callers.
//! - Higher-level Rust code may match on [`GCError`] variants to implement
//!   custom recovery or reporting behavior.
//!
//! Testing notes
//! -------------
//! - Unit tests verify that each variant's `Display` message embeds its
//!   payload and that `From<VARError>` maps design failures onto the
//!   matching test-level variants.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

use crate::var::errors::VARError;

pub type GCResult<T> = Result<T, GCError>;

/// GCError — error conditions for the Granger-causality test.
///
/// Purpose
/// -------
/// Represent all validation and computation failures that can occur when
/// running the pairwise directional predictive test, including malformed
/// inputs, under-sized samples, and degenerate regressions.
///
/// Variants
/// --------
/// - `EmptySeries`
///   One of the input series holds no observations.
/// - `LengthMismatch(x_len, y_len)`
///   The two series differ in length; lagged pairing requires equal length.
/// - `NonFiniteData { series, index, value }`
///   An observation is NaN or ±∞; `series` names which input offended.
/// - `InvalidLagOrder(p)`
///   The lag order is zero; the test compares models over at least one lag.
/// - `InsufficientData { needed, actual }`
///   Too few observations to estimate the unrestricted regression with at
///   least one residual degree of freedom.
/// - `SingularDesign`
///   The restricted or unrestricted design is rank-deficient (e.g. a
///   constant series makes its own lags collinear with the intercept).
/// - `ZeroResidualVariance`
///   The unrestricted regression fits exactly, so the F-ratio is undefined.
/// - `Estimation { status }`
///   Fallback for estimator errors with no direct test-level counterpart;
///   preserves the original message.
///
/// Invariants
/// ----------
/// - Each variant carries just enough information (offending value, index,
///   or dimension) to allow downstream reporting without leaking large data
///   structures.
///
/// Notes
/// -----
/// - This enum implements [`std::error::Error`] and [`std::fmt::Display`]
///   so it can be used with idiomatic `?`-based error propagation in Rust.
#[derive(Debug, Clone, PartialEq)]
pub enum GCError {
    //------ Input validation errors ------
    EmptySeries,
    LengthMismatch(usize, usize),
    NonFiniteData { series: &'static str, index: usize, value: f64 },
    InvalidLagOrder(usize),
    InsufficientData { needed: usize, actual: usize },
    //------ Estimation errors ------
    SingularDesign,
    ZeroResidualVariance,
    Estimation { status: String },
}

impl std::error::Error for GCError {}

impl std::fmt::Display for GCError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GCError::EmptySeries => {
                write!(f, "Input series must not be empty.")
            }
            GCError::LengthMismatch(x_len, y_len) => {
                write!(f, "Series must have equal length; got {x_len} and {y_len}.")
            }
            GCError::NonFiniteData { series, index, value } => {
                write!(f, "Series {series} has non-finite value {value} at index {index}.")
            }
            GCError::InvalidLagOrder(p) => {
                write!(f, "Lag order must be at least 1; got {p}.")
            }
            GCError::InsufficientData { needed, actual } => {
                write!(
                    f,
                    "Need at least {needed} observations for the requested lag order; got {actual}."
                )
            }
            GCError::SingularDesign => {
                write!(f, "Lagged regression design is rank-deficient.")
            }
            GCError::ZeroResidualVariance => {
                write!(f, "Unrestricted regression fits exactly; the F-ratio is undefined.")
            }
            GCError::Estimation { status } => {
                write!(f, "Estimation failed: {status}")
            }
        }
    }
}

/// Map shared least-squares failures onto test-level variants, preserving
/// the original message for anything without a direct counterpart.
impl From<VARError> for GCError {
    fn from(err: VARError) -> GCError {
        match err {
            VARError::SingularDesign { .. } => GCError::SingularDesign,
            VARError::InsufficientData { needed, actual } => {
                GCError::InsufficientData { needed, actual }
            }
            other => GCError::Estimation { status: other.to_string() },
        }
    }
}

#[cfg(feature = "python-bindings")]
impl From<GCError> for PyErr {
    fn from(err: GCError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
