//! Errors for VAR(p) modeling (data validation, shape checks, design-matrix
//! failures, and forecasting guards).
//!
//! This module defines the model error type, [`VARError`], used across the
//! Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy); rows index time, columns
//!   index variables.
//! - Observations must be **finite**; the series enters the core already
//!   gap-free and equally spaced (an upstream-preparation invariant).
//! - Design-matrix failures distinguish *too little data at selection time*
//!   ([`VARError::InsufficientData`]) from *rank deficiency at estimation
//!   time* ([`VARError::SingularDesign`]), which also covers samples with no
//!   more rows than regressors.
//! - All errors are terminal for the requested operation; the computation is
//!   deterministic, so a retry would reproduce the same failure.

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for VAR operations that may produce [`VARError`].
pub type VARResult<T> = Result<T, VARError>;

/// Unified error type for VAR modeling.
///
/// Covers input/data validation, model-shape checks, least-squares design
/// failures, and forecast-horizon guards. Implements `Display`/`Error` and
/// converts to a Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum VARError {
    // ---- Input/data validation ----
    /// Series has no rows or no columns.
    EmptySeries,

    /// A data point is NaN/±inf.
    NonFiniteData { row: usize, col: usize, value: f64 },

    /// Variable-name count disagrees with the number of columns.
    VariableNamesMismatch { expected: usize, actual: usize },

    /// Requested split index is out of the valid range `1..len`.
    InvalidSplitIndex { index: usize, len: usize },

    // ---- Model shape ----
    /// Lag order must satisfy 1 ≤ p < n.
    InvalidLagOrder { p: usize, n: usize },

    /// Seasonal period must be at least 2 when present.
    InvalidSeasonalPeriod { season: usize },

    // ---- Design / estimation ----
    /// Not enough observations for the requested lag bound (selection-time
    /// check: the largest candidate must leave residual degrees of freedom).
    InsufficientData { needed: usize, actual: usize },

    /// The lagged design matrix is rank-deficient, or the sample has no more
    /// rows than regressors.
    SingularDesign { rows: usize, regressors: usize },

    // ---- Forecasting / evaluation ----
    /// Forecast horizon must be at least 1.
    InvalidHorizon { horizon: usize },

    /// Two matrices that must be aligned have different shapes.
    ShapeMismatch { expected: (usize, usize), actual: (usize, usize) },
}

impl std::error::Error for VARError {}

impl std::fmt::Display for VARError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            VARError::EmptySeries => {
                write!(f, "Input series is empty.")
            }
            VARError::NonFiniteData { row, col, value } => {
                write!(f, "Data point at row {row}, column {col} is non-finite: {value}")
            }
            VARError::VariableNamesMismatch { expected, actual } => {
                write!(f, "Expected {expected} variable names, got {actual}.")
            }
            VARError::InvalidSplitIndex { index, len } => {
                write!(f, "Split index {index} must satisfy 1 ≤ index < {len} (series length).")
            }
            // ---- Model shape ----
            VARError::InvalidLagOrder { p, n } => {
                write!(f, "Lag order {p} must satisfy 1 ≤ p < n (n = {n} observations).")
            }
            VARError::InvalidSeasonalPeriod { season } => {
                write!(f, "Seasonal period must be at least 2; got {season}.")
            }
            // ---- Design / estimation ----
            VARError::InsufficientData { needed, actual } => {
                write!(f, "Need at least {needed} observations for the requested lag bound; got {actual}.")
            }
            VARError::SingularDesign { rows, regressors } => {
                write!(
                    f,
                    "Design matrix with {rows} rows and {regressors} regressors is singular; \
                     reduce the lag order, drop a variable, or supply more data."
                )
            }
            // ---- Forecasting / evaluation ----
            VARError::InvalidHorizon { horizon } => {
                write!(f, "Forecast horizon must be at least 1; got {horizon}.")
            }
            VARError::ShapeMismatch { expected, actual } => {
                write!(
                    f,
                    "Shape mismatch: expected {}×{}, got {}×{}.",
                    expected.0, expected.1, actual.0, actual.1
                )
            }
        }
    }
}

/// Convert a [`VARError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl From<VARError> for PyErr {
    fn from(err: VARError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Basic `Display` formatting for VARError variants.
    // - Embedding of payload values (indices, offending values) into messages.
    //
    // They intentionally DO NOT cover:
    // - The `From<VARError> for PyErr` conversion, since exercising it
    //   requires linking against the Python C API and is better handled
    //   by Python-level tests.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `VARError::NonFiniteData` embeds the row, column, and
    // offending value in its `Display` representation.
    //
    // Given
    // -----
    // - A `NonFiniteData` error at row 4, column 1 with value NaN.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "4", "1", and "NaN".
    fn var_error_non_finite_data_includes_payload_in_display() {
        // Arrange
        let err = VARError::NonFiniteData { row: 4, col: 1, value: f64::NAN };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains('4'), "Display should include the row index.\nGot: {msg}");
        assert!(msg.contains('1'), "Display should include the column index.\nGot: {msg}");
        assert!(msg.contains("NaN"), "Display should include the offending value.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `VARError::SingularDesign` reports both the row count and
    // the regressor count.
    //
    // Given
    // -----
    // - A `SingularDesign` error with 12 rows and 15 regressors.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "12" and "15".
    fn var_error_singular_design_includes_dimensions_in_display() {
        // Arrange
        let err = VARError::SingularDesign { rows: 12, regressors: 15 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("12"), "Display should include the row count.\nGot: {msg}");
        assert!(msg.contains("15"), "Display should include the regressor count.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that `VARError::InvalidHorizon` embeds the offending horizon.
    //
    // Given
    // -----
    // - An `InvalidHorizon` error with horizon 0.
    //
    // Expect
    // ------
    // - `format!("{err}")` contains "0" and is non-empty.
    fn var_error_invalid_horizon_includes_payload_in_display() {
        // Arrange
        let err = VARError::InvalidHorizon { horizon: 0 };

        // Act
        let msg = err.to_string();

        // Assert
        assert!(!msg.trim().is_empty());
        assert!(msg.contains('0'), "Display should include the offending horizon.\nGot: {msg}");
    }
}
