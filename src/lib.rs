//! var_timeseries — VAR estimation and forecasting with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the core routines to Python via the `_var_timeseries` extension
//! module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing classes and submodules used by the
//! `var_timeseries` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`var` and `statistical_tests`) as the
//!   public crate surface.
//! - Define `#[pyclass]` wrappers and the `#[pymodule]` initializer for the
//!   `_var_timeseries` Python extension.
//! - Create and register Python submodules (`statistical_tests`,
//!   `var_models`) under `var_timeseries` so that dot-notation imports work
//!   as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input validation, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible types mirror the
//!   invariants and signatures of their Rust counterparts (e.g. `VARModel`,
//!   `GrangerOutcome`).
//! - On successful conversion from Python objects to Rust types, the
//!   invariants documented in the core modules are assumed to hold.
//!
//! Conventions
//! -----------
//! - Python-exposed classes live under `_var_timeseries.<submodule>` and are
//!   typically wrapped by thin pure-Python facades in the top-level
//!   `var_timeseries` package.
//! - Indexing and statistical conventions follow the documentation of the
//!   underlying Rust modules (`var::core`, `statistical_tests`, etc.).
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules
//!   and can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_var_timeseries` module defined
//!   here and wraps its classes in user-facing Python APIs.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules
//!   and by the integration suite in `tests/`.
//! - Smoke tests for the PyO3 bindings verify that classes can be
//!   constructed, called, and round-tripped correctly from Python.

pub mod statistical_tests;
pub mod utils;
pub mod var;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    statistical_tests::granger::GrangerOutcome,
    utils::{extract_f64_array, extract_var_data},
    var::{
        core::lag_selection::{LagSelection, SelectionCriterion},
        core::shape::VARShape,
        models::var::VARModel,
    },
};

/// GrangerCausality — Python-facing wrapper for the directional F-test.
///
/// Purpose
/// -------
/// Represent the result of a one-direction Granger-causality test when
/// called from Python and forward all computation to [`GrangerOutcome`].
///
/// Key behaviors
/// -------------
/// - Validate and convert Python inputs into contiguous `f64` slices.
/// - Run the test via [`GrangerOutcome::granger_causality`] and store the
///   outcome internally.
/// - Expose scalar accessors (`statistic`, `pvalue`, `df_num`, `df_denom`)
///   as Python properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `GrangerCausality(x, y, p=1)`:
/// - `x`: `&PyAny`
///   One-dimensional array-like of `f64` values; the candidate predictor.
/// - `y`: `&PyAny`
///   One-dimensional array-like of the same length; the response.
/// - `p`: `Option<usize>`
///   Positive lag order; defaults to 1 when `None`.
///
/// Fields
/// ------
/// - `inner`: [`GrangerOutcome`]
///   Rust-side container holding the full test outcome used by the
///   accessors.
///
/// Invariants
/// ----------
/// - `x` and `y` are non-empty, finite, and of equal length at construction
///   time; `p ≥ 1`.
///
/// Notes
/// -----
/// - The test is directional: `GrangerCausality(x, y)` asks whether x helps
///   predict y. Swap the arguments for the other direction.
/// - This type is primarily intended to be used from Python; native Rust
///   code should prefer calling [`GrangerOutcome::granger_causality`]
///   directly.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "var_timeseries.statistical_tests")]
pub struct GrangerCausality {
    /// The Granger test result struct.
    inner: GrangerOutcome,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GrangerCausality {
    /// Result of the directional predictive (Granger) F-test.
    ///
    /// The statistic follows an F(p, T − 2p − 1) distribution under the
    /// null that x's past adds no predictive power for y.
    #[new]
    #[pyo3(
        text_signature = "(x, y, /, p=1)",
        signature = (raw_x, raw_y, p = 1)
    )]
    pub fn granger_causality<'py>(
        py: Python<'py>, raw_x: &Bound<'py, PyAny>, raw_y: &Bound<'py, PyAny>, p: usize,
    ) -> PyResult<GrangerCausality> {
        let x_arr = extract_f64_array(py, raw_x)?;
        let y_arr = extract_f64_array(py, raw_y)?;
        let x: &[f64] = x_arr
            .as_slice()
            .expect("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64");
        let y: &[f64] = y_arr
            .as_slice()
            .expect("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64");

        let result = GrangerOutcome::granger_causality(x, y, p)?;
        Ok(GrangerCausality { inner: result })
    }

    /// The F-statistic of the residual sum-of-squares reduction.
    #[getter]
    pub fn statistic(&self) -> f64 {
        self.inner.stat()
    }

    /// The upper-tail p-value of the F-statistic.
    #[getter]
    pub fn pvalue(&self) -> f64 {
        self.inner.p_value()
    }

    /// Numerator degrees of freedom (number of restrictions).
    #[getter]
    pub fn df_num(&self) -> usize {
        self.inner.df_num()
    }

    /// Denominator degrees of freedom of the unrestricted fit.
    #[getter]
    pub fn df_denom(&self) -> usize {
        self.inner.df_denom()
    }
}

/// VAR — Python-facing wrapper for fitted VAR(p) models.
///
/// Purpose
/// -------
/// Expose the [`VARModel`] API to Python callers while preserving the core
/// Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Build and fit a [`VARModel`] from a 2-D array-like in one step; the
///   wrapped model is immutable afterwards.
/// - Provide a `forecast` method producing the H-step iterated point
///   forecast as a list of rows.
/// - Expose the coefficient matrix, residuals, residual covariance, and
///   variable names as copy-on-access properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `VAR(data, p=1, season=None, names=None)`:
/// - `data`: `&PyAny`
///   Two-dimensional array-like (rows = time, oldest first; columns =
///   variables) of `f64` values with no gaps or NaNs.
/// - `p`: `Option<usize>`
///   Lag order; defaults to 1.
/// - `season`: `Option<usize>`
///   Optional seasonal period `s ≥ 2`; adds `s − 1` dummy regressors.
/// - `names`: `Option<Vec<String>>`
///   Optional variable names, one per column; defaults to `y1, …, yK`.
///
/// Fields
/// ------
/// - `inner`: [`VARModel`]
///   Fully fitted model owning coefficients, residuals, and the forecast
///   seed.
///
/// Invariants
/// ----------
/// - `inner` is always a successfully fitted model; construction fails
///   otherwise.
///
/// Notes
/// -----
/// - Native Rust callers should usually work with [`VARModel`] directly;
///   this type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "var_timeseries.var_models")]
pub struct VAR {
    /// Underlying fitted Rust VARModel.
    pub inner: VARModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl VAR {
    #[new]
    #[pyo3(
        text_signature = "(data, /, p=1, season=None, names=None)",
        signature = (raw_data, p = 1, season = None, names = None)
    )]
    pub fn fit<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, p: usize, season: Option<usize>,
        names: Option<Vec<String>>,
    ) -> PyResult<Self> {
        let data = extract_var_data(py, raw_data, names)?;
        let shape = VARShape::new(p, season, data.len())?;
        let inner = VARModel::fit(&data, shape)?;
        Ok(VAR { inner })
    }

    /// H-step-ahead iterated point forecast as H rows of K values.
    #[pyo3(text_signature = "(self, horizon, /)")]
    pub fn forecast(&self, horizon: usize) -> PyResult<Vec<Vec<f64>>> {
        let forecast_result = self.inner.forecast(horizon)?;
        let path = forecast_result.point.borrow();

        // Convert Array2<f64> → Vec<Vec<f64>> (row-major)
        let (nrows, _ncols) = path.dim();
        let mut out = Vec::with_capacity(nrows);
        for i in 0..nrows {
            out.push(path.row(i).to_vec());
        }
        Ok(out)
    }

    /// Coefficient matrix (m × K); column j is variable j's equation in the
    /// layout intercept, lag-1 block, …, lag-p block, seasonal dummies.
    #[getter]
    pub fn coefficients(&self) -> Vec<Vec<f64>> {
        let (nrows, _ncols) = self.inner.coeffs.dim();
        let mut out = Vec::with_capacity(nrows);
        for i in 0..nrows {
            out.push(self.inner.coeffs.row(i).to_vec());
        }
        out
    }

    /// Residual covariance matrix (K × K, denominator T − m).
    #[getter]
    pub fn residual_covariance(&self) -> Vec<Vec<f64>> {
        let (nrows, _ncols) = self.inner.resid_cov.dim();
        let mut out = Vec::with_capacity(nrows);
        for i in 0..nrows {
            out.push(self.inner.resid_cov.row(i).to_vec());
        }
        out
    }

    /// In-sample residuals ((n − p) × K).
    #[getter]
    pub fn residuals(&self) -> Vec<Vec<f64>> {
        let (nrows, _ncols) = self.inner.residuals.dim();
        let mut out = Vec::with_capacity(nrows);
        for i in 0..nrows {
            out.push(self.inner.residuals.row(i).to_vec());
        }
        out
    }

    /// Variable names, one per equation.
    #[getter]
    pub fn names(&self) -> Vec<String> {
        self.inner.names.clone()
    }

    /// Fitted lag order p.
    #[getter]
    pub fn lag_order(&self) -> usize {
        self.inner.shape.p
    }

    /// Seasonal period, when the model carries seasonal dummies.
    #[getter]
    pub fn season(&self) -> Option<usize> {
        self.inner.shape.season
    }
}

/// LagSelect — Python-facing wrapper for information-criterion lag selection.
///
/// Purpose
/// -------
/// Expose [`LagSelection`] to Python callers: the AIC/HQ/SC/FPE score table
/// over candidate lag orders plus the per-criterion minimizer.
///
/// Key behaviors
/// -------------
/// - Run the scan once at construction time and cache the score table.
/// - Expose one score vector per criterion and a `chosen(criterion)` method
///   resolving criterion names case-insensitively.
///
/// Parameters
/// ----------
/// Constructed from Python via `LagSelect(data, lag_max, season=None)`:
/// - `data`: `&PyAny`
///   Two-dimensional array-like (rows = time, columns = variables).
/// - `lag_max`: `usize`
///   Upper bound on the candidate lag order.
/// - `season`: `Option<usize>`
///   Optional seasonal period shared by all candidates.
///
/// Fields
/// ------
/// - `inner`: [`LagSelection`]
///   Rust-side score table used by the accessors.
///
/// Notes
/// -----
/// - No canonical winner is imposed when the criteria disagree; callers
///   apply their own policy (minimum AIC is the common choice).
#[cfg(feature = "python-bindings")]
#[pyclass(module = "var_timeseries.var_models")]
pub struct LagSelect {
    /// Underlying Rust score table.
    inner: LagSelection,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LagSelect {
    #[new]
    #[pyo3(
        text_signature = "(data, lag_max, /, season=None)",
        signature = (raw_data, lag_max, season = None)
    )]
    pub fn select<'py>(
        py: Python<'py>, raw_data: &Bound<'py, PyAny>, lag_max: usize, season: Option<usize>,
    ) -> PyResult<Self> {
        let data = extract_var_data(py, raw_data, None)?;
        let inner = LagSelection::select(&data, lag_max, season)?;
        Ok(LagSelect { inner })
    }

    /// Candidate lag orders, in scoring order (1..=lag_max).
    #[getter]
    pub fn candidates(&self) -> Vec<usize> {
        self.inner.candidates().to_vec()
    }

    /// Akaike information criterion scores, aligned with `candidates`.
    #[getter]
    pub fn aic(&self) -> Vec<f64> {
        self.inner.scores(SelectionCriterion::Aic).to_vec()
    }

    /// Hannan–Quinn criterion scores, aligned with `candidates`.
    #[getter]
    pub fn hq(&self) -> Vec<f64> {
        self.inner.scores(SelectionCriterion::Hq).to_vec()
    }

    /// Schwarz criterion scores, aligned with `candidates`.
    #[getter]
    pub fn sc(&self) -> Vec<f64> {
        self.inner.scores(SelectionCriterion::Sc).to_vec()
    }

    /// Final prediction error scores, aligned with `candidates`.
    #[getter]
    pub fn fpe(&self) -> Vec<f64> {
        self.inner.scores(SelectionCriterion::Fpe).to_vec()
    }

    /// The smallest lag attaining the minimal score under the named
    /// criterion ("aic", "hq", "sc", or "fpe").
    #[pyo3(text_signature = "(self, criterion, /)")]
    pub fn chosen(&self, criterion: &str) -> PyResult<usize> {
        let criterion = match criterion.to_ascii_lowercase().as_str() {
            "aic" => SelectionCriterion::Aic,
            "hq" => SelectionCriterion::Hq,
            "sc" => SelectionCriterion::Sc,
            "fpe" => SelectionCriterion::Fpe,
            other => {
                return Err(PyValueError::new_err(format!(
                    "unknown criterion '{other}'; expected one of aic, hq, sc, fpe"
                )));
            }
        };
        Ok(self.inner.chosen(criterion))
    }
}

/// _var_timeseries — PyO3 module initializer for the Python extension.
///
/// Purpose
/// -------
/// Define the `_var_timeseries` Python module and register its submodules
/// used by the public `var_timeseries` package.
///
/// Key behaviors
/// -------------
/// - Create `statistical_tests` and `var_models` submodules.
/// - Attach those submodules to the parent `_var_timeseries` module.
/// - Register the submodules in `sys.modules` so they are importable via
///   dotted paths from Python.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _var_timeseries<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let statistical_tests_mod = PyModule::new(_py, "statistical_tests")?;
    let var_models_mod = PyModule::new(_py, "var_models")?;
    statistical_tests(_py, m, &statistical_tests_mod)?;
    var_models(_py, m, &var_models_mod)?;

    // Manually add submodules into sys.modules to allow for dot notation.
    _py.import("sys")?
        .getattr("modules")?
        .set_item("var_timeseries.statistical_tests", statistical_tests_mod)?;

    _py.import("sys")?
        .getattr("modules")?
        .set_item("var_timeseries.var_models", var_models_mod)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn statistical_tests<'py>(
    _py: Python, var_timeseries: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<GrangerCausality>()?;
    var_timeseries.add_submodule(m)?;
    Ok(())
}

#[cfg(feature = "python-bindings")]
fn var_models<'py>(
    _py: Python, var_timeseries: &Bound<'py, PyModule>, m: &Bound<'py, PyModule>,
) -> PyResult<()> {
    m.add_class::<VAR>()?;
    m.add_class::<LagSelect>()?;
    var_timeseries.add_submodule(m)?;
    Ok(())
}
