//! VAR(p) model: multi-equation least-squares estimation and forecasting.
//!
//! This module wires the core building blocks together: it builds the shared
//! lag design for a validated series, solves all K equations in one
//! factorization, and snapshots everything forecasting needs (coefficients,
//! the last p observation rows, the seasonal phase anchor) into an immutable
//! [`VARModel`].
//!
//! Key ideas:
//! - Equations are estimated independently but share one regressor set; the
//!   normal equations are factored once for all K right-hand sides.
//! - The fitted model is self-contained: forecasting does not need the
//!   training series again.
//! - The residual covariance is stored degree-of-freedom adjusted
//!   (`ÛᵀÛ / (T − m)`); point forecasts do not consume it, but it is part of
//!   the fitted-model surface.
use crate::var::{
    core::{
        data::VARData,
        design::{build_design, regressors_per_equation},
        forecasts::{VARForecastResult, forecast_recursion},
        least_squares::{residual_covariance, solve_normal_equations},
        shape::VARShape,
    },
    errors::{VARError, VARResult},
};
use ndarray::{Array2, ArrayView1, ArrayView2, s};

/// Fitted VAR(p) model.
///
/// Encapsulates the model order (`shape`), the coefficient matrix in the
/// shared design layout, the in-sample residuals and their covariance, and
/// the forecast seed (the last `p` training rows plus the training length as
/// seasonal phase anchor). Immutable once fit; forecasting derives new
/// values without touching the model.
///
/// # Notes
/// - `coeffs` is `m × K` with `m = 1 + K·p + (season − 1)`; column `j` is
///   the coefficient vector of variable `j`'s equation, ordered intercept,
///   lag-1 block, …, lag-p block, seasonal dummies.
/// - Variable names are carried over from the training series so reports
///   can label per-equation output.
#[derive(Debug, Clone, PartialEq)]
pub struct VARModel {
    /// Model order and seasonal period.
    pub shape: VARShape,
    /// Number of tracked variables.
    pub k: usize,
    /// Variable names, one per equation.
    pub names: Vec<String>,
    /// `m × K` coefficient matrix; column `j` belongs to equation `j`.
    pub coeffs: Array2<f64>,
    /// `K × K` residual covariance, denominator `T − m`.
    pub resid_cov: Array2<f64>,
    /// `(n − p) × K` in-sample residuals.
    pub residuals: Array2<f64>,
    /// Last `p` training rows (oldest first); the forecast lag seed.
    pub tail: Array2<f64>,
    /// Training length; anchors the seasonal phase of forecast steps.
    pub origin: usize,
}

impl VARModel {
    /// Estimate a VAR(p) on a training series.
    ///
    /// ## Steps
    /// 1. Re-check the shape against this sample (`p < n`).
    /// 2. Build the shared lag design, dropping the first `p` rows.
    /// 3. Solve the normal equations once for all K equations.
    /// 4. Snapshot residuals, the df-adjusted residual covariance, the last
    ///    `p` rows, and the training length into the returned model.
    ///
    /// ## Arguments
    /// - `data`: validated training series.
    /// - `shape`: lag order and optional seasonal period.
    ///
    /// ## Returns
    /// - `Ok(VARModel)` on success; the model is self-contained and immutable.
    ///
    /// ## Errors
    /// - [`VARError::InvalidLagOrder`] if `p >= data.len()` (e.g. a shape
    ///   validated against a longer sample).
    /// - [`VARError::SingularDesign`] under collinear regressors or a sample
    ///   with no more usable rows than regressors.
    pub fn fit(data: &VARData, shape: VARShape) -> VARResult<VARModel> {
        let n = data.len();
        let k = data.k();
        let p = shape.p;
        if p == 0 || p >= n {
            return Err(VARError::InvalidLagOrder { p, n });
        }

        let (x, y) = build_design(&data.data.view(), &shape);
        let fit = solve_normal_equations(&x.view(), &y.view())?;

        let rows = x.nrows() as f64;
        let m = regressors_per_equation(k, &shape) as f64;
        let resid_cov = residual_covariance(&fit.residuals.view(), rows - m);
        let tail = data.data.slice(s![n - p.., ..]).to_owned();

        Ok(VARModel {
            shape,
            k,
            names: data.meta.names.clone(),
            coeffs: fit.coeffs,
            resid_cov,
            residuals: fit.residuals,
            tail,
            origin: n,
        })
    }

    /// Produce the H-step-ahead iterated point forecast.
    ///
    /// ## Behavior
    /// 1. Requires `horizon ≥ 1`.
    /// 2. Allocates a fresh `horizon × K` [`VARForecastResult`].
    /// 3. Runs [`forecast_recursion`] with the fitted coefficients and the
    ///    cached tail; regressors come from training data while available
    ///    and from earlier forecast rows afterwards.
    ///
    /// ## Returns
    /// - `Ok(VARForecastResult)` holding the full path; deterministic given
    ///   the model and horizon.
    ///
    /// ## Errors
    /// - [`VARError::InvalidHorizon`] if `horizon == 0`; a forecast must
    ///   cover at least one step.
    pub fn forecast(&self, horizon: usize) -> VARResult<VARForecastResult> {
        if horizon == 0 {
            return Err(VARError::InvalidHorizon { horizon });
        }
        let forecast_result = VARForecastResult::new(horizon, self.k);
        forecast_recursion(
            &self.coeffs.view(),
            &self.tail.view(),
            self.origin,
            &self.shape,
            horizon,
            &forecast_result,
        )?;
        Ok(forecast_result)
    }

    /// Coefficient vector of one equation (design layout: intercept, lag
    /// blocks, seasonal dummies).
    pub fn equation(&self, variable: usize) -> ArrayView1<'_, f64> {
        self.coeffs.column(variable)
    }

    /// Residual covariance matrix view (`K × K`, denominator `T − m`).
    pub fn residual_covariance(&self) -> ArrayView2<'_, f64> {
        self.resid_cov.view()
    }
}
