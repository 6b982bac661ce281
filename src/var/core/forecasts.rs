//! Iterated multi-step forecasting for VAR(p) — roll the recursion past the sample without allocations.
//!
//! Purpose
//! -------
//! Provide allocation-free iterated point forecasting for VAR(p) models by
//! separating forecast storage from recursion logic and reusing a
//! preallocated path buffer.
//!
//! Key behaviors
//! -------------
//! - Roll the VAR(p) prediction equation forward for a fixed horizon using
//!   fitted coefficients and the last `p` in-sample observation vectors.
//! - Write forecast vectors into a reusable buffer ([`VARForecastResult`])
//!   without heap allocations inside the forecasting loop.
//! - Continue the seasonal dummy cycle past the end of the training series
//!   using the training length as the phase anchor.
//!
//! Invariants & assumptions
//! ------------------------
//! - Each forecast step evaluates, per equation, the same regressor layout
//!   the estimator used: intercept, lag-1 block first, then deeper lags,
//!   then seasonal indicators.
//! - `tail` contains the last `p` observed rows with the newest row at the
//!   end; once the recursion is more than `p` steps in, regressors come
//!   entirely from previously forecast rows, so forecast error compounds —
//!   there is no correction from unseen future actuals.
//! - The buffer in [`VARForecastResult`] has one row per requested step and
//!   one column per variable.
//! - Length relationships between `coeffs`, `tail`, and the buffer are the
//!   caller's responsibility; violations are logic errors and may panic via
//!   out-of-bounds indexing.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; `point[i]` stores the (i+1)-step-ahead forecast
//!   vector for the series index `origin + i`.
//! - The recursion is deterministic: identical inputs produce bit-identical
//!   forecast paths.
//!
//! Downstream usage
//! ----------------
//! - Construct [`VARForecastResult`] with the desired horizon and variable
//!   count; [`VARModel::forecast`](crate::var::models::var::VARModel::forecast)
//!   does this per call and validates the horizon before delegating here.
//!
//! Testing notes
//! -------------
//! - Unit tests cover intercept-only dynamics, the hand-off from in-sample
//!   tail rows to previously forecast rows when the horizon exceeds p,
//!   seasonal phase continuation, and bit-identical repeatability.
use crate::var::{core::shape::VARShape, errors::VARResult};
use ndarray::{Array2, ArrayView2};
use std::cell::RefCell;

/// VARForecastResult — container for iterated forecast paths.
///
/// Purpose
/// -------
/// Represent a reusable buffer of forecast vectors so that VAR(p)
/// forecasting routines can operate allocation-free while writing results
/// into preallocated storage.
///
/// Key behaviors
/// -------------
/// - Holds an `H × K` `Array2<f64>` wrapped in a `RefCell` to support
///   interior mutability from forecast routines.
/// - Row `i` stores the (i+1)-step-ahead forecast vector.
///
/// Fields
/// ------
/// - `point`: `RefCell<Array2<f64>>`
///   Preallocated forecast path. Contents start as zeros and are overwritten
///   by the recursion.
///
/// Invariants
/// ----------
/// - The buffer shape is fixed at construction; a recursion run must match
///   it exactly.
///
/// Notes
/// -----
/// - Interior mutability via `RefCell` lets forecast routines mutate the
///   buffer behind a shared reference; the type is single-threaded by
///   design and provides no synchronization.
#[derive(Debug, Clone, PartialEq)]
pub struct VARForecastResult {
    pub point: RefCell<Array2<f64>>,
}

impl VARForecastResult {
    /// Create a zeroed `horizon × k` forecast buffer.
    ///
    /// Parameters
    /// ----------
    /// - `horizon`: `usize`
    ///   Number of forecast steps to allocate storage for.
    /// - `k`: `usize`
    ///   Number of tracked variables.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use var_timeseries::var::core::forecasts::VARForecastResult;
    /// let buffer = VARForecastResult::new(10, 2);
    /// assert_eq!(buffer.point.borrow().dim(), (10, 2));
    /// ```
    pub fn new(horizon: usize, k: usize) -> Self {
        Self { point: RefCell::new(Array2::zeros((horizon, k))) }
    }
}

/// Roll the VAR(p) prediction equation forward and write the path into a
/// preallocated buffer.
///
/// Parameters
/// ----------
/// - `coeffs`: `ArrayView2<f64>`
///   `m × K` fitted coefficient matrix in the shared design layout
///   (intercept, lag-1 block, …, lag-p block, seasonal dummies); column `j`
///   belongs to variable `j`'s equation.
/// - `tail`: `ArrayView2<f64>`
///   The last `p` in-sample observation rows, oldest first. Provides the lag
///   window until forecasts take over.
/// - `origin`: `usize`
///   Training length; forecast step `i` corresponds to series index
///   `origin + i`, which also drives the seasonal phase.
/// - `shape`: `&VARShape`
///   Lag order and optional seasonal period used at fit time.
/// - `horizon`: `usize`
///   Number of steps H to forecast. The caller validates H ≥ 1; a zero
///   horizon performs no work.
/// - `forecast_result`: `&VARForecastResult`
///   Destination buffer; must be shaped `horizon × K`.
///
/// Returns
/// -------
/// `VARResult<()>`
///   `Ok(())` once the full path has been written.
///
/// Panics
/// ------
/// - May panic on inconsistent dimensions (`tail.nrows() != shape.p`,
///   coefficient count disagreeing with the layout, or an undersized
///   buffer). These are treated as logic errors in the caller and are not
///   guarded against at runtime within this function.
///
/// Notes
/// -----
/// - For step `i`, the lag-`l` regressor row is the actual observation
///   `tail[p − l + i]` while `i < l`, and the previously forecast row
///   `point[i − l]` once `i ≥ l`.
/// - The inner loops accumulate dot products directly; only the existing
///   buffers are touched, keeping the recursion allocation-free.
pub fn forecast_recursion(
    coeffs: &ArrayView2<f64>, tail: &ArrayView2<f64>, origin: usize, shape: &VARShape,
    horizon: usize, forecast_result: &VARForecastResult,
) -> VARResult<()> {
    let p = shape.p;
    let k = coeffs.ncols();
    let mut point = forecast_result.point.borrow_mut();

    for i in 0..horizon {
        let t = origin + i;
        for j in 0..k {
            let mut value = coeffs[[0, j]];
            for lag in 1..=p {
                let offset = 1 + (lag - 1) * k;
                for v in 0..k {
                    let lagged = if i >= lag {
                        point[[i - lag, v]]
                    } else {
                        tail[[p - lag + i, v]]
                    };
                    value += coeffs[[offset + v, j]] * lagged;
                }
            }
            if let Some(s) = shape.season {
                let phase = t % s;
                if phase >= 1 {
                    value += coeffs[[1 + p * k + phase - 1, j]];
                }
            }
            point[[i, j]] = value;
        }
    }

    Ok(())
}
