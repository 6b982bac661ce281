//! Lagged design matrices for VAR(p) least squares.
//!
//! Purpose
//! -------
//! Build the shared regressor matrix used by every equation of a VAR(p):
//! an intercept, the K×p lagged values of all variables, and optional
//! seasonal indicator dummies. Lag-order selection, estimation, and the
//! Granger pre-check all consume this layout.
//!
//! Key behaviors
//! -------------
//! - [`build_design`] drops the first `p` rows (no full lag history) and
//!   produces the `(n − p) × m` regressor matrix together with the aligned
//!   `(n − p) × K` response matrix.
//! - [`regressors_per_equation`] reports `m = 1 + K·p + (s − 1)` so callers
//!   can pre-check degrees of freedom.
//!
//! Conventions
//! -----------
//! - Regressor layout, shared by estimation and forecasting:
//!   column 0 is the intercept; columns `1 + (l−1)·K .. 1 + l·K` hold the
//!   lag-`l` values of all K variables (lag 1 first); the trailing `s − 1`
//!   columns are indicators for phases `1..s` of the observation index
//!   modulo `s` (phase 0 is absorbed by the intercept).
//! - Row `i` of the design corresponds to time `t = p + i` of the series.
//! - Seasonal phase is a property of the *row index in the original
//!   series*, not of the design row, so forecasts can continue the cycle
//!   past the end of the sample.
//!
//! Testing notes
//! -------------
//! - Unit tests pin the exact layout on a small bivariate series (lag
//!   blocks, intercept, dummy cycling) so that the forecaster's regressor
//!   construction cannot drift from the estimator's.
use crate::var::core::shape::VARShape;
use ndarray::{Array2, ArrayView2};

/// Number of regressors per equation: intercept + K·p lags + seasonal dummies.
pub fn regressors_per_equation(k: usize, shape: &VARShape) -> usize {
    1 + k * shape.p + shape.dummy_cols()
}

/// Build the lagged design matrix and aligned responses for a VAR(p).
///
/// Parameters
/// ----------
/// - `data`: `ArrayView2<f64>`
///   Observation matrix, rows = time (oldest first), columns = the K
///   variables. Must have strictly more than `shape.p` rows; callers
///   validate this via [`VARShape::new`] before building.
/// - `shape`: `&VARShape`
///   Lag order and optional seasonal period.
///
/// Returns
/// -------
/// `(Array2<f64>, Array2<f64>)`
///   The pair `(X, Y)` where `X` is `(n − p) × m` with
///   `m = 1 + K·p + (s − 1)` and `Y` is `(n − p) × K`. Row `i` predicts the
///   observation at time `p + i` from the `p` preceding observation vectors.
///
/// Panics
/// ------
/// - Panics if `data.nrows() <= shape.p` due to the zero-size design; public
///   entry points rely on [`VARShape::new`] to prevent that configuration.
///
/// Notes
/// -----
/// - Every equation of the VAR shares this regressor set; only the response
///   column differs. That symmetry is what lets the estimator factor the
///   normal equations once for all K equations.
pub fn build_design(data: &ArrayView2<f64>, shape: &VARShape) -> (Array2<f64>, Array2<f64>) {
    let n = data.nrows();
    let k = data.ncols();
    let p = shape.p;
    let rows = n - p;
    let m = regressors_per_equation(k, shape);

    let mut x = Array2::<f64>::zeros((rows, m));
    let mut y = Array2::<f64>::zeros((rows, k));

    for i in 0..rows {
        let t = p + i;
        x[[i, 0]] = 1.0;
        for lag in 1..=p {
            for j in 0..k {
                x[[i, 1 + (lag - 1) * k + j]] = data[[t - lag, j]];
            }
        }
        if let Some(s) = shape.season {
            let phase = t % s;
            if phase >= 1 {
                x[[i, 1 + p * k + (phase - 1)]] = 1.0;
            }
        }
        for j in 0..k {
            y[[i, j]] = data[[t, j]];
        }
    }

    (x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Output shapes of `build_design` for plain and seasonal specifications.
    // - The exact regressor layout: intercept, lag blocks ordered lag-1 first,
    //   seasonal dummies aligned to the series row index modulo s.
    //
    // They intentionally DO NOT cover:
    // - Least-squares solving or criterion computation; those live in
    //   `least_squares` and `lag_selection`.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the exact design layout for a bivariate VAR(2) on a tiny series.
    //
    // Given
    // -----
    // - A 4×2 series with distinct values everywhere.
    // - shape = VAR(2), no season.
    //
    // Expect
    // ------
    // - X is 2×5: [1, y1_{t−1}, y2_{t−1}, y1_{t−2}, y2_{t−2}].
    // - Y is 2×2 and matches rows 2 and 3 of the series.
    fn build_design_lays_out_intercept_then_lag_blocks() {
        // Arrange
        let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0]];
        let shape = VARShape::new(2, None, data.nrows()).unwrap();

        // Act
        let (x, y) = build_design(&data.view(), &shape);

        // Assert
        assert_eq!(x.dim(), (2, 5));
        assert_eq!(y.dim(), (2, 2));

        // Row 0 predicts t = 2 from t = 1 (lag 1) and t = 0 (lag 2).
        assert_eq!(x.row(0).to_vec(), vec![1.0, 2.0, 20.0, 1.0, 10.0]);
        assert_eq!(y.row(0).to_vec(), vec![3.0, 30.0]);

        // Row 1 predicts t = 3 from t = 2 and t = 1.
        assert_eq!(x.row(1).to_vec(), vec![1.0, 3.0, 30.0, 2.0, 20.0]);
        assert_eq!(y.row(1).to_vec(), vec![4.0, 40.0]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that seasonal dummies cycle with the series row index modulo s
    // and that phase 0 carries no indicator (absorbed by the intercept).
    //
    // Given
    // -----
    // - A 7×1 series, shape = VAR(1) with season = 3, so design rows cover
    //   t = 1..=6 and the dummy block has 2 columns.
    //
    // Expect
    // ------
    // - For t with t % 3 == 1, dummy column 0 is 1 and column 1 is 0.
    // - For t with t % 3 == 2, dummy column 1 is 1 and column 0 is 0.
    // - For t with t % 3 == 0, both dummy columns are 0.
    fn build_design_cycles_seasonal_dummies_with_row_index() {
        // Arrange
        let data = array![[1.0], [2.0], [3.0], [4.0], [5.0], [6.0], [7.0]];
        let shape = VARShape::new(1, Some(3), data.nrows()).unwrap();

        // Act
        let (x, _y) = build_design(&data.view(), &shape);

        // Assert: m = 1 + 1 + 2 = 4; dummy block is columns 2 and 3.
        assert_eq!(x.dim(), (6, 4));
        for i in 0..6 {
            let t = 1 + i;
            let expected = match t % 3 {
                1 => (1.0, 0.0),
                2 => (0.0, 1.0),
                _ => (0.0, 0.0),
            };
            assert_eq!(
                (x[[i, 2]], x[[i, 3]]),
                expected,
                "dummy phase wrong at design row {i} (t = {t})"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Check the regressor-count helper against hand-computed values.
    //
    // Given
    // -----
    // - K = 2 variables; VAR(3) without season and VAR(3) with season = 12.
    //
    // Expect
    // ------
    // - Without season: m = 1 + 2·3 = 7.
    // - With season 12: m = 7 + 11 = 18.
    fn regressors_per_equation_counts_intercept_lags_and_dummies() {
        let plain = VARShape::new(3, None, 100).unwrap();
        let seasonal = VARShape::new(3, Some(12), 100).unwrap();

        assert_eq!(regressors_per_equation(2, &plain), 7);
        assert_eq!(regressors_per_equation(2, &seasonal), 18);
    }
}
