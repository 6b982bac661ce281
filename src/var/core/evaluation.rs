//! Forecast-accuracy scoring against a held-out suffix.
//!
//! Purpose
//! -------
//! Score an H-step forecast path against the true held-out observations.
//! The only metric in scope is the per-variable Mean Absolute Error; richer
//! scoring (interval coverage, density scores) is a caller concern.
//!
//! Conventions
//! -----------
//! - Both inputs are `H × K` with rows aligned by time step; a shape
//!   mismatch is an error, not a silent truncation.
//! - The metric is symmetric in its arguments since |a − b| = |b − a|.
use crate::var::errors::{VARError, VARResult};
use ndarray::{Array1, ArrayView2};

/// Per-variable Mean Absolute Error between a forecast path and actuals.
///
/// Parameters
/// ----------
/// - `forecast`: `ArrayView2<f64>`
///   `H × K` forecast path.
/// - `actual`: `ArrayView2<f64>`
///   `H × K` held-out observations, aligned row-by-row with `forecast`.
///
/// Returns
/// -------
/// `VARResult<Array1<f64>>`
///   Length-K vector; entry `j` is the mean of `|forecast[i, j] − actual[i, j]|`
///   over the H aligned steps.
///
/// Errors
/// ------
/// - `VARError::ShapeMismatch`
///   Returned when the two matrices disagree in either dimension, or when
///   they are empty (an empty alignment has no mean).
pub fn mean_absolute_error(
    forecast: &ArrayView2<f64>, actual: &ArrayView2<f64>,
) -> VARResult<Array1<f64>> {
    if forecast.dim() != actual.dim() || forecast.nrows() == 0 || forecast.ncols() == 0 {
        return Err(VARError::ShapeMismatch { expected: forecast.dim(), actual: actual.dim() });
    }

    let h = forecast.nrows() as f64;
    let k = forecast.ncols();
    let mut mae = Array1::<f64>::zeros(k);
    for j in 0..k {
        let mut acc = 0.0;
        for i in 0..forecast.nrows() {
            acc += (forecast[[i, j]] - actual[[i, j]]).abs();
        }
        mae[j] = acc / h;
    }
    Ok(mae)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Hand-computed MAE values per variable.
    // - Symmetry of the metric in its two arguments.
    // - Rejection of misaligned or empty inputs.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the per-variable MAE against hand-computed values.
    //
    // Given
    // -----
    // - A 3×2 forecast and actual pair with absolute deviations
    //   (1, 2, 3) in column 0 and (0, 0.5, 1.0) in column 1.
    //
    // Expect
    // ------
    // - MAE = [2.0, 0.5].
    fn mean_absolute_error_matches_hand_computation() {
        // Arrange
        let forecast = array![[1.0, 10.0], [2.0, 20.5], [3.0, 31.0]];
        let actual = array![[2.0, 10.0], [0.0, 20.0], [6.0, 30.0]];

        // Act
        let mae = mean_absolute_error(&forecast.view(), &actual.view())
            .expect("aligned inputs should score");

        // Assert
        assert_eq!(mae, array![2.0, 0.5]);
    }

    #[test]
    // Purpose
    // -------
    // Verify that swapping forecast and actual leaves the MAE unchanged.
    //
    // Given
    // -----
    // - An arbitrary aligned 4×2 pair.
    //
    // Expect
    // ------
    // - `mae(forecast, actual) == mae(actual, forecast)` exactly.
    fn mean_absolute_error_is_symmetric() {
        // Arrange
        let a = array![[1.0, -2.0], [0.5, 3.5], [-1.0, 0.0], [2.25, 1.0]];
        let b = array![[0.0, -2.5], [1.5, 3.0], [-1.25, 0.75], [2.0, 1.5]];

        // Act
        let forward = mean_absolute_error(&a.view(), &b.view()).expect("aligned");
        let backward = mean_absolute_error(&b.view(), &a.view()).expect("aligned");

        // Assert
        assert_eq!(forward, backward);
    }

    #[test]
    // Purpose
    // -------
    // Ensure misaligned shapes are rejected with `ShapeMismatch`.
    //
    // Given
    // -----
    // - A 3×2 forecast scored against a 2×2 actual.
    //
    // Expect
    // ------
    // - `Err(VARError::ShapeMismatch { expected: (3, 2), actual: (2, 2) })`.
    fn mean_absolute_error_rejects_misaligned_shapes() {
        // Arrange
        let forecast = array![[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let actual = array![[1.0, 2.0], [3.0, 4.0]];

        // Act
        let result = mean_absolute_error(&forecast.view(), &actual.view());

        // Assert
        assert_eq!(
            result.unwrap_err(),
            VARError::ShapeMismatch { expected: (3, 2), actual: (2, 2) }
        );
    }
}
