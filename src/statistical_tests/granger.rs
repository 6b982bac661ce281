//! statistical_tests::granger — directional predictive (Granger) F-test.
//!
//! Purpose
//! -------
//! Implement the pairwise Granger-causality test used as a pre-filter ahead
//! of multivariate modeling: does one series' past add predictive power for
//! another series beyond that series' own past? The test compares a
//! restricted autoregression of y on its own lags against an unrestricted
//! autoregression adding x's lags, via an F-test on the residual
//! sum-of-squares reduction.
//!
//! Key behaviors
//! -------------
//! - Build both lagged designs over the same `T = n − p` usable rows, fit
//!   each by least squares, and form
//!   `F = ((RSS_r − RSS_u) / p) / (RSS_u / (T − 2p − 1))`.
//! - Report the upper-tail `F(p, T − 2p − 1)` probability as the p-value;
//!   the conventional decision rule rejects the null of no predictive value
//!   at p-value < 0.05.
//! - Expose a compact [`GrangerOutcome`] value with the statistic, p-value,
//!   and both degrees of freedom, suitable for Rust and Python bindings.
//! - Provide [`GrangerOutcome::both_directions`] since the relationship is
//!   not symmetric: X→Y and Y→X are separate hypotheses and must be tested
//!   independently.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are scalar series of equal length; validation (lengths,
//!   finiteness, lag order, sample size) is delegated to
//!   `statistical_tests::validation::validate_pair`, which returns
//!   [`GCResult`] rather than panicking.
//! - The restricted regressor set is a subset of the unrestricted one, so
//!   `RSS_r ≥ RSS_u` up to rounding; the implementation clamps a slightly
//!   negative reduction to zero.
//! - This is a pre-filter: its outcome guides which variables enter a VAR,
//!   but nothing from it feeds numerically into the VAR fit itself.
//!
//! Conventions
//! -----------
//! - `granger_causality(x, y, p)` tests the null "x does NOT help predict
//!   y"; a small p-value is evidence that x has predictive value for y.
//! - Lag pairing follows the usual convention: row t of the design uses
//!   observations t−1 … t−p, for t = p,…,n−1.
//!
//! Downstream usage
//! ----------------
//! - Run [`GrangerOutcome::both_directions`] on each candidate pair before
//!   assembling the variable set of a
//!   [`VARModel`](crate::var::models::var::VARModel).
//!
//! Testing notes
//! -------------
//! - Unit tests verify correctness of the design construction on small
//!   series, invalid-input surfacing, the degenerate exact-fit error, and
//!   a power/size scenario over repeated deterministic pseudo-random
//!   trials: a lagged dependence X→Y must reject while the reverse
//!   direction must (almost always) fail to reject.
use crate::statistical_tests::{
    errors::{GCError, GCResult},
    validation::validate_pair,
};
use crate::var::core::least_squares::solve_normal_equations;
use ndarray::Array2;
use statrs::distribution::{ContinuousCDF, FisherSnedecor};

/// GrangerOutcome — outcome of one directional predictive F-test.
///
/// Purpose
/// -------
/// Represent the outcome of a single Granger test in one direction: the
/// F-statistic comparing restricted and unrestricted lagged regressions,
/// its degrees of freedom, and the upper-tail p-value.
///
/// Key behaviors
/// -------------
/// - Holds the F-statistic on `(p, T − 2p − 1)` degrees of freedom, where
///   `T = n − p` is the number of usable rows.
/// - Stores the asymptotic upper-tail probability (p-value) of the observed
///   statistic.
/// - Provides lightweight accessor methods for each field so downstream
///   code (including Python bindings) does not depend on the layout.
///
/// Parameters
/// ----------
/// Constructed via [`GrangerOutcome::granger_causality`]:
/// - `x`: `&[f64]`
///   Candidate predictor series.
/// - `y`: `&[f64]`
///   Response series; the null hypothesis is that x's past does not improve
///   the prediction of y beyond y's own past.
/// - `p`: `usize`
///   Lag order of both compared autoregressions; must satisfy `p ≥ 1`.
///
/// Fields
/// ------
/// - `stat`: `f64`
///   The F-statistic of the RSS reduction.
/// - `p_value`: `f64`
///   Upper-tail `F(df_num, df_denom)` probability; lies in [0, 1].
/// - `df_num`: `usize`
///   Numerator degrees of freedom (the p restrictions).
/// - `df_denom`: `usize`
///   Denominator degrees of freedom (`T − 2p − 1`).
///
/// Invariants
/// ----------
/// - `stat` is finite and non-negative whenever construction succeeds.
/// - `p_value` lies in the closed interval [0, 1].
/// - `df_denom ≥ 1` by the validation rules.
///
/// Performance
/// -----------
/// - Stores only scalars and derives `Copy`/`Clone`, making it cheap to
///   pass by value across FFI boundaries.
///
/// Notes
/// -----
/// - Designed as a simple value object; it does not own the input series.
#[derive(Debug, Copy, Clone)]
pub struct GrangerOutcome {
    stat: f64,
    p_value: f64,
    df_num: usize,
    df_denom: usize,
}

impl GrangerOutcome {
    /// Test whether `x`'s past values improve the prediction of `y`.
    ///
    /// Parameters
    /// ----------
    /// - `x`: `&[f64]`
    ///   Candidate predictor series of length n.
    /// - `y`: `&[f64]`
    ///   Response series of the same length.
    /// - `p`: `usize`
    ///   Lag order of the compared autoregressions. Must satisfy `p ≥ 1`
    ///   and `n ≥ 3p + 2` so that the unrestricted fit keeps at least one
    ///   residual degree of freedom.
    ///
    /// Returns
    /// -------
    /// `GCResult<GrangerOutcome>`
    ///   - `Ok(GrangerOutcome)` on success, containing the F-statistic, its
    ///     degrees of freedom, and the upper-tail p-value.
    ///   - `Err(GCError)` when validation fails or either regression is
    ///     degenerate.
    ///
    /// Errors
    /// ------
    /// - Any `GCError` variant produced by
    ///   [`validate_pair`](crate::statistical_tests::validation::validate_pair).
    /// - `GCError::SingularDesign`
    ///   When either lagged design is rank-deficient (e.g. a constant
    ///   series).
    /// - `GCError::ZeroResidualVariance`
    ///   When the unrestricted regression fits exactly (up to rounding
    ///   noise), leaving the F-ratio undefined.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; all user-facing invalid
    ///   inputs are surfaced as `GCError` values.
    ///
    /// Notes
    /// -----
    /// - The restricted model regresses `y_t` on `[1, y_{t−1..t−p}]`; the
    ///   unrestricted model adds `x_{t−1..t−p}`. Both are fit over the same
    ///   `T = n − p` rows so their residual sums are comparable.
    /// - Reject the null (conclude x has predictive value for y) when the
    ///   p-value falls below the conventional 0.05 threshold.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// use var_timeseries::statistical_tests::granger::GrangerOutcome;
    ///
    /// let x: Vec<f64> = (0..40).map(|i| (i as f64 * 0.9).sin()).collect();
    /// let y: Vec<f64> = (0..40)
    ///     .map(|i| if i == 0 { 0.0 } else { 0.8 * x[i - 1] + 0.1 * (i as f64 * 2.3).cos() })
    ///     .collect();
    ///
    /// let outcome = GrangerOutcome::granger_causality(&x, &y, 1).unwrap();
    /// assert!(outcome.stat().is_finite());
    /// assert!((0.0..=1.0).contains(&outcome.p_value()));
    /// ```
    pub fn granger_causality(x: &[f64], y: &[f64], p: usize) -> GCResult<Self> {
        validate_pair(x, y, p)?;
        let n = y.len();
        let t = n - p;

        let rss_r = lagged_rss(x, y, p, false)?;
        let rss_u = lagged_rss(x, y, p, true)?;
        // An exact fit leaves only rounding noise in the residuals; judge
        // degeneracy relative to the restricted fit's scale.
        if rss_u <= rss_r.max(1.0) * 1e-12 {
            return Err(GCError::ZeroResidualVariance);
        }

        let df_num = p;
        let df_denom = t - (2 * p + 1);
        // Rounding can push the reduction of a nested fit slightly negative.
        let reduction = (rss_r - rss_u).max(0.0);
        let stat = (reduction / df_num as f64) / (rss_u / df_denom as f64);

        let f_dist = FisherSnedecor::new(df_num as f64, df_denom as f64)
            .expect("validated degrees of freedom");
        Ok(GrangerOutcome { stat, p_value: 1.0 - f_dist.cdf(stat), df_num, df_denom })
    }

    /// Run the test in both directions: `(X→Y, Y→X)`.
    ///
    /// The relationship is not symmetric, so the two outcomes are separate
    /// hypotheses; a pair may reject in both, either, or neither direction.
    pub fn both_directions(x: &[f64], y: &[f64], p: usize) -> GCResult<(Self, Self)> {
        let x_to_y = Self::granger_causality(x, y, p)?;
        let y_to_x = Self::granger_causality(y, x, p)?;
        Ok((x_to_y, y_to_x))
    }

    /// The F-statistic of the RSS reduction.
    pub fn stat(&self) -> f64 {
        self.stat
    }

    /// Upper-tail p-value of [`stat`](Self::stat).
    pub fn p_value(&self) -> f64 {
        self.p_value
    }

    /// Numerator degrees of freedom (number of restrictions).
    pub fn df_num(&self) -> usize {
        self.df_num
    }

    /// Denominator degrees of freedom of the unrestricted fit.
    pub fn df_denom(&self) -> usize {
        self.df_denom
    }
}

//
// ---------- Private helpers (compact docs) ----------
//

/// Residual sum of squares of the lagged regression of `y` on its own lags,
/// optionally augmented with `x`'s lags.
///
/// Parameters
/// ----------
/// - `x`, `y`: equal-length series, already validated by the caller.
/// - `p`: lag order (`p ≥ 1`).
/// - `include_x`: when true, append `x_{t−1..t−p}` to the regressor set.
///
/// Returns
/// -------
/// `GCResult<f64>`
///   The residual sum of squares of the least-squares fit over the
///   `T = n − p` usable rows.
///
/// Errors
/// ------
/// - `GCError::SingularDesign` (via `From<VARError>`) when the design is
///   rank-deficient.
///
/// Notes
/// -----
/// - Row i of the design corresponds to series index `t = p + i`: an
///   intercept, then `y[t−1], …, y[t−p]`, then (optionally)
///   `x[t−1], …, x[t−p]`.
fn lagged_rss(x: &[f64], y: &[f64], p: usize, include_x: bool) -> GCResult<f64> {
    let n = y.len();
    let t_rows = n - p;
    let m = if include_x { 2 * p + 1 } else { p + 1 };

    let mut design = Array2::<f64>::zeros((t_rows, m));
    let mut response = Array2::<f64>::zeros((t_rows, 1));
    for i in 0..t_rows {
        let t = p + i;
        design[[i, 0]] = 1.0;
        for lag in 1..=p {
            design[[i, lag]] = y[t - lag];
            if include_x {
                design[[i, p + lag]] = x[t - lag];
            }
        }
        response[[i, 0]] = y[t];
    }

    let fit = solve_normal_equations(&design.view(), &response.view())?;
    Ok(fit.residuals.iter().map(|&r| r * r).sum())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statistical_tests::errors::GCError;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Surfacing of validation errors through the public entry point.
    // - The degenerate exact-fit path (ZeroResidualVariance).
    // - The singular-design path (constant series).
    // - A power/size scenario over repeated deterministic pseudo-random
    //   trials: lagged dependence X→Y rejects, the reverse direction
    //   (almost always) fails to reject.
    //
    // They intentionally DO NOT cover:
    // - Asymptotic size or power properties of the test (a simulation-study
    //   concern, not a unit-test concern).
    // -------------------------------------------------------------------------

    // Deterministic pseudo-random stream in [−1, 1) from a 64-bit LCG, so
    // the power/size scenario needs no randomness dependency and stays
    // reproducible.
    fn lcg_stream(seed: u64, n: usize) -> Vec<f64> {
        let mut state = seed;
        (0..n)
            .map(|_| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (state >> 33) as f64 / (1u64 << 31) as f64 * 2.0 - 1.0
            })
            .collect()
    }

    #[test]
    // Purpose
    // -------
    // Ensure that `granger_causality` respects the input validation rules
    // and surfaces invalid configurations as errors rather than panicking.
    //
    // Given
    // -----
    // - A valid baseline pair of length 20 with p = 2.
    // - Invalid variants: empty x, mismatched lengths, p = 0, and a sample
    //   too short for the unrestricted regression.
    //
    // Expect
    // ------
    // - Each invalid variant returns `Err(GCError)` of the matching kind.
    fn granger_causality_invalid_inputs_return_error() {
        // Arrange
        let x = lcg_stream(11, 20);
        let y = lcg_stream(23, 20);

        // Act & Assert: empty series
        let empty: Vec<f64> = Vec::new();
        assert_eq!(
            GrangerOutcome::granger_causality(&empty, &y, 2).unwrap_err(),
            GCError::EmptySeries
        );

        // Act & Assert: length mismatch
        assert_eq!(
            GrangerOutcome::granger_causality(&x[..15], &y, 2).unwrap_err(),
            GCError::LengthMismatch(15, 20)
        );

        // Act & Assert: zero lag order
        assert_eq!(
            GrangerOutcome::granger_causality(&x, &y, 0).unwrap_err(),
            GCError::InvalidLagOrder(0)
        );

        // Act & Assert: sample too short (p = 6 needs n ≥ 20; use n = 19)
        assert_eq!(
            GrangerOutcome::granger_causality(&x[..19], &y[..19], 6).unwrap_err(),
            GCError::InsufficientData { needed: 20, actual: 19 }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure a constant response series triggers `SingularDesign`, since its
    // own lags are collinear with the intercept.
    //
    // Given
    // -----
    // - A pseudo-random x and a constant y of length 30, p = 1.
    //
    // Expect
    // ------
    // - `granger_causality` returns `Err(GCError::SingularDesign)`.
    fn granger_causality_constant_response_returns_singular_design() {
        // Arrange
        let x = lcg_stream(5, 30);
        let y = vec![2.5_f64; 30];

        // Act
        let result = GrangerOutcome::granger_causality(&x, &y, 1);

        // Assert
        assert_eq!(result.unwrap_err(), GCError::SingularDesign);
    }

    #[test]
    // Purpose
    // -------
    // Ensure an exactly-fitting unrestricted regression surfaces
    // `ZeroResidualVariance` instead of dividing by zero.
    //
    // Given
    // -----
    // - y generated exactly as 0.7·x_{t−1} (zero noise) from a
    //   pseudo-random x, tested with p = 1.
    //
    // Expect
    // ------
    // - `granger_causality` returns `Err(GCError::ZeroResidualVariance)`.
    fn granger_causality_exact_fit_returns_zero_residual_variance() {
        // Arrange
        let x = lcg_stream(7, 40);
        let mut y = vec![0.0_f64; 40];
        for t in 1..40 {
            y[t] = 0.7 * x[t - 1];
        }

        // Act
        let result = GrangerOutcome::granger_causality(&x, &y, 1);

        // Assert
        assert_eq!(result.unwrap_err(), GCError::ZeroResidualVariance);
    }

    #[test]
    // Purpose
    // -------
    // Power/size scenario: with y a lagged linear function of x plus noise
    // and x independent noise, the X→Y direction must reject the null at
    // the 5% level in every trial, and the Y→X direction must fail to
    // reject in (at least) most trials — matching its nominal size.
    //
    // Given
    // -----
    // - Five deterministic trials of length 200: x ~ LCG noise,
    //   y_t = 0.9·x_{t−1} + 0.1·e_t with e an independent LCG stream.
    // - Lag order p = 2.
    //
    // Expect
    // ------
    // - All five X→Y p-values are below 0.05.
    // - At least four of five Y→X p-values are at or above 0.05.
    fn granger_causality_detects_direction_of_lagged_dependence() {
        // Arrange
        let n = 200;
        let mut x_rejections = 0;
        let mut y_non_rejections = 0;

        for trial in 0..5u64 {
            let x = lcg_stream(1000 + trial, n);
            let e = lcg_stream(9000 + trial, n);
            let mut y = vec![0.0_f64; n];
            for t in 1..n {
                y[t] = 0.9 * x[t - 1] + 0.1 * e[t];
            }

            // Act
            let (x_to_y, y_to_x) = GrangerOutcome::both_directions(&x, &y, 2)
                .expect("both directions should estimate on this sample");

            // Assert per-trial sanity
            assert!(x_to_y.stat().is_finite());
            assert!((0.0..=1.0).contains(&x_to_y.p_value()));
            assert_eq!(x_to_y.df_num(), 2);
            assert_eq!(x_to_y.df_denom(), n - 2 - 5);

            if x_to_y.p_value() < 0.05 {
                x_rejections += 1;
            }
            if y_to_x.p_value() >= 0.05 {
                y_non_rejections += 1;
            }
        }

        // Assert
        assert_eq!(x_rejections, 5, "X→Y should reject in every trial");
        assert!(
            y_non_rejections >= 4,
            "Y→X should fail to reject in at least 4 of 5 trials; got {y_non_rejections}"
        );
    }
}
