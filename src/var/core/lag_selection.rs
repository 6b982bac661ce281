//! Information-criterion lag-order selection for VAR(p) models.
//!
//! Purpose
//! -------
//! Score every candidate lag order p in `1..=lag_max` with four information
//! criteria — Akaike (AIC), Hannan–Quinn (HQ), Schwarz (SC), and the final
//! prediction error (FPE) — from the residual covariance of a least-squares
//! fit at that order. Each criterion trades fit quality against parameter
//! count; the four may disagree on the minimizing p, and no canonical winner
//! is imposed here.
//!
//! Key behaviors
//! -------------
//! - Fit VAR(p) for each candidate p on its own sample (the first p rows are
//!   dropped as warm-up), so the score of a given p does not depend on
//!   `lag_max` and remains stable when the bound is raised.
//! - Compute, per candidate, with `T = n − p` usable rows,
//!   `m = 1 + K·p + (s − 1)` regressors per equation, and Σ̃ the MLE residual
//!   covariance (denominator `T`):
//!   - `AIC = ln det Σ̃ + (2 / T) · K·m`
//!   - `HQ  = ln det Σ̃ + (2 ln ln T / T) · K·m`
//!   - `SC  = ln det Σ̃ + (ln T / T) · K·m`
//!   - `FPE = ((T + m) / (T − m))^K · det Σ̃`
//! - Expose the full score table and the per-criterion minimizing lag via
//!   [`LagSelection`]; callers apply their own policy when criteria disagree
//!   (the usual choice is minimum AIC).
//!
//! Invariants & assumptions
//! ------------------------
//! - The series has been validated by [`VARData`]; entries are finite.
//! - The lag bound satisfies `1 ≤ lag_max < n`, and the largest candidate
//!   must leave at least one residual degree of freedom
//!   (`n − lag_max > m(lag_max)`); violations surface as
//!   [`VARError::InsufficientData`] before any candidate is fit.
//! - A rank-deficient design at any candidate aborts the whole scan with
//!   [`VARError::SingularDesign`]; partial tables are never returned.
//!
//! Conventions
//! -----------
//! - Candidate index i of every score vector corresponds to lag order
//!   `i + 1`; [`LagSelection::candidates`] makes the mapping explicit.
//! - A residual covariance with non-positive determinant (an exact in-sample
//!   fit) scores `−∞` on the log-determinant criteria, making such a
//!   candidate win outright — the natural limit of the formulas.
//! - Smaller is better for all four criteria; ties resolve to the smallest
//!   candidate lag.
//!
//! Downstream usage
//! ----------------
//! - Call [`LagSelection::select`] on the training series, pick a lag with
//!   [`LagSelection::chosen`] under the criterion of your policy, and pass
//!   it to [`VARModel::fit`](crate::var::models::var::VARModel::fit).
//!
//! Testing notes
//! -------------
//! - Unit tests verify the table dimensions, the stability of scores under
//!   an enlarged `lag_max`, that the reported minimizer attains the minimal
//!   score, and the insufficient-data guard.
use crate::var::{
    core::{
        data::VARData,
        design::{build_design, regressors_per_equation},
        least_squares::{fill_dmatrix, residual_covariance, solve_normal_equations},
        shape::VARShape,
    },
    errors::{VARError, VARResult},
};
use nalgebra::DMatrix;

/// The four lag-selection criteria computed per candidate order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionCriterion {
    /// Akaike information criterion.
    Aic,
    /// Hannan–Quinn criterion.
    Hq,
    /// Schwarz (Bayesian) criterion.
    Sc,
    /// Final prediction error.
    Fpe,
}

/// LagSelection — per-criterion score table over candidate lag orders.
///
/// Purpose
/// -------
/// Represent the outcome of an information-criterion scan over lag orders
/// `1..=lag_max`: the full score table for all four criteria plus accessors
/// for the per-criterion minimizing lag. The caller decides which criterion
/// governs when they disagree.
///
/// Key behaviors
/// -------------
/// - Holds one score vector per criterion, aligned with
///   [`candidates`](Self::candidates).
/// - [`chosen`](Self::chosen) reports the smallest lag attaining the minimal
///   score under a given criterion.
///
/// Invariants
/// ----------
/// - All four score vectors have length `lag_max` and index i corresponds to
///   lag order `i + 1`.
/// - Scores are finite except for the `−∞` exact-fit limit described in the
///   module docs.
///
/// Performance
/// -----------
/// - The scan performs one least-squares solve per candidate; candidates are
///   independent of one another, so the loop could be parallelized, but the
///   sequential version is already cheap for realistic `lag_max`.
///
/// Notes
/// -----
/// - Designed as a value object; it does not retain the training series.
#[derive(Debug, Clone, PartialEq)]
pub struct LagSelection {
    candidates: Vec<usize>,
    aic: Vec<f64>,
    hq: Vec<f64>,
    sc: Vec<f64>,
    fpe: Vec<f64>,
}

impl LagSelection {
    /// Score every lag order in `1..=lag_max` on the given training series.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `&VARData`
    ///   Training series (n rows, K variables).
    /// - `lag_max`: `usize`
    ///   Upper bound on the candidate lag order; must satisfy
    ///   `1 ≤ lag_max < n` and leave residual degrees of freedom at the
    ///   largest candidate.
    /// - `season`: `Option<usize>`
    ///   Optional seasonal period shared by all candidates.
    ///
    /// Returns
    /// -------
    /// `VARResult<LagSelection>`
    ///   The full score table on success.
    ///
    /// Errors
    /// ------
    /// - `VARError::InvalidLagOrder`
    ///   When `lag_max == 0` or `lag_max >= n`.
    /// - `VARError::InvalidSeasonalPeriod`
    ///   When `season` is `Some(s)` with `s < 2`.
    /// - `VARError::InsufficientData { needed, actual }`
    ///   When `n − lag_max <= m(lag_max)`, i.e. the largest candidate has no
    ///   residual degrees of freedom; `needed` is the minimal series length
    ///   that would admit the scan.
    /// - `VARError::SingularDesign`
    ///   Propagated from the least-squares layer when any candidate's design
    ///   is rank-deficient.
    ///
    /// Panics
    /// ------
    /// - Never panics under normal operation; all user-facing invalid inputs
    ///   are surfaced as `VARError` values.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::Array2;
    /// # use var_timeseries::var::core::data::{VARData, VARMeta};
    /// # use var_timeseries::var::core::lag_selection::{LagSelection, SelectionCriterion};
    /// #
    /// // Two chaotic logistic maps stand in for observed data.
    /// let mut raw = Array2::<f64>::zeros((60, 2));
    /// let (mut a, mut b) = (0.37_f64, 0.71_f64);
    /// for t in 0..60 {
    ///     a = 3.9 * a * (1.0 - a);
    ///     b = 3.7 * b * (1.0 - b);
    ///     raw[[t, 0]] = a;
    ///     raw[[t, 1]] = b;
    /// }
    /// let series = VARData::new(raw, VARMeta::default_names(2)).unwrap();
    ///
    /// let selection = LagSelection::select(&series, 4, None).unwrap();
    /// let p = selection.chosen(SelectionCriterion::Aic);
    /// assert!((1..=4).contains(&p));
    /// ```
    pub fn select(data: &VARData, lag_max: usize, season: Option<usize>) -> VARResult<Self> {
        let n = data.len();
        let k = data.k();

        // Shape validation at the largest candidate covers every smaller one.
        let max_shape = VARShape::new(lag_max, season, n)?;
        let m_max = regressors_per_equation(k, &max_shape);
        if n - lag_max <= m_max {
            return Err(VARError::InsufficientData { needed: lag_max + m_max + 1, actual: n });
        }

        let mut candidates = Vec::with_capacity(lag_max);
        let mut aic = Vec::with_capacity(lag_max);
        let mut hq = Vec::with_capacity(lag_max);
        let mut sc = Vec::with_capacity(lag_max);
        let mut fpe = Vec::with_capacity(lag_max);

        for p in 1..=lag_max {
            let shape = VARShape::new(p, season, n)?;
            let (x, y) = build_design(&data.data.view(), &shape);
            let fit = solve_normal_equations(&x.view(), &y.view())?;

            let t = x.nrows() as f64;
            let m = regressors_per_equation(k, &shape);
            let sigma = residual_covariance(&fit.residuals.view(), t);
            let det = sigma_determinant(&sigma);
            let log_det = if det > 0.0 { det.ln() } else { f64::NEG_INFINITY };
            let n_par = (k * m) as f64;

            candidates.push(p);
            aic.push(log_det + 2.0 * n_par / t);
            hq.push(log_det + 2.0 * t.ln().ln() * n_par / t);
            sc.push(log_det + t.ln() * n_par / t);
            fpe.push(((t + m as f64) / (t - m as f64)).powi(k as i32) * det);
        }

        Ok(LagSelection { candidates, aic, hq, sc, fpe })
    }

    /// Candidate lag orders, in scoring order (`1..=lag_max`).
    pub fn candidates(&self) -> &[usize] {
        &self.candidates
    }

    /// Score vector for one criterion, aligned with [`candidates`](Self::candidates).
    pub fn scores(&self, criterion: SelectionCriterion) -> &[f64] {
        match criterion {
            SelectionCriterion::Aic => &self.aic,
            SelectionCriterion::Hq => &self.hq,
            SelectionCriterion::Sc => &self.sc,
            SelectionCriterion::Fpe => &self.fpe,
        }
    }

    /// The smallest lag order attaining the minimal score under `criterion`.
    pub fn chosen(&self, criterion: SelectionCriterion) -> usize {
        let scores = self.scores(criterion);
        let mut best_p = self.candidates[0];
        let mut best_score = f64::INFINITY;
        for (&p, &score) in self.candidates.iter().zip(scores) {
            if score < best_score {
                best_score = score;
                best_p = p;
            }
        }
        best_p
    }
}

/// Determinant of a K×K covariance matrix via a dense LU factorization.
fn sigma_determinant(sigma: &ndarray::Array2<f64>) -> f64 {
    let k = sigma.nrows();
    let mut sigma_nalg = DMatrix::<f64>::zeros(k, k);
    fill_dmatrix(sigma, &mut sigma_nalg);
    sigma_nalg.determinant()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::var::core::data::VARMeta;
    use ndarray::Array2;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Table dimensions and candidate ordering.
    // - Stability of per-candidate scores under an enlarged lag bound.
    // - That `chosen` attains the minimal score of its criterion.
    // - The insufficient-data guard at the largest candidate.
    //
    // They intentionally DO NOT cover:
    // - Asymptotic consistency of the criteria (a simulation-study concern,
    //   not a unit-test concern).
    // -------------------------------------------------------------------------

    // Deterministic pseudo-random stream in [−1, 1) from a 64-bit LCG.
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

    // Noise-driven bivariate recursion with mild serial structure. The
    // innovation terms keep every candidate design full-rank and every
    // candidate fit short of an exact in-sample fit.
    fn make_series(n: usize) -> VARData {
        let e1 = lcg_stream(17, n);
        let e2 = lcg_stream(91, n);
        let mut raw = Array2::<f64>::zeros((n, 2));
        for t in 1..n {
            raw[[t, 0]] = 0.4 * raw[[t - 1, 0]] + e1[t];
            raw[[t, 1]] = 0.3 * raw[[t - 1, 0]] + 0.25 * raw[[t - 1, 1]] + e2[t];
        }
        VARData::new(raw, VARMeta::default_names(2)).expect("finite synthetic series")
    }

    #[test]
    // Purpose
    // -------
    // Verify that `select` produces one score per candidate per criterion
    // and lists candidates as 1..=lag_max.
    //
    // Given
    // -----
    // - A 60-row bivariate series and lag_max = 5.
    //
    // Expect
    // ------
    // - `candidates() == [1, 2, 3, 4, 5]`.
    // - Each criterion's score vector has length 5 with finite entries.
    fn select_produces_full_score_table() {
        // Arrange
        let series = make_series(60);

        // Act
        let selection = LagSelection::select(&series, 5, None)
            .expect("selection should succeed on this series");

        // Assert
        assert_eq!(selection.candidates(), &[1, 2, 3, 4, 5]);
        for criterion in
            [SelectionCriterion::Aic, SelectionCriterion::Hq, SelectionCriterion::Sc, SelectionCriterion::Fpe]
        {
            let scores = selection.scores(criterion);
            assert_eq!(scores.len(), 5);
            assert!(scores.iter().all(|s| s.is_finite()), "scores should be finite: {scores:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that raising `lag_max` never changes the score already reported
    // for a smaller candidate, since each candidate is fit on its own
    // p-trimmed sample.
    //
    // Given
    // -----
    // - The same series scanned with lag_max = 3 and lag_max = 6.
    //
    // Expect
    // ------
    // - For every criterion and every p in 1..=3, the two runs agree exactly.
    fn select_scores_are_stable_under_larger_lag_bound() {
        // Arrange
        let series = make_series(80);

        // Act
        let small = LagSelection::select(&series, 3, None).expect("lag_max = 3 should succeed");
        let large = LagSelection::select(&series, 6, None).expect("lag_max = 6 should succeed");

        // Assert
        for criterion in
            [SelectionCriterion::Aic, SelectionCriterion::Hq, SelectionCriterion::Sc, SelectionCriterion::Fpe]
        {
            let s_small = small.scores(criterion);
            let s_large = large.scores(criterion);
            for p_idx in 0..3 {
                assert_eq!(
                    s_small[p_idx], s_large[p_idx],
                    "score for p = {} changed when lag_max grew",
                    p_idx + 1
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Sanity-check `chosen`: the reported lag lies in the candidate range and
    // attains the minimal score of its criterion.
    //
    // Given
    // -----
    // - A 60-row series scanned up to lag_max = 4.
    //
    // Expect
    // ------
    // - For each criterion, `chosen` is in [1, 4] and its score is ≤ every
    //   other candidate's score.
    fn chosen_attains_minimal_score() {
        // Arrange
        let series = make_series(60);
        let selection =
            LagSelection::select(&series, 4, None).expect("selection should succeed");

        // Act & Assert
        for criterion in
            [SelectionCriterion::Aic, SelectionCriterion::Hq, SelectionCriterion::Sc, SelectionCriterion::Fpe]
        {
            let p = selection.chosen(criterion);
            assert!((1..=4).contains(&p));
            let scores = selection.scores(criterion);
            let chosen_score = scores[p - 1];
            for &s in scores {
                assert!(
                    chosen_score <= s,
                    "chosen score {chosen_score} should be minimal, found {s}"
                );
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure the selector rejects a lag bound whose largest candidate leaves
    // no residual degrees of freedom.
    //
    // Given
    // -----
    // - A 12-row bivariate series and lag_max = 5, so the largest candidate
    //   has 7 usable rows against m = 1 + 2·5 = 11 regressors.
    //
    // Expect
    // ------
    // - `Err(VARError::InsufficientData { needed: 17, actual: 12 })`.
    fn select_rejects_insufficient_data_at_largest_candidate() {
        // Arrange
        let series = make_series(12);

        // Act
        let result = LagSelection::select(&series, 5, None);

        // Assert
        assert_eq!(
            result.unwrap_err(),
            VARError::InsufficientData { needed: 17, actual: 12 }
        );
    }
}
