//! Multi-equation ordinary least squares on a shared design matrix.
//!
//! Purpose
//! -------
//! Solve the K independent per-equation regressions of a VAR(p) in one
//! pass: every equation shares the same regressor matrix, so the normal
//! equations `XᵀX β = Xᵀy` can be factored once and solved against all K
//! right-hand sides. This module handles conversion between `ndarray` and
//! `nalgebra` types and turns rank deficiency into a structured error.
//!
//! Key behaviors
//! -------------
//! - Copy the `XᵀX` Gram matrix into a `nalgebra::DMatrix`
//!   ([`fill_dmatrix`]) for a symmetric eigendecomposition.
//! - Detect rank deficiency by eigenvalue truncation: any eigenvalue at or
//!   below [`RANK_EPS`] times the largest marks the design as singular —
//!   perfectly collinear regressors, or a sample with no more rows than
//!   regressors, surface as [`VARError::SingularDesign`] instead of a panic
//!   or NaNs.
//! - Solve all K equations against the decomposed Gram matrix and return
//!   the stacked coefficient matrix plus in-sample residuals ([`OlsFit`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - `x` and `y` have the same row count; callers build both through
//!   [`build_design`](crate::var::core::design::build_design), which aligns
//!   them by construction.
//! - Inputs are finite (guaranteed by `VARData` validation upstream).
//! - A successful return implies every eigenvalue of `XᵀX` cleared the
//!   truncation threshold, i.e. the design had full column rank up to
//!   numerical precision.
//!
//! Conventions
//! -----------
//! - Coefficients are returned as an `m × K` matrix: column `j` is the
//!   coefficient vector of variable `j`'s equation, in the design layout of
//!   [`design`](crate::var::core::design) (intercept, lag blocks, dummies).
//! - The residual covariance denominator is the caller's choice
//!   ([`residual_covariance`] takes it as a parameter): lag selection uses
//!   the MLE denominator `T`, the fitted model stores `T − m`.
//!
//! Testing notes
//! -------------
//! - Unit tests cover exact recovery on a noiseless linear system, the
//!   least-squares zero-mean residual property, and both singularity paths
//!   (duplicate columns; more regressors than rows).
use crate::var::errors::{VARError, VARResult};
use nalgebra::DMatrix;
use ndarray::{Array2, ArrayView2};

/// Relative eigenvalue cutoff below which the Gram matrix is treated as
/// rank-deficient. Scaled by the largest eigenvalue, so the test is
/// invariant to the units of the series.
pub const RANK_EPS: f64 = 1e-10;

/// `OlsFit` — stacked per-equation coefficients and in-sample residuals.
///
/// Purpose
/// -------
/// Carry the output of a multi-equation least-squares solve: one coefficient
/// column per response variable, plus the residual matrix needed for
/// covariance estimates and information criteria.
///
/// Fields
/// ------
/// - `coeffs`: `Array2<f64>`
///   `m × K` coefficient matrix; column `j` belongs to equation `j`.
/// - `residuals`: `Array2<f64>`
///   `T × K` in-sample residuals `Y − X·coeffs`.
///
/// Invariants
/// ----------
/// - `coeffs.nrows()` equals the design's regressor count and
///   `residuals.dim()` equals the response matrix's shape, for the inputs of
///   the producing [`solve_normal_equations`] call.
#[derive(Debug, Clone, PartialEq)]
pub struct OlsFit {
    /// `m × K` coefficient matrix; column `j` belongs to equation `j`.
    pub coeffs: Array2<f64>,
    /// `T × K` in-sample residuals `Y − X·coeffs`.
    pub residuals: Array2<f64>,
}

/// Solve the shared-design normal equations `XᵀX B = XᵀY` for all equations.
///
/// Parameters
/// ----------
/// - `x`: `ArrayView2<f64>`
///   `T × m` design matrix (intercept, lag blocks, seasonal dummies).
/// - `y`: `ArrayView2<f64>`
///   `T × K` response matrix; column `j` is equation `j`'s response.
///
/// Returns
/// -------
/// `VARResult<OlsFit>`
///   Coefficients and residuals on success.
///
/// Errors
/// ------
/// - `VARError::SingularDesign { rows, regressors }`
///   Returned when `T <= m` (the Gram matrix cannot have full rank) or when
///   any eigenvalue of `XᵀX` falls at or below [`RANK_EPS`] times the
///   largest, which is how collinearity among regressors surfaces
///   numerically.
///
/// Notes
/// -----
/// - The Gram matrix of a full-column-rank design is symmetric positive
///   definite, so the symmetric eigendecomposition doubles as the rank test
///   and the solver: `B = Q Λ⁻¹ Qᵀ XᵀY`.
/// - Eigenvalue truncation makes the rank decision deterministic; an
///   exactly-singular Gram matrix whose factorization pivot lands a hair
///   above zero through rounding is still rejected.
/// - All equations share one decomposition; only the right-hand sides
///   differ. This is the computational payoff of the VAR symmetry
///   (identical regressor sets across equations).
pub fn solve_normal_equations(x: &ArrayView2<f64>, y: &ArrayView2<f64>) -> VARResult<OlsFit> {
    let rows = x.nrows();
    let m = x.ncols();
    let k = y.ncols();

    if rows <= m {
        return Err(VARError::SingularDesign { rows, regressors: m });
    }

    let xtx = x.t().dot(x);
    let xty = x.t().dot(y);

    let mut xtx_nalg = DMatrix::<f64>::zeros(m, m);
    fill_dmatrix(&xtx, &mut xtx_nalg);

    let eigen = xtx_nalg.symmetric_eigen();
    let max_eig = eigen.eigenvalues.iter().fold(0.0_f64, |acc, &l| acc.max(l));
    if max_eig <= 0.0 || eigen.eigenvalues.iter().any(|&l| l <= max_eig * RANK_EPS) {
        return Err(VARError::SingularDesign { rows, regressors: m });
    }

    let mut rhs = DMatrix::<f64>::zeros(m, k);
    fill_dmatrix(&xty, &mut rhs);

    // B = Q Λ⁻¹ Qᵀ XᵀY, all right-hand sides at once.
    let mut weights = eigen.eigenvectors.transpose() * rhs;
    for i in 0..m {
        let scale = 1.0 / eigen.eigenvalues[i];
        for j in 0..k {
            weights[(i, j)] *= scale;
        }
    }
    let solution = &eigen.eigenvectors * weights;

    let mut coeffs = Array2::<f64>::zeros((m, k));
    for j in 0..k {
        for i in 0..m {
            coeffs[[i, j]] = solution[(i, j)];
        }
    }

    let residuals = y.to_owned() - x.dot(&coeffs);
    Ok(OlsFit { coeffs, residuals })
}

/// Residual covariance `UᵀU / denom` for a chosen denominator.
///
/// Parameters
/// ----------
/// - `residuals`: `ArrayView2<f64>`
///   `T × K` residual matrix.
/// - `denom`: `f64`
///   Scaling denominator: `T` for the MLE covariance used by information
///   criteria, `T − m` for the degree-of-freedom-adjusted covariance stored
///   on a fitted model. Must be strictly positive.
///
/// Returns
/// -------
/// `Array2<f64>`
///   The `K × K` covariance estimate.
///
/// Panics
/// ------
/// - Division by a zero `denom` yields non-finite entries rather than a
///   panic; callers guarantee `denom > 0` via their degrees-of-freedom
///   pre-checks.
pub fn residual_covariance(residuals: &ArrayView2<f64>, denom: f64) -> Array2<f64> {
    residuals.t().dot(residuals).mapv(|v| v / denom)
}

/// fill_dmatrix — copy an `ndarray` matrix into a `nalgebra::DMatrix`.
///
/// Bridge between `ndarray` and `nalgebra` by copying entries column by
/// column, matching the internal storage of `DMatrix` (column-major). Both
/// matrices must have the same shape; mismatches are programmer errors and
/// panic via out-of-bounds indexing.
pub(crate) fn fill_dmatrix(src: &Array2<f64>, dst: &mut DMatrix<f64>) {
    for j in 0..src.ncols() {
        for i in 0..src.nrows() {
            dst[(i, j)] = src[[i, j]];
        }
    }
}
