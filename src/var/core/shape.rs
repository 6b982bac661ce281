//! Model order (p) and seasonal period for VAR models.
//!
//! A VAR(p) predicts each variable at time t from the last `p` observation
//! vectors (all variables), an intercept, and — when a seasonal period `s`
//! is present — `s − 1` indicator dummies cycling with the observation index.
//!
//! The lag order is shared by all K equations; that symmetry is what makes
//! the model a VAR rather than a general multivariate regression.
use crate::var::errors::{VARError, VARResult};

/// Order of the VAR(p) model plus optional seasonal period.
///
/// - `p`: number of lagged observation vectors used as predictors
/// - `season`: optional period `s ≥ 2`; adds `s − 1` dummy regressors
///
/// Invariant: `1 ≤ p < n` for the sample the shape was validated against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VARShape {
    pub p: usize,
    pub season: Option<usize>,
}

impl VARShape {
    /// Construct a [`VARShape`] = VAR(p) and validate it against the sample size `n`.
    ///
    /// # Invariants
    /// - `p ≥ 1`: a VAR with no lags has no dynamics.
    /// - `p < n`: dropping `p` warm-up rows must leave at least one usable row.
    /// - `season`, when present, is at least 2 (a period of 1 has no dummies).
    ///
    /// # Arguments
    /// - `p`: lag order.
    /// - `season`: optional seasonal period.
    /// - `n`: number of available observations in the sample you plan to fit.
    ///
    /// # Errors
    /// - [`VARError::InvalidLagOrder`] if `p == 0` or `p >= n`.
    /// - [`VARError::InvalidSeasonalPeriod`] if `season` is `Some(s)` with `s < 2`.
    ///
    /// # Rationale
    /// The lag design matrix requires `p` prior observation vectors per row,
    /// so rows `0..p` are warm-up. Guarding here fails fast on
    /// under-identified specifications so downstream fitting/forecasting can
    /// assume `n > p`.
    pub fn new(p: usize, season: Option<usize>, n: usize) -> VARResult<Self> {
        if p == 0 || p >= n {
            return Err(VARError::InvalidLagOrder { p, n });
        }
        if let Some(s) = season {
            if s < 2 {
                return Err(VARError::InvalidSeasonalPeriod { season: s });
            }
        }
        Ok(VARShape { p, season })
    }

    /// Number of seasonal dummy columns implied by this shape (`s − 1`, or 0).
    pub fn dummy_cols(&self) -> usize {
        self.season.map_or(0, |s| s - 1)
    }
}
