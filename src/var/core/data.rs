//! Multivariate series containers for VAR models.
//!
//! Purpose
//! -------
//! Provide small, validated containers for equally-spaced multivariate time
//! series and their metadata used by VAR(p) models. This module centralizes
//! input validation for raw observation matrices and standardizes how
//! variable names are carried alongside the numbers.
//!
//! Key behaviors
//! -------------
//! - [`VARData`] enforces basic data invariants (non-empty, finite entries,
//!   one name per column).
//! - [`VARMeta`] describes how to interpret the columns (variable names)
//!   without mutating raw values.
//! - [`VARData::split`] cuts a series into a training prefix and a held-out
//!   suffix for forecast evaluation.
//!
//! Invariants & assumptions
//! ------------------------
//! - Rows index time with the **oldest observation first**; columns index the
//!   K tracked variables.
//! - Observations must be **finite**; gaps, missing values, and irregular
//!   spacing are resolved by the upstream data-preparation collaborator
//!   before a series reaches this type.
//! - The series must be non-empty at construction time (at least one row and
//!   one column).
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout.
//! - Timestamps are not stored: an equally-spaced series is fully described
//!   by its row index, and seasonal alignment works off that index.
//! - This module does **not** resample, impute, or otherwise transform the
//!   series; it only validates it.
//!
//! Downstream usage
//! ----------------
//! - Construct [`VARData`] at the Rust boundary where raw observations enter
//!   the modeling stack.
//! - Use [`VARData::split`] to carve off a held-out suffix before fitting,
//!   then score forecasts against it with
//!   [`mean_absolute_error`](crate::var::core::evaluation::mean_absolute_error).
//! - Consumers may safely rely on `VARData` invariants when building design
//!   matrices and recursions.
//!
//! Testing notes
//! -------------
//! - Unit tests cover construction behavior for `VARData::new` (happy path,
//!   empty matrix, non-finite values, and name-count mismatches) and the
//!   boundary behavior of `split`.
use crate::var::errors::{VARError, VARResult};
use ndarray::{Array2, s};

/// `VARData` — validated multivariate series plus variable names.
///
/// Purpose
/// -------
/// Represent a single, validated, equally-spaced multivariate time series
/// for VAR(p) models. This type centralizes basic input checks so downstream
/// code can assume clean, finite data with a consistent column schema.
///
/// Key behaviors
/// -------------
/// - Stores raw observations as an `ndarray::Array2<f64>` (rows = time,
///   columns = variables).
/// - Enforces non-emptiness, finiteness, and name/column agreement at
///   construction time via [`VARData::new`].
/// - Splits into training/held-out pieces via [`VARData::split`] without
///   copying more than the two sub-matrices.
///
/// Fields
/// ------
/// - `data`: `Array2<f64>`
///   Observed values; must be finite. Shape `n × K`.
/// - `meta`: [`VARMeta`]
///   Variable names, one per column.
///
/// Invariants
/// ----------
/// - `data.nrows() > 0` and `data.ncols() > 0`.
/// - All entries in `data` are finite.
/// - `meta.names.len() == data.ncols()`.
///
/// Performance
/// -----------
/// - Validation is O(n·K) due to a single scan over `data`.
/// - After construction, this type is a lightweight container with no hidden
///   allocations.
///
/// Notes
/// -----
/// - Upstream preparation (hourly-to-daily filtering, calendar padding,
///   forward-fill imputation) happens before this type; once a `VARData`
///   exists, the series is treated as gap-free and equally spaced.
#[derive(Debug, Clone, PartialEq)]
pub struct VARData {
    /// Observed values (rows = time, oldest first; columns = variables).
    pub data: Array2<f64>,
    /// Variable names, one per column.
    pub meta: VARMeta,
}

impl VARData {
    /// Construct a validated [`VARData`] instance from a raw observation matrix.
    ///
    /// Parameters
    /// ----------
    /// - `data`: `Array2<f64>`
    ///   Raw observations, rows = time (oldest first), columns = variables.
    ///   Must be non-empty with all entries finite.
    /// - `meta`: [`VARMeta`]
    ///   Variable names; the count must match `data.ncols()`.
    ///
    /// Returns
    /// -------
    /// `VARResult<VARData>`
    ///   - `Ok(VARData)` if all invariants are satisfied.
    ///   - `Err(VARError)` if validation fails.
    ///
    /// Errors
    /// ------
    /// - `VARError::EmptySeries`
    ///   Returned when `data` has zero rows or zero columns.
    /// - `VARError::NonFiniteData { row, col, value }`
    ///   Returned when any entry is NaN or ±∞; `row`/`col` point to the first
    ///   offending element in row-major order.
    /// - `VARError::VariableNamesMismatch { expected, actual }`
    ///   Returned when `meta.names.len() != data.ncols()`.
    ///
    /// Panics
    /// ------
    /// - Never panics. All invalid inputs are reported via `VARError`.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use var_timeseries::var::core::data::{VARData, VARMeta};
    /// #
    /// let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
    /// let meta = VARMeta::default_names(2);
    /// let series = VARData::new(data, meta).unwrap();
    /// assert_eq!(series.k(), 2);
    /// assert_eq!(series.len(), 3);
    /// ```
    pub fn new(data: Array2<f64>, meta: VARMeta) -> VARResult<Self> {
        if data.nrows() == 0 || data.ncols() == 0 {
            return Err(VARError::EmptySeries);
        }

        for ((row, col), &value) in data.indexed_iter() {
            if !value.is_finite() {
                return Err(VARError::NonFiniteData { row, col, value });
            }
        }

        if meta.names.len() != data.ncols() {
            return Err(VARError::VariableNamesMismatch {
                expected: data.ncols(),
                actual: meta.names.len(),
            });
        }

        Ok(VARData { data, meta })
    }

    /// Number of observations (rows).
    pub fn len(&self) -> usize {
        self.data.nrows()
    }

    /// `true` when the series holds no observations. Unreachable for a
    /// validated instance; provided for the conventional `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.data.nrows() == 0
    }

    /// Number of tracked variables (columns).
    pub fn k(&self) -> usize {
        self.data.ncols()
    }

    /// Split the series into a training prefix of `train_len` rows and the
    /// held-out suffix.
    ///
    /// Parameters
    /// ----------
    /// - `train_len`: `usize`
    ///   Length of the training prefix. Must satisfy `1 ≤ train_len < len`
    ///   so that both pieces are non-empty.
    ///
    /// Returns
    /// -------
    /// `VARResult<(VARData, VARData)>`
    ///   The `(training, held_out)` pair; both carry a clone of the variable
    ///   names.
    ///
    /// Errors
    /// ------
    /// - `VARError::InvalidSplitIndex { index, len }`
    ///   Returned when `train_len == 0` or `train_len >= len`.
    pub fn split(&self, train_len: usize) -> VARResult<(VARData, VARData)> {
        let n = self.len();
        if train_len == 0 || train_len >= n {
            return Err(VARError::InvalidSplitIndex { index: train_len, len: n });
        }
        let train = self.data.slice(s![..train_len, ..]).to_owned();
        let held_out = self.data.slice(s![train_len.., ..]).to_owned();
        Ok((
            VARData { data: train, meta: self.meta.clone() },
            VARData { data: held_out, meta: self.meta.clone() },
        ))
    }
}

/// `VARMeta` — interpretation metadata for multivariate series.
///
/// Purpose
/// -------
/// Carry the column schema (variable names) of a series without altering the
/// raw numeric values. Names flow through to fitted models so that score
/// tables and per-variable metrics can be reported by name.
///
/// Fields
/// ------
/// - `names`: `Vec<String>`
///   Variable names, one per column of the associated [`VARData`].
///
/// Notes
/// -----
/// - `VARMeta` is intentionally lightweight and does not validate its fields
///   beyond the type system; the name/column agreement is checked by
///   [`VARData::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct VARMeta {
    /// Variable names, one per column.
    pub names: Vec<String>,
}

impl VARMeta {
    /// Construct a new [`VARMeta`] instance from explicit names.
    pub fn new(names: Vec<String>) -> VARMeta {
        VARMeta { names }
    }

    /// Construct placeholder names `y1, …, yK` for a K-column series.
    ///
    /// Used when the caller has no meaningful labels (e.g. data arriving as a
    /// bare matrix through the Python boundary).
    pub fn default_names(k: usize) -> VARMeta {
        VARMeta { names: (1..=k).map(|i| format!("y{i}")).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction behavior of `VARData::new`.
    // - Enforcement of invariants:
    //   * non-empty matrix,
    //   * finite values,
    //   * name/column-count agreement.
    // - Boundary behavior of `VARData::split`.
    //
    // These tests intentionally DO NOT cover:
    // - Semantics of `VARMeta` beyond being constructible.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `VARData::new` succeeds on a valid, finite bivariate series
    // and preserves data and names exactly.
    //
    // Given
    // -----
    // - A 3×2 finite matrix.
    // - Default names for 2 columns.
    //
    // Expect
    // ------
    // - `VARData::new` returns `Ok(..)` with `len() == 3` and `k() == 2`.
    fn vardata_new_returns_ok_for_valid_input() {
        let data = array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0]];
        let meta = VARMeta::default_names(2);

        let result = VARData::new(data.clone(), meta.clone());

        assert!(result.is_ok());
        let series = result.unwrap();
        assert_eq!(series.data, data);
        assert_eq!(series.meta, meta);
        assert_eq!(series.len(), 3);
        assert_eq!(series.k(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `VARData::new` rejects a matrix with zero rows.
    //
    // Given
    // -----
    // - A 0×2 matrix and names for 2 columns.
    //
    // Expect
    // ------
    // - `VARData::new` returns `Err(VARError::EmptySeries)`.
    fn vardata_new_returns_error_for_empty_series() {
        let data = Array2::<f64>::zeros((0, 2));
        let meta = VARMeta::default_names(2);

        let result = VARData::new(data, meta);

        assert_eq!(result.unwrap_err(), VARError::EmptySeries);
    }

    #[test]
    // Purpose
    // -------
    // Ensure `VARData::new` rejects non-finite values (NaN / ±∞) and reports
    // the position and offending value.
    //
    // Given
    // -----
    // - A 3×2 matrix with +∞ at row 1, column 1.
    //
    // Expect
    // ------
    // - `VARData::new` returns
    //   `Err(VARError::NonFiniteData { row: 1, col: 1, value })`.
    fn vardata_new_returns_error_for_non_finite_data() {
        let data = array![[1.0, 10.0], [2.0, f64::INFINITY], [3.0, 30.0]];
        let meta = VARMeta::default_names(2);

        let result = VARData::new(data.clone(), meta);

        assert_eq!(
            result.unwrap_err(),
            VARError::NonFiniteData { row: 1, col: 1, value: data[[1, 1]] }
        );
    }

    #[test]
    // Purpose
    // -------
    // Ensure `VARData::new` rejects a name list whose length disagrees with
    // the column count.
    //
    // Given
    // -----
    // - A 2×2 matrix with names for 3 columns.
    //
    // Expect
    // ------
    // - `VARData::new` returns
    //   `Err(VARError::VariableNamesMismatch { expected: 2, actual: 3 })`.
    fn vardata_new_returns_error_for_name_count_mismatch() {
        let data = array![[1.0, 2.0], [3.0, 4.0]];
        let meta = VARMeta::default_names(3);

        let result = VARData::new(data, meta);

        assert_eq!(result.unwrap_err(), VARError::VariableNamesMismatch { expected: 2, actual: 3 });
    }

    #[test]
    // Purpose
    // -------
    // Verify that `VARData::split` cuts a series into a prefix and suffix of
    // the expected lengths and rejects out-of-range split indices.
    //
    // Given
    // -----
    // - A 5×2 series split at train_len = 3, then at 0 and 5.
    //
    // Expect
    // ------
    // - Splitting at 3 yields pieces of 3 and 2 rows with identical names.
    // - Splitting at 0 or at the full length returns
    //   `VARError::InvalidSplitIndex`.
    fn vardata_split_cuts_prefix_and_suffix() {
        let data =
            array![[1.0, 10.0], [2.0, 20.0], [3.0, 30.0], [4.0, 40.0], [5.0, 50.0]];
        let series = VARData::new(data, VARMeta::default_names(2)).unwrap();

        let (train, held_out) = series.split(3).expect("split at 3 should succeed");
        assert_eq!(train.len(), 3);
        assert_eq!(held_out.len(), 2);
        assert_eq!(train.meta, held_out.meta);
        assert_eq!(held_out.data[[0, 0]], 4.0);

        assert_eq!(
            series.split(0).unwrap_err(),
            VARError::InvalidSplitIndex { index: 0, len: 5 }
        );
        assert_eq!(
            series.split(5).unwrap_err(),
            VARError::InvalidSplitIndex { index: 5, len: 5 }
        );
    }
}
