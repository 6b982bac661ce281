//! var — VAR(p) stack: core numerics, model layer, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive vector-autoregression layer that bundles validated
//! series containers, lag-design construction, multi-equation least
//! squares, information-criterion lag selection, iterated forecasting, and
//! forecast scoring under a single namespace. This is the main entry point
//! for VAR(p) modeling in the crate, and is the surface most consumers
//! (including Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect core numerical and structural building blocks in [`core`]:
//!   series data, model shapes, the shared regressor layout, the normal
//!   equation solver, lag-order selection, forecast recursions, and MAE
//!   scoring.
//! - Expose the user-facing model API in [`models`] via [`VARModel`]:
//!   least-squares fitting, iterated point forecasting, and per-equation
//!   accessors.
//! - Centralize VAR-specific error types in [`errors`] ([`VARError`] and
//!   the [`VARResult`] alias) so callers see a uniform error surface across
//!   the stack.
//! - Re-export the everyday types directly from this module and via
//!   [`prelude`] for ergonomic imports in downstream crates and bindings.
//!
//! Invariants & assumptions
//! ------------------------
//! - Series are carried in validated [`VARData`] instances: finite entries,
//!   a fixed column schema with one name per variable, and — by upstream
//!   contract — strictly increasing, equally spaced, gap-free timestamps
//!   fully described by the row index.
//! - Lag orders and seasonal periods are validated via [`VARShape::new`];
//!   every equation of a fitted model shares the same regressor set.
//! - Fitted models are immutable snapshots; forecasting derives new values
//!   and never mutates the model. Forecast buffers use `RefCell` interior
//!   mutability and are single-threaded by design.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based throughout; rows index time, oldest first.
//! - Every stage (selection → estimation → forecasting → evaluation) is a
//!   pure function of its inputs; the stack performs no I/O and no logging,
//!   and all failures surface as [`VARResult`] values rather than panics.
//! - All errors are terminal for the requested operation: the computation
//!   is deterministic, so retrying would reproduce the same failure.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Construct [`VARData`] / [`VARMeta`] from the prepared observation
//!      matrix, then carve off a held-out suffix with
//!      [`VARData::split`](core::data::VARData::split).
//!   2. Score candidate lag orders with
//!      [`LagSelection::select`](core::lag_selection::LagSelection::select)
//!      and pick one per your criterion policy.
//!   3. Build a [`VARShape`] and fit with
//!      [`VARModel::fit`](models::var::VARModel::fit).
//!   4. Forecast with [`VARModel::forecast`](models::var::VARModel::forecast)
//!      and score against the held-out suffix with
//!      [`mean_absolute_error`](core::evaluation::mean_absolute_error).
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on the `VARError` conversion into `PyErr`
//!   defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each submodule; the integration suite in
//!   `tests/` exercises the full selection → fit → forecast → score
//!   pipeline together with the Granger pre-check.

pub mod core;
pub mod errors;
pub mod models;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::core::{
    LagSelection, SelectionCriterion, VARData, VARForecastResult, VARMeta, VARShape,
    mean_absolute_error,
};
pub use self::errors::{VARError, VARResult};
pub use self::models::VARModel;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use var_timeseries::var::prelude::*;
//
// to import the main VAR surface in a single line.

pub mod prelude {
    pub use super::core::{
        LagSelection, SelectionCriterion, VARData, VARForecastResult, VARMeta, VARShape,
        mean_absolute_error,
    };
    pub use super::errors::{VARError, VARResult};
    pub use super::models::VARModel;
}
