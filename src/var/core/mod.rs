//! core — shared VAR(p) data, design, estimation, and forecasting blocks.
//!
//! Purpose
//! -------
//! Collect the core building blocks for VAR(p) models: validated series
//! containers, model shapes, the shared lag design matrix, the
//! multi-equation least-squares solver, information-criterion lag
//! selection, the iterated forecast recursion, and forecast-accuracy
//! scoring.
//!
//! Key behaviors
//! -------------
//! - [`data`] validates raw observation matrices into [`VARData`] and
//!   carries variable names via [`VARMeta`].
//! - [`shape`] validates lag order and seasonal period against the sample.
//! - [`design`] owns the regressor layout shared by estimation, selection,
//!   and forecasting.
//! - [`least_squares`] factors the shared normal equations once for all K
//!   equations and converts rank deficiency into structured errors.
//! - [`lag_selection`] scores candidate orders with AIC/HQ/SC/FPE.
//! - [`forecasts`] rolls the fitted recursion past the sample into a
//!   reusable buffer.
//! - [`evaluation`] computes per-variable MAE against a held-out suffix.
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; rows index time with the oldest observation
//!   first, columns index variables.
//! - Warm-up is handled purely via indexing: a VAR(p) design drops the
//!   first `p` rows, and seasonal phase is a property of the original row
//!   index so forecasts can continue the cycle.
//! - The core performs no I/O and no logging; callers orchestrate data
//!   loading and reporting. Error conditions are surfaced as
//!   [`VARResult`](crate::var::errors::VARResult); panics indicate
//!   programming errors such as shape mismatches.
//!
//! Testing notes
//! -------------
//! - Each submodule carries unit tests for its own invariants; the model
//!   layer and the integration suite exercise their composition.

pub mod data;
pub mod design;
pub mod evaluation;
pub mod forecasts;
pub mod lag_selection;
pub mod least_squares;
pub mod shape;

pub use self::data::{VARData, VARMeta};
pub use self::evaluation::mean_absolute_error;
pub use self::forecasts::VARForecastResult;
pub use self::lag_selection::{LagSelection, SelectionCriterion};
pub use self::shape::VARShape;
