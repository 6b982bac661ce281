//! models — user-facing VAR(p) model layer.
//!
//! Hosts [`VARModel`], the fitted-model type that ties the core blocks
//! together: estimation over the shared lag design, the immutable snapshot
//! of everything forecasting needs, and the forecast entry point.

pub mod var;

pub use self::var::VARModel;
