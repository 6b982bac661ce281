//! statistical_tests — directional predictive diagnostics and helpers.
//!
//! Purpose
//! -------
//! Collect statistical-test routines and their shared infrastructure for
//! pre-model screening. This subtree currently implements the pairwise
//! Granger-causality F-test together with common input validation and error
//! handling, including Python bridges for PyO3-based bindings.
//!
//! Key behaviors
//! -------------
//! - Expose a directional predictive test via [`GrangerOutcome`] and its
//!   constructor
//!   [`GrangerOutcome::granger_causality`](granger::GrangerOutcome::granger_causality),
//!   plus [`GrangerOutcome::both_directions`](granger::GrangerOutcome::both_directions)
//!   since the relationship is not symmetric.
//! - Centralize test input guards in [`validate_pair`], ensuring series
//!   lengths, finiteness, and lag orders are checked once in a consistent
//!   way across test modules.
//! - Provide a dedicated error type [`GCError`] and result alias
//!   [`GCResult`] for statistical tests, plus a conversion layer to Python
//!   exceptions when the `python-bindings` feature is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs for test routines are expected to be finite, real-valued scalar
//!   series; modules call [`validate_pair`] before performing any lag-based
//!   computations.
//! - Statistical tests in this subtree report failures via [`GCResult`] and
//!   never panic on user-facing invalid inputs; panics indicate programming
//!   errors (e.g., out-of-range indexing not caught by validation).
//! - [`GCError`] variants are small and cloneable so they can be used
//!   comfortably in both unit tests and higher-level orchestration code.
//!
//! Conventions
//! -----------
//! - This subtree is focused on *statistical tests*; model-specific error
//!   types live in their own `errors` modules under the relevant subtrees.
//! - The tests here are pre-filters: they guide which variables enter a
//!   multivariate model but feed nothing numerically into the model fit.
//!
//! Downstream usage
//! ----------------
//! - Typical Rust code imports the main surface as:
//!
//!   ```rust
//!   use var_timeseries::statistical_tests::{GCResult, GrangerOutcome};
//!
//!   # fn run(x: &[f64], y: &[f64]) -> GCResult<()> {
//!   let (x_to_y, y_to_x) = GrangerOutcome::both_directions(x, y, 2)?;
//!   # let _ = (x_to_y, y_to_x);
//!   # Ok(())
//!   # }
//!   ```
//!
//!   and only refers to `statistical_tests::errors` or
//!   `statistical_tests::validation` directly when matching on [`GCError`]
//!   or reusing [`validate_pair`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`errors`] verify `Display` messages, payload embedding,
//!   and the `From<VARError>` mapping.
//! - Unit tests in [`validation`] exercise all branches of
//!   [`validate_pair`].
//! - Unit tests in [`granger`] cover invalid-input surfacing, degenerate
//!   regressions, and a deterministic power/size scenario for the
//!   directional decision rule.

pub mod errors;
pub mod granger;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::errors::{GCError, GCResult};
pub use self::granger::GrangerOutcome;
pub use self::validation::validate_pair;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use var_timeseries::statistical_tests::prelude::*;
//
// to import the main statistical-testing surface in a single line.

pub mod prelude {
    pub use super::errors::{GCError, GCResult};
    pub use super::granger::GrangerOutcome;
}
