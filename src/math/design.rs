//! Design-matrix transforms.
//!
//! The only transform we need is intercept augmentation: prepending a constant
//! column of ones so the solver estimates a constant term alongside the
//! slopes.
//!
//! Augmentation is a pure function. The caller's matrix is left untouched and
//! a new matrix is returned, so fitting the same estimator twice sees the same
//! design matrix both times.

use nalgebra::DMatrix;

/// Return a copy of `x` with a column of ones prepended as column 0.
pub fn with_intercept(x: &DMatrix<f64>) -> DMatrix<f64> {
    x.clone().insert_column(0, 1.0)
}
