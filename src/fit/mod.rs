//! OLS fitting.
//!
//! Responsibilities:
//!
//! - validate the dataset (shapes, finiteness, degrees of freedom)
//! - optionally augment the design matrix with an intercept column
//! - solve the normal equations and derive residual statistics

pub mod estimator;

pub use estimator::*;
