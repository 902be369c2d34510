//! The OLS estimator.
//!
//! Given:
//! - a design matrix `X` (n observations by k variables)
//! - a response vector `Y` (one observation per row of `X`)
//! - an intercept flag
//!
//! `fit()` solves the normal equations once and returns the full result
//! bundle: coefficients, their variance-covariance matrix, residuals, and
//! fitted values.
//!
//! The estimator never mutates its inputs. Intercept augmentation produces a
//! fresh matrix, so calling `fit()` repeatedly returns the same bundle each
//! time.

use std::fmt;

use nalgebra::{DMatrix, DVector};

use crate::domain::{FitQuality, OlsFit};
use crate::error::FitError;
use crate::math::{NormalSolution, solve_normal_equations, with_intercept};

/// Single-shot OLS estimator over one in-memory dataset.
#[derive(Debug, Clone)]
pub struct OlsEstimator {
    x: DMatrix<f64>,
    y: DVector<f64>,
    intercept: bool,
}

impl OlsEstimator {
    /// Create an estimator that includes a constant term (the common case).
    pub fn new(x: DMatrix<f64>, y: DVector<f64>) -> Self {
        Self {
            x,
            y,
            intercept: true,
        }
    }

    /// Create an estimator without a constant term (regression through the
    /// origin).
    pub fn without_intercept(x: DMatrix<f64>, y: DVector<f64>) -> Self {
        Self {
            x,
            y,
            intercept: false,
        }
    }

    /// Whether this estimator adds an intercept column before solving.
    pub fn intercept(&self) -> bool {
        self.intercept
    }

    /// Estimate the model and return the result bundle.
    ///
    /// Validation happens upfront so failures surface as typed errors rather
    /// than panics deep inside a matrix product:
    /// - `ShapeMismatch` when X and Y row counts disagree or the dataset is
    ///   empty
    /// - `NonFinite` when X or Y contains NaN/infinite entries
    /// - `InsufficientObservations` when N ≤ K after augmentation
    /// - `SingularNormalEquations` when XᵗX cannot be inverted
    pub fn fit(&self) -> Result<OlsFit, FitError> {
        let n = self.x.nrows();
        if n == 0 || self.y.len() != n {
            return Err(FitError::ShapeMismatch {
                x_rows: n,
                y_rows: self.y.len(),
            });
        }
        if self.x.iter().any(|v| !v.is_finite()) {
            return Err(FitError::NonFinite { name: "X" });
        }
        if self.y.iter().any(|v| !v.is_finite()) {
            return Err(FitError::NonFinite { name: "Y" });
        }

        // Augmentation is a pure transform of the stored matrix, so a second
        // fit() sees the same design matrix as the first.
        let design = if self.intercept {
            with_intercept(&self.x)
        } else {
            self.x.clone()
        };

        let k = design.ncols();
        if n <= k {
            return Err(FitError::InsufficientObservations { n, k });
        }

        let NormalSolution { beta, xtx_inv } = solve_normal_equations(&design, &self.y)?;

        let y_hat = &design * &beta;
        let residuals = &self.y - &y_hat;

        let dof = n - k;
        let sse = residuals.dot(&residuals);
        let sigma2 = sse / dof as f64;
        let vcv = xtx_inv * sigma2;

        let rmse = (sse / n as f64).sqrt();
        let r_squared = r_squared(&self.y, sse, self.intercept);

        Ok(OlsFit {
            beta,
            vcv,
            residuals,
            y_hat,
            sigma2,
            dof,
            intercept: self.intercept,
            quality: FitQuality {
                sse,
                rmse,
                r_squared,
                n,
            },
        })
    }
}

impl fmt::Display for OlsEstimator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OLS estimator (n={}, k={}, intercept={})",
            self.x.nrows(),
            self.x.ncols(),
            self.intercept
        )
    }
}

/// Coefficient of determination.
///
/// Total sum of squares is centered when the model carries an intercept and
/// uncentered otherwise. A zero total sum of squares (constant response that
/// the model reproduces exactly) reports 1.0.
fn r_squared(y: &DVector<f64>, sse: f64, intercept: bool) -> f64 {
    let tss: f64 = if intercept {
        let ybar = y.mean();
        y.iter().map(|v| (v - ybar) * (v - ybar)).sum()
    } else {
        y.iter().map(|v| v * v).sum()
    };

    if tss > 0.0 { 1.0 - sse / tss } else { 1.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{SampleSpec, generate_sample};

    fn spec(n_obs: usize, n_vars: usize, noise_scale: f64, seed: u64) -> SampleSpec {
        SampleSpec {
            n_obs,
            n_vars,
            true_intercept: 1.5,
            noise_scale,
            seed,
        }
    }

    #[test]
    fn result_shapes_follow_the_inputs() {
        let sample = generate_sample(&spec(50, 3, 0.1, 7)).unwrap();
        let fit = OlsEstimator::new(sample.x, sample.y).fit().unwrap();

        assert_eq!(fit.beta.len(), 4);
        assert_eq!(fit.y_hat.len(), 50);
        assert_eq!(fit.residuals.len(), 50);
        assert_eq!((fit.vcv.nrows(), fit.vcv.ncols()), (4, 4));
        assert_eq!(fit.dof, 46);
        assert_eq!(fit.quality.n, 50);

        // The VCV must be symmetric with a finite standard error per coefficient.
        for i in 0..4 {
            for j in 0..4 {
                assert!((fit.vcv[(i, j)] - fit.vcv[(j, i)]).abs() < 1e-12);
            }
        }
        assert!(fit.std_errors().iter().all(|se| se.is_finite()));
    }

    #[test]
    fn recovers_true_coefficients_on_a_large_sample() {
        let sample = generate_sample(&spec(10_000, 2, 0.01, 42)).unwrap();
        let true_beta = sample.true_beta.clone();

        let fit = OlsEstimator::new(sample.x, sample.y).fit().unwrap();

        assert!((fit.beta[0] - 1.5).abs() < 0.05, "intercept off: {}", fit.beta[0]);
        for j in 0..2 {
            assert!(
                (fit.beta[j + 1] - true_beta[j]).abs() < 0.05,
                "slope {j} off: {} vs {}",
                fit.beta[j + 1],
                true_beta[j]
            );
        }
    }

    #[test]
    fn exact_recovery_without_noise() {
        let sample = generate_sample(&spec(200, 3, 0.0, 11)).unwrap();
        let true_beta = sample.true_beta.clone();

        let fit = OlsEstimator::new(sample.x, sample.y).fit().unwrap();

        assert!((fit.beta[0] - 1.5).abs() < 1e-8);
        for j in 0..3 {
            assert!((fit.beta[j + 1] - true_beta[j]).abs() < 1e-8);
        }
        assert!(fit.quality.sse < 1e-12);
        assert!((fit.quality.r_squared - 1.0).abs() < 1e-12);
    }

    #[test]
    fn duplicate_columns_are_rejected() {
        // Two identical integer-valued columns make XᵗX exactly singular.
        let x = DMatrix::from_row_slice(4, 2, &[1.0, 1.0, 2.0, 2.0, 3.0, 3.0, 4.0, 4.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);

        let err = OlsEstimator::without_intercept(x, y).fit().unwrap_err();
        assert!(matches!(err, FitError::SingularNormalEquations { .. }));
    }

    #[test]
    fn intercept_toggle_changes_the_coefficients() {
        // y = 3 + 2x exactly.
        let xs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let x = DMatrix::from_column_slice(6, 1, &xs);
        let y = DVector::from_fn(6, |i, _| 3.0 + 2.0 * xs[i]);

        let with = OlsEstimator::new(x.clone(), y.clone()).fit().unwrap();
        assert_eq!(with.beta.len(), 2);
        assert!((with.beta[0] - 3.0).abs() < 1e-10);
        assert!((with.beta[1] - 2.0).abs() < 1e-10);

        let without = OlsEstimator::without_intercept(x, y).fit().unwrap();
        assert_eq!(without.beta.len(), 1);
        // Dropping a genuinely nonzero constant term pulls the slope away
        // from the true value.
        assert!((without.beta[0] - 2.0).abs() > 0.1);
    }

    #[test]
    fn identical_inputs_give_identical_results() {
        let a = generate_sample(&spec(300, 2, 0.05, 99)).unwrap();
        let b = generate_sample(&spec(300, 2, 0.05, 99)).unwrap();

        let fit_a = OlsEstimator::new(a.x, a.y).fit().unwrap();
        let fit_b = OlsEstimator::new(b.x, b.y).fit().unwrap();

        assert_eq!(fit_a, fit_b);
    }

    #[test]
    fn refitting_the_same_estimator_is_idempotent() {
        let sample = generate_sample(&spec(80, 2, 0.1, 5)).unwrap();
        let est = OlsEstimator::new(sample.x, sample.y);

        let first = est.fit().unwrap();
        let second = est.fit().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn mismatched_row_counts_are_rejected() {
        let x = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);

        let err = OlsEstimator::new(x, y).fit().unwrap_err();
        assert_eq!(err, FitError::ShapeMismatch { x_rows: 3, y_rows: 2 });
    }

    #[test]
    fn too_few_observations_are_rejected() {
        // Two rows cannot support three coefficients (two slopes + intercept).
        let x = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0]);

        let err = OlsEstimator::new(x, y).fit().unwrap_err();
        assert_eq!(err, FitError::InsufficientObservations { n: 2, k: 3 });
    }

    #[test]
    fn non_finite_inputs_are_rejected() {
        let x = DMatrix::from_row_slice(3, 1, &[1.0, f64::NAN, 3.0]);
        let y = DVector::from_row_slice(&[1.0, 2.0, 3.0]);
        let err = OlsEstimator::new(x, y).fit().unwrap_err();
        assert_eq!(err, FitError::NonFinite { name: "X" });

        let x = DMatrix::from_row_slice(3, 1, &[1.0, 2.0, 3.0]);
        let y = DVector::from_row_slice(&[1.0, f64::INFINITY, 3.0]);
        let err = OlsEstimator::new(x, y).fit().unwrap_err();
        assert_eq!(err, FitError::NonFinite { name: "Y" });
    }

    #[test]
    fn display_tags_the_estimator() {
        let x = DMatrix::zeros(5, 2);
        let y = DVector::zeros(5);
        let est = OlsEstimator::new(x, y);
        assert_eq!(est.to_string(), "OLS estimator (n=5, k=2, intercept=true)");
    }
}
